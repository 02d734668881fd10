mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::{AxisGroup, AxisOrient, AxisTick, AxisTitle, BarElement, ChartScene, JoinPhase};
pub use null_renderer::NullRenderer;
pub use primitives::{TextHAlign, TooltipElement};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `ChartScene` so
/// drawing code remains isolated from chart domain and interaction logic.
/// Tooltip changes between renders arrive through `update_tooltip`.
pub trait Renderer {
    fn render(&mut self, scene: &ChartScene) -> ChartResult<()>;

    fn update_tooltip(&mut self, tooltip: &TooltipElement) -> ChartResult<()>;
}

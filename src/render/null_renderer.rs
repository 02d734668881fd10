use crate::error::ChartResult;
use crate::render::{ChartScene, Renderer, TooltipElement};

/// Recording renderer used by tests and headless hosts.
///
/// It still validates scene content so tests catch invalid geometry before
/// a real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub tooltip_updates: usize,
    pub last_bar_count: usize,
    pub last_scene: Option<ChartScene>,
    pub last_tooltip: Option<TooltipElement>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &ChartScene) -> ChartResult<()> {
        scene.validate()?;
        self.render_count += 1;
        self.last_bar_count = scene.bars.len();
        self.last_tooltip = Some(scene.tooltip.clone());
        self.last_scene = Some(scene.clone());
        Ok(())
    }

    fn update_tooltip(&mut self, tooltip: &TooltipElement) -> ChartResult<()> {
        tooltip.validate()?;
        self.tooltip_updates += 1;
        self.last_tooltip = Some(tooltip.clone());
        Ok(())
    }
}

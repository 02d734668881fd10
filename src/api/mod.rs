mod axes;
mod chart_scales;
mod config;
mod data_join;
mod resize;
mod tooltip;

pub use chart_scales::ChartScales;
pub use config::ChartRendererConfig;
pub use data_join::{BarJoin, JoinSummary, JoinTiming};
pub use resize::{ResizeChange, ResizeWatcher, SizeSource};
pub use tooltip::TooltipController;

use std::sync::{Arc, Mutex};

use tracing::{debug, trace, warn};

use crate::core::{DataSet, Dimensions, TickThinning, project_bars, project_cumulative_line};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisOrient, BarElement, ChartScene, Renderer, TooltipElement};
use crate::schedule::{ScheduleError, TimerHandle, spawn_repeating};

/// Result of a render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn { bars: usize, summary: JoinSummary },
    Skipped(SkipReason),
}

impl RenderOutcome {
    #[must_use]
    pub fn is_drawn(self) -> bool {
        matches!(self, Self::Drawn { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing to draw; the previous scene stays on the surface.
    EmptyData,
    /// The surface cannot hold a plot area inside the margins.
    SurfaceTooSmall,
    /// A resize observation matched the last known size.
    SizeUnchanged,
    /// The surface left the document before its size could be read.
    SurfaceDetached,
    /// A resize arrived before any data was rendered.
    NoData,
}

/// Composite bar/line chart bound to one host surface.
///
/// The host calls [`ChartRenderer::render`] on mount and whenever its data set
/// changes, and reports surface size changes through
/// [`ChartRenderer::observe_resize`] (or lets [`spawn_resize_poll`] sample a
/// [`SizeSource`]). Each draw rebuilds the scene from scratch and hands it to
/// the backend `Renderer`.
pub struct ChartRenderer<R: Renderer> {
    renderer: R,
    config: ChartRendererConfig,
    join: BarJoin,
    tooltip: TooltipController,
    watcher: ResizeWatcher,
    data: DataSet,
    scene: Option<ChartScene>,
    surface_offset_top: f64,
}

impl<R: Renderer> ChartRenderer<R> {
    pub fn new(renderer: R, config: ChartRendererConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let tooltip = TooltipController::new(config.tooltip_offset_x, config.tooltip_offset_y);
        Ok(Self {
            renderer,
            config,
            join: BarJoin::default(),
            tooltip,
            watcher: ResizeWatcher::default(),
            data: DataSet::default(),
            scene: None,
            surface_offset_top: 0.0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartRendererConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Last scene handed to the renderer.
    #[must_use]
    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipElement {
        self.tooltip.element()
    }

    #[must_use]
    pub fn last_dimensions(&self) -> Option<Dimensions> {
        self.watcher.last()
    }

    /// Vertical page offset of the surface, used for tooltip placement.
    pub fn set_surface_offset_top(&mut self, offset_top: f64) -> ChartResult<()> {
        if !offset_top.is_finite() {
            return Err(ChartError::InvalidData(
                "surface offset must be finite".to_owned(),
            ));
        }
        self.surface_offset_top = offset_top;
        Ok(())
    }

    /// Redraws the chart for `data` on a surface of `surface_size`.
    ///
    /// An empty data set draws nothing and leaves the previous scene in place;
    /// the next non-empty render enters every bar again.
    pub fn render(&mut self, data: &DataSet, surface_size: Dimensions) -> ChartResult<RenderOutcome> {
        self.data = data.clone();
        self.watcher.observe(surface_size);
        self.draw()
    }

    /// Host-driven resize notification.
    ///
    /// Redraws the current data only when the size differs from the last
    /// observation.
    pub fn observe_resize(&mut self, surface_size: Dimensions) -> ChartResult<RenderOutcome> {
        let change = self.watcher.observe(surface_size);
        if !change.is_changed() {
            trace!(?surface_size, "resize observation without size change");
            return Ok(RenderOutcome::Skipped(SkipReason::SizeUnchanged));
        }
        if self.data.is_empty() {
            return Ok(RenderOutcome::Skipped(SkipReason::NoData));
        }
        debug!(?change, "surface resized, redrawing chart");
        self.draw()
    }

    /// Polling fallback: samples `source` and reacts like `observe_resize`.
    pub fn poll_resize(&mut self, source: &dyn SizeSource) -> ChartResult<RenderOutcome> {
        match source.current_size() {
            Some(size) => self.observe_resize(size),
            None => {
                debug!("surface detached, skipping resize poll");
                Ok(RenderOutcome::Skipped(SkipReason::SurfaceDetached))
            }
        }
    }

    pub fn pointer_enter_bar(&mut self, index: usize) -> ChartResult<()> {
        self.bar_scene(index)?;
        self.tooltip.show();
        self.renderer.update_tooltip(self.tooltip.element())
    }

    /// Moves the tooltip over bar `index` and fills in its labels.
    pub fn pointer_move_bar(&mut self, index: usize) -> ChartResult<()> {
        let (scene, bar) = self.bar_scene(index)?;
        let margin = scene.margin;
        let bar = bar.clone();
        self.tooltip.track(&bar, margin, self.surface_offset_top);
        self.renderer.update_tooltip(self.tooltip.element())
    }

    pub fn pointer_leave_bar(&mut self) -> ChartResult<()> {
        self.tooltip.hide();
        self.renderer.update_tooltip(self.tooltip.element())
    }

    fn bar_scene(&self, index: usize) -> ChartResult<(&ChartScene, &BarElement)> {
        let scene = self
            .scene
            .as_ref()
            .ok_or_else(|| ChartError::InvalidData("chart has not been drawn yet".to_owned()))?;
        let bar = scene
            .bar(index)
            .ok_or_else(|| ChartError::InvalidData(format!("no bar at index {index}")))?;
        Ok((scene, bar))
    }

    fn draw(&mut self) -> ChartResult<RenderOutcome> {
        if self.data.is_empty() {
            self.join.clear();
            debug!("empty data set, nothing to draw");
            return Ok(RenderOutcome::Skipped(SkipReason::EmptyData));
        }

        let Some(dimensions) = self.watcher.last() else {
            return Ok(RenderOutcome::Skipped(SkipReason::SurfaceDetached));
        };
        let Some(inner) = self.config.margin.inner_size(dimensions) else {
            debug!(?dimensions, "surface too small for chart margins");
            return Ok(RenderOutcome::Skipped(SkipReason::SurfaceTooSmall));
        };

        let scales = ChartScales::fit(&self.data, inner, self.config.band_padding)?;
        let thinning = TickThinning::compute(
            inner.width,
            self.data.len(),
            self.config.tick_min_spacing_px,
        );

        let targets = project_bars(&self.data, &scales.band, scales.left, inner.height)?;
        let timing = JoinTiming {
            enter_stagger: self.config.enter_stagger(),
            duration: self.config.transition_duration(),
        };
        let (bars, summary) = self
            .join
            .reconcile(&self.data, &targets, scales.left, timing)?;

        let scene = ChartScene {
            dimensions,
            margin: self.config.margin,
            inner,
            x_axis: axes::month_axis(&scales.band, thinning, inner),
            left_axis: axes::value_axis(
                scales.left,
                AxisOrient::Left,
                inner,
                self.config.value_tick_count,
                self.config.left_axis_title.as_deref(),
            ),
            right_axis: axes::value_axis(
                scales.right,
                AxisOrient::Right,
                inner,
                self.config.value_tick_count,
                self.config.right_axis_title.as_deref(),
            ),
            bars,
            line: project_cumulative_line(&self.data, scales.time, scales.right),
            tooltip: TooltipElement::default(),
        };

        if let Err(err) = self.renderer.render(&scene) {
            warn!(error = %err, "renderer rejected chart scene");
            return Err(err);
        }
        self.join.commit(&targets);
        self.tooltip.reset();

        let bar_count = scene.bars.len();
        debug!(
            bars = bar_count,
            entered = summary.entered,
            updated = summary.updated,
            exited = summary.exited,
            width = dimensions.width,
            height = dimensions.height,
            "chart drawn"
        );
        self.scene = Some(scene);

        Ok(RenderOutcome::Drawn {
            bars: bar_count,
            summary,
        })
    }
}

/// Polls `source` on the chart's resize interval and redraws on real changes.
///
/// This is the fallback for hosts without native resize notifications. The
/// returned handle must be kept alive; dropping it stops polling.
pub fn spawn_resize_poll<R, S>(
    chart: Arc<Mutex<ChartRenderer<R>>>,
    source: S,
) -> Result<TimerHandle, ScheduleError>
where
    R: Renderer + Send + 'static,
    S: SizeSource + Send + 'static,
{
    let period = match chart.lock() {
        Ok(guard) => guard.config().resize_poll_interval(),
        Err(poisoned) => poisoned.into_inner().config().resize_poll_interval(),
    };

    spawn_repeating("chart-resize-poll", period, move || {
        let Ok(mut guard) = chart.lock() else {
            warn!("chart lock poisoned, skipping resize poll");
            return;
        };
        if let Err(err) = guard.poll_resize(&source) {
            warn!(error = %err, "resize redraw failed");
        }
    })
}

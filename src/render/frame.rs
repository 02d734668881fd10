use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, BasisPath, Dimensions, InnerSize, Margin};
use crate::error::{ChartError, ChartResult};
use crate::render::{TextHAlign, TooltipElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrient {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub label: String,
    /// Offset along the axis, in plot-area pixels.
    pub position: f64,
}

/// One axis group, translated to its place inside the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGroup {
    pub orient: AxisOrient,
    pub translate_x: f64,
    pub translate_y: f64,
    pub ticks: Vec<AxisTick>,
    pub title: Option<AxisTitle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
}

/// How a bar got into the current scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinPhase {
    Enter,
    Update,
}

/// Bar element with the transition it plays after a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarElement {
    /// Position of the bound point in the data set (the join key).
    pub index: usize,
    pub label: String,
    pub value_label: String,
    pub phase: JoinPhase,
    pub from: BarGeometry,
    pub to: BarGeometry,
    pub delay: Duration,
    pub duration: Duration,
}

impl BarElement {
    /// Geometry `elapsed` after the render started, eased cubic in-out.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> BarGeometry {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return self.from;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (running.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        self.from.lerp(self.to, ease_cubic_in_out(t))
    }

    /// Time until this bar reaches its final geometry.
    #[must_use]
    pub fn settle_time(&self) -> Duration {
        self.delay + self.duration
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// The scene is rebuilt wholesale on every render; it always carries exactly
/// one tooltip element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub dimensions: Dimensions,
    pub margin: Margin,
    pub inner: InnerSize,
    pub x_axis: Option<AxisGroup>,
    pub left_axis: AxisGroup,
    pub right_axis: AxisGroup,
    pub bars: Vec<BarElement>,
    pub line: BasisPath,
    pub tooltip: TooltipElement,
}

impl ChartScene {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.dimensions.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.dimensions.width,
                height: self.dimensions.height,
            });
        }

        for bar in &self.bars {
            let BarGeometry {
                x,
                y,
                width,
                height,
            } = bar.to;
            if ![x, y, width, height].iter().all(|value| value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "bar {} geometry must be finite",
                    bar.index
                )));
            }
            if width < 0.0 || height < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar {} size must be >= 0",
                    bar.index
                )));
            }
        }

        for point in &self.line.control_points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "line control points must be finite".to_owned(),
                ));
            }
        }

        self.tooltip.validate()
    }

    /// Time until every bar transition has finished.
    #[must_use]
    pub fn settle_time(&self) -> Duration {
        self.bars
            .iter()
            .map(BarElement::settle_time)
            .max()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn bar(&self, index: usize) -> Option<&BarElement> {
        self.bars.iter().find(|bar| bar.index == index)
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{BandScale, DataSet, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Bar rectangle in plot-area pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    /// Linear interpolation between two geometries, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t == 1.0 {
            return to;
        }
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            width: self.width + (to.width - self.width) * t,
            height: self.height + (to.height - self.height) * t,
        }
    }
}

/// Projects monthly values into bars standing on the plot baseline.
///
/// Bars share a band when their points fall in the same month. Each bar's
/// height is `inner_height - value_scale(monthly)`.
pub fn project_bars(
    data: &DataSet,
    band_scale: &BandScale,
    value_scale: LinearScale,
    inner_height: f64,
) -> ChartResult<Vec<BarGeometry>> {
    let mut bars = Vec::with_capacity(data.len());
    for point in data.points() {
        let label = point.month_label();
        let x = band_scale.position(&label).ok_or_else(|| {
            ChartError::InvalidData(format!("month `{label}` is missing from the band scale"))
        })?;
        let y = value_scale.map(point.monthly());
        bars.push(BarGeometry {
            x,
            y,
            width: band_scale.bandwidth(),
            height: inner_height - y,
        });
    }
    Ok(bars)
}

/// Collapsed geometry an entering bar starts from.
#[must_use]
pub fn baseline_bar(target: BarGeometry, value_scale: LinearScale) -> BarGeometry {
    BarGeometry {
        y: value_scale.map(0.0),
        height: 0.0,
        ..target
    }
}

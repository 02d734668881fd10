use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const AXIS_TIME_MIN_SPACING_PX: f64 = 50.0;

/// Stride used to thin a dense categorical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickThinning {
    /// Labels that fit at the minimum spacing.
    pub num_ticks: usize,
    /// Keep every `factor`-th domain index; zero means no axis is drawn.
    pub factor: usize,
}

impl TickThinning {
    /// Computes the stride for `point_count` labels on an axis `width_px` wide.
    #[must_use]
    pub fn compute(width_px: f64, point_count: usize, min_spacing_px: f64) -> Self {
        let num_ticks = if width_px.is_finite()
            && width_px > 0.0
            && min_spacing_px.is_finite()
            && min_spacing_px > 0.0
        {
            (width_px / min_spacing_px).floor() as usize
        } else {
            0
        };

        let factor = if point_count == 0 {
            0
        } else if num_ticks == 0 {
            // No room for a second label: keep index 0 only.
            point_count
        } else {
            point_count / num_ticks + 1
        };

        Self { num_ticks, factor }
    }

    #[must_use]
    pub fn retains(self, index: usize) -> bool {
        self.factor != 0 && index % self.factor == 0
    }

    /// Domain indices kept on an axis with `domain_len` entries.
    #[must_use]
    pub fn retained_indices(self, domain_len: usize) -> SmallVec<[usize; 16]> {
        if self.factor == 0 {
            return SmallVec::new();
        }
        (0..domain_len).step_by(self.factor).collect()
    }
}

/// Thinning at the default 50px spacing.
#[must_use]
pub fn thin_time_ticks(width_px: f64, point_count: usize) -> TickThinning {
    TickThinning::compute(width_px, point_count, AXIS_TIME_MIN_SPACING_PX)
}

use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a value domain to a pixel range.
///
/// Value axes use an inverted range (`[inner_height, 0]`) so larger values
/// sit higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        for value in [domain.0, domain.1, range.0, range.1] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "scale domain and range must be finite".to_owned(),
                ));
            }
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Value scale anchored at zero: domain `[0, max]`, range `[height, 0]`.
    pub fn from_zero(max: f64, height: f64) -> ChartResult<Self> {
        Self::new((0.0, max), (height, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to the range.
    ///
    /// A zero-span domain maps every value to the middle of the range.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a range value back into the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (pixel - self.range_start) / span
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Round-valued ticks covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> SmallVec<[f64; 16]> {
        let (lo, hi) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        nice_ticks(lo, hi, count)
    }
}

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Ticks at 1, 2 or 5 times a power of ten between `start` and `stop`.
pub(crate) fn nice_ticks(start: f64, stop: f64, count: usize) -> SmallVec<[f64; 16]> {
    let mut ticks = SmallVec::new();
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return ticks;
    }
    if start == stop {
        ticks.push(start);
        return ticks;
    }

    let Some((i1, i2, inc)) = tick_range(start, stop, count as f64) else {
        return ticks;
    };
    for i in i1..=i2 {
        let value = if inc < 0.0 {
            i as f64 / -inc
        } else {
            i as f64 * inc
        };
        ticks.push(value);
    }
    ticks
}

fn tick_range(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scaled = 10f64.powf(-power) / factor;
        i1 = (start * scaled).round() as i64;
        i2 = (stop * scaled).round() as i64;
        if (i1 as f64) / scaled < start {
            i1 += 1;
        }
        if (i2 as f64) / scaled > stop {
            i2 -= 1;
        }
        inc = -scaled;
    } else {
        let scaled = 10f64.powf(power) * factor;
        i1 = (start / scaled).round() as i64;
        i2 = (stop / scaled).round() as i64;
        if (i1 as f64) * scaled < start {
            i1 += 1;
        }
        if (i2 as f64) * scaled > stop {
            i2 -= 1;
        }
        inc = scaled;
    }

    if i2 < i1 {
        if (0.5..2.0).contains(&count) {
            return tick_range(start, stop, count * 2.0);
        }
        return None;
    }
    Some((i1, i2, inc))
}

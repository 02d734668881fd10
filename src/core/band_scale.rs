use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_BAND_PADDING: f64 = 0.1;
pub const DEFAULT_BAND_ALIGN: f64 = 0.5;

/// Categorical axis that splits the range into evenly spaced, padded bands.
///
/// The domain keeps the first occurrence of every label, in insertion order.
/// `padding` applies both between bands and at the outer edges; `align`
/// distributes the leftover outer space (0.5 centers the bands).
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    align: f64,
    step: f64,
    bandwidth: f64,
    offset: f64,
}

impl BandScale {
    pub fn new<I, S>(labels: I, range: (f64, f64)) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_padding(labels, range, DEFAULT_BAND_PADDING, DEFAULT_BAND_ALIGN)
    }

    pub fn with_padding<I, S>(
        labels: I,
        range: (f64, f64),
        padding: f64,
        align: f64,
    ) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be in [0, 1]".to_owned(),
            ));
        }
        if !align.is_finite() || !(0.0..=1.0).contains(&align) {
            return Err(ChartError::InvalidData(
                "band align must be in [0, 1]".to_owned(),
            ));
        }

        let domain: IndexSet<String> = labels.into_iter().map(Into::into).collect();
        let mut scale = Self {
            domain,
            range_start: range.0,
            range_end: range.1,
            padding,
            align,
            step: 0.0,
            bandwidth: 0.0,
            offset: range.0,
        };
        scale.rescale();
        Ok(scale)
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (start, stop) = (self.range_start, self.range_end);
        let reverse = stop < start;
        let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

        let step = (hi - lo) / (n - self.padding + self.padding * 2.0).max(1.0);
        let offset = lo + (hi - lo - step * (n - self.padding)) * self.align;
        self.step = step;
        self.bandwidth = step * (1.0 - self.padding);
        self.offset = if reverse {
            offset + step * (n - 1.0).max(0.0)
        } else {
            offset
        };
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<String> {
        &self.domain
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.get_index_of(label)
    }

    /// Left edge of the band for `label`, or `None` for unknown labels.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        self.index_of(label).map(|index| self.position_at(index))
    }

    /// Left edge of the band at domain `index`.
    #[must_use]
    pub fn position_at(&self, index: usize) -> f64 {
        let direction = if self.range_end < self.range_start {
            -1.0
        } else {
            1.0
        };
        self.offset + direction * self.step * index as f64
    }

    /// Center of the band for `label`.
    #[must_use]
    pub fn center(&self, label: &str) -> Option<f64> {
        self.position(label).map(|x| x + self.bandwidth * 0.5)
    }
}

use chrono::NaiveDate;

use crate::core::DataSet;
use crate::core::primitives::{date_to_epoch_days, epoch_days_to_date};
use crate::core::scale::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Continuous calendar axis driving the cumulative line.
///
/// Dates are mapped through their day offset from the Unix epoch, so the
/// mapping is linear in calendar days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, width: f64) -> ChartResult<Self> {
        if start > end {
            return Err(ChartError::InvalidData(
                "time scale start must not be after end".to_owned(),
            ));
        }
        let linear = LinearScale::new(
            (date_to_epoch_days(start), date_to_epoch_days(end)),
            (0.0, width),
        )?;
        Ok(Self { start, end, linear })
    }

    /// Fits the domain to the earliest and latest date of the data set.
    pub fn from_data(data: &DataSet, width: f64) -> ChartResult<Self> {
        let (start, end) = data.date_extent().ok_or_else(|| {
            ChartError::InvalidData("time scale cannot be built from empty data".to_owned())
        })?;
        Self::new(start, end, width)
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn map(self, date: NaiveDate) -> f64 {
        self.linear.map(date_to_epoch_days(date))
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> Option<NaiveDate> {
        epoch_days_to_date(self.linear.invert(pixel))
    }
}

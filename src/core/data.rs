use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{ensure_finite, format_month_label, parse_date};
use crate::error::{ChartError, ChartResult};

/// One dated sample carrying a monthly value and its running total.
///
/// The date is parsed once at construction; a malformed `MM-DD-YYYY` string
/// never reaches the scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataPoint", into = "RawDataPoint")]
pub struct DataPoint {
    date: NaiveDate,
    monthly: f64,
    monthly_formatted: String,
    cumulative: f64,
}

impl DataPoint {
    pub fn new(
        date: &str,
        monthly: f64,
        monthly_formatted: impl Into<String>,
        cumulative: f64,
    ) -> ChartResult<Self> {
        Self::from_date(
            parse_date(date)?,
            monthly,
            monthly_formatted,
            cumulative,
        )
    }

    pub fn from_date(
        date: NaiveDate,
        monthly: f64,
        monthly_formatted: impl Into<String>,
        cumulative: f64,
    ) -> ChartResult<Self> {
        Ok(Self {
            date,
            monthly: ensure_finite(monthly, "monthly")?,
            monthly_formatted: monthly_formatted.into(),
            cumulative: ensure_finite(cumulative, "cumulative")?,
        })
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn monthly(&self) -> f64 {
        self.monthly
    }

    #[must_use]
    pub fn monthly_formatted(&self) -> &str {
        &self.monthly_formatted
    }

    #[must_use]
    pub fn cumulative(&self) -> f64 {
        self.cumulative
    }

    /// Month bucket label used by the band scale and the tooltip.
    #[must_use]
    pub fn month_label(&self) -> String {
        format_month_label(self.date)
    }
}

/// Wire shape used by dashboard payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataPoint {
    date: String,
    monthly: f64,
    #[serde(default)]
    monthly_formatted: String,
    cumulative: f64,
}

impl TryFrom<RawDataPoint> for DataPoint {
    type Error = ChartError;

    fn try_from(raw: RawDataPoint) -> ChartResult<Self> {
        Self::new(&raw.date, raw.monthly, raw.monthly_formatted, raw.cumulative)
    }
}

impl From<DataPoint> for RawDataPoint {
    fn from(point: DataPoint) -> Self {
        Self {
            date: point.date.format("%m-%d-%Y").to_string(),
            monthly: point.monthly,
            monthly_formatted: point.monthly_formatted,
            cumulative: point.cumulative,
        }
    }
}

/// Ordered, chronological collection of points driving one chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    points: Vec<DataPoint>,
}

impl DataSet {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Parses the JSON array payload the dashboard host sends.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("failed to parse data set: {err}")))
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    /// Earliest and latest dates, or `None` for an empty set.
    #[must_use]
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.points.iter().map(DataPoint::date).min()?;
        let max = self.points.iter().map(DataPoint::date).max()?;
        Some((min, max))
    }

    #[must_use]
    pub fn max_monthly(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| OrderedFloat(point.monthly))
            .max()
            .map(OrderedFloat::into_inner)
    }

    #[must_use]
    pub fn max_cumulative(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| OrderedFloat(point.cumulative))
            .max()
            .map(OrderedFloat::into_inner)
    }

    /// Month labels in data order, one per point (duplicates kept).
    #[must_use]
    pub fn month_labels(&self) -> Vec<String> {
        self.points.iter().map(DataPoint::month_label).collect()
    }
}

impl From<Vec<DataPoint>> for DataSet {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<DataPoint> for DataSet {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

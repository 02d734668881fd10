use crate::core::band_scale::DEFAULT_BAND_ALIGN;
use crate::core::{BandScale, DataSet, InnerSize, LinearScale, TimeScale};
use crate::error::{ChartError, ChartResult};

/// The four scales of one draw pass.
///
/// - `time`: calendar dates → `[0, inner_width]`, drives the line.
/// - `band`: month labels → padded bands over `[0, inner_width]`, drives bars.
/// - `left`: `[0, max(monthly)]` → `[inner_height, 0]`.
/// - `right`: `[0, max(cumulative)]` → `[inner_height, 0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub time: TimeScale,
    pub band: BandScale,
    pub left: LinearScale,
    pub right: LinearScale,
}

impl ChartScales {
    pub fn fit(data: &DataSet, inner: InnerSize, band_padding: f64) -> ChartResult<Self> {
        if data.is_empty() {
            return Err(ChartError::InvalidData(
                "scales cannot be fitted to an empty data set".to_owned(),
            ));
        }

        let time = TimeScale::from_data(data, inner.width)?;
        let band = BandScale::with_padding(
            data.month_labels(),
            (0.0, inner.width),
            band_padding,
            DEFAULT_BAND_ALIGN,
        )?;
        let left = LinearScale::from_zero(data.max_monthly().unwrap_or(0.0), inner.height)?;
        let right = LinearScale::from_zero(data.max_cumulative().unwrap_or(0.0), inner.height)?;

        Ok(Self {
            time,
            band,
            left,
            right,
        })
    }
}

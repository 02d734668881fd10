use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Margin;
use crate::core::band_scale::DEFAULT_BAND_PADDING;
use crate::core::ticks::AXIS_TIME_MIN_SPACING_PX;
use crate::error::{ChartError, ChartResult};

/// Public chart bootstrap configuration.
///
/// This type is serializable so dashboards can ship chart setup alongside
/// their data payloads. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartRendererConfig {
    pub margin: Margin,
    /// Minimum horizontal room per month label before labels are thinned.
    pub tick_min_spacing_px: f64,
    pub band_padding: f64,
    /// Approximate tick count of both value axes.
    pub value_tick_count: usize,
    /// Extra delay per bar index for entering bars.
    pub enter_stagger_ms: u64,
    pub transition_duration_ms: u64,
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
    pub left_axis_title: Option<String>,
    pub right_axis_title: Option<String>,
    /// Period of the resize polling fallback.
    pub resize_poll_interval_ms: u64,
}

impl Default for ChartRendererConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            tick_min_spacing_px: AXIS_TIME_MIN_SPACING_PX,
            band_padding: DEFAULT_BAND_PADDING,
            value_tick_count: 10,
            enter_stagger_ms: 10,
            transition_duration_ms: 250,
            tooltip_offset_x: -40.0,
            tooltip_offset_y: 4.0,
            left_axis_title: Some("Miles per month".to_owned()),
            right_axis_title: Some("Total miles".to_owned()),
            resize_poll_interval_ms: 100,
        }
    }
}

impl ChartRendererConfig {
    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        left: Option<impl Into<String>>,
        right: Option<impl Into<String>>,
    ) -> Self {
        self.left_axis_title = left.map(Into::into);
        self.right_axis_title = right.map(Into::into);
        self
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to parse config: {err}")))?;
        config.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.margin.validate()?;
        if !self.tick_min_spacing_px.is_finite() || self.tick_min_spacing_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "tick spacing must be finite and > 0".to_owned(),
            ));
        }
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidConfig(
                "band padding must be in [0, 1)".to_owned(),
            ));
        }
        if !self.tooltip_offset_x.is_finite() || !self.tooltip_offset_y.is_finite() {
            return Err(ChartError::InvalidConfig(
                "tooltip offsets must be finite".to_owned(),
            ));
        }
        if self.resize_poll_interval_ms == 0 {
            return Err(ChartError::InvalidConfig(
                "resize poll interval must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn enter_stagger(&self) -> Duration {
        Duration::from_millis(self.enter_stagger_ms)
    }

    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    #[must_use]
    pub fn resize_poll_interval(&self) -> Duration {
        Duration::from_millis(self.resize_poll_interval_ms)
    }
}

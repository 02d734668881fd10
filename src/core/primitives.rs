use chrono::{Datelike, NaiveDate};

use crate::error::{ChartError, ChartResult};

const INPUT_DATE_FORMAT: &str = "%m-%d-%Y";
const MONTH_LABEL_FORMAT: &str = "%b '%y";

/// Parses a `MM-DD-YYYY` date string.
pub fn parse_date(value: &str) -> ChartResult<NaiveDate> {
    // chrono tolerates unpadded fields and leading whitespace; the wire format
    // is exactly `DD-DD-DDDD`.
    if !has_date_shape(value) {
        return Err(invalid_date(value));
    }
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).map_err(|_| invalid_date(value))
}

/// Formats a date as its month bucket label, e.g. `Jan '24`.
#[must_use]
pub fn format_month_label(date: NaiveDate) -> String {
    date.format(MONTH_LABEL_FORMAT).to_string()
}

/// Days since the Unix epoch, used as the continuous time coordinate.
#[must_use]
pub fn date_to_epoch_days(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
}

/// Inverse of [`date_to_epoch_days`], truncating fractional days.
#[must_use]
pub fn epoch_days_to_date(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let whole = days.floor();
    if whole < f64::from(i32::MIN) || whole > f64::from(i32::MAX) {
        return None;
    }
    (whole as i32)
        .checked_add(EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

pub(crate) fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}

// 1970-01-01 counted from 0001-01-01 (day 1).
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            2 | 5 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

fn invalid_date(value: &str) -> ChartError {
    ChartError::InvalidDateFormat {
        value: value.to_owned(),
    }
}

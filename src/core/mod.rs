pub mod band_scale;
pub mod bar_series;
pub mod data;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod ticks;
pub mod time_scale;
pub mod types;

pub use band_scale::BandScale;
pub use bar_series::{BarGeometry, baseline_bar, project_bars};
pub use data::{DataPoint, DataSet};
pub use line_series::{
    BasisPath, ControlPoint, PathCommand, project_cumulative_line, project_cumulative_points,
};
pub use primitives::{format_month_label, parse_date};
pub use scale::LinearScale;
pub use ticks::{AXIS_TIME_MIN_SPACING_PX, TickThinning, thin_time_ticks};
pub use time_scale::TimeScale;
pub use types::{Dimensions, InnerSize, Margin};

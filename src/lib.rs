//! composite-chart: headless dashboard widgets.
//!
//! Two independent pieces live here:
//! - [`ChartRenderer`] turns a dated data set into a bar (monthly) plus
//!   smoothed line (cumulative) scene, with data-join transitions, thinned
//!   month labels and a single hover tooltip.
//! - [`PingTracker`] polls a backend liveness endpoint on a fixed interval
//!   and keeps success/failure counts.

pub mod api;
pub mod core;
pub mod error;
pub mod ping;
pub mod render;
pub mod schedule;
pub mod telemetry;

pub use api::{ChartRenderer, ChartRendererConfig, RenderOutcome};
pub use error::{ChartError, ChartResult};
pub use ping::{PingError, PingTracker};

//! bar-chart-rs: a custom-drawn bar chart widget.
//!
//! The chart is split into pure layout arithmetic (`core`), a
//! backend-agnostic draw-command model (`render`) and a stateful view facade
//! (`api`) that host UI layers drive through setters and a render call.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AccessibilityContainer, AccessibilityElement, BarChartConfig, BarChartView};
pub use error::{ChartError, ChartResult};

//! Core logic for the Pulse analytics dashboard.
//!
//! Everything in this crate is display-independent and runs natively as well
//! as under WASM:
//! - `breakpoint`: typed breakpoint names and the ordered width scale
//! - `responsive`: viewport snapshots, device classes, and per-breakpoint
//!   value resolution for layout parameters
//! - `format`: compact number/currency/percent/duration formatting
//! - `theme`: light/dark theme and the chart color palettes
//! - `chart`: Chart.js option-object and dataset composition
//! - `metrics`: metric models and timeframe scaling
//! - `mock`: generated dashboard datasets
//!
//! The browser-facing half (Dioxus components, the Chart.js bridge, the
//! window resize subscription) lives in `pulse-chart-ui`.

pub mod breakpoint;
pub mod chart;
pub mod format;
pub mod metrics;
pub mod mock;
pub mod responsive;
pub mod theme;

//! Telemetry data models and processing.
//!
//! This module turns raw response bodies into typed readings and holds the
//! dashboard state those readings are written into.
//!
//! ## Submodules
//!
//! - [`reading`]: Typed readings and the `{ok, ...}` envelope parsers
//! - [`window`]: Categories, raw-period presets and time-window computation
//! - [`axis`]: Value-axis range computation for charts
//! - [`panel`]: Display state ([`Dashboard`], [`StatsPanel`], [`ChartPanel`])
//! - [`duration`]: Parsing of span strings (e.g., "5m", "24h")
//!
//! ## Data Flow
//!
//! ```text
//! response body (bytes)
//!        │
//!        ▼
//! parse_current / parse_stats / parse_series
//!        │
//!        ├──▶ CurrentPanel::apply
//!        ├──▶ StatsPanel (Summary or NoData)
//!        └──▶ ChartPanel::replace (axes from TimeWindow + axis::value_bounds)
//! ```

pub mod axis;
pub mod duration;
pub mod panel;
pub mod reading;
pub mod window;

pub use panel::{CategoryPanels, ChartPanel, CurrentPanel, Dashboard, StatsPanel, PLACEHOLDER};
pub use reading::{
    parse_current, parse_series, parse_stats, CurrentReading, ParseFailure, SeriesPoint,
    StatsSummary, TimeSeries,
};
pub use window::{window_for, Category, RawPeriod, TimeWindow, SERIES_LIMIT};

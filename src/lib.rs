// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # tempwatch
//!
//! A terminal dashboard and library for watching a temperature telemetry
//! service.
//!
//! The service exposes three read-only JSON endpoints (latest reading,
//! aggregate statistics over a window, and a time series over a window).
//! This crate polls them on fixed timers, decodes the `{ok, ...}` envelopes
//! and renders the results as three stats boxes and three line charts for
//! the raw, hourly and daily categories.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐  │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│  │
//! │  │ (state) │    │ (panels) │    │(render) │    │         │  │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘  │
//! │       │ tick / drain                                        │
//! │       ▼                                                     │
//! │  ┌─────────┐    ┌──────────┐                                │
//! │  │  poll   │───▶│  client  │◀── HttpTransport | Transport   │
//! │  │(timers) │    │  (HTTP)  │                                │
//! │  └─────────┘    └──────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and operator actions
//! - **[`poll`]**: Refresh timers ([`Scheduler`]) and the request
//!   [`Orchestrator`] that turns responses into [`Completion`]s
//! - **[`client`]**: The [`Transport`] seam, the reqwest-backed
//!   [`HttpTransport`] and URL construction ([`Endpoints`])
//! - **[`data`]**: Response parsers, time windows and display state
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`config`](self::config)**: Layered [`Settings`] (defaults, TOML file, environment)
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch the default service at http://127.0.0.1:8080
//! tempwatch
//!
//! # Watch another host, starting on the 24 hour raw window
//! tempwatch --url http://sensor-hub:8080 --raw-period 24h --log-file tempwatch.log
//! ```
//!
//! ### Decoding responses
//!
//! ```
//! use tempwatch::{parse_current, parse_stats, ParseFailure};
//!
//! let reading = parse_current(br#"{"ok":true,"value":21.5,"ts":1700000000}"#).unwrap();
//! assert_eq!(reading.value, 21.5);
//!
//! assert_eq!(parse_stats(br#"{"ok":false}"#), Err(ParseFailure::NotOk));
//! ```
//!
//! ### Computing a window
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempwatch::{window_for, Category, Endpoints, RawPeriod, SERIES_LIMIT};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
//! let window = window_for(Category::Raw, &now, RawPeriod::OneHour);
//! assert_eq!(window.to - window.from, 3600);
//!
//! let url = Endpoints::new("http://127.0.0.1:8080/").series(Category::Raw, window, SERIES_LIMIT);
//! assert!(url.starts_with("http://127.0.0.1:8080/api/series?kind=raw&"));
//! ```
//!
//! ### Driving the dashboard from your own loop
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Instant;
//! use tempwatch::{App, Endpoints, HttpTransport, Orchestrator, RawPeriod};
//!
//! # tokio_test::block_on(async {
//! let (orchestrator, completions) = Orchestrator::new(
//!     Arc::new(HttpTransport::new()),
//!     Endpoints::new("http://127.0.0.1:8080"),
//!     tokio::runtime::Handle::current(),
//! );
//! let mut app = App::new(orchestrator, completions, RawPeriod::OneHour, Instant::now());
//!
//! app.refresh_all();
//! // ... later, on each iteration
//! app.drain_completions();
//! app.tick(Instant::now());
//! # });
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod data;
pub mod events;
pub mod poll;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use client::{Endpoints, HttpTransport, Transport, TransportError};
pub use data::{
    parse_current, parse_series, parse_stats, window_for, Category, CurrentReading, Dashboard,
    ParseFailure, RawPeriod, SeriesPoint, StatsPanel, StatsSummary, TimeSeries, TimeWindow,
    SERIES_LIMIT,
};
pub use poll::{apply_completion, Completion, Orchestrator, Refresh, Scheduler};

pub use crate::config::Settings;

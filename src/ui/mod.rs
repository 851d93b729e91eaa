//! Terminal UI rendering using ratatui.
//!
//! Every function here reads [`App`](crate::app::App) and draws it; none of
//! them change state.
//!
//! ## Submodules
//!
//! - [`panels`]: Server, current-reading, controls and per-category stats boxes
//! - [`charts`]: One line chart per category
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! The main loop in `main.rs` lays the screen out like this:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├────────────┬────────────┬────────────┤
//! │ Server     │ Current    │ Controls   │  panels::render_top_row
//! ├────────────┼────────────┼────────────┤
//! │ RAW stats  │ HOURLY     │ DAILY      │  panels::render_stats_row
//! ├────────────┼────────────┼────────────┤
//! │ RAW chart  │ HOURLY     │ DAILY      │  charts::render
//! ├────────────┴────────────┴────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top: common::render_help
//! ```

pub mod charts;
pub mod common;
pub mod panels;
pub mod theme;

pub use theme::Theme;

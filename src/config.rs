//! Startup settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `TEMPWATCH_*` environment variables. Command-line flags are applied on
//! top by the binary. Everything here only seeds the dashboard; the base URL
//! and raw period stay editable while it runs, and nothing is written back.
//!
//! ```toml
//! base_url = "http://sensors.local:8080"
//! raw_period = "24h"
//! ```

use std::path::Path;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::data::RawPeriod;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Initial dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Telemetry service base URL.
    pub base_url: String,
    /// Initial raw lookback, e.g. "5m", "1h", "7d".
    pub raw_period: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            raw_period: "1h".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("raw_period", defaults.raw_period)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder.add_source(Environment::with_prefix("TEMPWATCH")).build()?;
        Ok(settings.try_deserialize()?)
    }

    /// The configured raw period as a preset.
    pub fn raw_period(&self) -> Result<RawPeriod> {
        self.raw_period.parse()
    }
}

//! URL construction for the telemetry service.

use crate::data::{Category, TimeWindow};

/// The service's base URL and the three endpoint paths beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Trims whitespace and removes one trailing `/` from `base_url`.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim();
        let base_url = trimmed.strip_suffix('/').unwrap_or(trimmed);
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/current`
    pub fn current(&self) -> String {
        format!("{}/api/current", self.base_url)
    }

    /// `GET /api/stats?kind=..&from=..&to=..`
    pub fn stats(&self, category: Category, window: TimeWindow) -> String {
        format!(
            "{}/api/stats?kind={}&from={}&to={}",
            self.base_url,
            category.kind(),
            window.from,
            window.to
        )
    }

    /// `GET /api/series?kind=..&from=..&to=..&limit=..`
    pub fn series(&self, category: Category, window: TimeWindow, limit: u32) -> String {
        format!(
            "{}/api/series?kind={}&from={}&to={}&limit={}",
            self.base_url,
            category.kind(),
            window.from,
            window.to,
            limit
        )
    }
}

//! Request dispatch and completion handling.
//!
//! [`Orchestrator`] spawns one task per HTTP request on the tokio runtime.
//! Each task sends a [`Completion`] back over an unbounded channel; the
//! owner of the [`Dashboard`] drains that channel and feeds every
//! completion to [`apply_completion`], so display state is only ever
//! touched from one thread.
//!
//! Requests are fire-and-forget. A tick never waits for, cancels, or
//! deduplicates the requests of an earlier tick, so two completions for the
//! same panel may arrive in either order and the later one wins.

use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::scheduler::Refresh;
use crate::client::{Endpoints, Transport, TransportError};
use crate::data::{
    parse_current, parse_series, parse_stats, window_for, Category, Dashboard, RawPeriod,
    StatsPanel, TimeWindow, SERIES_LIMIT,
};

/// The outcome of one request, carried back to the display owner.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Current(Result<Vec<u8>, TransportError>),
    Stats {
        category: Category,
        result: Result<Vec<u8>, TransportError>,
    },
    Series {
        category: Category,
        /// The window the series was requested for; the chart's time axis
        /// is set to it.
        window: TimeWindow,
        result: Result<Vec<u8>, TransportError>,
    },
}

/// Issues requests and reports their completions on a channel.
#[derive(Debug)]
pub struct Orchestrator {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
    runtime: Handle,
    sender: mpsc::UnboundedSender<Completion>,
}

impl Orchestrator {
    /// Create an orchestrator and the receiving end of its completion channel.
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoints: Endpoints,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let orchestrator = Self {
            transport,
            endpoints,
            runtime,
            sender,
        };
        (orchestrator, receiver)
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Point subsequent requests at a different base URL.
    ///
    /// Requests already in flight still complete against the old one.
    pub fn set_endpoints(&mut self, endpoints: Endpoints) {
        self.endpoints = endpoints;
    }

    /// Dispatch `refresh`, computing its window from `now`.
    pub fn dispatch<Tz: TimeZone>(
        &self,
        refresh: Refresh,
        now: &DateTime<Tz>,
        raw_period: RawPeriod,
    ) {
        match refresh {
            Refresh::Current => self.request_current(),
            Refresh::Window(category) => {
                let window = window_for(category, now, raw_period);
                self.refresh_category(category, window);
            }
        }
    }

    /// Request the latest single reading.
    pub fn request_current(&self) {
        let url = self.endpoints.current();
        self.spawn_get(url, Completion::Current);
    }

    /// Request stats and series for `category` over `window`, concurrently.
    pub fn refresh_category(&self, category: Category, window: TimeWindow) {
        let stats_url = self.endpoints.stats(category, window);
        self.spawn_get(stats_url, move |result| Completion::Stats { category, result });

        let series_url = self.endpoints.series(category, window, SERIES_LIMIT);
        self.spawn_get(series_url, move |result| Completion::Series {
            category,
            window,
            result,
        });
    }

    fn spawn_get<F>(&self, url: String, wrap: F)
    where
        F: FnOnce(Result<Vec<u8>, TransportError>) -> Completion + Send + 'static,
    {
        debug!(%url, "dispatching request");
        let transport = Arc::clone(&self.transport);
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let result = transport.get(&url).await;
            if sender.send(wrap(result)).is_err() {
                // Receiver dropped: the dashboard is shutting down
                debug!(%url, "completion discarded");
            }
        });
    }
}

/// Write a completion into its bound panel.
///
/// Returns a status message for the operator when there is something to
/// report. Transport failures never touch the panel. A stats body that fails
/// to parse shows "no data"; a series body that fails to parse clears the
/// chart.
pub fn apply_completion(dashboard: &mut Dashboard, completion: Completion) -> Option<String> {
    match completion {
        Completion::Current(Err(e)) => {
            warn!(error = %e, "current request failed");
            Some(format!("current failed: {}", e))
        }
        Completion::Current(Ok(body)) => match parse_current(&body) {
            Ok(reading) => {
                dashboard.current.apply(reading);
                None
            }
            Err(e) => {
                debug!(error = %e, "rejected /api/current body");
                Some("bad JSON /api/current".to_string())
            }
        },

        Completion::Stats { category, result: Err(e) } => {
            warn!(%category, error = %e, "stats request failed");
            Some(format!("stats failed: {}", e))
        }
        Completion::Stats { category, result: Ok(body) } => {
            let panel = &mut dashboard.panels_mut(category).stats;
            *panel = match parse_stats(&body) {
                Ok(summary) => StatsPanel::Summary(summary),
                Err(e) => {
                    debug!(%category, error = %e, "no stats in window");
                    StatsPanel::NoData
                }
            };
            None
        }

        Completion::Series { category, result: Err(e), .. } => {
            warn!(%category, error = %e, "series request failed");
            Some(format!("series failed: {}", e))
        }
        Completion::Series { category, window, result: Ok(body) } => {
            let chart = &mut dashboard.panels_mut(category).chart;
            match parse_series(&body) {
                Ok(series) => chart.replace(&series, window),
                Err(e) => {
                    debug!(%category, error = %e, "no series in window");
                    chart.clear();
                }
            }
            None
        }
    }
}

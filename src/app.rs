//! Application state and operator actions.

use std::time::{Duration, Instant};

use chrono::Local;
use tokio::sync::mpsc;
use tracing::info;

use crate::client::Endpoints;
use crate::data::{Category, Dashboard, RawPeriod};
use crate::poll::{apply_completion, Completion, Orchestrator, Refresh, Scheduler};
use crate::ui::Theme;

/// How long a transient status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Main application state.
///
/// Owns the [`Dashboard`] and is the only writer to it: completions from
/// in-flight requests are queued on a channel and applied by
/// [`App::drain_completions`] on the UI thread.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Display state
    pub dashboard: Dashboard,
    pub raw_period: RawPeriod,
    pub last_update: Option<Instant>,

    // Polling
    orchestrator: Orchestrator,
    completions: mpsc::UnboundedReceiver<Completion>,
    scheduler: Scheduler,

    // Base URL editing
    pub url_input: String,
    pub url_editing: bool,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App around an orchestrator and its completion channel.
    ///
    /// Timers start at `start`; call [`App::refresh_all`] once to populate
    /// the dashboard before the first one fires. The theme starts dark; the
    /// binary swaps in [`Theme::auto_detect`] once a terminal is attached.
    pub fn new(
        orchestrator: Orchestrator,
        completions: mpsc::UnboundedReceiver<Completion>,
        raw_period: RawPeriod,
        start: Instant,
    ) -> Self {
        Self {
            running: true,
            show_help: false,
            dashboard: Dashboard::new(),
            raw_period,
            last_update: None,
            orchestrator,
            completions,
            scheduler: Scheduler::new(start),
            url_input: String::new(),
            url_editing: false,
            theme: Theme::default(),
            status_message: None,
        }
    }

    /// The base URL requests currently go to.
    pub fn base_url(&self) -> &str {
        self.orchestrator.endpoints().base_url()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Dispatch one refresh against the current wall clock.
    pub fn refresh(&mut self, refresh: Refresh) {
        self.orchestrator.dispatch(refresh, &Local::now(), self.raw_period);
    }

    /// Re-run every refresh now. Timer state is left alone.
    pub fn refresh_all(&mut self) {
        for refresh in Refresh::ALL {
            self.refresh(refresh);
        }
    }

    /// Fire every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for refresh in self.scheduler.due(now) {
            self.refresh(refresh);
        }
    }

    /// Time until the next timer fires.
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.scheduler.until_next(now)
    }

    /// Apply every completion that has arrived so far.
    ///
    /// Returns how many were applied.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions.try_recv() {
            if let Some(message) = apply_completion(&mut self.dashboard, completion) {
                self.set_status_message(message);
            }
            applied += 1;
        }
        if applied > 0 {
            self.last_update = Some(Instant::now());
        }
        applied
    }

    /// Select a raw period and refresh the raw category straight away.
    pub fn set_raw_period(&mut self, period: RawPeriod) {
        self.raw_period = period;
        self.refresh(Refresh::Window(Category::Raw));
    }

    /// Cycle to the next raw period preset.
    pub fn next_raw_period(&mut self) {
        self.set_raw_period(self.raw_period.next());
    }

    /// Cycle to the previous raw period preset.
    pub fn prev_raw_period(&mut self) {
        self.set_raw_period(self.raw_period.prev());
    }

    /// Enter base URL editing, starting from the current URL.
    pub fn start_url_edit(&mut self) {
        self.url_input = self.base_url().to_string();
        self.url_editing = true;
    }

    /// Leave URL editing without changing anything.
    pub fn cancel_url_edit(&mut self) {
        self.url_input.clear();
        self.url_editing = false;
    }

    /// Apply the edited URL. It takes effect from the next request onwards.
    pub fn commit_url_edit(&mut self) {
        let endpoints = Endpoints::new(&self.url_input);
        info!(base_url = endpoints.base_url(), "base URL changed");
        self.set_status_message(format!("Base URL: {}", endpoints.base_url()));
        self.orchestrator.set_endpoints(endpoints);
        self.url_input.clear();
        self.url_editing = false;
    }

    /// Append a character to the URL being edited.
    pub fn url_push(&mut self, c: char) {
        self.url_input.push(c);
    }

    /// Remove the last character of the URL being edited.
    pub fn url_pop(&mut self) {
        self.url_input.pop();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::TransportError;
    use crate::data::{StatsPanel, PLACEHOLDER};
    use chrono::TimeZone;
    use std::sync::Arc;
    use tokio::runtime::Handle;

    fn app_with(transport: Arc<MockTransport>, base_url: &str) -> App {
        let (orchestrator, completions) =
            Orchestrator::new(transport, Endpoints::new(base_url), Handle::current());
        App::new(orchestrator, completions, RawPeriod::default(), Instant::now())
    }

    /// Drain completions until `expected` have been applied.
    async fn settle(app: &mut App, expected: usize) -> usize {
        let wait = async {
            let mut applied = 0;
            while applied < expected {
                applied += app.drain_completions();
                tokio::task::yield_now().await;
            }
            applied
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("completions did not arrive")
    }

    #[tokio::test]
    async fn test_current_value_end_to_end() {
        let transport = Arc::new(MockTransport::new());
        transport.respond("/api/current", r#"{"ok":true,"value":21.5,"ts":1700000000}"#);
        let mut app = app_with(transport.clone(), "http://h:1");

        app.refresh(Refresh::Current);
        assert_eq!(settle(&mut app, 1).await, 1);

        assert_eq!(transport.requested(), vec!["http://h:1/api/current".to_string()]);
        assert_eq!(app.dashboard.current.value_label(), "21.500 °C");
        let expected = Local
            .timestamp_opt(1_700_000_000, 0)
            .unwrap()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(app.dashboard.current.time_label(), expected);
        assert!(app.last_update.is_some());
    }

    #[tokio::test]
    async fn test_raw_stats_not_ok_keeps_series() {
        let transport = Arc::new(MockTransport::new());
        transport.respond("/api/stats", r#"{"ok":true,"count":2,"min":1,"max":2,"avg":1.5}"#);
        transport.respond(
            "/api/series",
            r#"{"ok":true,"points":[{"ts":1700000000,"value":1},{"ts":1700000060,"value":2}]}"#,
        );
        let mut app = app_with(transport.clone(), "http://h:1");

        app.refresh(Refresh::Window(Category::Raw));
        assert_eq!(settle(&mut app, 2).await, 2);
        assert_eq!(app.dashboard.panels(Category::Raw).chart.points.len(), 2);

        // Stats now report no data; the series still answers
        transport.respond("/api/stats", r#"{"ok":false}"#);
        app.refresh(Refresh::Window(Category::Raw));
        settle(&mut app, 2).await;

        let raw = app.dashboard.panels(Category::Raw);
        assert_eq!(raw.stats, StatsPanel::NoData);
        assert_eq!(raw.stats.count_label(), "0");
        assert_eq!(raw.stats.min_label(), PLACEHOLDER);
        assert_eq!(raw.stats.max_label(), PLACEHOLDER);
        assert_eq!(raw.stats.avg_label(), PLACEHOLDER);
        assert_eq!(raw.chart.points.len(), 2);

        // Only a failing series body clears the chart
        transport.respond("/api/series", r#"{"ok":false}"#);
        app.refresh(Refresh::Window(Category::Raw));
        settle(&mut app, 2).await;
        assert!(app.dashboard.panels(Category::Raw).chart.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_all_dispatches_seven_requests() {
        let transport = Arc::new(MockTransport::new());
        let mut app = app_with(transport.clone(), "http://h:1");

        app.refresh_all();
        assert_eq!(settle(&mut app, 7).await, 7);

        let urls = transport.requested();
        assert_eq!(urls.iter().filter(|u| u.contains("/api/current")).count(), 1);
        for kind in ["raw", "hourly", "daily"] {
            let tag = format!("kind={}&", kind);
            assert_eq!(urls.iter().filter(|u| u.contains(&tag)).count(), 2);
        }
    }

    #[tokio::test]
    async fn test_raw_period_change_refreshes_raw() {
        let transport = Arc::new(MockTransport::new());
        let mut app = app_with(transport.clone(), "http://h:1");

        app.set_raw_period(RawPeriod::FiveMinutes);
        app.set_raw_period(RawPeriod::OneDay);
        settle(&mut app, 4).await;

        let mut spans: Vec<i64> = transport
            .requested()
            .into_iter()
            .filter(|u| u.contains("/api/stats"))
            .map(|u| {
                let bounds: Vec<i64> =
                    u.split(['&', '=']).filter_map(|part| part.parse().ok()).collect();
                bounds[1] - bounds[0]
            })
            .collect();
        spans.sort();
        assert_eq!(spans, vec![300, 86_400]);
        assert_eq!(app.raw_period, RawPeriod::OneDay);
    }

    #[tokio::test]
    async fn test_transport_failure_sets_status() {
        let transport = Arc::new(MockTransport::new());
        transport.fail("/api/current", TransportError::Status(503));
        let mut app = app_with(transport, "http://h:1");

        app.refresh(Refresh::Current);
        settle(&mut app, 1).await;

        assert_eq!(app.get_status_message(), Some("current failed: HTTP status 503"));
        assert_eq!(app.dashboard.current.value_label(), PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_tick_fires_due_timers() {
        let transport = Arc::new(MockTransport::new());
        let start = Instant::now();
        let (orchestrator, completions) =
            Orchestrator::new(transport.clone(), Endpoints::new("http://h:1"), Handle::current());
        let mut app = App::new(orchestrator, completions, RawPeriod::default(), start);

        app.tick(start);
        app.tick(start + Duration::from_secs(5));
        settle(&mut app, 3).await;

        // current (1) + raw stats and series (2)
        assert_eq!(transport.requested().len(), 3);
    }

    #[tokio::test]
    async fn test_url_edit() {
        let transport = Arc::new(MockTransport::new());
        let mut app = app_with(transport.clone(), "http://a:1");

        app.start_url_edit();
        assert_eq!(app.url_input, "http://a:1");
        app.url_pop();
        app.url_push('2');
        app.url_push('/');
        app.commit_url_edit();

        assert!(!app.url_editing);
        assert_eq!(app.base_url(), "http://a:2");

        app.refresh(Refresh::Current);
        settle(&mut app, 1).await;
        assert_eq!(transport.requested(), vec!["http://a:2/api/current".to_string()]);
    }

    #[tokio::test]
    async fn test_cancel_url_edit() {
        let transport = Arc::new(MockTransport::new());
        let mut app = app_with(transport, "http://a:1");

        app.start_url_edit();
        app.url_push('9');
        app.cancel_url_edit();
        assert_eq!(app.base_url(), "http://a:1");
        assert!(app.url_input.is_empty());
    }
}

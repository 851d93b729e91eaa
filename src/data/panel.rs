//! Display state for the dashboard.
//!
//! Completions write into these panels; the `ui` module reads them and never
//! mutates them. Every label a panel shows is derived here so the rendering
//! layer stays a pure function of state.

use chrono::{Local, TimeZone};

use super::axis::value_bounds;
use super::reading::{CurrentReading, StatsSummary, TimeSeries};
use super::window::{Category, TimeWindow};

/// Shown wherever there is no value to display.
pub const PLACEHOLDER: &str = "—";

/// Time format for the current reading.
const READING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time format for chart axis labels.
const AXIS_TIME_FORMAT: &str = "%m-%d %H:%M";

/// Format a unix-seconds timestamp in local time.
fn local_time(secs: i64, format: &str) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format a chart x coordinate (milliseconds) as an axis label.
pub fn axis_time_label(millis: f64) -> String {
    local_time((millis / 1000.0).floor() as i64, AXIS_TIME_FORMAT)
}

/// The live value/timestamp pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentPanel {
    pub reading: Option<CurrentReading>,
}

impl CurrentPanel {
    pub fn apply(&mut self, reading: CurrentReading) {
        self.reading = Some(reading);
    }

    /// e.g. "21.500 °C"
    pub fn value_label(&self) -> String {
        match self.reading {
            Some(r) => format!("{:.3} °C", r.value),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn time_label(&self) -> String {
        match self.reading {
            Some(r) => local_time(r.timestamp, READING_TIME_FORMAT),
            None => PLACEHOLDER.to_string(),
        }
    }
}

/// Count/min/max/avg labels for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum StatsPanel {
    /// Nothing has arrived yet.
    #[default]
    Pending,
    /// The service answered without usable statistics.
    NoData,
    Summary(StatsSummary),
}

impl StatsPanel {
    pub fn count_label(&self) -> String {
        match self {
            StatsPanel::Pending => PLACEHOLDER.to_string(),
            StatsPanel::NoData => "0".to_string(),
            StatsPanel::Summary(s) => s.count.to_string(),
        }
    }

    pub fn min_label(&self) -> String {
        self.field_label(|s| s.min)
    }

    pub fn max_label(&self) -> String {
        self.field_label(|s| s.max)
    }

    pub fn avg_label(&self) -> String {
        self.field_label(|s| s.avg)
    }

    fn field_label(&self, field: impl Fn(&StatsSummary) -> f64) -> String {
        match self {
            StatsPanel::Summary(s) => format!("{:.3}", field(s)),
            _ => PLACEHOLDER.to_string(),
        }
    }
}

/// One time-series chart: points in milliseconds plus its axis ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    /// `(x millis, y)` in arrival order.
    pub points: Vec<(f64, f64)>,
    /// Time axis range in milliseconds, once a series has been received.
    pub x_bounds: Option<[f64; 2]>,
    pub y_bounds: [f64; 2],
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            x_bounds: None,
            y_bounds: [0.0, 1.0],
        }
    }
}

impl ChartPanel {
    /// Replace every point with `series` and rescale both axes.
    ///
    /// The time axis covers exactly the requested window, whatever points
    /// actually came back.
    pub fn replace(&mut self, series: &TimeSeries, window: TimeWindow) {
        self.points = series.iter().map(|p| (p.timestamp * 1000.0, p.value)).collect();
        self.x_bounds = Some(window.millis());
        self.y_bounds = value_bounds(series.iter().map(|p| p.value));
    }

    /// Drop all points, leaving the axes where they were.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Start, middle and end labels for the time axis.
    pub fn time_labels(&self) -> Vec<String> {
        match self.x_bounds {
            Some([from, to]) => [from, (from + to) / 2.0, to]
                .into_iter()
                .map(axis_time_label)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Display targets bound to one category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPanels {
    pub stats: StatsPanel,
    pub chart: ChartPanel,
}

/// All display state: the current panel plus one binding per category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub current: CurrentPanel,
    bindings: [CategoryPanels; 3],
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panels(&self, category: Category) -> &CategoryPanels {
        &self.bindings[category.index()]
    }

    pub fn panels_mut(&mut self, category: Category) -> &mut CategoryPanels {
        &mut self.bindings[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reading::SeriesPoint;

    fn series(values: &[(f64, f64)]) -> TimeSeries {
        values
            .iter()
            .map(|&(timestamp, value)| SeriesPoint { timestamp, value })
            .collect()
    }

    #[test]
    fn test_current_labels() {
        let mut panel = CurrentPanel::default();
        assert_eq!(panel.value_label(), PLACEHOLDER);
        assert_eq!(panel.time_label(), PLACEHOLDER);

        panel.apply(CurrentReading { value: 21.5, timestamp: 1_700_000_000 });
        assert_eq!(panel.value_label(), "21.500 °C");

        let expected = Local
            .timestamp_opt(1_700_000_000, 0)
            .unwrap()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(panel.time_label(), expected);
    }

    #[test]
    fn test_stats_labels() {
        assert_eq!(StatsPanel::Pending.count_label(), PLACEHOLDER);
        assert_eq!(StatsPanel::Pending.avg_label(), PLACEHOLDER);

        assert_eq!(StatsPanel::NoData.count_label(), "0");
        assert_eq!(StatsPanel::NoData.min_label(), PLACEHOLDER);
        assert_eq!(StatsPanel::NoData.max_label(), PLACEHOLDER);
        assert_eq!(StatsPanel::NoData.avg_label(), PLACEHOLDER);

        let panel = StatsPanel::Summary(StatsSummary {
            count: 42,
            min: 18.0,
            max: 23.4567,
            avg: 20.1,
        });
        assert_eq!(panel.count_label(), "42");
        assert_eq!(panel.min_label(), "18.000");
        assert_eq!(panel.max_label(), "23.457");
        assert_eq!(panel.avg_label(), "20.100");
    }

    #[test]
    fn test_chart_replace_converts_to_millis() {
        let mut chart = ChartPanel::default();
        let window = TimeWindow::new(1_000, 2_000);
        chart.replace(&series(&[(1_500.0, 20.0), (1_200.0, 22.0)]), window);

        assert_eq!(chart.points, vec![(1_500_000.0, 20.0), (1_200_000.0, 22.0)]);
        assert_eq!(chart.x_bounds, Some([1_000_000.0, 2_000_000.0]));
        assert_eq!(chart.y_bounds, [20.0, 22.0]);
    }

    #[test]
    fn test_chart_time_axis_follows_window_not_points() {
        let mut chart = ChartPanel::default();
        chart.replace(&series(&[(50.0, 1.0)]), TimeWindow::new(0, 100));
        assert_eq!(chart.x_bounds, Some([0.0, 100_000.0]));
        assert_eq!(chart.y_bounds, [0.0, 2.0]);

        chart.replace(&Vec::new(), TimeWindow::new(10, 20));
        assert!(chart.is_empty());
        assert_eq!(chart.x_bounds, Some([10_000.0, 20_000.0]));
        assert_eq!(chart.y_bounds, [0.0, 1.0]);
    }

    #[test]
    fn test_chart_clear_keeps_axes() {
        let mut chart = ChartPanel::default();
        chart.replace(&series(&[(5.0, 3.0), (6.0, 4.0)]), TimeWindow::new(0, 10));
        chart.clear();
        assert!(chart.is_empty());
        assert_eq!(chart.x_bounds, Some([0.0, 10_000.0]));
        assert_eq!(chart.y_bounds, [3.0, 4.0]);
    }

    #[test]
    fn test_time_labels() {
        let mut chart = ChartPanel::default();
        assert!(chart.time_labels().is_empty());
        chart.replace(&Vec::new(), TimeWindow::new(1_700_000_000, 1_700_003_600));
        assert_eq!(chart.time_labels().len(), 3);
    }

    #[test]
    fn test_bindings_are_independent() {
        let mut dashboard = Dashboard::new();
        dashboard.panels_mut(Category::Hourly).stats = StatsPanel::NoData;

        assert_eq!(dashboard.panels(Category::Hourly).stats, StatsPanel::NoData);
        assert_eq!(dashboard.panels(Category::Raw).stats, StatsPanel::Pending);
        assert_eq!(dashboard.panels(Category::Daily).stats, StatsPanel::Pending);
    }
}

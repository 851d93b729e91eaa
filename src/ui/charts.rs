//! Time-series charts, one per category.
//!
//! Axis ranges come straight from each [`ChartPanel`]: the time axis is the
//! requested window and the value axis is whatever the last series produced.
//! A chart that has received nothing yet is drawn as an empty frame.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::app::App;
use crate::data::{Category, ChartPanel};

/// Render the chart row: raw, hourly and daily side by side.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    for (category, chunk) in Category::ALL.into_iter().zip(chunks.iter()) {
        render_chart(frame, app, category, *chunk);
    }
}

fn render_chart(frame: &mut Frame, app: &App, category: Category, area: Rect) {
    let panel = &app.dashboard.panels(category).chart;

    let title = if panel.is_empty() {
        format!(" {} (no points) ", category.title())
    } else {
        format!(" {} ({}) ", category.title(), panel.points.len())
    };
    let block = Block::default()
        .title(Span::styled(title, app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(x_bounds) = panel.x_bounds else {
        frame.render_widget(block, area);
        return;
    };

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(app.theme.series_color(category)))
        .data(&panel.points);

    let x_axis = Axis::default()
        .title("Time")
        .style(app.theme.axis)
        .bounds(x_bounds)
        .labels(panel.time_labels());

    let y_axis = Axis::default()
        .title("°C")
        .style(app.theme.axis)
        .bounds(panel.y_bounds)
        .labels(value_labels(panel));

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Bottom, middle and top labels for the value axis.
fn value_labels(panel: &ChartPanel) -> Vec<String> {
    let [lo, hi] = panel.y_bounds;
    [lo, (lo + hi) / 2.0, hi].iter().map(|v| format!("{:.1}", v)).collect()
}

//! Server, current-reading, controls and statistics boxes.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::Category;
use crate::ui::Theme;

fn boxed<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), theme.header))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
}

/// One `label: value` row, dimming the value when it is a placeholder.
fn field_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    let style = theme.value_style(&value);
    Line::from(vec![
        Span::styled(format!("{:<7}", label), theme.label),
        Span::styled(value, style),
    ])
}

/// Render the top row: server, current reading and controls.
pub fn render_top_row(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    // Server
    let url_line = if app.url_editing {
        Line::from(vec![
            Span::styled("URL:   ", app.theme.label),
            Span::styled(format!("{}_", app.url_input), Style::default().fg(app.theme.highlight)),
        ])
    } else {
        field_line("URL:", app.base_url().to_string(), &app.theme)
    };
    frame.render_widget(
        Paragraph::new(vec![url_line]).block(boxed("Server", &app.theme)),
        chunks[0],
    );

    // Current
    let current = &app.dashboard.current;
    let lines = vec![
        field_line("Value:", current.value_label(), &app.theme),
        field_line("Time:", current.time_label(), &app.theme),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(boxed("Current", &app.theme)),
        chunks[1],
    );

    // Controls
    let lines = vec![
        field_line("Raw:", app.raw_period.label().to_string(), &app.theme),
        Line::from(Span::styled("[u] Update all  [p] Period", app.theme.label)),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(boxed("Controls", &app.theme)),
        chunks[2],
    );
}

/// Render the stats row: count/min/max/avg for each category.
pub fn render_stats_row(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    for (category, chunk) in Category::ALL.into_iter().zip(chunks.iter()) {
        render_stats_box(frame, app, category, *chunk);
    }
}

fn render_stats_box(frame: &mut Frame, app: &App, category: Category, area: Rect) {
    let stats = &app.dashboard.panels(category).stats;
    let title = format!("{} stats", category.title());

    let lines = vec![
        field_line("count:", stats.count_label(), &app.theme),
        field_line("min:", stats.min_label(), &app.theme),
        field_line("max:", stats.max_label(), &app.theme),
        field_line("avg:", stats.avg_label(), &app.theme),
    ];

    frame.render_widget(Paragraph::new(lines).block(boxed(&title, &app.theme)), area);
}

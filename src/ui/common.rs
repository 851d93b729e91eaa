//! Common UI components shared across the dashboard.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the header bar.
///
/// Displays: title, base URL, selected raw period.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" TEMPWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(app.base_url().to_string(), Style::default().fg(app.theme.highlight)),
        Span::raw(" │ "),
        Span::raw(app.raw_period.label()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the latest transient message if one is live, otherwise the time
/// since the last completion and the available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.url_editing {
        "Type URL | Enter:apply Esc:cancel"
    } else {
        "u:update all p/P:raw period e:edit URL ?:help q:quit"
    };

    let status = match app.last_update {
        Some(at) => format!(
            " Updated {:.1}s ago | {}",
            at.elapsed().as_secs_f64(),
            controls
        ),
        None => format!(" Waiting for data... | {}", controls),
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Data",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  u / r     Update all now"),
        Line::from("  p         Next raw period"),
        Line::from("  P         Previous raw period"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Server",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  e         Edit base URL"),
        Line::from("  Enter     Apply URL"),
        Line::from("  Esc       Cancel editing"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?         Toggle help"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 21u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

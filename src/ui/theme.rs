//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::Category;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for box titles and the header bar.
    pub header: Style,
    /// Style for field names ("min:", "Value:").
    pub label: Style,
    /// Style for decoded values.
    pub value: Style,
    /// Style for placeholders shown when there is no value.
    pub placeholder: Style,
    /// Style for axis labels.
    pub axis: Style,
    /// Line colors for the raw, hourly and daily charts.
    pub series: [Color; 3],
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            axis: Style::default().fg(Color::Gray),
            series: [Color::Yellow, Color::Green, Color::Magenta],
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            axis: Style::default().fg(Color::DarkGray),
            series: [Color::Red, Color::Green, Color::Blue],
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Line color for a category's chart
    pub fn series_color(&self, category: Category) -> Color {
        self.series[category.index()]
    }

    /// Style for a value label, dimmed when it is a placeholder
    pub fn value_style(&self, text: &str) -> Style {
        if text == crate::data::PLACEHOLDER {
            self.placeholder
        } else {
            self.value
        }
    }
}

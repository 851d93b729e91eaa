use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If URL input is active, handle text input
    if app.url_editing {
        handle_url_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Update all
        KeyCode::Char('u') | KeyCode::Char('r') if key.modifiers.is_empty() => {
            app.refresh_all();
            app.set_status_message("Updating all".to_string());
        }

        // Raw period
        KeyCode::Char('p') | KeyCode::Right => app.next_raw_period(),
        KeyCode::Char('P') | KeyCode::Left => app.prev_raw_period(),

        // Base URL
        KeyCode::Char('e') => app.start_url_edit(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while the base URL is being edited
fn handle_url_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Apply
        KeyCode::Enter => app.commit_url_edit(),

        // Cancel (keep the old URL)
        KeyCode::Esc => app.cancel_url_edit(),

        // Clear the line
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.url_input.clear();
        }

        KeyCode::Backspace => app.url_pop(),

        // Type characters
        KeyCode::Char(c) => app.url_push(c),

        _ => {}
    }
}

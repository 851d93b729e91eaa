// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod client;
mod config;
mod data;
mod events;
mod poll;
mod ui;

use app::App;
use client::{Endpoints, HttpTransport};
use data::RawPeriod;
use poll::Orchestrator;
use ui::Theme;

// `config` alone would also name the config crate
use crate::config::Settings;

/// How often the UI loop wakes when nothing happens.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "tempwatch")]
#[command(about = "Terminal dashboard for a temperature telemetry service")]
struct Args {
    /// Base URL of the telemetry service (e.g., "http://127.0.0.1:8080")
    #[arg(short, long)]
    url: Option<String>,

    /// Initial raw period: 5m, 15m, 1h, 24h or 7d
    #[arg(short, long)]
    raw_period: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal belongs to the dashboard)
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(url) = args.url {
        settings.base_url = url;
    }
    if let Some(period) = args.raw_period {
        settings.raw_period = period;
    }
    let raw_period = settings.raw_period()?;

    info!(base_url = %settings.base_url, raw_period = %raw_period.label(), "starting");

    // Requests run on the runtime; the TUI stays on the main thread
    let rt = tokio::runtime::Runtime::new()?;
    let (orchestrator, completions) = Orchestrator::new(
        Arc::new(HttpTransport::new()),
        Endpoints::new(&settings.base_url),
        rt.handle().clone(),
    );
    let app = App::new(orchestrator, completions, raw_period, Instant::now());

    run_tui(app)
}

/// Send tracing output to `path`, filtered by `RUST_LOG` (default `info`).
fn init_logging(path: &std::path::Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();

    Ok(())
}

/// Run the TUI until the operator quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Pick the theme and load initial data
    app.theme = Theme::auto_detect();
    app.refresh_all();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("stopped");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 72;
    const MIN_HEIGHT: u16 = 20;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let top = (area.height / 2).saturating_sub(2);
                let height = 5u16.min(area.height);
                let centered = ratatui::layout::Rect::new(0, top, area.width, height);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(4), // Server / current / controls
                Constraint::Length(6), // Stats
                Constraint::Min(8),    // Charts
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::panels::render_top_row(frame, app, chunks[1]);
            ui::panels::render_stats_row(frame, app, chunks[2]);
            ui::charts::render(frame, app, chunks[3]);
            ui::common::render_status_bar(frame, app, chunks[4]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Wait for input, but never past the next timer
        let timeout = POLL_TIMEOUT.min(app.until_next_tick(Instant::now()));
        if let Some(event) = events::poll_event(timeout)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Apply finished requests, then fire due timers
        app.drain_completions();
        app.tick(Instant::now());
    }

    Ok(())
}

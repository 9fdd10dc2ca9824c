//! Vew - terminal viewer for git history
//!
//! Binary entry point for the TUI application.

use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use vew::app::App;

/// Browse git history and diff any two commits
#[derive(Parser, Debug)]
#[command(name = "vew")]
#[command(version)]
#[command(about = "Browse git history and diff any two commits")]
pub struct Args {
    /// Limit the log and every diff to this file
    pub path: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_path = vew::logging::default_log_path();
    if let Err(e) = vew::logging::init(&log_path) {
        eprintln!("vew: logging disabled: {}", e);
    }
    info!(path = ?args.path, "starting");

    let path_filter = args.path.map(|p| p.to_string_lossy().into_owned());
    let app = App::new(path_filter);

    let terminal = ratatui::init();
    let _restore = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, app)
}

/// Run the application's main loop.
///
/// Blocks on one event at a time; each key is fully handled before the next
/// is read, and the screen is redrawn only after its effects are applied.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        if app.views.take_redraw_request() {
            terminal.draw(|frame| app.render(frame))?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key_event(key),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                app.views.request_redraw();
            }
            _ => {}
        }
    }

    Ok(())
}

//! GTAPPLY - GramTech Labs Application Form
//!
//! A terminal application form for the GramTech Labs skill development
//! program. A single run collects one application, asks a hosted text model
//! for a short personal note, and shows a confirmation screen.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::App;
use presentation::{render_ui, InputHandler};

/// How often the loop wakes up to animate the busy indicator and poll for
/// the feedback result.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Entry point for the GTAPPLY terminal application form.
///
/// Sets up the terminal interface, initializes the application state,
/// and runs the main event loop until the user quits or closes the
/// confirmation screen.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Renders the UI, polls for keyboard input at the tick rate, and drives
/// the time-based state transitions (busy indicator, feedback delivery,
/// confirmation reveal) between key events.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }

        app.on_tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

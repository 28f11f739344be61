pub mod app;
pub mod events;
pub mod ui;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use app::TuiApp;
use events::{handle_input, InputEvent};
use symposium::Table;
use ui::render_ui;

/// Run the table renderer until the user quits or the simulation shuts
/// down. Read-only with respect to the table: it polls snapshots and never
/// touches seat state.
pub fn run_tui(table: Arc<Table>, refresh_interval: Duration) -> Result<(), Box<dyn std::error::Error>> {
    debug!("starting renderer for {} seats", table.seats());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = TuiApp::new(table, refresh_interval);

    let result = run_tui_loop(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.refresh_snapshot();
        terminal.draw(|f| render_ui(f, app))?;

        // Polling for input doubles as the frame pacing delay.
        match handle_input(app.refresh_interval)? {
            InputEvent::Quit => {
                app.quit();
            }
            InputEvent::TogglePause => {
                app.toggle_pause();
                debug!("toggled pause: paused={}", app.paused);
            }
            InputEvent::None => {}
        }

        if app.should_quit || !app.table.is_running() {
            debug!("renderer quitting");
            break;
        }
    }

    Ok(())
}

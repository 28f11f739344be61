use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

pub enum InputEvent {
    Quit,
    TogglePause,
    None,
}

/// Poll for a key press for at most `timeout`. In raw mode ctrl-c arrives
/// here as a key event rather than a signal, so it maps to quit like q/Esc.
pub fn handle_input(timeout: Duration) -> io::Result<InputEvent> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not key release
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(InputEvent::Quit);
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(InputEvent::Quit);
                    }
                    KeyCode::Char('p') | KeyCode::Char('P') => {
                        return Ok(InputEvent::TogglePause);
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(InputEvent::None)
}

use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;

use symposium::{SeatSnapshot, Table};

/// View state for the renderer: the latest table snapshot plus UI toggles.
#[derive(Debug)]
pub struct TuiApp {
    pub table: Arc<Table>,
    pub refresh_interval: Duration,
    pub seats: Vec<SeatSnapshot>,
    pub started_at: DateTime<Local>,

    // UI state
    pub should_quit: bool,
    pub paused: bool,
}

impl TuiApp {
    pub fn new(table: Arc<Table>, refresh_interval: Duration) -> Self {
        let seats = table.snapshot();
        Self {
            table,
            refresh_interval,
            seats,
            started_at: Local::now(),
            should_quit: false,
            paused: false,
        }
    }

    /// Pull a fresh snapshot unless the display is paused. Pausing freezes
    /// the display only; the philosophers keep running.
    pub fn refresh_snapshot(&mut self) {
        if !self.paused {
            self.seats = self.table.snapshot();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn uptime(&self) -> String {
        let elapsed = Local::now().signed_duration_since(self.started_at);
        let seconds = elapsed.num_seconds().max(0);
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

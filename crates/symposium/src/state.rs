use serde::Serialize;
use std::time::{Duration, Instant};

/// Where a philosopher is in its cycle. Holding both forks and `Eating` are
/// the same thing: there is no state in which a seat holds a single fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhilosopherState {
    Thinking,
    Hungry,
    Eating,
}

impl PhilosopherState {
    pub fn label(&self) -> &'static str {
        match self {
            PhilosopherState::Thinking => "THINKING",
            PhilosopherState::Hungry => "HUNGRY",
            PhilosopherState::Eating => "EATING",
        }
    }
}

/// Counters and timing for one seat, written by the philosopher's lifecycle
/// and read by the renderer. `period_start` and `period_duration` are always
/// written together under one stats-lock acquisition so a reader never
/// computes progress against a mismatched pair.
#[derive(Debug, Clone)]
pub struct SeatStats {
    pub think_count: u64,
    pub eat_count: u64,
    pub period_start: Instant,
    pub period_duration: Duration,
}

impl SeatStats {
    pub fn new() -> Self {
        Self {
            think_count: 0,
            eat_count: 0,
            period_start: Instant::now(),
            period_duration: Duration::ZERO,
        }
    }
}

impl Default for SeatStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Renderer-facing view of one seat. The `(elapsed, period_duration)` pair is
/// internally consistent; consistency across seats is not promised, which is
/// acceptable for display.
#[derive(Debug, Clone)]
pub struct SeatSnapshot {
    pub id: usize,
    pub state: PhilosopherState,
    pub elapsed: Duration,
    pub period_duration: Duration,
    pub think_count: u64,
    pub eat_count: u64,
}

impl SeatSnapshot {
    /// Fraction of the current timed period that has elapsed, clamped to
    /// `0.0..=1.0`. A hungry seat has no timed period in progress.
    pub fn progress(&self) -> f64 {
        if self.state == PhilosopherState::Hungry || self.period_duration.is_zero() {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / self.period_duration.as_secs_f64()).min(1.0)
    }
}

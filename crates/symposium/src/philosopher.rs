use rand::Rng;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

use crate::table::Table;

/// Source of think/eat durations. Injected so tests can run the lifecycle
/// with deterministic timing instead of random sleeps.
pub trait DurationSampler: Send + Sync {
    fn sample(&self) -> Duration;
}

/// Uniform random duration in `min_ms..=max_ms`.
#[derive(Debug, Clone, Copy)]
pub struct UniformSampler {
    min_ms: u64,
    max_ms: u64,
}

impl UniformSampler {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        debug_assert!(min_ms <= max_ms);
        Self { min_ms, max_ms }
    }
}

impl DurationSampler for UniformSampler {
    fn sample(&self) -> Duration {
        Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..=self.max_ms))
    }
}

/// Always the same duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub Duration);

impl DurationSampler for FixedSampler {
    fn sample(&self) -> Duration {
        self.0
    }
}

/// One seat's lifecycle: think, get hungry, wait for both forks, eat,
/// release, repeat until the table shuts down. The thread never holds a
/// single fork: acquisition is the one atomic grant inside `Table`.
pub struct Philosopher {
    id: usize,
    table: Arc<Table>,
    think_durations: Arc<dyn DurationSampler>,
    eat_durations: Arc<dyn DurationSampler>,
}

impl Philosopher {
    pub fn new(
        id: usize,
        table: Arc<Table>,
        think_durations: Arc<dyn DurationSampler>,
        eat_durations: Arc<dyn DurationSampler>,
    ) -> Self {
        Self {
            id,
            table,
            think_durations,
            eat_durations,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Spawn the lifecycle on its own named thread.
    pub fn spawn(self) -> io::Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name(format!("philosopher-{}", self.id))
            .spawn(move || self.run())
    }

    /// Drive the lifecycle until shutdown. The run flag is checked at every
    /// state boundary; a cleared flag during the fork wait or a timed delay
    /// ends the loop without a partial acquisition.
    pub fn run(self) {
        debug!("philosopher {} seated", self.id);
        while self.table.is_running() {
            if !self.think() {
                break;
            }
            if !self.table.take_forks(self.id) {
                break;
            }
            self.eat();
            self.table.put_forks(self.id);
        }
        debug!("philosopher {} left the table", self.id);
    }

    /// Think for a sampled duration. Returns `false` if shutdown cut the
    /// period short; only completed periods are counted.
    fn think(&self) -> bool {
        let duration = self.think_durations.sample();
        self.table.record_period_start(self.id, duration);
        debug!("philosopher {} thinking for {:?}", self.id, duration);
        if !self.table.interruptible_sleep(duration) {
            return false;
        }
        self.table.record_think_complete(self.id);
        true
    }

    /// Eat for a sampled duration. The forks are released by the caller
    /// whether or not the period completed.
    fn eat(&self) {
        let duration = self.eat_durations.sample();
        self.table.record_period_start(self.id, duration);
        debug!("philosopher {} eating for {:?}", self.id, duration);
        if self.table.interruptible_sleep(duration) {
            self.table.record_eat_complete(self.id);
        }
    }
}

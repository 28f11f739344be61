use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::errors::SimulationResult;
use crate::ring::Ring;
use crate::signal::GrantSignal;
use crate::state::{PhilosopherState, SeatSnapshot, SeatStats};

/// Shared state for one table of philosophers.
///
/// Seat states are guarded by a single arbitration mutex; every transition
/// decision runs under it, so no philosopher can act on a stale view of its
/// neighbors. Timing stats live behind their own mutex so the renderer and
/// the philosophers rarely contend. Lock order is fixed: seat states before
/// stats, never the reverse (in practice the two are never held together
/// outside `snapshot`).
///
/// Starvation avoidance is best effort only: a seat is re-evaluated when it
/// becomes hungry and when a neighbor releases, nothing more. Two neighbors
/// alternating their meals can in principle keep the seat between them
/// hungry indefinitely. That is the documented weakness of the classic
/// protocol, kept as is.
#[derive(Debug)]
pub struct Table {
    ring: Ring,
    states: Mutex<Vec<PhilosopherState>>,
    stats: Mutex<Vec<SeatStats>>,
    signals: Vec<GrantSignal>,
    running: AtomicBool,
    sleep_gate: (Mutex<()>, Condvar),
}

impl Table {
    /// Build a table with `seats` philosophers, all thinking. Accepts any
    /// ring large enough for distinct left/right neighbors; the stricter
    /// product minimum lives in config validation.
    pub fn new(seats: usize) -> SimulationResult<Self> {
        let ring = Ring::new(seats)?;
        Ok(Self {
            ring,
            states: Mutex::new(vec![PhilosopherState::Thinking; seats]),
            stats: Mutex::new((0..seats).map(|_| SeatStats::new()).collect()),
            signals: (0..seats).map(|_| GrantSignal::default()).collect(),
            running: AtomicBool::new(true),
            sleep_gate: (Mutex::new(()), Condvar::new()),
        })
    }

    pub fn ring(&self) -> Ring {
        self.ring
    }

    pub fn seats(&self) -> usize {
        self.ring.size()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Clear the run flag and wake everyone: philosophers blocked waiting
    /// for forks and philosophers in a timed think/eat delay. Safe to call
    /// from a signal-handler thread and idempotent.
    pub fn request_shutdown(&self) {
        self.running.store(false, Ordering::SeqCst);
        let (lock, condvar) = &self.sleep_gate;
        {
            let _gate = lock.lock().unwrap();
            condvar.notify_all();
        }
        for signal in &self.signals {
            signal.interrupt();
        }
        debug!("shutdown requested");
    }

    /// Request both forks for `id` and block until they are granted.
    /// Returns `false` if shutdown interrupted the wait; the seat then holds
    /// nothing and the caller must exit its loop.
    pub fn take_forks(&self, id: usize) -> bool {
        {
            let mut states = self.states.lock().unwrap();
            states[id] = PhilosopherState::Hungry;
            debug!("philosopher {} is hungry", id);
            self.try_grant(&mut states, id);
        }
        // The arbitration lock is released before blocking; only the seat's
        // own signal is held across the wait.
        self.signals[id].wait_while_running(&self.running)
    }

    /// Release both forks for `id` and re-evaluate the only two seats this
    /// release could have unblocked.
    pub fn put_forks(&self, id: usize) {
        let mut states = self.states.lock().unwrap();
        states[id] = PhilosopherState::Thinking;
        debug!("philosopher {} put down its forks", id);
        self.try_grant(&mut states, self.ring.left(id));
        self.try_grant(&mut states, self.ring.right(id));
    }

    /// Grant the fork pair to `id` if it is hungry and neither neighbor is
    /// eating. Checking the two adjacent seats is sufficient: non-adjacent
    /// philosophers never share a fork.
    fn try_grant(&self, states: &mut [PhilosopherState], id: usize) {
        if states[id] == PhilosopherState::Hungry
            && states[self.ring.left(id)] != PhilosopherState::Eating
            && states[self.ring.right(id)] != PhilosopherState::Eating
        {
            states[id] = PhilosopherState::Eating;
            self.signals[id].grant();
            debug!("philosopher {} granted both forks", id);
        }
    }

    /// Sleep for `duration` unless shutdown cuts the delay short. Returns
    /// `true` if the full duration elapsed.
    pub fn interruptible_sleep(&self, duration: Duration) -> bool {
        let (lock, condvar) = &self.sleep_gate;
        let deadline = Instant::now() + duration;
        let mut gate = lock.lock().unwrap();
        while self.is_running() {
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            let (next, timeout) = condvar.wait_timeout(gate, deadline - now).unwrap();
            gate = next;
            if timeout.timed_out() {
                return true;
            }
        }
        false
    }

    /// Stamp the start of a new think/eat period. Start and duration go in
    /// under one stats-lock acquisition.
    pub fn record_period_start(&self, id: usize, duration: Duration) {
        let mut stats = self.stats.lock().unwrap();
        let seat = &mut stats[id];
        seat.period_start = Instant::now();
        seat.period_duration = duration;
    }

    /// Count a completed thinking period.
    pub fn record_think_complete(&self, id: usize) {
        self.stats.lock().unwrap()[id].think_count += 1;
    }

    /// Count a completed eating period.
    pub fn record_eat_complete(&self, id: usize) {
        self.stats.lock().unwrap()[id].eat_count += 1;
    }

    /// Read-only view for the renderer. Seat states and stats are sampled
    /// back to back, not atomically across the two locks; each seat's
    /// `(elapsed, duration)` pair is still internally consistent.
    pub fn snapshot(&self) -> Vec<SeatSnapshot> {
        let states: Vec<PhilosopherState> = self.states.lock().unwrap().clone();
        let stats = self.stats.lock().unwrap();
        let now = Instant::now();
        states
            .into_iter()
            .zip(stats.iter())
            .enumerate()
            .map(|(id, (state, seat))| SeatSnapshot {
                id,
                state,
                elapsed: now.saturating_duration_since(seat.period_start),
                period_duration: seat.period_duration,
                think_count: seat.think_count,
                eat_count: seat.eat_count,
            })
            .collect()
    }

    /// Current state of one seat, for tests and spot checks.
    pub fn seat_state(&self, id: usize) -> PhilosopherState {
        self.states.lock().unwrap()[id]
    }
}

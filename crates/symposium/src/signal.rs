use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};

/// Per-seat binary wake signal: one permit, released by the arbiter when it
/// grants a fork pair, consumed by the philosopher waiting for it.
///
/// A waiter blocks on the condvar, never spins. Shutdown wakes waiters
/// through `interrupt` so nobody outlives the run flag.
#[derive(Debug, Default)]
pub struct GrantSignal {
    granted: Mutex<bool>,
    condvar: Condvar,
}

impl GrantSignal {
    /// Release the permit. Caller must already have flipped the seat to
    /// eating under the arbitration lock.
    pub fn grant(&self) {
        let mut granted = self.granted.lock().unwrap();
        *granted = true;
        self.condvar.notify_one();
    }

    /// Block until the permit is released or `running` clears. Consumes the
    /// permit and returns `true` when granted, `false` on shutdown.
    pub fn wait_while_running(&self, running: &AtomicBool) -> bool {
        let mut granted = self.granted.lock().unwrap();
        while !*granted && running.load(Ordering::SeqCst) {
            granted = self.condvar.wait(granted).unwrap();
        }
        let was_granted = *granted;
        *granted = false;
        was_granted
    }

    /// Wake a blocked waiter without granting, so it can observe a cleared
    /// run flag. Takes the permit lock first: a waiter is then either before
    /// its flag check or already parked, never in between.
    pub fn interrupt(&self) {
        let _granted = self.granted.lock().unwrap();
        self.condvar.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_grant_before_wait_returns_immediately() {
        let signal = GrantSignal::default();
        let running = AtomicBool::new(true);
        signal.grant();
        assert!(signal.wait_while_running(&running));
    }

    #[test]
    fn test_wait_consumes_the_permit() {
        let signal = GrantSignal::default();
        let running = AtomicBool::new(true);
        signal.grant();
        assert!(signal.wait_while_running(&running));

        // No permit left: a second wait only returns once the flag clears.
        running.store(false, Ordering::SeqCst);
        assert!(!signal.wait_while_running(&running));
    }

    #[test]
    fn test_interrupt_wakes_a_blocked_waiter() {
        let signal = Arc::new(GrantSignal::default());
        let running = Arc::new(AtomicBool::new(true));
        let (tx, rx) = mpsc::channel();

        let waiter = {
            let signal = Arc::clone(&signal);
            let running = Arc::clone(&running);
            thread::spawn(move || {
                tx.send(signal.wait_while_running(&running)).unwrap();
            })
        };

        thread::sleep(Duration::from_millis(50));
        running.store(false, Ordering::SeqCst);
        signal.interrupt();

        let outcome = rx
            .recv_timeout(Duration::from_secs(1))
            .expect("waiter did not return after interrupt");
        assert!(!outcome);
        waiter.join().unwrap();
    }
}

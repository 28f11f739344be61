use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use symposium::{DurationSampler, FixedSampler, Philosopher, Table};

fn seat_philosophers(table: &Arc<Table>, period: Duration) -> Vec<thread::JoinHandle<()>> {
    let sampler: Arc<dyn DurationSampler> = Arc::new(FixedSampler(period));
    (0..table.seats())
        .map(|id| {
            Philosopher::new(
                id,
                Arc::clone(table),
                Arc::clone(&sampler),
                Arc::clone(&sampler),
            )
            .spawn()
            .unwrap()
        })
        .collect()
}

/// Liveness smoke test: with short periods every seat completes at least one
/// full think/eat cycle, and counters only ever move forward by one per
/// completed period.
#[test]
fn test_every_seat_completes_cycles() {
    let table = Arc::new(Table::new(5).unwrap());
    let handles = seat_philosophers(&table, Duration::from_millis(2));

    thread::sleep(Duration::from_millis(500));
    table.request_shutdown();
    for handle in handles {
        handle.join().unwrap();
    }

    for seat in table.snapshot() {
        assert!(
            seat.think_count >= 1,
            "seat {} never finished thinking",
            seat.id
        );
        assert!(seat.eat_count >= 1, "seat {} never ate", seat.id);
        // The loop thinks before it eats, so the two counters can drift
        // apart by at most one.
        let difference = seat.think_count.abs_diff(seat.eat_count);
        assert!(
            difference <= 1,
            "seat {} counters diverged: thought {} ate {}",
            seat.id,
            seat.think_count,
            seat.eat_count
        );
    }
}

/// Counters never decrease while the simulation runs.
#[test]
fn test_counters_are_monotonic() {
    let table = Arc::new(Table::new(5).unwrap());
    let handles = seat_philosophers(&table, Duration::from_millis(2));

    let mut previous = vec![(0u64, 0u64); table.seats()];
    for _ in 0..20 {
        thread::sleep(Duration::from_millis(10));
        for seat in table.snapshot() {
            let (think, eat) = previous[seat.id];
            assert!(seat.think_count >= think, "think count went backwards");
            assert!(seat.eat_count >= eat, "eat count went backwards");
            previous[seat.id] = (seat.think_count, seat.eat_count);
        }
    }

    table.request_shutdown();
    for handle in handles {
        handle.join().unwrap();
    }
}

/// A philosopher blocked waiting for forks returns promptly once shutdown is
/// requested, without waiting for a neighbor's release.
#[test]
fn test_shutdown_wakes_a_blocked_philosopher() {
    let table = Arc::new(Table::new(5).unwrap());

    // Wedge seat 2 between two eaters.
    assert!(table.take_forks(1));
    assert!(table.take_forks(3));

    let (tx, rx) = mpsc::channel();
    let waiter = {
        let table = Arc::clone(&table);
        thread::spawn(move || {
            tx.send(table.take_forks(2)).unwrap();
        })
    };

    thread::sleep(Duration::from_millis(50));
    table.request_shutdown();

    let granted = rx
        .recv_timeout(Duration::from_secs(1))
        .expect("blocked philosopher did not wake on shutdown");
    assert!(!granted, "shutdown must not look like a grant");
    waiter.join().unwrap();
}

/// Shutdown while every philosopher is mid-cycle still lets the whole table
/// be joined promptly; nobody is left parked.
#[test]
fn test_shutdown_joins_all_threads() {
    let table = Arc::new(Table::new(7).unwrap());
    // Long periods: most seats will be inside a timed delay when the flag
    // clears.
    let handles = seat_philosophers(&table, Duration::from_secs(30));

    thread::sleep(Duration::from_millis(50));
    table.request_shutdown();

    let (tx, rx) = mpsc::channel();
    let joiner = thread::spawn(move || {
        for handle in handles {
            handle.join().unwrap();
        }
        tx.send(()).unwrap();
    });

    rx.recv_timeout(Duration::from_secs(5))
        .expect("philosopher threads did not exit after shutdown");
    joiner.join().unwrap();
}

//! # Symposium
//!
//! Symposium is a simulation of N philosopher threads seated around a table,
//! cyclically contending for the fork pairs they share with their immediate
//! neighbors. The engine guarantees that no two adjacent philosophers eat at
//! the same time, that forks are always taken and released as an atomic pair,
//! and that the whole simulation can be shut down promptly even while
//! philosophers are blocked waiting for forks.
//!
//! ## Core components
//!
//! * `Table`: the shared state container — seat states, per-seat statistics,
//!   and the arbitration lock that serializes every state transition
//! * `Philosopher`: the lifecycle loop driven by each philosopher thread
//! * `GrantSignal`: the per-seat wake signal a hungry philosopher blocks on
//!   until the arbiter hands it both forks
//! * `SimulationConfig`: validated runtime configuration
//!
//! ## Arbitration
//!
//! All seat-state reads and writes go through a single mutex. A hungry
//! philosopher is granted its forks only when neither neighbor is eating, and
//! every fork release re-evaluates exactly the two neighbors it could have
//! unblocked. Starvation avoidance is best effort: the classic protocol can
//! in principle keep one seat waiting while its two neighbors alternate.

pub mod config;
pub mod errors;
pub mod logging;
pub mod philosopher;
pub mod ring;
pub mod signal;
pub mod state;
pub mod summary;
pub mod table;

pub use config::{DurationRange, LoggingConfig, SimulationConfig, MIN_PHILOSOPHERS};
pub use errors::{SimulationError, SimulationResult};
pub use philosopher::{DurationSampler, FixedSampler, Philosopher, UniformSampler};
pub use ring::Ring;
pub use signal::GrantSignal;
pub use state::{PhilosopherState, SeatSnapshot, SeatStats};
pub use summary::{RunSummary, SeatSummary};
pub use table::Table;

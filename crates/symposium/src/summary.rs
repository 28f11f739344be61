use serde::Serialize;
use std::time::Duration;

use crate::state::PhilosopherState;
use crate::table::Table;

/// Final per-run report, printed as JSON on clean shutdown when requested.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub philosophers: usize,
    #[serde(with = "duration_ms_serde")]
    pub uptime: Duration,
    pub seats: Vec<SeatSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatSummary {
    pub id: usize,
    pub state: PhilosopherState,
    pub think_count: u64,
    pub eat_count: u64,
}

impl RunSummary {
    pub fn collect(table: &Table, uptime: Duration) -> Self {
        let seats = table
            .snapshot()
            .into_iter()
            .map(|seat| SeatSummary {
                id: seat.id,
                state: seat.state,
                think_count: seat.think_count,
                eat_count: seat.eat_count,
            })
            .collect();
        Self {
            philosophers: table.seats(),
            uptime,
            seats,
        }
    }
}

mod duration_ms_serde {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}

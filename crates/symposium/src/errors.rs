use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the symposium engine.
///
/// Every variant is a configuration or startup failure. The running protocol
/// has no recoverable error path: once the table is built, transitions either
/// happen or the philosopher is blocked waiting for them.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("at least {minimum} philosophers are required, got {count}")]
    NotEnoughPhilosophers { count: usize, minimum: usize },

    #[error("invalid {field} range: min {min_ms}ms exceeds max {max_ms}ms")]
    InvalidDurationRange {
        field: &'static str,
        min_ms: u64,
        max_ms: u64,
    },

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SimulationError {
    pub fn not_enough_philosophers(count: usize, minimum: usize) -> Self {
        Self::NotEnoughPhilosophers { count, minimum }
    }

    pub fn invalid_duration_range(field: &'static str, min_ms: u64, max_ms: u64) -> Self {
        Self::InvalidDurationRange {
            field,
            min_ms,
            max_ms,
        }
    }

    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for engine operations.
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = SimulationError::not_enough_philosophers(2, 5);
        assert_eq!(
            error.to_string(),
            "at least 5 philosophers are required, got 2"
        );

        let error = SimulationError::invalid_duration_range("think", 900, 400);
        assert!(error.to_string().contains("think"));
        assert!(error.to_string().contains("900"));
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{SimulationError, SimulationResult};
use crate::philosopher::UniformSampler;

/// Product-level minimum seat count, enforced before any thread starts.
/// The engine itself only needs three seats for distinct neighbors; below
/// five the table is too degenerate to be an interesting simulation.
pub const MIN_PHILOSOPHERS: usize = 5;

/// Runtime configuration, loadable from a TOML file with CLI overrides on
/// top. Defaults reproduce the classic timing: think and eat periods sampled
/// uniformly from 5 to 12 seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub philosophers: usize,
    pub think: DurationRange,
    pub eat: DurationRange,
    pub render_interval_ms: u64,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            philosophers: MIN_PHILOSOPHERS,
            think: DurationRange {
                min_ms: 5000,
                max_ms: 12000,
            },
            eat: DurationRange {
                min_ms: 5000,
                max_ms: 12000,
            },
            render_interval_ms: 250,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl DurationRange {
    fn validate(&self, field: &'static str) -> SimulationResult<()> {
        if self.min_ms > self.max_ms {
            return Err(SimulationError::invalid_duration_range(
                field,
                self.min_ms,
                self.max_ms,
            ));
        }
        Ok(())
    }

    pub fn sampler(&self) -> UniformSampler {
        UniformSampler::new(self.min_ms, self.max_ms)
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> SimulationResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| SimulationError::config_read(path, source))?;
        toml::from_str(&contents).map_err(|source| SimulationError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject configurations that must not reach the table. Called once,
    /// synchronously, before any philosopher thread is spawned.
    pub fn validate(&self) -> SimulationResult<()> {
        if self.philosophers < MIN_PHILOSOPHERS {
            return Err(SimulationError::not_enough_philosophers(
                self.philosophers,
                MIN_PHILOSOPHERS,
            ));
        }
        self.think.validate("think")?;
        self.eat.validate("eat")?;
        Ok(())
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_too_few_philosophers_is_rejected() {
        let config = SimulationConfig {
            philosophers: 4,
            ..SimulationConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert!(matches!(
            error,
            SimulationError::NotEnoughPhilosophers {
                count: 4,
                minimum: MIN_PHILOSOPHERS
            }
        ));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut config = SimulationConfig::default();
        config.eat = DurationRange {
            min_ms: 800,
            max_ms: 200,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "philosophers = 7\nrender_interval_ms = 100\n\n\
             [think]\nmin_ms = 10\nmax_ms = 20\n\n\
             [eat]\nmin_ms = 30\nmax_ms = 40\n\n\
             [logging]\nlevel = \"debug\"\n"
        )
        .unwrap();

        let config = SimulationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.philosophers, 7);
        assert_eq!(config.render_interval(), Duration::from_millis(100));
        assert_eq!(config.think, DurationRange { min_ms: 10, max_ms: 20 });
        assert_eq!(config.eat, DurationRange { min_ms: 30, max_ms: 40 });
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let error = SimulationConfig::from_file("/nonexistent/symposium.toml").unwrap_err();
        assert!(matches!(error, SimulationError::ConfigRead { .. }));
    }
}

pub mod tui;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use symposium::{DurationSampler, Philosopher, RunSummary, SimulationConfig, Table};

/// Symposium - N philosophers around a table, contending for shared forks
/// without deadlock, rendered live in the terminal.
#[derive(Debug, Parser)]
#[command(name = "symposium")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of philosophers at the table
    pub philosophers: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Shortest think period in milliseconds
    #[arg(long)]
    pub think_min_ms: Option<u64>,

    /// Longest think period in milliseconds
    #[arg(long)]
    pub think_max_ms: Option<u64>,

    /// Shortest eat period in milliseconds
    #[arg(long)]
    pub eat_min_ms: Option<u64>,

    /// Longest eat period in milliseconds
    #[arg(long)]
    pub eat_max_ms: Option<u64>,

    /// Display refresh interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Turn on verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JSON run summary on exit
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Layer command-line values over whatever the config file provided.
    pub fn apply_overrides(&self, config: &mut SimulationConfig) {
        if let Some(count) = self.philosophers {
            config.philosophers = count;
        }
        if let Some(ms) = self.think_min_ms {
            config.think.min_ms = ms;
        }
        if let Some(ms) = self.think_max_ms {
            config.think.max_ms = ms;
        }
        if let Some(ms) = self.eat_min_ms {
            config.eat.min_ms = ms;
        }
        if let Some(ms) = self.eat_max_ms {
            config.eat.max_ms = ms;
        }
        if let Some(ms) = self.interval_ms {
            config.render_interval_ms = ms;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
    }
}

/// Seat the philosophers, run the renderer until quit or shutdown, then
/// join every thread before returning.
pub fn run(config: SimulationConfig, json_summary: bool) -> Result<()> {
    let table = Arc::new(Table::new(config.philosophers)?);

    // ctrl-c outside raw mode and SIGTERM both route to the same shutdown
    // path the TUI quit key uses.
    {
        let table = Arc::clone(&table);
        ctrlc::set_handler(move || table.request_shutdown())?;
    }

    let think: Arc<dyn DurationSampler> = Arc::new(config.think.sampler());
    let eat: Arc<dyn DurationSampler> = Arc::new(config.eat.sampler());

    let started = Instant::now();
    let mut handles = Vec::with_capacity(config.philosophers);
    for id in 0..config.philosophers {
        let philosopher =
            Philosopher::new(id, Arc::clone(&table), Arc::clone(&think), Arc::clone(&eat));
        handles.push(philosopher.spawn()?);
    }
    info!("seated {} philosophers", config.philosophers);

    let tui_result = tui::run_tui(Arc::clone(&table), config.render_interval());

    // Whether the renderer quit or errored, take the table down and wait for
    // every philosopher before touching stdout again.
    table.request_shutdown();
    for handle in handles {
        if handle.join().is_err() {
            warn!("a philosopher thread panicked");
        }
    }
    tui_result.map_err(|e| anyhow::anyhow!("terminal error: {}", e))?;

    if json_summary {
        let summary = RunSummary::collect(&table, started.elapsed());
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

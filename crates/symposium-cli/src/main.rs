use anyhow::Result;
use clap::Parser;

use symposium::{logging, SimulationConfig};
use symposium_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    // The TUI owns the terminal, so logs go to a file when one is set.
    if let Some(log_path) = &config.logging.file {
        let log_level = config
            .logging
            .level
            .parse()
            .unwrap_or(tracing::Level::WARN);
        logging::setup_global_logging(log_path, &log_level, false)?;
    }

    symposium_cli::run(config, cli.json)
}

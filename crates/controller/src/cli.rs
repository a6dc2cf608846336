//! Command-line surface for the Lightpath controller.

use anyhow::Context;
use clap::{Parser, Subcommand};

use lp_domain::config::Config;

/// Lightpath — cron-style device-control scheduler.
#[derive(Debug, Parser)]
#[command(name = "lightpath", version, about)]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(long, short, global = true, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the scheduler loop (default when no subcommand is given).
    Run,
    /// List the persisted tasks with their indices.
    List,
    /// Add a task to the crontab.
    Add {
        /// 5-field cron schedule, e.g. "0 2 * * *".
        schedule: String,
        /// Command payload handed to the dispatcher when due.
        payload: String,
    },
    /// Remove the task at the given index (see `list`).
    Remove { index: usize },
    /// Remove every task.
    Clear,
    /// Validate a schedule expression without storing it.
    Check { schedule: String },
}

/// Load the config file, falling back to defaults when it doesn't exist.
pub fn load_config(path: &str) -> anyhow::Result<Config> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let config: Config = toml::from_str(&text)
                .with_context(|| format!("parsing config file {path}"))?;
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path, "config file not found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e).with_context(|| format!("reading config file {path}")),
    }
}

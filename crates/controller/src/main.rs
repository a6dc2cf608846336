mod cli;
mod daemon;
mod dispatch;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lp_scheduler::{CrontabStore, FileStore, ScheduledTask, TaskRegistry};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Default to the scheduler loop when no subcommand is given.
        None | Some(Command::Run) => {
            init_tracing();
            let config = cli::load_config(&cli.config)?;
            daemon::run(config).await
        }
        Some(Command::List) => {
            init_cli_tracing();
            let (registry, _) = open_crontab(&cli.config)?;
            if registry.is_empty() {
                println!("No tasks scheduled.");
            }
            for (i, task) in registry.tasks().iter().enumerate() {
                println!(
                    "Task #{i}, schedule: {}, payload: {}",
                    task.schedule(),
                    task.payload()
                );
            }
            Ok(())
        }
        Some(Command::Add { schedule, payload }) => {
            init_cli_tracing();
            let (mut registry, store) = open_crontab(&cli.config)?;
            if registry.add_task(&schedule, &payload)? {
                store.write_all(&registry.serialize())?;
                println!("Added task #{}.", registry.len() - 1);
            } else {
                println!("Task not added: payload must not be empty.");
            }
            Ok(())
        }
        Some(Command::Remove { index }) => {
            init_cli_tracing();
            let (mut registry, store) = open_crontab(&cli.config)?;
            let before = registry.len();
            registry.remove_task(index);
            if registry.len() < before {
                store.write_all(&registry.serialize())?;
                println!("Removed task #{index}.");
            } else {
                println!("No task at index {index}.");
            }
            Ok(())
        }
        Some(Command::Clear) => {
            init_cli_tracing();
            let (mut registry, store) = open_crontab(&cli.config)?;
            registry.clear();
            store.write_all(&registry.serialize())?;
            println!("All tasks removed.");
            Ok(())
        }
        Some(Command::Check { schedule }) => {
            init_cli_tracing();
            match ScheduledTask::new(&schedule, "probe") {
                Ok(_) => {
                    println!("OK: {schedule}");
                    Ok(())
                }
                Err(e) => {
                    eprintln!("invalid schedule: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Load the configured crontab file into a fresh registry for the one-shot
/// commands. A missing file just yields an empty registry.
fn open_crontab(config_path: &str) -> anyhow::Result<(TaskRegistry, FileStore)> {
    let config = cli::load_config(config_path)?;
    let store = FileStore::new(&config.scheduler.crontab_path);
    let mut registry = TaskRegistry::new();
    daemon::restore(&mut registry, &store);
    Ok((registry, store))
}

/// Tracing for the long-running scheduler loop.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lp_scheduler=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Compact stderr-only tracing for CLI one-shot commands, so diagnostic
/// output does not pollute stdout.
fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

//! The scheduler daemon: restore the crontab, tick once per interval, and
//! flush on shutdown.

use std::time::Duration;

use lp_domain::config::Config;
use lp_scheduler::{CrontabStore, FileStore, SystemTimeSource, TaskRegistry, TimeSource};

use crate::dispatch::CommandDispatcher;

pub async fn run(config: Config) -> anyhow::Result<()> {
    tracing::info!("Lightpath scheduler starting");

    let store = FileStore::new(&config.scheduler.crontab_path);
    let mut registry = TaskRegistry::new();
    restore(&mut registry, &store);

    let dispatcher = CommandDispatcher::new(config.dispatch.clone());
    let clock = SystemTimeSource;

    let period = Duration::from_secs(config.scheduler.tick_interval_secs.max(1));
    let mut interval = tokio::time::interval(period);
    let mut ticks: u32 = 0;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                ticks = ticks.wrapping_add(1);
                if ticks % 10 == 0 {
                    tracing::debug!(ticks, "scheduler heartbeat");
                }
                registry.tick(&clock.now(), &dispatcher);
            }
            _ = &mut ctrl_c => {
                tracing::info!("received SIGINT, shutting down");
                break;
            }
        }
    }

    if let Err(e) = store.write_all(&registry.serialize()) {
        tracing::warn!(error = %e, "crontab flush on shutdown failed");
    }
    tracing::info!("shutdown complete");
    Ok(())
}

/// Restore the crontab from the store. A missing or unreadable store is
/// logged and leaves the registry in its current in-memory state.
pub fn restore(registry: &mut TaskRegistry, store: &dyn CrontabStore) {
    match store.read_all() {
        Ok(text) => {
            registry.deserialize(&text);
            for (i, task) in registry.tasks().iter().enumerate() {
                tracing::info!(
                    index = i,
                    schedule = %task.schedule(),
                    payload = %task.payload(),
                    "restored task"
                );
            }
        }
        Err(e) => tracing::warn!(error = %e, "crontab restore skipped"),
    }
}

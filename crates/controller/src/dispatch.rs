//! Command dispatcher — the executor handed to the registry on each tick.
//!
//! Payloads are opaque to the scheduler; here they are expected to be the
//! device command envelope `{"command": "...", ...}`. Anything else is
//! reported as unrecognized and counted as a failed execution.

use lp_domain::config::DispatchConfig;
use lp_scheduler::Executor;

pub struct CommandDispatcher {
    config: DispatchConfig,
}

impl CommandDispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    fn command_name(payload: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(payload).ok()?;
        Some(value.get("command")?.as_str()?.to_string())
    }
}

impl Executor for CommandDispatcher {
    fn execute(&self, payload: &str) -> bool {
        let Some(command) = Self::command_name(payload) else {
            tracing::warn!(payload, "unrecognized command payload");
            return false;
        };
        if self.config.dry_run {
            tracing::info!(command = %command, payload, "dry-run: command not executed");
            return true;
        }
        tracing::info!(command = %command, payload, "dispatching command");
        true
    }
}

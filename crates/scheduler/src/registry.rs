//! Task registry — ordered task collection, tick driver, and the flat-text
//! persistence format.
//!
//! Two delimiter conventions exist and must not be conflated:
//! - **Persisted format** (`serialize`/`deserialize`): one newline-terminated
//!   record per task, `<schedule> |<payload>`, split at the *last* pipe.
//! - **Bulk load format** (`load_tasks`): a single string of pipe-separated
//!   segments used for programmatic seeding; each segment is a full schedule
//!   string, taking its payload inline after the fifth field or, failing
//!   that, from the following segment.

use lp_domain::Result;

use crate::clock::TimeSnapshot;
use crate::executor::Executor;
use crate::task::ScheduledTask;

/// Owning, ordered collection of scheduled tasks. Insertion order is
/// display, persistence, and firing order. Duplicate schedules are
/// permitted; indices are stable only within a session.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: Vec<ScheduledTask>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only view of the tasks in registration order.
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    /// Append a task. An empty payload is a deliberate no-op (a task
    /// without a command is never stored); returns whether a task was
    /// added. A malformed schedule is a recoverable error for the caller.
    pub fn add_task(&mut self, schedule: &str, payload: &str) -> Result<bool> {
        if payload.is_empty() {
            tracing::debug!(schedule, "ignoring task without payload");
            return Ok(false);
        }
        let task = ScheduledTask::new(schedule, payload)?;
        self.tasks.push(task);
        Ok(true)
    }

    /// Remove the task at `index`. Out-of-range indices are a silent no-op.
    pub fn remove_task(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
        }
    }

    /// Remove every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Seed tasks from the pipe-delimited bulk format. Appends to the
    /// current collection; malformed segments are logged and skipped.
    pub fn load_tasks(&mut self, bulk: &str) {
        let mut segments = bulk.split('|');
        while let Some(segment) = segments.next() {
            if segment.trim().is_empty() {
                continue;
            }
            match ScheduledTask::new(segment, "") {
                Ok(task) if !task.payload().is_empty() => self.tasks.push(task),
                Ok(_) => {
                    // No inline payload — the next segment carries it.
                    let payload = segments.next().unwrap_or("").trim();
                    match self.add_task(segment, payload) {
                        Ok(true) => {}
                        Ok(false) => {
                            tracing::warn!(segment, "bulk segment has no payload, skipped")
                        }
                        Err(e) => {
                            tracing::warn!(segment, error = %e, "skipping malformed bulk segment")
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(segment, error = %e, "skipping malformed bulk segment")
                }
            }
        }
    }

    /// One evaluation pass. Due tasks' payloads are handed to `executor` in
    /// registration order; the result is logged but a failure never blocks
    /// the tasks behind it. Returns how many tasks fired.
    pub fn tick(&mut self, now: &TimeSnapshot, executor: &dyn Executor) -> usize {
        let mut fired = 0;
        for task in &mut self.tasks {
            if task.is_due(now) {
                let ok = executor.execute(task.payload());
                tracing::info!(
                    schedule = %task.schedule(),
                    payload = %task.payload(),
                    ok,
                    "task fired"
                );
                fired += 1;
            }
        }
        fired
    }

    /// The persisted form: one `<schedule> |<payload>` line per task.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for task in &self.tasks {
            out.push_str(task.schedule());
            out.push_str(" |");
            out.push_str(task.payload());
            out.push('\n');
        }
        out
    }

    /// Replace the collection with the tasks parsed from persisted text.
    /// Each line splits at its last pipe into schedule and payload (the
    /// payload may itself contain pipes only before that point). Bad lines
    /// are logged and skipped; they never abort the load.
    pub fn deserialize(&mut self, text: &str) {
        self.tasks.clear();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let Some(divider) = line.rfind('|') else {
                tracing::warn!(line, "skipping crontab line without payload divider");
                continue;
            };
            let schedule = line[..divider].trim_end();
            let payload = &line[divider + 1..];
            match self.add_task(schedule, payload) {
                Ok(true) => {}
                Ok(false) => tracing::warn!(line, "skipping crontab line with empty payload"),
                Err(e) => tracing::warn!(line, error = %e, "skipping malformed crontab line"),
            }
        }
        tracing::info!(count = self.tasks.len(), "crontab loaded");
    }
}

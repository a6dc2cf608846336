//! Command executor capability.

/// Receives a due task's payload. Returns whether execution succeeded;
/// the result is logged but never gates evaluation of later tasks.
///
/// Executors are invoked synchronously from within a tick and must return
/// promptly — a slow executor stalls every task behind it.
pub trait Executor {
    fn execute(&self, payload: &str) -> bool;
}

impl<F> Executor for F
where
    F: Fn(&str) -> bool,
{
    fn execute(&self, payload: &str) -> bool {
        self(payload)
    }
}

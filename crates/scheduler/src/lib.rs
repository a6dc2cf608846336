//! Cron-style task scheduling for the Lightpath controller.
//!
//! A crontab is a set of 5-field schedules (minute hour dom month dow),
//! each paired with an opaque command payload. The registry is evaluated
//! once per tick against a wall-clock snapshot; due payloads are handed to
//! an injected executor. The whole collection round-trips through a flat
//! text format so it survives restarts.
//!
//! Split into submodules:
//! - [`cron`] — single-field parsing and matching
//! - [`task`] — one schedule/payload pair with fire dedup
//! - [`registry`] — ordered task collection, tick driver, persistence format
//! - [`clock`] — time snapshots and the injectable time source
//! - [`executor`] — command executor capability
//! - [`store`] — durable crontab blob storage

pub mod clock;
pub mod cron;
pub mod executor;
pub mod registry;
pub mod store;
pub mod task;

pub use clock::{SystemTimeSource, TimeSnapshot, TimeSource};
pub use cron::CronField;
pub use executor::Executor;
pub use registry::TaskRegistry;
pub use store::{CrontabStore, FileStore};
pub use task::ScheduledTask;

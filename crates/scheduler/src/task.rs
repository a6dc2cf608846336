//! A single scheduled task: five parsed cron fields, an opaque command
//! payload, and the fire-dedup state machine.

use lp_domain::Result;

use crate::clock::TimeSnapshot;
use crate::cron::{CronField, FIELD_SPECS};

/// One-letter tags used to build the execution identity key, in field order.
const KEY_TAGS: [&str; 5] = ["M", "H", "D", "Mo", "W"];

/// One schedule/payload pair owned by the registry.
///
/// The schedule text is split on single spaces into up to five tokens in
/// fixed order (minute, hour, day-of-month, month, day-of-week); missing
/// trailing fields default to wildcard. Any malformed token rejects the
/// whole task.
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    schedule: String,
    payload: String,
    fields: [CronField; 5],
    last_fired_key: String,
}

impl ScheduledTask {
    /// Parse `schedule` and build a task. When `payload` is empty, any text
    /// after the fifth field is taken as the inline payload — this is what
    /// the bulk-load format relies on.
    pub fn new(schedule: &str, payload: &str) -> Result<Self> {
        let mut fields: [CronField; 5] = std::array::from_fn(|_| CronField::Any);
        let mut tokens = schedule.splitn(6, ' ');
        for (i, (name, min, max)) in FIELD_SPECS.into_iter().enumerate() {
            match tokens.next() {
                Some(token) => fields[i] = CronField::parse(token, name, min, max)?,
                None => break, // missing trailing fields stay wildcards
            }
        }
        let remainder = tokens.next().unwrap_or("");
        let schedule = if remainder.is_empty() {
            schedule.trim_end()
        } else {
            schedule[..schedule.len() - remainder.len() - 1].trim_end()
        };
        let payload = if payload.is_empty() {
            remainder.trim()
        } else {
            payload
        };

        Ok(Self {
            schedule: schedule.to_string(),
            payload: payload.to_string(),
            fields,
            last_fired_key: String::new(),
        })
    }

    /// The original schedule text (without any inline payload).
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// The opaque command payload, commonly a JSON document.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Whether the task is due at `now`, and if so, mark it fired.
    ///
    /// All five fields must match (day-of-month and day-of-week are ANDed —
    /// a deliberate divergence from POSIX cron's OR-when-both-restricted
    /// rule). A matching task fires only when its execution identity key
    /// differs from the one remembered from the previous firing; the
    /// remembered key is updated exactly when this returns `true`, so a
    /// task evaluated many times within the same matching minute fires
    /// once.
    pub fn is_due(&mut self, now: &TimeSnapshot) -> bool {
        let matched = self.fields[0].matches(now.minute)
            && self.fields[1].matches(now.hour)
            && self.fields[2].matches(now.day_of_month)
            && self.fields[3].matches(now.month)
            && self.fields[4].matches(now.weekday);
        if !matched {
            return false;
        }

        let key = self.execution_key(now);
        if key == self.last_fired_key {
            return false;
        }
        self.last_fired_key = key;
        true
    }

    /// The execution identity key for `now`: tag + snapshot value for each
    /// non-wildcard field, in field order. Only restrictive fields
    /// contribute; if every field is a wildcard, the minute value alone is
    /// used so the task still fires at most once per distinct minute.
    fn execution_key(&self, now: &TimeSnapshot) -> String {
        use std::fmt::Write;

        let values = [
            now.minute,
            now.hour,
            now.day_of_month,
            now.month,
            now.weekday,
        ];
        let mut key = String::new();
        for (i, field) in self.fields.iter().enumerate() {
            if !field.is_wildcard() {
                let _ = write!(key, "{}{}", KEY_TAGS[i], values[i]);
            }
        }
        if key.is_empty() {
            let _ = write!(key, "M{}", now.minute);
        }
        key
    }

    /// The key recorded by the last firing, if any.
    pub fn last_fired_key(&self) -> Option<&str> {
        (!self.last_fired_key.is_empty()).then_some(self.last_fired_key.as_str())
    }

    /// Forget the last firing, re-arming the task for its current key.
    pub fn reset_fired_state(&mut self) {
        self.last_fired_key.clear();
    }
}

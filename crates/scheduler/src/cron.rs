//! Cron field parsing and matching (5-field: min hour dom month dow).
//!
//! Only two field forms are supported: `*` and a comma-separated list of
//! base-10 integers. Range (`1-5`) and step (`*/15`) syntax are rejected
//! with an explicit error rather than silently mis-parsed.

use lp_domain::{Error, Result};

/// Name and allowed numeric range for each of the five field positions.
pub const FIELD_SPECS: [(&str, u32, u32); 5] = [
    ("minute", 0, 59),
    ("hour", 0, 23),
    ("day-of-month", 1, 31),
    ("month", 1, 12),
    ("day-of-week", 0, 6),
];

/// One parsed schedule field: a wildcard or an explicit set of accepted
/// values. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronField {
    /// `*` — accepts any candidate.
    Any,
    /// Comma-separated list of accepted values. Never empty.
    Values(Vec<u32>),
}

impl CronField {
    /// Parse one field. `name`, `min`, and `max` identify the field
    /// position and its allowed range (see [`FIELD_SPECS`]).
    pub fn parse(text: &str, name: &str, min: u32, max: u32) -> Result<Self> {
        if text == "*" {
            return Ok(Self::Any);
        }
        let mut values = Vec::new();
        for part in text.split(',') {
            if let Some(step) = part.strip_prefix("*/") {
                return Err(Error::Schedule(format!(
                    "{name}: step syntax '*/{step}' is not supported"
                )));
            }
            let n: u32 = match part.parse() {
                Ok(n) => n,
                Err(_) if is_range_token(part) => {
                    return Err(Error::Schedule(format!(
                        "{name}: range syntax '{part}' is not supported"
                    )));
                }
                Err(_) => {
                    return Err(Error::Schedule(format!(
                        "{name}: invalid value '{part}'"
                    )));
                }
            };
            if n < min || n > max {
                return Err(Error::Schedule(format!(
                    "{name}: value {n} out of range {min}..={max}"
                )));
            }
            values.push(n);
        }
        Ok(Self::Values(values))
    }

    /// True if `candidate` is accepted by this field.
    pub fn matches(&self, candidate: u32) -> bool {
        match self {
            Self::Any => true,
            Self::Values(values) => values.contains(&candidate),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }
}

fn is_range_token(part: &str) -> bool {
    part.split_once('-')
        .is_some_and(|(a, b)| a.parse::<u32>().is_ok() && b.parse::<u32>().is_ok())
}

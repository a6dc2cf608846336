//! Shared types for the Lightpath controller: error taxonomy and
//! configuration.

pub mod config;
pub mod error;

pub use error::{Error, Result};

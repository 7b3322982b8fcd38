//! Configuration errors
//!
//! Gameplay itself never fails: fouls and illegal moves are phase
//! transitions. Only loading a table configuration can go wrong.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::TableConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("failed to parse table config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot work with
    #[error("invalid table config field `{field}`: {reason}")]
    Invalid {
        /// Offending field name
        field: &'static str,
        /// Human-readable explanation
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

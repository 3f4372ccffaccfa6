//! Error types for the sandbox engine.
//!
//! Gameplay operations never fail (invalid editor operations are no-ops and
//! frame times are clamped). Only the ambient edges return errors: loading
//! configuration and parsing object type names from text.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a sandbox configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// An object type name that does not match any editor variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown object type: {0:?}")]
pub struct UnknownObjectType(pub String);

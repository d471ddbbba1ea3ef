//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// A manifest the caller needs has no configured location.
    #[error("manifest '{manifest}' is not configured (set manifests.{manifest} or manifests.dir)")]
    NotConfigured { manifest: &'static str },

    /// A configuration field has an invalid value.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}

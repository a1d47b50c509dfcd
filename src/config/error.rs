//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading an efficiency model
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for an efficiency model
    #[error("Failed to parse efficiency model: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the derating rule cannot use
    #[error("Invalid efficiency model field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

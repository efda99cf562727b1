//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating `lumi.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid lumi.toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

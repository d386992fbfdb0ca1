use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or validating a [`crate::StripConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for [`crate::StripConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Offending key.
        field: &'static str,
        /// What the value must satisfy.
        reason: String,
    },
}

/// Result alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

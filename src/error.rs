//! Error types for build-option and version-stamping operations.
//!
//! Lookups that can simply miss (platform names, package origins) return
//! `Option` and never produce these errors. Errors here come from the
//! configuration, manifest and command line layers.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scipio operations
pub type Result<T> = std::result::Result<T, ScipioError>;

/// Main error type for all scipio operations
#[derive(Error, Debug)]
pub enum ScipioError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

/// Errors in a `scipio.toml` or in the options it describes
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// The path that was not found
        path: PathBuf,
    },

    /// No platform left to build for
    #[error("no supported platform to build for")]
    NoPlatforms,

    /// Every platform name was unrecognized
    #[error("unknown platforms: {}", names.join(", "))]
    UnknownPlatforms {
        /// Names that did not match a platform
        names: Vec<String>,
    },
}

impl ScipioError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ScipioError::Config(ConfigError::NoPlatforms)
            | ScipioError::Config(ConfigError::UnknownPlatforms { .. }) => vec![
                "Valid platform names: macos, ios, maccatalyst, tvos, watchos, visionos"
                    .to_string(),
            ],
            ScipioError::Config(ConfigError::NotFound { .. }) => {
                vec!["Pass --config with the path to scipio.toml".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

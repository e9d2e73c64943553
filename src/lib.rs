//! Build-options core for prebuilding Swift packages into XCFrameworks
//!
//! This library provides:
//! - The SDK registry mapping platforms to toolchain settings and
//!   dependency filter tags
//! - Canonical, hashable build options used as build descriptors and cache keys
//! - Extra flag composition for package defaults and per-target overrides
//! - Version stamping of the tool from its package origin
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod version;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ScipioError};

//! Build option types for producing multi-platform frameworks.
//!
//! This module provides the platform registry, the build mode enums, the
//! extra flag algebra, and the canonical [`BuildOptions`] snapshot used as
//! a build descriptor and cache key.

mod builder;
mod core;
mod flags;
pub mod manifest;
mod matrix;
mod mode;
mod sdk;

// Re-export all public types
pub use builder::BuildOptionsBuilder;
pub use self::core::BuildOptions;
pub use flags::{ExtraBuildParameters, ExtraFlags};
pub use matrix::{BuildOptionsMatrix, TargetBuildOptions};
pub use mode::{BuildConfiguration, FrameworkType};
pub use sdk::{ResolvedPlatforms, Sdk, resolve_platforms};

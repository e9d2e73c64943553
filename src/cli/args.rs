//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! of argument combinations that clap cannot express.

use crate::options::{BuildConfiguration, FrameworkType};
use crate::version::PackageOrigin;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Build options and version stamping for prebuilt XCFrameworks
#[derive(Parser, Debug)]
#[command(
    name = "scipio",
    version,
    about = "Build options and version stamping for prebuilt XCFrameworks",
    long_about = "Composes the canonical build options used to prebuild Swift packages into
multi-platform XCFrameworks, and stamps the tool version into generated sources.

Usage:
  scipio platforms
  scipio options --platform ios --platform macos --simulators
  scipio options --config scipio.toml --target MyTarget --manifest .build/MyTarget.json
  scipio options --config scipio.toml --library-evolution=false
  scipio generate-version --origin repository:v1.2.3 --output-dir .build/generated"
)]
pub struct Args {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported SDKs and their toolchain identifiers
    Platforms,

    /// Compose build options and print them with their cache key
    Options(OptionsArgs),

    /// Write the generated version source for a package origin
    GenerateVersion(GenerateVersionArgs),
}

/// Arguments of `scipio options`
#[derive(ClapArgs, Debug)]
pub struct OptionsArgs {
    /// Path to scipio.toml with package defaults and target overrides
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target whose overrides to apply (requires --config)
    #[arg(short, long, value_name = "NAME")]
    pub target: Option<String>,

    /// Platform to build for: macos, ios, maccatalyst, tvos, watchos, visionos
    #[arg(short, long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<String>,

    /// Also build the simulator SDK of each platform
    #[arg(long)]
    pub simulators: bool,

    /// Build configuration: debug or release
    #[arg(long, value_name = "CONFIGURATION")]
    pub configuration: Option<BuildConfiguration>,

    /// Framework linkage: dynamic or static
    #[arg(long, value_name = "TYPE")]
    pub framework_type: Option<FrameworkType>,

    /// Embed debug symbols into the frameworks (`=false` overrides the config)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub embed_debug_symbols: Option<bool>,

    /// Enable library evolution (`=false` overrides the config)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub library_evolution: Option<bool>,

    /// Build-options manifest to compare against and update
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
}

/// Arguments of `scipio generate-version`
#[derive(ClapArgs, Debug)]
pub struct GenerateVersionArgs {
    /// Package origin: root, local[:PATH], repository:[URL@]REVISION, registry:[ID@]VERSION
    #[arg(long, value_name = "ORIGIN")]
    pub origin: PackageOrigin,

    /// Directory receiving the generated source
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Command::Options(options) = &self.command {
            if options.target.is_some() && options.config.is_none() {
                return Err("--target requires --config".to_string());
            }
            if options.config.is_none() && options.platforms.is_empty() {
                return Err("Pass --platform at least once, or --config".to_string());
            }
        }

        Ok(())
    }
}

//! `scipio options`
//!
//! Composes build options from `scipio.toml` and/or command line flags,
//! prints them with their cache key, and optionally records a manifest.

use crate::cli::OptionsArgs;
use crate::config::{ScipioConfig, sdks_from_names};
use crate::error::Result;
use crate::options::manifest::{is_manifest_current, save_manifest};
use crate::options::{BuildOptions, BuildOptionsBuilder, TargetBuildOptions};

/// Output of `scipio options`
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct OptionsReport<'a> {
    options: &'a BuildOptions,
    cache_key: String,
    manifest_current: Option<bool>,
}

/// Command line flags as a final override layer.
fn command_line_overrides(args: &OptionsArgs, support_simulators: bool) -> Result<TargetBuildOptions> {
    let sdks = if args.platforms.is_empty() {
        None
    } else {
        Some(sdks_from_names(&args.platforms, support_simulators)?)
    };

    Ok(TargetBuildOptions {
        configuration: args.configuration,
        embed_debug_symbols: args.embed_debug_symbols,
        framework_type: args.framework_type,
        sdks,
        extra_flags: None,
        extra_build_parameters: None,
        library_evolution: args.library_evolution,
    })
}

/// Resolves the effective options for the arguments.
pub fn resolve(args: &OptionsArgs) -> Result<BuildOptions> {
    match &args.config {
        Some(path) => {
            let config = ScipioConfig::load(path)?;
            let options = match &args.target {
                Some(target) => config.options_for_target(target),
                None => config.base_options().clone(),
            };
            let support_simulators = args.simulators || config.support_simulators();
            Ok(options.overridden_by(&command_line_overrides(args, support_simulators)?))
        }
        None => {
            let overrides = command_line_overrides(args, args.simulators)?;
            let mut builder = BuildOptionsBuilder::new()
                .embed_debug_symbols(args.embed_debug_symbols.unwrap_or(false))
                .library_evolution(args.library_evolution.unwrap_or(false))
                .sdks(overrides.sdks.unwrap_or_default());
            if let Some(configuration) = args.configuration {
                builder = builder.build_configuration(configuration);
            }
            if let Some(framework_type) = args.framework_type {
                builder = builder.framework_type(framework_type);
            }
            builder.build()
        }
    }
}

/// Runs the command.
pub fn execute(args: &OptionsArgs) -> Result<i32> {
    let options = resolve(args)?;
    let cache_key = options.cache_key()?;
    log::info!("Build options cache key: {}", cache_key);

    let manifest_current = match &args.manifest {
        Some(path) => {
            let current = is_manifest_current(path, &options);
            if current {
                log::info!("Manifest {} is up to date", path.display());
            } else {
                save_manifest(path, &options)?;
                log::info!("Updated manifest {}", path.display());
            }
            Some(current)
        }
        None => None,
    };

    let report = OptionsReport {
        options: &options,
        cache_key,
        manifest_current,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(0)
}

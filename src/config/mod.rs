//! Package build configuration from `scipio.toml`.
//!
//! The file holds the package-wide defaults under `[build]` and per-target
//! overrides under `[targets.<name>]`:
//!
//! ```toml
//! [build]
//! configuration = "release"
//! framework-type = "dynamic"
//! platforms = ["ios", "macos"]
//! support-simulators = true
//!
//! [build.extra-flags]
//! c-flags = ["-DSCIPIO"]
//!
//! [targets.MyTarget]
//! framework-type = "static"
//! extra-flags = { linker-flags = ["-lz"] }
//! ```

use crate::error::{ConfigError, Result};
use crate::options::{
    BuildConfiguration, BuildOptions, BuildOptionsMatrix, ExtraBuildParameters, ExtraFlags,
    FrameworkType, Sdk, TargetBuildOptions, resolve_platforms,
};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "scipio.toml";

/// `[build]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
struct BuildSection {
    #[serde(default)]
    configuration: Option<BuildConfiguration>,
    #[serde(default)]
    embed_debug_symbols: Option<bool>,
    #[serde(default)]
    framework_type: Option<FrameworkType>,
    #[serde(default)]
    platforms: Option<Vec<String>>,
    #[serde(default)]
    support_simulators: Option<bool>,
    #[serde(default)]
    library_evolution: Option<bool>,
    #[serde(default)]
    extra_flags: Option<ExtraFlags>,
    #[serde(default)]
    extra_build_parameters: Option<ExtraBuildParameters>,
}

/// `[targets.<name>]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TargetSection {
    #[serde(default)]
    platforms: Option<Vec<String>>,
    #[serde(flatten)]
    options: TargetBuildOptions,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigFile {
    #[serde(default)]
    build: BuildSection,
    #[serde(default)]
    targets: BTreeMap<String, TargetSection>,
}

/// Resolves platform names into SDKs, skipping unknown names.
///
/// # Errors
///
/// Fails only when nothing is left: [`ConfigError::UnknownPlatforms`] if
/// every name was unknown, [`ConfigError::NoPlatforms`] if there were no
/// names at all.
pub fn sdks_from_names(names: &[String], support_simulators: bool) -> Result<BTreeSet<Sdk>> {
    let resolved = resolve_platforms(names, support_simulators);

    if resolved.sdks.is_empty() {
        if resolved.unrecognized.is_empty() {
            return Err(ConfigError::NoPlatforms.into());
        }
        return Err(ConfigError::UnknownPlatforms {
            names: resolved.unrecognized,
        }
        .into());
    }

    Ok(resolved.sdks)
}

/// Build options for a package: defaults plus per-target overrides.
#[derive(Clone, Debug)]
pub struct ScipioConfig {
    base: BuildOptions,
    matrix: BuildOptionsMatrix,
    support_simulators: bool,
}

impl ScipioConfig {
    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        log::debug!("Loading build configuration from {}", path.display());
        Self::parse(&content)
    }

    /// Parses a configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        let build = file.build;

        let support_simulators = build.support_simulators.unwrap_or(false);
        let sdks = sdks_from_names(
            build.platforms.as_deref().unwrap_or_default(),
            support_simulators,
        )?;

        let base = BuildOptions::new(
            build.configuration.unwrap_or_default(),
            build.embed_debug_symbols.unwrap_or(false),
            build.framework_type.unwrap_or_default(),
            sdks,
            build.extra_flags,
            build.extra_build_parameters,
            build.library_evolution.unwrap_or(false),
        );

        let mut matrix = BuildOptionsMatrix::new();
        for (name, section) in file.targets {
            let mut options = section.options;
            if let Some(platforms) = section.platforms {
                options.sdks = Some(sdks_from_names(&platforms, support_simulators)?);
            }
            matrix.insert(name, options);
        }

        log::info!(
            "Loaded build configuration: {} SDK(s), {} target override(s)",
            base.sdks().len(),
            matrix.len()
        );

        Ok(Self {
            base,
            matrix,
            support_simulators,
        })
    }

    /// Package-wide options.
    pub fn base_options(&self) -> &BuildOptions {
        &self.base
    }

    /// Per-target overrides.
    pub fn matrix(&self) -> &BuildOptionsMatrix {
        &self.matrix
    }

    /// Whether platform names expand to their simulators.
    pub fn support_simulators(&self) -> bool {
        self.support_simulators
    }

    /// Effective options for a target.
    pub fn options_for_target(&self, target_name: &str) -> BuildOptions {
        self.base.for_target(&self.matrix, target_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScipioError;

    const CONFIG: &str = r#"
[build]
configuration = "debug"
platforms = ["macos", "ios", "android"]
support-simulators = true
library-evolution = true

[build.extra-flags]
c-flags = ["-DPACKAGE"]

[build.extra-build-parameters]
SWIFT_OPTIMIZATION_LEVEL = "-Osize"

[targets.Static]
framework-type = "static"
platforms = ["tvos"]
extra-flags = { c-flags = ["-DTARGET"], linker-flags = ["-lz"] }
"#;

    #[test]
    fn parses_defaults_and_targets() {
        let config = ScipioConfig::parse(CONFIG).unwrap();
        let base = config.base_options();

        assert_eq!(base.build_configuration(), BuildConfiguration::Debug);
        assert_eq!(base.framework_type(), FrameworkType::Dynamic);
        assert!(base.enable_library_evolution());
        assert_eq!(
            base.sdks().collect::<Vec<_>>(),
            vec![Sdk::Ios, Sdk::IosSimulator, Sdk::MacOs]
        );
        assert_eq!(
            base.extra_build_parameters()
                .and_then(|p| p.get("SWIFT_OPTIMIZATION_LEVEL"))
                .map(String::as_str),
            Some("-Osize")
        );

        let target = config.options_for_target("Static");
        assert_eq!(target.framework_type(), FrameworkType::Static);
        assert_eq!(
            target.sdks().collect::<Vec<_>>(),
            vec![Sdk::TvOs, Sdk::TvOsSimulator]
        );
        let flags = target.extra_flags().unwrap();
        assert_eq!(flags.c_flags(), ["-DPACKAGE", "-DTARGET"]);
        assert_eq!(flags.linker_flags(), ["-lz"]);

        assert_eq!(config.options_for_target("Other"), *base);
    }

    #[test]
    fn target_restating_defaults_keeps_cache_key() {
        let config = ScipioConfig::parse(
            r#"
[build]
platforms = ["ios"]
library-evolution = false

[build.extra-flags]
swift-flags = ["-D", "SCIPIO"]

[targets.T]
library-evolution = false
"#,
        )
        .unwrap();

        let target = config.options_for_target("T");
        assert_eq!(target, *config.base_options());
        assert_eq!(
            target.cache_key().unwrap(),
            config.base_options().cache_key().unwrap()
        );
    }

    #[test]
    fn missing_platforms_is_an_error() {
        let err = ScipioConfig::parse("[build]\nconfiguration = \"release\"\n").unwrap_err();
        assert!(matches!(err, ScipioError::Config(ConfigError::NoPlatforms)));
    }

    #[test]
    fn only_unknown_platforms_is_an_error() {
        let err = ScipioConfig::parse("[build]\nplatforms = [\"MacOS\"]\n").unwrap_err();
        match err {
            ScipioError::Config(ConfigError::UnknownPlatforms { names }) => {
                assert_eq!(names, vec!["MacOS".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = ScipioConfig::parse("[build\n").unwrap_err();
        assert!(matches!(err, ScipioError::Toml(_)));
    }
}

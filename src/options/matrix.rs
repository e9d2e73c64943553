//! Per-target overrides of package-wide build options.

use super::{BuildConfiguration, BuildOptions, ExtraBuildParameters, ExtraFlags, FrameworkType, Sdk};
use std::collections::{BTreeMap, BTreeSet};

/// Options for a single target that override the package defaults.
///
/// Every field is optional; `None` keeps the package value.
///
/// # Configuration
///
/// ```toml
/// [targets.MyLibrary]
/// framework-type = "static"
/// extra-flags = { swift-flags = ["-D", "MY_LIBRARY"] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetBuildOptions {
    /// Build configuration override.
    #[serde(default)]
    pub configuration: Option<BuildConfiguration>,

    /// Debug symbol embedding override.
    #[serde(default)]
    pub embed_debug_symbols: Option<bool>,

    /// Framework linkage override.
    #[serde(default)]
    pub framework_type: Option<FrameworkType>,

    /// Replaces the package SDK set when present.
    ///
    /// Already resolved SDKs; platform names are resolved by the config
    /// loader.
    #[serde(skip)]
    pub sdks: Option<BTreeSet<Sdk>>,

    /// Flags appended after the package flags.
    #[serde(default)]
    pub extra_flags: Option<ExtraFlags>,

    /// Parameters merged over the package parameters.
    #[serde(default)]
    pub extra_build_parameters: Option<ExtraBuildParameters>,

    /// Library evolution override.
    #[serde(default)]
    pub library_evolution: Option<bool>,
}

/// Target name to its overrides.
pub type BuildOptionsMatrix = BTreeMap<String, TargetBuildOptions>;

impl BuildOptions {
    /// Applies a target's overrides to these package options.
    ///
    /// Scalars and the SDK set are replaced when the target sets them. Extra
    /// flags are merged with the target's flags last. Extra build parameters
    /// are combined, with the target's value winning for a shared key.
    pub fn overridden_by(&self, target: &TargetBuildOptions) -> BuildOptions {
        let sdks = target
            .sdks
            .clone()
            .unwrap_or_else(|| self.sdk_set().clone());

        let extra_flags =
            ExtraFlags::merge_optional(self.extra_flags(), target.extra_flags.as_ref());

        let extra_build_parameters = match (
            self.extra_build_parameters(),
            target.extra_build_parameters.as_ref(),
        ) {
            (None, None) => None,
            (base, overrides) => {
                let mut merged = base.cloned().unwrap_or_default();
                if let Some(overrides) = overrides {
                    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                Some(merged)
            }
        };

        BuildOptions::new(
            target.configuration.unwrap_or(self.build_configuration()),
            target
                .embed_debug_symbols
                .unwrap_or(self.is_debug_symbols_embedded()),
            target.framework_type.unwrap_or(self.framework_type()),
            sdks,
            extra_flags,
            extra_build_parameters,
            target
                .library_evolution
                .unwrap_or(self.enable_library_evolution()),
        )
    }

    /// Resolves the options for `target_name`, falling back to these
    /// options when the matrix has no entry for it.
    pub fn for_target(&self, matrix: &BuildOptionsMatrix, target_name: &str) -> BuildOptions {
        match matrix.get(target_name) {
            Some(overrides) => {
                log::debug!("Applying build option overrides for target {}", target_name);
                self.overridden_by(overrides)
            }
            None => self.clone(),
        }
    }
}

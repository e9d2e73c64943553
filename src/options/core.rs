//! Core BuildOptions struct and implementations.

use super::{BuildConfiguration, ExtraBuildParameters, ExtraFlags, FrameworkType, Sdk};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

/// Canonical snapshot of how one target is built.
///
/// Used both as the description of a build work item and as its cache key,
/// so two requests for the same logical configuration must compare and hash
/// equal. The SDK set is the only field that is normalized: it is kept
/// sorted by [`Sdk::identifier`] and duplicate free no matter how the caller
/// ordered it. Deserialization goes through the same set, so a manifest with
/// shuffled SDKs reads back canonical.
///
/// Construct with [`BuildOptions::new`] or [`BuildOptionsBuilder`].
///
/// # Examples
///
/// ```
/// use scipio_kit::options::{BuildConfiguration, BuildOptions, FrameworkType, Sdk};
///
/// let a = BuildOptions::new(
///     BuildConfiguration::Release,
///     false,
///     FrameworkType::Dynamic,
///     [Sdk::MacOs, Sdk::Ios],
///     None,
///     None,
///     true,
/// );
/// let b = BuildOptions::new(
///     BuildConfiguration::Release,
///     false,
///     FrameworkType::Dynamic,
///     [Sdk::Ios, Sdk::MacOs],
///     None,
///     None,
///     true,
/// );
/// assert_eq!(a, b);
/// ```
///
/// # See Also
///
/// - [`BuildOptionsBuilder`] - Builder with defaults
/// - [`TargetBuildOptions`] - Per-target overrides
///
/// [`BuildOptionsBuilder`]: super::BuildOptionsBuilder
/// [`TargetBuildOptions`]: super::TargetBuildOptions
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    build_configuration: BuildConfiguration,

    is_debug_symbols_embedded: bool,

    framework_type: FrameworkType,

    /// Always ascending by identifier.
    sdks: BTreeSet<Sdk>,

    #[serde(default)]
    extra_flags: Option<ExtraFlags>,

    #[serde(default)]
    extra_build_parameters: Option<ExtraBuildParameters>,

    enable_library_evolution: bool,
}

impl BuildOptions {
    /// Creates build options, normalizing the SDK collection.
    pub fn new(
        build_configuration: BuildConfiguration,
        is_debug_symbols_embedded: bool,
        framework_type: FrameworkType,
        sdks: impl IntoIterator<Item = Sdk>,
        extra_flags: Option<ExtraFlags>,
        extra_build_parameters: Option<ExtraBuildParameters>,
        enable_library_evolution: bool,
    ) -> Self {
        Self {
            build_configuration,
            is_debug_symbols_embedded,
            framework_type,
            sdks: sdks.into_iter().collect(),
            extra_flags,
            extra_build_parameters,
            enable_library_evolution,
        }
    }

    /// Returns the build configuration.
    pub fn build_configuration(&self) -> BuildConfiguration {
        self.build_configuration
    }

    /// Returns whether debug symbols are embedded in the frameworks.
    pub fn is_debug_symbols_embedded(&self) -> bool {
        self.is_debug_symbols_embedded
    }

    /// Returns the framework linkage.
    pub fn framework_type(&self) -> FrameworkType {
        self.framework_type
    }

    /// Returns the SDKs in canonical order.
    pub fn sdks(&self) -> impl ExactSizeIterator<Item = Sdk> + '_ {
        self.sdks.iter().copied()
    }

    /// Returns the SDK set.
    pub fn sdk_set(&self) -> &BTreeSet<Sdk> {
        &self.sdks
    }

    /// Returns the extra flags, if any.
    pub fn extra_flags(&self) -> Option<&ExtraFlags> {
        self.extra_flags.as_ref()
    }

    /// Returns the extra build parameters, if any.
    pub fn extra_build_parameters(&self) -> Option<&ExtraBuildParameters> {
        self.extra_build_parameters.as_ref()
    }

    /// Returns whether library evolution (ABI stability) is enabled.
    pub fn enable_library_evolution(&self) -> bool {
        self.enable_library_evolution
    }

    /// Stable cache key for these options.
    ///
    /// Lowercase hex SHA-256 of a JSON form in which every flag category is
    /// written out, absent ones as empty arrays. Options that compare equal
    /// produce the same key.
    pub fn cache_key(&self) -> crate::Result<String> {
        let view = CacheKeyView {
            build_configuration: self.build_configuration,
            is_debug_symbols_embedded: self.is_debug_symbols_embedded,
            framework_type: self.framework_type,
            sdks: &self.sdks,
            extra_flags: self.extra_flags.as_ref().map(|flags| CacheKeyFlags {
                c_flags: flags.c_flags(),
                cxx_flags: flags.cxx_flags(),
                swift_flags: flags.swift_flags(),
                linker_flags: flags.linker_flags(),
            }),
            extra_build_parameters: self.extra_build_parameters.as_ref(),
            enable_library_evolution: self.enable_library_evolution,
        };

        let encoded = serde_json::to_vec(&view)?;
        let mut hasher = Sha256::new();
        hasher.update(&encoded);
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Hashed form of [`BuildOptions`]; must agree with its `Eq`.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CacheKeyView<'a> {
    build_configuration: BuildConfiguration,
    is_debug_symbols_embedded: bool,
    framework_type: FrameworkType,
    sdks: &'a BTreeSet<Sdk>,
    extra_flags: Option<CacheKeyFlags<'a>>,
    extra_build_parameters: Option<&'a ExtraBuildParameters>,
    enable_library_evolution: bool,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CacheKeyFlags<'a> {
    c_flags: &'a [String],
    cxx_flags: &'a [String],
    swift_flags: &'a [String],
    linker_flags: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn options(sdks: &[Sdk]) -> BuildOptions {
        BuildOptions::new(
            BuildConfiguration::Debug,
            true,
            FrameworkType::Static,
            sdks.iter().copied(),
            None,
            None,
            false,
        )
    }

    fn hash_of(options: &BuildOptions) -> u64 {
        let mut hasher = DefaultHasher::new();
        options.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn sdks_are_sorted_and_deduplicated() {
        let built = options(&[Sdk::WatchOs, Sdk::MacOs, Sdk::Ios, Sdk::MacOs]);
        assert_eq!(
            built.sdks().collect::<Vec<_>>(),
            vec![Sdk::Ios, Sdk::MacOs, Sdk::WatchOs]
        );
    }

    #[test]
    fn ordering_does_not_affect_identity() {
        let a = options(&[Sdk::TvOs, Sdk::MacCatalyst, Sdk::IosSimulator]);
        let b = options(&[Sdk::IosSimulator, Sdk::TvOs, Sdk::MacCatalyst]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.cache_key().unwrap(), b.cache_key().unwrap());
    }

    #[test]
    fn other_fields_participate_in_identity() {
        let a = options(&[Sdk::Ios]);
        let b = BuildOptions::new(
            BuildConfiguration::Release,
            true,
            FrameworkType::Static,
            [Sdk::Ios],
            None,
            None,
            false,
        );
        assert_ne!(a, b);
        assert_ne!(a.cache_key().unwrap(), b.cache_key().unwrap());
    }

    #[test]
    fn cache_key_is_hex_sha256() {
        let key = options(&[Sdk::MacOs]).cache_key().unwrap();
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn absent_and_empty_flag_categories_share_a_key() {
        let sparse = BuildOptions::new(
            BuildConfiguration::Release,
            false,
            FrameworkType::Dynamic,
            [Sdk::Ios],
            Some(ExtraFlags {
                c_flags: Some(vec!["-DA".into()]),
                ..Default::default()
            }),
            None,
            false,
        );
        let filled = BuildOptions::new(
            BuildConfiguration::Release,
            false,
            FrameworkType::Dynamic,
            [Sdk::Ios],
            Some(ExtraFlags {
                c_flags: Some(vec!["-DA".into()]),
                cxx_flags: Some(vec![]),
                swift_flags: Some(vec![]),
                linker_flags: Some(vec![]),
            }),
            None,
            false,
        );

        assert_eq!(sparse, filled);
        assert_eq!(hash_of(&sparse), hash_of(&filled));
        assert_eq!(sparse.cache_key().unwrap(), filled.cache_key().unwrap());
    }

    #[test]
    fn empty_override_keeps_cache_key() {
        let base = BuildOptions::new(
            BuildConfiguration::Release,
            false,
            FrameworkType::Dynamic,
            [Sdk::MacOs, Sdk::Ios],
            Some(ExtraFlags {
                c_flags: Some(vec!["-DA".into()]),
                ..Default::default()
            }),
            None,
            true,
        );
        let resolved = base.overridden_by(&crate::options::TargetBuildOptions::default());

        assert_eq!(resolved, base);
        assert_eq!(resolved.cache_key().unwrap(), base.cache_key().unwrap());
    }

    #[test]
    fn cache_key_leaves_manifest_form_untouched() {
        let options = BuildOptions::new(
            BuildConfiguration::Debug,
            false,
            FrameworkType::Static,
            [Sdk::TvOs],
            Some(ExtraFlags {
                linker_flags: Some(vec!["-lz".into()]),
                ..Default::default()
            }),
            None,
            false,
        );
        options.cache_key().unwrap();

        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains(r#""extraFlags":{"linkerFlags":["-lz"]}"#));
    }

    #[test]
    fn deserializing_restores_canonical_order() {
        let json = r#"{
            "buildConfiguration": "release",
            "isDebugSymbolsEmbedded": false,
            "frameworkType": "dynamic",
            "sdks": ["watchOS", "iOS", "macOS"],
            "enableLibraryEvolution": true
        }"#;
        let parsed: BuildOptions = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.sdks().collect::<Vec<_>>(),
            vec![Sdk::Ios, Sdk::MacOs, Sdk::WatchOs]
        );
        assert!(parsed.extra_flags().is_none());
        assert!(parsed.enable_library_evolution());
    }
}

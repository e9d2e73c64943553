//! Builder for constructing BuildOptions.

use super::{BuildConfiguration, BuildOptions, ExtraBuildParameters, ExtraFlags, FrameworkType, Sdk};
use crate::error::ConfigError;
use std::collections::BTreeSet;

/// Builder for constructing [`BuildOptions`].
///
/// Provides a fluent API with the package defaults used when nothing else
/// is configured.
///
/// # Examples
///
/// ```
/// use scipio_kit::options::{BuildOptionsBuilder, FrameworkType, Sdk};
///
/// # fn example() -> scipio_kit::Result<()> {
/// let options = BuildOptionsBuilder::new()
///     .framework_type(FrameworkType::Static)
///     .sdks([Sdk::Ios, Sdk::IosSimulator])
///     .library_evolution(true)
///     .build()?;
/// assert_eq!(options.sdks().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct BuildOptionsBuilder {
    build_configuration: BuildConfiguration,
    is_debug_symbols_embedded: bool,
    framework_type: FrameworkType,
    sdks: BTreeSet<Sdk>,
    extra_flags: Option<ExtraFlags>,
    extra_build_parameters: Option<ExtraBuildParameters>,
    enable_library_evolution: bool,
}

impl BuildOptionsBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the build configuration.
    ///
    /// Default: [`BuildConfiguration::Release`]
    pub fn build_configuration(mut self, configuration: BuildConfiguration) -> Self {
        self.build_configuration = configuration;
        self
    }

    /// Embeds debug symbols into the produced frameworks.
    ///
    /// Default: false
    pub fn embed_debug_symbols(mut self, embed: bool) -> Self {
        self.is_debug_symbols_embedded = embed;
        self
    }

    /// Sets the framework linkage.
    ///
    /// Default: [`FrameworkType::Dynamic`]
    pub fn framework_type(mut self, framework_type: FrameworkType) -> Self {
        self.framework_type = framework_type;
        self
    }

    /// Adds SDKs to build for. May be called repeatedly.
    ///
    /// # Required
    ///
    /// At least one SDK is required for building.
    pub fn sdks(mut self, sdks: impl IntoIterator<Item = Sdk>) -> Self {
        self.sdks.extend(sdks);
        self
    }

    /// Sets extra compiler and linker flags.
    ///
    /// Default: None
    pub fn extra_flags(mut self, flags: ExtraFlags) -> Self {
        self.extra_flags = Some(flags);
        self
    }

    /// Sets extra build setting overrides.
    ///
    /// Default: None
    pub fn extra_build_parameters(mut self, parameters: ExtraBuildParameters) -> Self {
        self.extra_build_parameters = Some(parameters);
        self
    }

    /// Enables library evolution.
    ///
    /// Default: false
    pub fn library_evolution(mut self, enable: bool) -> Self {
        self.enable_library_evolution = enable;
        self
    }

    /// Builds the options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatforms`] if no SDK was added.
    pub fn build(self) -> crate::Result<BuildOptions> {
        if self.sdks.is_empty() {
            return Err(ConfigError::NoPlatforms.into());
        }

        Ok(BuildOptions::new(
            self.build_configuration,
            self.is_debug_symbols_embedded,
            self.framework_type,
            self.sdks,
            self.extra_flags,
            self.extra_build_parameters,
            self.enable_library_evolution,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = BuildOptionsBuilder::new().sdks([Sdk::MacOs]).build().unwrap();
        assert_eq!(options.build_configuration(), BuildConfiguration::Release);
        assert_eq!(options.framework_type(), FrameworkType::Dynamic);
        assert!(!options.is_debug_symbols_embedded());
        assert!(!options.enable_library_evolution());
        assert!(options.extra_flags().is_none());
        assert!(options.extra_build_parameters().is_none());
    }

    #[test]
    fn requires_sdks() {
        let err = BuildOptionsBuilder::new().build().unwrap_err();
        assert!(matches!(
            err,
            crate::ScipioError::Config(ConfigError::NoPlatforms)
        ));
    }

    #[test]
    fn matches_direct_construction() {
        let built = BuildOptionsBuilder::new()
            .build_configuration(BuildConfiguration::Debug)
            .embed_debug_symbols(true)
            .sdks([Sdk::TvOs])
            .sdks([Sdk::Ios, Sdk::TvOs])
            .library_evolution(true)
            .build()
            .unwrap();
        let direct = BuildOptions::new(
            BuildConfiguration::Debug,
            true,
            FrameworkType::Dynamic,
            [Sdk::Ios, Sdk::TvOs],
            None,
            None,
            true,
        );
        assert_eq!(built, direct);
    }
}

//! Target SDK types and their toolchain identifiers.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Target platform plus execution environment (device or simulator).
///
/// Every variant has a value in each of the lookup tables below
/// ([`Self::identifier`], [`Self::display_name`], [`Self::setting_value`],
/// [`Self::platform_filter_value`]). The tables are exhaustive `match`
/// expressions, so adding a variant without extending all of them fails to
/// compile.
///
/// Ordering follows the canonical identifier string, not declaration order.
///
/// # Examples
///
/// ```
/// use scipio_kit::options::Sdk;
///
/// let sdk = Sdk::from_name("ios").unwrap();
/// assert_eq!(sdk.setting_value(), "iphoneos");
/// assert_eq!(sdk.expand_for_simulators().len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Sdk {
    /// macOS
    #[serde(rename = "macOS")]
    MacOs,
    /// Mac Catalyst (iOS apps running on macOS)
    #[serde(rename = "macCatalyst")]
    MacCatalyst,
    /// iOS device
    #[serde(rename = "iOS")]
    Ios,
    /// iOS simulator
    #[serde(rename = "iOSSimulator")]
    IosSimulator,
    /// tvOS device
    #[serde(rename = "tvOS")]
    TvOs,
    /// tvOS simulator
    #[serde(rename = "tvOSSimulator")]
    TvOsSimulator,
    /// watchOS device
    #[serde(rename = "watchOS")]
    WatchOs,
    /// watchOS simulator
    #[serde(rename = "watchOSSimulator")]
    WatchOsSimulator,
    /// visionOS device
    #[serde(rename = "visionOS")]
    VisionOs,
    /// visionOS simulator
    #[serde(rename = "visionOSSimulator")]
    VisionOsSimulator,
}

impl Sdk {
    /// Every SDK, in declaration order.
    pub const ALL: [Sdk; 10] = [
        Sdk::MacOs,
        Sdk::MacCatalyst,
        Sdk::Ios,
        Sdk::IosSimulator,
        Sdk::TvOs,
        Sdk::TvOsSimulator,
        Sdk::WatchOs,
        Sdk::WatchOsSimulator,
        Sdk::VisionOs,
        Sdk::VisionOsSimulator,
    ];

    /// Parses a lowercase platform name as written in package manifests.
    ///
    /// Only base (device) platforms are recognized. Matching is exact and
    /// case sensitive: `"MacOS"` is not a platform name. Unknown names
    /// return `None` and the caller decides whether to skip or abort.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "macos" => Some(Sdk::MacOs),
            "ios" => Some(Sdk::Ios),
            "maccatalyst" => Some(Sdk::MacCatalyst),
            "tvos" => Some(Sdk::TvOs),
            "watchos" => Some(Sdk::WatchOs),
            "visionos" => Some(Sdk::VisionOs),
            _ => None,
        }
    }

    /// Expands a platform into the build destinations it needs when
    /// simulator support is requested.
    ///
    /// iOS, tvOS, watchOS and visionOS produce the device SDK and its
    /// simulator. Everything else (macOS, Mac Catalyst, and the simulator
    /// SDKs themselves) produces only itself.
    pub fn expand_for_simulators(self) -> BTreeSet<Sdk> {
        match self {
            Sdk::Ios => BTreeSet::from([Sdk::Ios, Sdk::IosSimulator]),
            Sdk::TvOs => BTreeSet::from([Sdk::TvOs, Sdk::TvOsSimulator]),
            Sdk::WatchOs => BTreeSet::from([Sdk::WatchOs, Sdk::WatchOsSimulator]),
            Sdk::VisionOs => BTreeSet::from([Sdk::VisionOs, Sdk::VisionOsSimulator]),
            other => BTreeSet::from([other]),
        }
    }

    /// Canonical identifier. Used for ordering and serialization.
    pub fn identifier(&self) -> &'static str {
        match self {
            Sdk::MacOs => "macOS",
            Sdk::MacCatalyst => "macCatalyst",
            Sdk::Ios => "iOS",
            Sdk::IosSimulator => "iOSSimulator",
            Sdk::TvOs => "tvOS",
            Sdk::TvOsSimulator => "tvOSSimulator",
            Sdk::WatchOs => "watchOS",
            Sdk::WatchOsSimulator => "watchOSSimulator",
            Sdk::VisionOs => "visionOS",
            Sdk::VisionOsSimulator => "visionOSSimulator",
        }
    }

    /// Human readable name, as shown by Xcode destinations.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sdk::MacOs => "macOS",
            Sdk::MacCatalyst => "Catalyst",
            Sdk::Ios => "iOS",
            Sdk::IosSimulator => "iPhone Simulator",
            Sdk::TvOs => "tvOS",
            Sdk::TvOsSimulator => "TV Simulator",
            Sdk::WatchOs => "watchOS",
            Sdk::WatchOsSimulator => "Watch Simulator",
            Sdk::VisionOs => "visionOS",
            Sdk::VisionOsSimulator => "visionOS Simulator",
        }
    }

    /// Value of the `SDKROOT` style build setting passed to the toolchain.
    pub fn setting_value(&self) -> &'static str {
        match self {
            Sdk::MacOs => "macosx",
            Sdk::MacCatalyst => "maccatalyst",
            Sdk::Ios => "iphoneos",
            Sdk::IosSimulator => "iphonesimulator",
            Sdk::TvOs => "appletvos",
            Sdk::TvOsSimulator => "appletvsimulator",
            Sdk::WatchOs => "watchos",
            Sdk::WatchOsSimulator => "watchsimulator",
            Sdk::VisionOs => "xros",
            Sdk::VisionOsSimulator => "xrsimulator",
        }
    }

    /// Tag used by dependency resolution to scope a dependency to platforms.
    pub fn platform_filter_value(&self) -> &'static str {
        match self {
            Sdk::MacOs => "macos",
            Sdk::MacCatalyst => "ios-maccatalyst",
            Sdk::Ios => "ios",
            Sdk::IosSimulator => "ios-simulator",
            Sdk::TvOs => "tvos",
            Sdk::TvOsSimulator => "tvos-simulator",
            Sdk::WatchOs => "watchos",
            Sdk::WatchOsSimulator => "watchos-simulator",
            Sdk::VisionOs => "visionos",
            Sdk::VisionOsSimulator => "visionos-simulator",
        }
    }

    /// Whether this SDK targets a simulator.
    pub fn is_simulator(&self) -> bool {
        matches!(
            self,
            Sdk::IosSimulator | Sdk::TvOsSimulator | Sdk::WatchOsSimulator | Sdk::VisionOsSimulator
        )
    }
}

impl PartialOrd for Sdk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sdk {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier().cmp(other.identifier())
    }
}

impl Display for Sdk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Platforms parsed from a list of names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedPlatforms {
    /// Recognized SDKs, expanded for simulators when requested.
    pub sdks: BTreeSet<Sdk>,
    /// Names that did not match any platform, in input order.
    pub unrecognized: Vec<String>,
}

/// Parses platform names into an SDK set.
///
/// Unrecognized names are collected instead of failing; skipping or
/// aborting is the caller's decision.
pub fn resolve_platforms<I, S>(names: I, support_simulators: bool) -> ResolvedPlatforms
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolved = ResolvedPlatforms::default();

    for name in names {
        let name = name.as_ref();
        match Sdk::from_name(name) {
            Some(sdk) if support_simulators => resolved.sdks.extend(sdk.expand_for_simulators()),
            Some(sdk) => {
                resolved.sdks.insert(sdk);
            }
            None => {
                log::warn!("Unknown platform name '{}' ignored", name);
                resolved.unrecognized.push(name.to_string());
            }
        }
    }

    log::debug!(
        "Resolved platforms: {}",
        resolved
            .sdks
            .iter()
            .map(Sdk::identifier)
            .collect::<Vec<_>>()
            .join(", ")
    );

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_lowercase_names_only() {
        assert_eq!(Sdk::from_name("macos"), Some(Sdk::MacOs));
        assert_eq!(Sdk::from_name("ios"), Some(Sdk::Ios));
        assert_eq!(Sdk::from_name("maccatalyst"), Some(Sdk::MacCatalyst));
        assert_eq!(Sdk::from_name("tvos"), Some(Sdk::TvOs));
        assert_eq!(Sdk::from_name("watchos"), Some(Sdk::WatchOs));
        assert_eq!(Sdk::from_name("visionos"), Some(Sdk::VisionOs));

        assert_eq!(Sdk::from_name("MacOS"), None);
        assert_eq!(Sdk::from_name("iOS"), None);
        assert_eq!(Sdk::from_name("iossimulator"), None);
        assert_eq!(Sdk::from_name(""), None);
    }

    #[test]
    fn recognized_names_map_to_exact_settings() {
        let expected = [
            ("macos", "macosx", "macos"),
            ("ios", "iphoneos", "ios"),
            ("maccatalyst", "maccatalyst", "ios-maccatalyst"),
            ("tvos", "appletvos", "tvos"),
            ("watchos", "watchos", "watchos"),
            ("visionos", "xros", "visionos"),
        ];

        for (name, setting, filter) in expected {
            let sdk = Sdk::from_name(name).unwrap();
            assert_eq!(sdk.setting_value(), setting, "{name}");
            assert_eq!(sdk.platform_filter_value(), filter, "{name}");
        }
    }

    #[test]
    fn every_sdk_maps_to_its_table_row() {
        let table = [
            (Sdk::MacOs, "macOS", "macOS", "macosx", "macos"),
            (Sdk::MacCatalyst, "macCatalyst", "Catalyst", "maccatalyst", "ios-maccatalyst"),
            (Sdk::Ios, "iOS", "iOS", "iphoneos", "ios"),
            (Sdk::IosSimulator, "iOSSimulator", "iPhone Simulator", "iphonesimulator", "ios-simulator"),
            (Sdk::TvOs, "tvOS", "tvOS", "appletvos", "tvos"),
            (Sdk::TvOsSimulator, "tvOSSimulator", "TV Simulator", "appletvsimulator", "tvos-simulator"),
            (Sdk::WatchOs, "watchOS", "watchOS", "watchos", "watchos"),
            (Sdk::WatchOsSimulator, "watchOSSimulator", "Watch Simulator", "watchsimulator", "watchos-simulator"),
            (Sdk::VisionOs, "visionOS", "visionOS", "xros", "visionos"),
            (Sdk::VisionOsSimulator, "visionOSSimulator", "visionOS Simulator", "xrsimulator", "visionos-simulator"),
        ];

        assert_eq!(table.len(), Sdk::ALL.len());
        for sdk in Sdk::ALL {
            let (_, identifier, display, setting, filter) = table
                .iter()
                .find(|row| row.0 == sdk)
                .copied()
                .unwrap_or_else(|| panic!("{sdk:?} missing from table"));
            assert_eq!(sdk.identifier(), identifier, "{sdk:?}");
            assert_eq!(sdk.display_name(), display, "{sdk:?}");
            assert_eq!(sdk.setting_value(), setting, "{sdk:?}");
            assert_eq!(sdk.platform_filter_value(), filter, "{sdk:?}");
        }
    }

    #[test]
    fn expand_for_simulators() {
        assert_eq!(Sdk::MacOs.expand_for_simulators(), BTreeSet::from([Sdk::MacOs]));
        assert_eq!(
            Sdk::MacCatalyst.expand_for_simulators(),
            BTreeSet::from([Sdk::MacCatalyst])
        );
        for sdk in [Sdk::Ios, Sdk::TvOs, Sdk::WatchOs, Sdk::VisionOs] {
            let expanded = sdk.expand_for_simulators();
            assert_eq!(expanded.len(), 2, "{sdk}");
            assert!(expanded.contains(&sdk));
            assert_eq!(expanded.iter().filter(|s| s.is_simulator()).count(), 1);
        }
        assert_eq!(
            Sdk::IosSimulator.expand_for_simulators(),
            BTreeSet::from([Sdk::IosSimulator])
        );
    }

    #[test]
    fn ordering_follows_identifier() {
        let mut all = Sdk::ALL.to_vec();
        all.sort();
        let identifiers: Vec<_> = all.iter().map(Sdk::identifier).collect();
        assert_eq!(
            identifiers,
            vec![
                "iOS",
                "iOSSimulator",
                "macCatalyst",
                "macOS",
                "tvOS",
                "tvOSSimulator",
                "visionOS",
                "visionOSSimulator",
                "watchOS",
                "watchOSSimulator",
            ]
        );
    }

    #[test]
    fn serializes_as_identifier() {
        for sdk in Sdk::ALL {
            let json = serde_json::to_string(&sdk).unwrap();
            assert_eq!(json, format!("\"{}\"", sdk.identifier()));
        }
    }

    #[test]
    fn resolve_platforms_collects_unknown_names() {
        let resolved = resolve_platforms(["ios", "android", "macos"], true);
        assert_eq!(
            resolved.sdks,
            BTreeSet::from([Sdk::Ios, Sdk::IosSimulator, Sdk::MacOs])
        );
        assert_eq!(resolved.unrecognized, vec!["android".to_string()]);

        let device_only = resolve_platforms(["ios"], false);
        assert_eq!(device_only.sdks, BTreeSet::from([Sdk::Ios]));
        assert!(device_only.unrecognized.is_empty());
    }
}

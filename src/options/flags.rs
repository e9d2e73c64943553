//! Extra compiler and linker flags and their composition.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Free-form build setting overrides (`KEY=value`) passed to the toolchain.
///
/// Ordered so that hashing and serialization are deterministic.
pub type ExtraBuildParameters = BTreeMap<String, String>;

/// Additional flags for each tool in the build.
///
/// Each category is optional. An absent category means the same thing as
/// an empty one, and equality and hashing treat them alike. Serialization
/// keeps the distinction so a stored bundle reads back unchanged.
///
/// # Configuration
///
/// ```toml
/// [build.extra-flags]
/// c-flags = ["-DNDEBUG"]
/// linker-flags = ["-lz"]
/// ```
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraFlags {
    /// Flags for the C compiler (`OTHER_CFLAGS`).
    #[serde(default, alias = "c-flags", skip_serializing_if = "Option::is_none")]
    pub c_flags: Option<Vec<String>>,

    /// Flags for the C++ compiler (`OTHER_CPLUSPLUSFLAGS`).
    #[serde(default, alias = "cxx-flags", skip_serializing_if = "Option::is_none")]
    pub cxx_flags: Option<Vec<String>>,

    /// Flags for the Swift compiler (`OTHER_SWIFT_FLAGS`).
    #[serde(default, alias = "swift-flags", skip_serializing_if = "Option::is_none")]
    pub swift_flags: Option<Vec<String>>,

    /// Flags for the linker (`OTHER_LDFLAGS`).
    #[serde(default, alias = "linker-flags", skip_serializing_if = "Option::is_none")]
    pub linker_flags: Option<Vec<String>>,
}

fn flags_or_empty(flags: &Option<Vec<String>>) -> &[String] {
    flags.as_deref().unwrap_or_default()
}

fn concat(lhs: &Option<Vec<String>>, rhs: &Option<Vec<String>>) -> Option<Vec<String>> {
    Some(
        flags_or_empty(lhs)
            .iter()
            .chain(flags_or_empty(rhs))
            .cloned()
            .collect(),
    )
}

impl ExtraFlags {
    /// C compiler flags, empty when absent.
    pub fn c_flags(&self) -> &[String] {
        flags_or_empty(&self.c_flags)
    }

    /// C++ compiler flags, empty when absent.
    pub fn cxx_flags(&self) -> &[String] {
        flags_or_empty(&self.cxx_flags)
    }

    /// Swift compiler flags, empty when absent.
    pub fn swift_flags(&self) -> &[String] {
        flags_or_empty(&self.swift_flags)
    }

    /// Linker flags, empty when absent.
    pub fn linker_flags(&self) -> &[String] {
        flags_or_empty(&self.linker_flags)
    }

    /// Whether every category is absent or empty.
    pub fn is_empty(&self) -> bool {
        self.c_flags().is_empty()
            && self.cxx_flags().is_empty()
            && self.swift_flags().is_empty()
            && self.linker_flags().is_empty()
    }

    /// Appends `other`'s flags after this bundle's, category by category.
    ///
    /// Flags are never deduplicated or reordered and categories do not
    /// interact. Every category of the result is present. The operation is
    /// not commutative: pass the higher precedence bundle (e.g. target
    /// specific flags) as `other` so its flags come last.
    pub fn merge(&self, other: &ExtraFlags) -> ExtraFlags {
        ExtraFlags {
            c_flags: concat(&self.c_flags, &other.c_flags),
            cxx_flags: concat(&self.cxx_flags, &other.cxx_flags),
            swift_flags: concat(&self.swift_flags, &other.swift_flags),
            linker_flags: concat(&self.linker_flags, &other.linker_flags),
        }
    }

    /// [`Self::merge`] for bundles that may be missing entirely.
    ///
    /// Returns `None` only when both sides are `None`.
    pub fn merge_optional(lhs: Option<&ExtraFlags>, rhs: Option<&ExtraFlags>) -> Option<ExtraFlags> {
        match (lhs, rhs) {
            (None, None) => None,
            (lhs, rhs) => Some(
                lhs.cloned()
                    .unwrap_or_default()
                    .merge(rhs.unwrap_or(&ExtraFlags::default())),
            ),
        }
    }
}

impl PartialEq for ExtraFlags {
    fn eq(&self, other: &Self) -> bool {
        self.c_flags() == other.c_flags()
            && self.cxx_flags() == other.cxx_flags()
            && self.swift_flags() == other.swift_flags()
            && self.linker_flags() == other.linker_flags()
    }
}

impl Eq for ExtraFlags {}

impl Hash for ExtraFlags {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.c_flags().hash(state);
        self.cxx_flags().hash(state);
        self.swift_flags().hash(state);
        self.linker_flags().hash(state);
    }
}

//! Build configuration and framework linkage modes.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Build configuration passed to the toolchain.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfiguration {
    /// Unoptimized build with assertions
    Debug,
    /// Optimized build
    #[default]
    Release,
}

impl BuildConfiguration {
    /// Value of the `-configuration` setting.
    pub fn settings_value(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Release => "Release",
        }
    }
}

impl FromStr for BuildConfiguration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(BuildConfiguration::Debug),
            "release" => Ok(BuildConfiguration::Release),
            other => Err(format!(
                "Invalid build configuration: {other}. Valid values: debug, release"
            )),
        }
    }
}

impl Display for BuildConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BuildConfiguration::Debug => "debug",
            BuildConfiguration::Release => "release",
        })
    }
}

/// Linkage of the produced frameworks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkType {
    /// Dynamically linked framework
    #[default]
    Dynamic,
    /// Statically linked framework
    Static,
}

impl FromStr for FrameworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dynamic" => Ok(FrameworkType::Dynamic),
            "static" => Ok(FrameworkType::Static),
            other => Err(format!(
                "Invalid framework type: {other}. Valid values: dynamic, static"
            )),
        }
    }
}

impl Display for FrameworkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FrameworkType::Dynamic => "dynamic",
            FrameworkType::Static => "static",
        })
    }
}

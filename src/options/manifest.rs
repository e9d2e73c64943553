//! On-disk build-options manifests for incremental builds.
//!
//! A manifest records the options a target was last built with. The next
//! run compares its requested options against the manifest to decide
//! whether the cached frameworks can be reused.

use super::BuildOptions;
use crate::error::Result;
use std::path::Path;

/// Writes `options` to `path` as pretty JSON, creating parent directories.
pub fn save_manifest(path: &Path, options: &BuildOptions) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(options)?;
    std::fs::write(path, json)?;
    log::debug!("Wrote build options manifest: {}", path.display());
    Ok(())
}

/// Reads build options previously written by [`save_manifest`].
pub fn load_manifest(path: &Path) -> Result<BuildOptions> {
    let content = std::fs::read_to_string(path)?;
    let options = serde_json::from_str(&content)?;
    Ok(options)
}

/// Whether the manifest at `path` records exactly `options`.
///
/// A missing or unreadable manifest is simply out of date.
pub fn is_manifest_current(path: &Path, options: &BuildOptions) -> bool {
    match load_manifest(path) {
        Ok(stored) => stored == *options,
        Err(e) => {
            log::debug!("Manifest {} not usable: {}", path.display(), e);
            false
        }
    }
}

//! Version stamping from the package origin.
//!
//! When the tool itself is built, the label of the checkout it was built
//! from is written into a generated Swift source file so the binary can
//! report its own version. The file is regenerated on every invocation.

use crate::error::Result;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the generated source file.
pub const GENERATED_FILE_NAME: &str = "ScipioVersion.generated.swift";

/// Where the package being built came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackageOrigin {
    /// The root package of the build.
    Root,
    /// A package checked out at a local path.
    Local {
        /// Checkout path, if known.
        path: Option<PathBuf>,
    },
    /// A package cloned from a source repository.
    Repository {
        /// Repository URL, if known.
        url: Option<String>,
        /// Resolved revision (tag, branch or commit).
        revision: String,
    },
    /// A package downloaded from a registry.
    Registry {
        /// Registry identity, if known.
        identity: Option<String>,
        /// Version as displayed by the registry.
        display_version: String,
    },
    /// An origin kind this tool does not know about.
    Unknown(String),
}

impl PackageOrigin {
    /// Version label for this origin.
    ///
    /// Root and local packages get a fixed label, repositories and
    /// registries their revision or version verbatim. Unknown origins have
    /// no label.
    pub fn version_name(&self) -> Option<String> {
        match self {
            PackageOrigin::Root => Some("root".to_string()),
            PackageOrigin::Local { .. } => Some("local".to_string()),
            PackageOrigin::Repository { revision, .. } => Some(revision.clone()),
            PackageOrigin::Registry {
                display_version, ..
            } => Some(display_version.clone()),
            PackageOrigin::Unknown(_) => None,
        }
    }
}

fn split_qualified(value: &str) -> (Option<String>, String) {
    match value.rsplit_once('@') {
        Some((qualifier, label)) if !qualifier.is_empty() => {
            (Some(qualifier.to_string()), label.to_string())
        }
        _ => (None, value.to_string()),
    }
}

/// Parses the command line form of an origin.
///
/// Accepted forms: `root`, `local`, `local:<path>`, `repository:<revision>`,
/// `repository:<url>@<revision>`, `registry:<version>` and
/// `registry:<identity>@<version>`. Anything else becomes
/// [`PackageOrigin::Unknown`].
impl FromStr for PackageOrigin {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (kind, value) = match s.split_once(':') {
            Some((kind, value)) => (kind, Some(value)),
            None => (s, None),
        };

        let origin = match (kind, value) {
            ("root", None) => PackageOrigin::Root,
            ("local", None) => PackageOrigin::Local { path: None },
            ("local", Some(path)) => PackageOrigin::Local {
                path: Some(PathBuf::from(path)),
            },
            ("repository", Some(value)) => {
                let (url, revision) = split_qualified(value);
                PackageOrigin::Repository { url, revision }
            }
            ("registry", Some(value)) => {
                let (identity, display_version) = split_qualified(value);
                PackageOrigin::Registry {
                    identity,
                    display_version,
                }
            }
            _ => PackageOrigin::Unknown(s.to_string()),
        };

        Ok(origin)
    }
}

impl Display for PackageOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageOrigin::Root => f.write_str("root"),
            PackageOrigin::Local { path: None } => f.write_str("local"),
            PackageOrigin::Local { path: Some(path) } => write!(f, "local({})", path.display()),
            PackageOrigin::Repository { url, revision } => match url {
                Some(url) => write!(f, "repository({url}, {revision})"),
                None => write!(f, "repository({revision})"),
            },
            PackageOrigin::Registry {
                identity,
                display_version,
            } => match identity {
                Some(identity) => write!(f, "registry({identity}, {display_version})"),
                None => write!(f, "registry({display_version})"),
            },
            PackageOrigin::Unknown(raw) => write!(f, "unknown({raw})"),
        }
    }
}

/// Renders the generated Swift declaration for a version label.
pub fn render_version_source(version_name: Option<&str>) -> String {
    match version_name {
        Some(version) => format!(r#"let currentScipioVersion: String? = "{version}""#),
        None => "let currentScipioVersion: String? = nil".to_string(),
    }
}

/// Destination for generated source files.
pub trait GeneratedArtifactWriter {
    /// Replaces the artifact `file_name` with `contents`.
    fn write_artifact(&mut self, file_name: &str, contents: &str) -> Result<()>;
}

/// Writes generated artifacts into a directory on disk.
#[derive(Clone, Debug)]
pub struct FsArtifactWriter {
    output_dir: PathBuf,
}

impl FsArtifactWriter {
    /// Creates a writer for `output_dir`. The directory is created on the
    /// first write.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Full path of an artifact written by this writer.
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

impl GeneratedArtifactWriter for FsArtifactWriter {
    fn write_artifact(&mut self, file_name: &str, contents: &str) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        std::fs::write(self.artifact_path(file_name), contents)?;
        Ok(())
    }
}

/// Resolves the version for `origin` and writes [`GENERATED_FILE_NAME`].
///
/// Always writes, even when the contents would be unchanged. Returns the
/// resolved label.
pub fn generate_version_file<W: GeneratedArtifactWriter + ?Sized>(
    origin: &PackageOrigin,
    writer: &mut W,
) -> Result<Option<String>> {
    let version_name = origin.version_name();

    log::info!("Package origin: {}", origin);
    log::info!(
        "Current scipio version is {}",
        version_name.as_deref().unwrap_or("unknown")
    );

    let contents = render_version_source(version_name.as_deref());
    writer.write_artifact(GENERATED_FILE_NAME, &contents)?;

    Ok(version_name)
}

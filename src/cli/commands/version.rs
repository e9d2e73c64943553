//! `scipio generate-version`

use crate::cli::GenerateVersionArgs;
use crate::error::Result;
use crate::version::{FsArtifactWriter, GENERATED_FILE_NAME, generate_version_file};

/// Writes the generated version source into the output directory.
pub fn execute(args: &GenerateVersionArgs) -> Result<i32> {
    let mut writer = FsArtifactWriter::new(&args.output_dir);
    let version = generate_version_file(&args.origin, &mut writer)?;

    println!(
        "{} ({})",
        writer.artifact_path(GENERATED_FILE_NAME).display(),
        version.as_deref().unwrap_or("unknown")
    );

    Ok(0)
}

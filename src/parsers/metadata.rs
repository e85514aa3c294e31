use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::QuestionSetMetadata;
use crate::parsers::values::describe_value;
use crate::utils::{METADATA_FILE_NAME, metadata_path, validate_file_size};

/// Why a question set produced no summary record
///
/// The `Display` text is what follows `✗ <identifier>: ` on the console.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// The identifier is not a plain directory name (empty, `..`, contains `/`).
    #[error("Error - {message}")]
    InvalidIdentifier { message: String },

    /// `<identifier>/questions.yaml` does not exist.
    #[error("{} not found", METADATA_FILE_NAME)]
    MissingMetadataFile { path: PathBuf },

    /// The file exists but could not be read, or is too large.
    #[error("Error - {message}")]
    Unreadable { path: PathBuf, message: String },

    /// The file is not valid YAML or not a mapping of the expected fields.
    #[error("Error - {message}")]
    MetadataParseError { path: PathBuf, message: String },
}

/// Load the metadata for one question set
///
/// Looks for `<questions_dir>/<identifier>/questions.yaml`. Every failure is
/// reported as a [`SkipReason`] so the caller can carry on with the next set.
pub fn load_metadata(
    questions_dir: &Path,
    identifier: &str,
) -> std::result::Result<QuestionSetMetadata, SkipReason> {
    let path = metadata_path(questions_dir, identifier)
        .map_err(|e| SkipReason::InvalidIdentifier { message: format!("{:#}", e) })?;

    if !path.exists() {
        return Err(SkipReason::MissingMetadataFile { path });
    }

    let content = match read_metadata_file(&path) {
        Ok(content) => content,
        Err(e) => return Err(SkipReason::Unreadable { path, message: format!("{:#}", e) }),
    };

    match parse_metadata(&content) {
        Ok(metadata) => {
            debug!(path = %path.display(), "loaded question set metadata");
            Ok(metadata)
        }
        Err(e) => Err(SkipReason::MetadataParseError { path, message: format!("{:#}", e) }),
    }
}

/// Parse the contents of a `questions.yaml` file
///
/// The document must be a mapping. An empty file, a bare scalar or a
/// top-level sequence are rejected.
pub fn parse_metadata(content: &str) -> Result<QuestionSetMetadata> {
    let value: Value = serde_yaml::from_str(content)?;

    if !value.is_mapping() {
        bail!("expected a mapping at the top level, found {}", describe_value(&value));
    }

    Ok(serde_yaml::from_value(value)?)
}

fn read_metadata_file(path: &Path) -> Result<String> {
    // Open once and check size on the handle to avoid TOCTOU
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open metadata file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read metadata file: {}", path.display()))?;
    Ok(content)
}

use std::fs::File;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};

/// File holding the ordering list before a run and the summaries after it
pub const INDEX_FILE_NAME: &str = "index.yaml";

/// Per-set metadata file, one per question-set subdirectory
pub const METADATA_FILE_NAME: &str = "questions.yaml";

// Maximum file size for metadata files: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Path of the index file inside a questions directory
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use question_index::index_path;
///
/// let path = index_path(Path::new("public/questions"));
/// assert_eq!(path, PathBuf::from("public/questions/index.yaml"));
/// ```
pub fn index_path(questions_dir: &Path) -> PathBuf {
    questions_dir.join(INDEX_FILE_NAME)
}

/// Validates that an identifier names a single directory directly below the questions dir
///
/// # Errors
///
/// Returns an error if the identifier:
/// - Is empty
/// - Contains a path separator (`/` or `\`)
/// - Is `.` or `..`, or otherwise not a plain path component
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        bail!("Identifier is empty");
    }

    // Reject both separators regardless of platform so index files stay portable
    if identifier.contains(['/', '\\']) {
        bail!("Identifier contains a path separator: {}", identifier);
    }

    let mut components = Path::new(identifier).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("Identifier is not a plain directory name: {}", identifier),
    }
}

/// Path of `questions.yaml` for a question set, after validating the identifier
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use question_index::metadata_path;
///
/// let path = metadata_path(Path::new("public/questions"), "binary")?;
/// assert_eq!(path, PathBuf::from("public/questions/binary/questions.yaml"));
/// assert!(metadata_path(Path::new("public/questions"), "../etc").is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn metadata_path(questions_dir: &Path, identifier: &str) -> Result<PathBuf> {
    validate_identifier(identifier)?;
    Ok(questions_dir.join(identifier).join(METADATA_FILE_NAME))
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

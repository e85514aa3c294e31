//! Index persistence: read the ordering list, write summaries atomically

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde_yaml::Value;

use crate::models::QuestionIndex;
use crate::parsers::values::{describe_value, scalar_to_text};
use crate::utils::validate_file_size;

const QUESTION_SETS_KEY: &str = "questionSets";
const ID_KEY: &str = "id";

/// Read the ordering list from an existing `index.yaml`
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or larger than 10MB, or
/// if its content is rejected by [`parse_ordering`]. Callers treat this as
/// fatal: without an ordering there is nothing safe to write.
pub fn read_ordering(index_path: &Path) -> Result<Vec<String>> {
    let content = read_index_file(index_path)
        .with_context(|| format!("Failed to read index file: {}", index_path.display()))?;

    parse_ordering(&content)
        .with_context(|| format!("Failed to parse index file: {}", index_path.display()))
}

/// Extract identifiers from the `questionSets` field of an index document
///
/// Entries may be plain identifiers (a hand-written index) or records with an
/// `id` key (an index this tool generated). A null `questionSets` value is an
/// empty ordering; a missing key is an error.
pub fn parse_ordering(content: &str) -> Result<Vec<String>> {
    let document: Value = serde_yaml::from_str(content).context("Invalid YAML")?;

    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        other => bail!(
            "Expected a mapping with a `{}` key, found {}",
            QUESTION_SETS_KEY,
            describe_value(&other)
        ),
    };

    let entries = match mapping.get(QUESTION_SETS_KEY) {
        None => bail!("Missing `{}` key", QUESTION_SETS_KEY),
        Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Sequence(entries)) => entries,
        Some(other) => {
            bail!("`{}` must be a sequence, found {}", QUESTION_SETS_KEY, describe_value(other))
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            ordering_identifier(entry).with_context(|| {
                format!("Invalid entry #{} in `{}`", position + 1, QUESTION_SETS_KEY)
            })
        })
        .collect()
}

fn read_index_file(index_path: &Path) -> Result<String> {
    // Same size policy as the metadata files, checked on the open handle
    let mut file = File::open(index_path)?;
    validate_file_size(&file, index_path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

fn ordering_identifier(entry: &Value) -> Result<String> {
    match entry {
        Value::Mapping(record) => {
            let id = record
                .get(ID_KEY)
                .ok_or_else(|| anyhow!("Record has no `{}` key", ID_KEY))?;
            scalar_to_text(id).ok_or_else(|| {
                anyhow!("Record `{}` must be a scalar, found {}", ID_KEY, describe_value(id))
            })
        }
        other => scalar_to_text(other).ok_or_else(|| {
            anyhow!(
                "Expected an identifier or a record with `{}`, found {}",
                ID_KEY,
                describe_value(other)
            )
        }),
    }
}

/// Render an index as block-style YAML with keys in declaration order
pub fn render_index(index: &QuestionIndex) -> Result<String> {
    serde_yaml::to_string(index).context("Failed to serialize index")
}

/// Save an index atomically (temp file + rename)
pub fn save_index(index_path: &Path, index: &QuestionIndex) -> Result<()> {
    let rendered = render_index(index)?;

    let file_name = index_path
        .file_name()
        .ok_or_else(|| anyhow!("Index path has no file name: {}", index_path.display()))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = index_path.with_file_name(temp_name);

    fs::write(&temp_path, rendered)
        .with_context(|| format!("Failed to write index temp file: {}", temp_path.display()))?;
    if let Err(e) = fs::rename(&temp_path, index_path) {
        // Don't leave a stray temp file next to the index
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| {
            format!("Failed to rename index temp file: {}", temp_path.display())
        });
    }

    Ok(())
}

//! Index builder for question-set metadata.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for build tools:
//!
//! - **Per-set errors**: Missing or malformed `questions.yaml` files are reported with a
//!   `✗` notice and skipped. They never fail the rebuild.
//! - **Console errors**: Failing to write a notice to the output stream is the only error
//!   returned, since the operator would otherwise get no feedback at all.
//! - **User feedback**: One `✓`/`✗` line per identifier, in processing order.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::models::{QuestionIndex, QuestionSetSummary};
use crate::parsers::values::display_value;
use crate::parsers::{SkipReason, load_metadata};
use crate::utils::single_line;

/// An identifier that produced no summary record
#[derive(Debug)]
pub struct SkippedSet {
    pub identifier: String,
    pub reason: SkipReason,
}

/// Result of one rebuild pass
#[derive(Debug, Default)]
pub struct RebuildOutcome {
    /// Summary records, in the same relative order as the ordering list
    pub index: QuestionIndex,
    /// Identifiers that were skipped, in processing order
    pub skipped: Vec<SkippedSet>,
}

/// Rebuild the question-set index from per-set metadata
///
/// Visits every identifier in `ordering`, loads
/// `<questions_dir>/<identifier>/questions.yaml` and projects it into a
/// [`QuestionSetSummary`], substituting defaults for absent fields. A notice is
/// written to `out` for each identifier as it is processed:
///
/// - `✓ <identifier>: <title>` when a record was produced
/// - `✗ <identifier>: <reason>` when the set was skipped
///
/// Nothing is written to disk here; pass the returned index to
/// [`crate::index_storage::save_index`].
///
/// # Arguments
///
/// * `questions_dir` - Directory holding one subdirectory per question set
/// * `ordering` - Identifiers in the order they should appear in the index
/// * `out` - Stream receiving the progress notices (stdout for the CLI)
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use question_index::rebuild_index;
///
/// let ordering = vec!["intro".to_string(), "advanced".to_string()];
/// let outcome = rebuild_index(Path::new("public/questions"), &ordering, &mut std::io::stdout())?;
/// println!("{} records, {} skipped", outcome.index.len(), outcome.skipped.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn rebuild_index<W: Write>(
    questions_dir: &Path,
    ordering: &[String],
    out: &mut W,
) -> Result<RebuildOutcome> {
    let mut outcome = RebuildOutcome::default();

    for identifier in ordering {
        match load_metadata(questions_dir, identifier) {
            Ok(metadata) => {
                let summary = QuestionSetSummary::from_metadata(identifier, metadata);
                debug!(identifier = %identifier, id = ?summary.id, "projected question set");

                let title = display_value(&summary.title);
                writeln!(out, "✓ {}: {}", single_line(identifier), single_line(&title))
                    .context("Failed to write progress notice")?;
                outcome.index.push(summary);
            }
            Err(reason) => {
                info!(identifier = %identifier, "skipping question set: {}", reason);

                writeln!(out, "✗ {}: {}", single_line(identifier), single_line(&reason.to_string()))
                    .context("Failed to write progress notice")?;
                outcome.skipped.push(SkippedSet { identifier: identifier.clone(), reason });
            }
        }
    }

    info!(
        "Rebuilt index with {} question sets ({} skipped)",
        outcome.index.len(),
        outcome.skipped.len()
    );

    Ok(outcome)
}

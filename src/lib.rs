//! Question Index - Regenerate a question-set index from per-set metadata
//!
//! A question directory holds one subdirectory per question set, each with a
//! `questions.yaml`, plus an `index.yaml` whose `questionSets` field lists the sets
//! in display order. This library rebuilds that index:
//!
//! - Reading the ordering list from the existing `index.yaml`
//! - Loading each set's `questions.yaml` and projecting its descriptive fields
//! - Substituting defaults for absent fields
//! - Writing the summaries back to `index.yaml` in the original order
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use question_index::{index_path, read_ordering, rebuild_index, save_index};
//!
//! let questions_dir = Path::new("public/questions");
//! let ordering = read_ordering(&index_path(questions_dir))?;
//! let outcome = rebuild_index(questions_dir, &ordering, &mut std::io::stdout())?;
//! save_index(&index_path(questions_dir), &outcome.index)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use index_storage::{read_ordering, render_index, save_index};
pub use indexer::{RebuildOutcome, rebuild_index};
pub use models::{QuestionIndex, QuestionSetMetadata, QuestionSetSummary};
pub use parsers::SkipReason;
pub use utils::paths::{index_path, metadata_path};

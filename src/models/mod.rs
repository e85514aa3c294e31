//! Data models for question-set metadata and the generated index.
//!
//! - [`QuestionSetMetadata`] - Optional descriptive fields read from `questions.yaml`
//! - [`QuestionSetSummary`] - The seven-field record written for each set
//! - [`QuestionIndex`] - The whole `index.yaml` document produced by a rebuild
//!
//! Field values are `serde_yaml::Value`s so whatever a metadata file holds is
//! copied into the index unchanged.

pub mod index;
pub mod question_set;

pub use index::QuestionIndex;
pub use question_set::{
    DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, DEFAULT_DIFFICULTY, DEFAULT_ESTIMATED_TIME,
    DEFAULT_ICON, QuestionSetMetadata, QuestionSetSummary,
};

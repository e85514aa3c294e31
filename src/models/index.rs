use serde::{Deserialize, Serialize};

use crate::models::QuestionSetSummary;
use crate::parsers::values::display_value;

/// Contents of `index.yaml` after a rebuild
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionIndex {
    pub question_sets: Vec<QuestionSetSummary>,
}

impl QuestionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, summary: QuestionSetSummary) {
        self.question_sets.push(summary);
    }

    pub fn len(&self) -> usize {
        self.question_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.question_sets.is_empty()
    }

    /// Identifiers in index order, as a later run would read them back
    pub fn identifiers(&self) -> Vec<String> {
        self.question_sets.iter().map(|s| display_value(&s.id)).collect()
    }
}

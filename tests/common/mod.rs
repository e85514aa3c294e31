//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tempfile::TempDir;

/// Builder for creating test questions directory structures
pub struct QuestionsDirBuilder {
    temp_dir: TempDir,
}

impl QuestionsDirBuilder {
    /// Create a new builder with an empty questions directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the questions directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write index.yaml with the given raw content
    pub fn with_index(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("index.yaml"), content)
            .expect("Failed to write index.yaml");
        self
    }

    /// Write index.yaml listing the given identifiers
    pub fn with_ordering(self, identifiers: &[&str]) -> Self {
        let content = if identifiers.is_empty() {
            "questionSets: []\n".to_string()
        } else {
            let lines: Vec<String> = identifiers.iter().map(|id| format!("  - {}", id)).collect();
            format!("questionSets:\n{}\n", lines.join("\n"))
        };
        self.with_index(&content)
    }

    /// Add `<identifier>/questions.yaml` built from metadata fields
    pub fn with_question_set(self, identifier: &str, metadata: &MetadataBuilder) -> Self {
        self.with_raw_metadata(identifier, &metadata.to_yaml())
    }

    /// Add `<identifier>/questions.yaml` with raw content
    pub fn with_raw_metadata(self, identifier: &str, content: &str) -> Self {
        let set_dir = self.temp_dir.path().join(identifier);
        fs::create_dir_all(&set_dir).expect("Failed to create question set dir");
        fs::write(set_dir.join("questions.yaml"), content).expect("Failed to write questions.yaml");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for QuestionsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `questions.yaml` content
#[derive(Default)]
pub struct MetadataBuilder {
    fields: Mapping,
}

impl MetadataBuilder {
    /// Create metadata with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary field to a string value
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(Value::from(key), Value::from(value));
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.field("id", id)
    }

    pub fn title(self, title: &str) -> Self {
        self.field("title", title)
    }

    pub fn description(self, description: &str) -> Self {
        self.field("description", description)
    }

    pub fn icon(self, icon: &str) -> Self {
        self.field("icon", icon)
    }

    pub fn difficulty(self, difficulty: &str) -> Self {
        self.field("difficulty", difficulty)
    }

    pub fn category(self, category: &str) -> Self {
        self.field("category", category)
    }

    /// Set estimatedTime as an integer
    pub fn estimated_time(mut self, minutes: u64) -> Self {
        self.fields.insert(Value::from("estimatedTime"), Value::from(minutes));
        self
    }

    /// Add a questions list, which the index ignores
    pub fn with_questions(mut self, count: usize) -> Self {
        let questions: Vec<Value> = (0..count)
            .map(|i| {
                let mut question = Mapping::new();
                question.insert(Value::from("id"), Value::from(format!("q{}", i + 1)));
                question.insert(Value::from("type"), Value::from("single-choice"));
                Value::Mapping(question)
            })
            .collect();
        self.fields.insert(Value::from("questions"), Value::Sequence(questions));
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(&self.fields).expect("Failed to serialize metadata")
    }
}

/// Helper to create a realistic questions directory with sample data
pub fn realistic_questions_dir() -> TempDir {
    QuestionsDirBuilder::new()
        .with_ordering(&["binary", "network", "database"])
        .with_question_set(
            "binary",
            &MetadataBuilder::new()
                .id("binary")
                .title("2進数と16進数")
                .description("基数変換の基礎")
                .icon("🔢")
                .difficulty("easy")
                .estimated_time(15)
                .category("基礎理論")
                .with_questions(3),
        )
        .with_question_set(
            "network",
            &MetadataBuilder::new().title("ネットワーク").category("ネットワーク").with_questions(2),
        )
        .with_question_set("database", &MetadataBuilder::new().title("データベース"))
        .build()
}

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

pub const DEFAULT_DESCRIPTION: &str = "";
pub const DEFAULT_ICON: &str = "📝";
pub const DEFAULT_DIFFICULTY: &str = "medium";
pub const DEFAULT_ESTIMATED_TIME: u64 = 10;
pub const DEFAULT_CATEGORY: &str = "一般";

/// Descriptive fields of a `questions.yaml` file
///
/// Values are kept exactly as written (`estimatedTime: 7.5`, `title: [a, b]`).
/// An absent key and an explicit `null` both deserialize to `None`. Keys other
/// than these (the questions themselves, tags, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetMetadata {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub icon: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(default)]
    pub estimated_time: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
}

/// One entry of the generated index
///
/// Field order here is the key order written to `index.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetSummary {
    pub id: Value,
    pub title: Value,
    pub description: Value,
    pub icon: Value,
    pub difficulty: Value,
    pub estimated_time: Value,
    pub category: Value,
}

impl QuestionSetSummary {
    /// Project metadata into a summary, filling absent fields with defaults
    ///
    /// `identifier` is the name the set was looked up under. It stands in for
    /// both a missing `id` and a missing `title`.
    pub fn from_metadata(identifier: &str, metadata: QuestionSetMetadata) -> Self {
        Self {
            id: metadata.id.unwrap_or_else(|| Value::from(identifier)),
            title: metadata.title.unwrap_or_else(|| Value::from(identifier)),
            description: metadata.description.unwrap_or_else(|| Value::from(DEFAULT_DESCRIPTION)),
            icon: metadata.icon.unwrap_or_else(|| Value::from(DEFAULT_ICON)),
            difficulty: metadata.difficulty.unwrap_or_else(|| Value::from(DEFAULT_DIFFICULTY)),
            estimated_time: metadata
                .estimated_time
                .unwrap_or_else(|| Value::from(DEFAULT_ESTIMATED_TIME)),
            category: metadata.category.unwrap_or_else(|| Value::from(DEFAULT_CATEGORY)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<Value> {
        Some(Value::from(s))
    }

    #[test]
    fn test_from_metadata_all_defaults() {
        let summary = QuestionSetSummary::from_metadata("network", QuestionSetMetadata::default());

        assert_eq!(summary.id, "network");
        assert_eq!(summary.title, "network");
        assert_eq!(summary.description, "");
        assert_eq!(summary.icon, "📝");
        assert_eq!(summary.difficulty, "medium");
        assert_eq!(summary.estimated_time, Value::from(10u64));
        assert_eq!(summary.category, "一般");
    }

    #[test]
    fn test_from_metadata_title_only() {
        let metadata = QuestionSetMetadata { title: text("Foo"), ..Default::default() };
        let summary = QuestionSetSummary::from_metadata("foo-set", metadata);

        assert_eq!(
            summary,
            QuestionSetSummary {
                id: Value::from("foo-set"),
                title: Value::from("Foo"),
                description: Value::from(""),
                icon: Value::from("📝"),
                difficulty: Value::from("medium"),
                estimated_time: Value::from(10u64),
                category: Value::from("一般"),
            }
        );
    }

    #[test]
    fn test_from_metadata_prefers_own_id() {
        let metadata = QuestionSetMetadata { id: text("db-basics"), ..Default::default() };
        let summary = QuestionSetSummary::from_metadata("database", metadata);

        assert_eq!(summary.id, "db-basics");
        // Title still falls back to the lookup identifier, not the metadata id
        assert_eq!(summary.title, "database");
    }

    #[test]
    fn test_from_metadata_keeps_every_field() {
        let metadata = QuestionSetMetadata {
            id: text("binary"),
            title: text("2進数"),
            description: text("基数変換の練習"),
            icon: text("🔢"),
            difficulty: text("easy"),
            estimated_time: Some(Value::from(15u64)),
            category: text("基礎理論"),
        };
        let summary = QuestionSetSummary::from_metadata("ignored", metadata);

        assert_eq!(summary.id, "binary");
        assert_eq!(summary.title, "2進数");
        assert_eq!(summary.description, "基数変換の練習");
        assert_eq!(summary.icon, "🔢");
        assert_eq!(summary.difficulty, "easy");
        assert_eq!(summary.estimated_time, Value::from(15u64));
        assert_eq!(summary.category, "基礎理論");
    }

    #[test]
    fn test_from_metadata_keeps_non_string_values() {
        let metadata = QuestionSetMetadata {
            difficulty: Some(Value::from(3u64)),
            estimated_time: Some(Value::from(7.5)),
            ..Default::default()
        };
        let summary = QuestionSetSummary::from_metadata("typed", metadata);

        assert_eq!(summary.difficulty, Value::from(3u64));
        assert_eq!(summary.estimated_time, Value::from(7.5));
    }

    #[test]
    fn test_empty_string_is_not_replaced_by_default() {
        let metadata = QuestionSetMetadata { icon: text(""), ..Default::default() };
        let summary = QuestionSetSummary::from_metadata("x", metadata);
        assert_eq!(summary.icon, "");
    }
}

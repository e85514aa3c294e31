//! Helpers for reading loosely typed YAML values

use serde_yaml::Value;

/// Textual form of a YAML scalar, or `None` for null and collections
pub fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Short human description of a YAML value's kind, for error messages
pub fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Render any YAML value as compact one-line text for console notices
///
/// # Examples
///
/// ```
/// use question_index::parsers::values::display_value;
/// use serde_yaml::Value;
///
/// let tags: Value = serde_yaml::from_str("[a, b]").unwrap();
/// assert_eq!(display_value(&tags), "[a, b]");
/// assert_eq!(display_value(&Value::from(7.5)), "7.5");
/// ```
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(mapping) => {
            let entries: Vec<String> = mapping
                .iter()
                .map(|(key, value)| format!("{}: {}", display_value(key), display_value(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, display_value(&tagged.value)),
        scalar => scalar_to_text(scalar).unwrap_or_default(),
    }
}

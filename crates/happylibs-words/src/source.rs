//! Word source loading and schema validation.
//!
//! A word source is a JSON object whose keys are category names and whose
//! values are arrays of words:
//!
//! ```json
//! { "nouns": ["cat", "bridge"], "verbs": ["jump", "whisper"] }
//! ```
//!
//! The document is validated once here; everything downstream works on
//! [`Category`] values with a guaranteed shape.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::error::{Result, WordsError};

/// A named list of words, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }
}

/// Read and validate the word source at `path`.
pub fn read_categories(path: &Path) -> Result<Vec<Category>> {
    let content = std::fs::read_to_string(path).map_err(|e| WordsError::io(path, e))?;
    parse_categories(path, &content)
}

/// Parse and validate word source text. `path` is only used in errors.
pub fn parse_categories(path: &Path, content: &str) -> Result<Vec<Category>> {
    let document: Value = serde_json::from_str(content).map_err(|source| WordsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(entries) = document else {
        return Err(WordsError::schema(
            path,
            format!(
                "word source must contain a JSON object, got {}",
                type_name(&document)
            ),
        ));
    };

    let mut categories = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        if name.is_empty() {
            return Err(WordsError::schema(path, "category names must be non-empty"));
        }
        let Value::Array(items) = value else {
            return Err(WordsError::schema(
                path,
                format!("category '{name}' must contain a list of words"),
            ));
        };

        let mut words = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            match item {
                Value::String(word) => words.push(word),
                other => {
                    return Err(WordsError::schema(
                        path,
                        format!(
                            "category '{name}' word {idx} must be a string, got {}",
                            type_name(&other)
                        ),
                    ));
                }
            }
        }

        if words.is_empty() {
            warn!(category = %name, "category has no words");
        }
        categories.push(Category { name, words });
    }

    Ok(categories)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<Vec<Category>> {
        parse_categories(Path::new("words.json"), content)
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let categories = parse(r#"{"verbs": ["run"], "adjectives": [], "nouns": ["cat", "dog"]}"#)
            .unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["verbs", "adjectives", "nouns"]);
        assert_eq!(categories[2].words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_non_list_value_is_schema_error() {
        let error = parse(r#"{"nouns": "cat"}"#).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Schema);
        insta::assert_snapshot!(
            error.to_string(),
            @"invalid word source words.json: category 'nouns' must contain a list of words"
        );
    }

    #[test]
    fn test_top_level_array_is_schema_error() {
        let error = parse(r#"["cat", "dog"]"#).unwrap_err();
        insta::assert_snapshot!(
            error.to_string(),
            @"invalid word source words.json: word source must contain a JSON object, got an array"
        );
    }

    #[test]
    fn test_non_string_word_is_schema_error() {
        let error = parse(r#"{"numbers": ["one", 2]}"#).unwrap_err();
        insta::assert_snapshot!(
            error.to_string(),
            @"invalid word source words.json: category 'numbers' word 1 must be a string, got a number"
        );
    }

    #[test]
    fn test_empty_category_name_is_schema_error() {
        let error = parse(r#"{"": ["cat"]}"#).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_whitespace_category_name_is_accepted() {
        let categories = parse(r#"{" ": ["x"]}"#).unwrap();
        assert_eq!(categories, vec![Category::new(" ", vec!["x".to_string()])]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let error = parse("{not valid json").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let error = read_categories(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_read_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, r#"{"nouns": ["cat"]}"#).unwrap();

        let categories = read_categories(&path).unwrap();
        assert_eq!(categories, vec![Category::new("nouns", vec!["cat".to_string()])]);
    }
}

use serde_json::Value;

use super::post::{DEFAULT_AUTHOR, DEFAULT_TITLE};

/// The writable fields of a post, with defaults already substituted.
///
/// Request bodies are coerced into a draft rather than rejected: a missing,
/// empty or mistyped field takes its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            tags: Vec::new(),
        }
    }
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title
            },
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        if !author.is_empty() {
            self.author = author;
        }
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Parse a raw request body. Anything that is not a JSON object yields the defaults.
    pub fn from_json_lenient(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    /// Extract the writable fields from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let text = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let tags = value
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let defaults = Self::default();
        Self {
            title: text("title").unwrap_or(defaults.title),
            content: text("content").unwrap_or(defaults.content),
            author: text("author").unwrap_or(defaults.author),
            tags,
        }
    }
}

//! Error body returned by every failing posts API call.

use serde::{Deserialize, Serialize};

/// `{"error": "...", "details": "..."}`; `details` only accompanies internal failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn post_not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn not_found() -> Self {
        Self::new("Not found")
    }

    pub fn method_not_allowed() -> Self {
        Self::new("Method not allowed")
    }

    pub fn internal_error(details: impl Into<String>) -> Self {
        Self::new("Internal server error").with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_omitted_when_absent() {
        let json = serde_json::to_string(&ErrorBody::post_not_found()).unwrap();
        assert_eq!(json, r#"{"error":"Post not found"}"#);
    }

    #[test]
    fn test_internal_error_carries_details() {
        let body = ErrorBody::internal_error("table missing");
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.details.as_deref(), Some("table missing"));
    }
}

//! Client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    /// True when the API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_is_transport() {
        let err = reqwest::Client::new().get("http://").build().unwrap_err();
        let err = ClientError::from(err);

        assert!(matches!(err, ClientError::Transport(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        let err = ClientError::Status {
            status: 404,
            message: "Post not found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API returned 404: Post not found");
    }
}

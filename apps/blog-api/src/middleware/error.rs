//! Error handling - `{error, details}` JSON responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_shared::ErrorBody;
use std::fmt;

/// Application-level error type that converts to JSON error responses.
#[derive(Debug)]
pub enum AppError {
    /// No post with the requested id.
    PostNotFound,
    /// No route for the path.
    RouteNotFound,
    MethodNotAllowed,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::PostNotFound => write!(f, "Post not found"),
            AppError::RouteNotFound => write!(f, "Not found"),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::PostNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::PostNotFound => ErrorBody::post_not_found(),
            AppError::RouteNotFound => ErrorBody::not_found(),
            AppError::MethodNotAllowed => ErrorBody::method_not_allowed(),
            AppError::Internal(details) => {
                tracing::error!("Internal error: {}", details);
                ErrorBody::internal_error(details.as_str())
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<blog_core::error::RepoError> for AppError {
    fn from(err: blog_core::error::RepoError) -> Self {
        use blog_core::error::RepoError;

        match err {
            RepoError::NotFound => AppError::PostNotFound,
            RepoError::Connection(_) | RepoError::Query(_) | RepoError::Misconfigured(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

//! Headers attached to every response, whatever its outcome.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

pub const ALLOWED_METHODS: &str = "OPTIONS,POST,GET,PUT,DELETE";

/// JSON content type plus permissive cross-origin headers.
///
/// Headers a handler already set are left alone.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::CONTENT_TYPE, "application/json"))
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
}

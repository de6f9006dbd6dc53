//! Domain entities - the core business objects.

mod draft;
mod post;
pub mod timestamp;

pub use draft::PostDraft;
pub use post::{DEFAULT_AUTHOR, DEFAULT_TITLE, Post};

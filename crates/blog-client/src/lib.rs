//! # Blog Client
//!
//! Client side of the posts API: an HTTP client port with a `reqwest`
//! implementation, and the post browser state machine that front-ends drive.

pub mod api;
pub mod browser;
pub mod error;
pub mod form;

pub use api::{HttpPostsApi, PostsApi};
pub use browser::{LoadTicket, Notice, Phase, PostBrowser};
pub use error::ClientError;
pub use form::PostForm;

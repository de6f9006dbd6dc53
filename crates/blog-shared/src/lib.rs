//! # Blog Shared
//!
//! Wire types shared between the post gateway and its clients.

pub mod dto;
pub mod response;

pub use dto::PostRequest;
pub use response::ErrorBody;

//! # Blog Core
//!
//! The domain layer of the blog posts service.
//! This crate holds the post model and the record store ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{Post, PostDraft};
pub use error::RepoError;

//! # Pressroom Core
//!
//! The domain layer of Pressroom.
//! Posts, categories, and the storage port; no I/O lives here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;

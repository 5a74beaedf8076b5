//! # Pressroom Shared
//!
//! Wire types for the Pressroom HTTP API.
//! Kept free of domain types so clients can depend on this crate alone.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

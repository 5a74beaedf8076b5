//! # Pressroom Infrastructure
//!
//! Concrete implementations of the post store port defined in `pressroom-core`.
//!
//! - [`JsonFilePostStore`] - the durable store, one JSON file holding every post
//! - [`InMemoryPostStore`] - same semantics without persistence

pub mod store;

pub use store::{InMemoryPostStore, JsonFilePostStore, ReadErrorPolicy, StoreConfig};

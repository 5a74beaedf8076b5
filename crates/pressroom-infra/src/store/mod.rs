//! Post store implementations - JSON file and in-memory.

mod config;
mod json_file;
mod memory;

pub use config::{ReadErrorPolicy, StoreConfig};
pub use json_file::JsonFilePostStore;
pub use memory::InMemoryPostStore;

//! Key-value stores backing the persisted session - a JSON file and an in-memory fallback.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

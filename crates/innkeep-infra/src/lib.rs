//! # Innkeep Infrastructure
//!
//! Concrete implementations of the ports defined in `innkeep-core`:
//! the REST client for the hotel backend and the persisted key-value stores.

pub mod http;
pub mod storage;

pub use http::ApiClient;
pub use storage::{InMemoryStore, JsonFileStore};

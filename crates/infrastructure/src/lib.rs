//! Infrastructure layer for TaskForge
//!
//! Concrete implementations of the ports defined in the workflow layer:
//! the JSON file task store used by the server, an in-memory store for
//! tests, and key-value storages for the board client.

pub mod adapters;

pub use adapters::{
    FileKeyValueStorage, InMemoryKeyValueStorage, InMemoryTaskStore, JsonFileTaskStore,
};

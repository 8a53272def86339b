mod in_memory;
mod json_file;
mod key_value;

pub use in_memory::InMemoryTaskStore;
pub use json_file::JsonFileTaskStore;
pub use key_value::{FileKeyValueStorage, InMemoryKeyValueStorage};

pub mod config;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_store::LocalStore;

pub use config::ContactsConfig;
pub use kv::{keys, read_json, read_json_records, remove_key, write_json, KeyValueStore};

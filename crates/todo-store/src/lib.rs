//! Todo Store
//!
//! Platform-independent core of Lane Notes:
//! - model: lanes and todo items
//! - storage: key-value adapter the collection is persisted through
//! - store: the authoritative collection and its mutations
//! - debounce: trailing-edge coalescing of rapid edits

mod config;
mod debounce;
mod error;
mod model;
mod storage;
mod store;


pub use config::StoreConfig;
pub use debounce::Debouncer;
pub use error::{StoreError, StoreResult};
pub use model::{Lane, TodoField, TodoId, TodoItem};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::TodoStore;

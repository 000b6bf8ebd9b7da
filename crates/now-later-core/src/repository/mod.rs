//! Repository Layer
//!
//! Data access abstractions and implementations.

mod memory;
mod state_repo;
mod traits;

pub use memory::MemoryStore;
pub use state_repo::StateRepository;
pub use traits::{KeyValueStore, StorageError, StorageResult};

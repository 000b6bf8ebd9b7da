//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for key-value persistence.
//! Implementations can use browser localStorage, memory, etc.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Stored value does not match the expected shape
    #[error("value under `{key}` could not be (de)serialized: {message}")]
    Serialization { key: String, message: String },
    /// Backend refused the operation (missing, quota exceeded, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Whole-value key-value store holding JSON-serializable values
pub trait KeyValueStore {
    /// `Ok(None)` when the key is absent
    fn get<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>>;

    /// Replaces the value under `key`
    fn set<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

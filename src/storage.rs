//! Browser localStorage adapter for the core `KeyValueStore`.

use gloo_storage::errors::StorageError as GlooError;
use gloo_storage::{LocalStorage, Storage};
use now_later_core::{KeyValueStore, StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn map_err(key: &str, err: GlooError) -> StorageError {
    match err {
        GlooError::SerdeError(e) => StorageError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        },
        other => StorageError::Unavailable(other.to_string()),
    }
}

impl KeyValueStore for BrowserStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match LocalStorage::get(key) {
            Ok(value) => Ok(Some(value)),
            Err(GlooError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(map_err(key, err)),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        LocalStorage::set(key, value).map_err(|e| map_err(key, e))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        LocalStorage::delete(key);
        Ok(())
    }
}

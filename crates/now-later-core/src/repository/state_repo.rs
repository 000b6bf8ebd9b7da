//! State Repository
//!
//! Maps `BoardState` onto four independent keys. State is read once at
//! startup; afterwards only the keys a mutation touched are rewritten.

use chrono::Utc;
use log::{info, warn};
use serde::de::DeserializeOwned;

use super::traits::{KeyValueStore, StorageResult};
use crate::config::{AppConfig, StorageKeys};
use crate::domain::{sample_board, Board, User, DEFAULT_BOARD_ID, DEFAULT_BOARD_NAME};
use crate::service::{BoardState, Touched};

pub struct StateRepository<S> {
    store: S,
    keys: StorageKeys,
    seed_sample_board: bool,
}

impl<S: KeyValueStore> StateRepository<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        Self {
            store,
            keys: config.storage_keys(),
            seed_sample_board: config.seed_sample_board,
        }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads every key, substituting defaults for absent or unreadable values.
    pub fn load(&self) -> BoardState {
        let boards = self
            .read::<Vec<Board>>(&self.keys.boards)
            .unwrap_or_else(|| self.default_boards());
        let current_board_id = self
            .read::<String>(&self.keys.current_board)
            .unwrap_or_else(|| DEFAULT_BOARD_ID.to_string());
        let user = self.read::<Option<User>>(&self.keys.user).flatten();
        let dark_mode = self.read::<bool>(&self.keys.dark_mode).unwrap_or(false);

        info!("loaded {} boards, current board {current_board_id}", boards.len());
        BoardState {
            boards,
            current_board_id,
            user,
            dark_mode,
        }
    }

    fn default_boards(&self) -> Vec<Board> {
        if self.seed_sample_board {
            vec![sample_board(Utc::now())]
        } else {
            vec![Board::with_id(DEFAULT_BOARD_ID, DEFAULT_BOARD_NAME, Vec::new())]
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("ignoring stored `{key}`: {err}");
                None
            }
        }
    }

    /// Writes the touched keys. Every touched key is attempted; the first
    /// failure is returned.
    pub fn persist(&self, state: &BoardState, touched: Touched) -> StorageResult<()> {
        let mut results = Vec::new();
        if touched.boards {
            results.push(self.store.set(&self.keys.boards, &state.boards));
        }
        if touched.current_board {
            results.push(self.store.set(&self.keys.current_board, &state.current_board_id));
        }
        if touched.user {
            results.push(match &state.user {
                Some(user) => self.store.set(&self.keys.user, user),
                None => self.store.remove(&self.keys.user),
            });
        }
        if touched.dark_mode {
            results.push(self.store.set(&self.keys.dark_mode, &state.dark_mode));
        }

        for err in results.iter().filter_map(|r| r.as_ref().err()) {
            warn!("write-through failed: {err}");
        }
        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Quadrant, TaskDraft};
    use crate::repository::{MemoryStore, StorageError};
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    /// Memory-backed store whose writes to one key are refused
    struct RejectingStore {
        inner: MemoryStore,
        rejected_key: String,
    }

    impl KeyValueStore for RejectingStore {
        fn get<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
            self.inner.get(key)
        }

        fn set<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
            if key == self.rejected_key {
                return Err(StorageError::Unavailable("quota exceeded".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            self.inner.remove(key)
        }
    }

    fn setup_repo() -> StateRepository<MemoryStore> {
        StateRepository::new(MemoryStore::new(), &AppConfig::default())
    }

    #[test]
    fn test_empty_store_loads_seeded_defaults() {
        let repo = setup_repo();
        let state = repo.load();

        assert_eq!(state.boards.len(), 1);
        assert_eq!(state.current_board_id, DEFAULT_BOARD_ID);
        assert_eq!(state.current_board().unwrap().name, DEFAULT_BOARD_NAME);
        assert_eq!(state.current_board().unwrap().tasks.len(), 4);
        assert!(state.user.is_none());
        assert!(!state.dark_mode);
        // loading never writes
        assert!(repo.store().is_empty());
    }

    #[test]
    fn test_unseeded_default_board_is_empty() {
        let config = AppConfig {
            seed_sample_board: false,
            ..AppConfig::default()
        };
        let repo = StateRepository::new(MemoryStore::new(), &config);
        let state = repo.load();
        assert_eq!(state.boards.len(), 1);
        assert!(state.boards[0].tasks.is_empty());
    }

    #[test]
    fn test_persist_writes_only_touched_keys() {
        let repo = setup_repo();
        let mut state = repo.load();

        let outcome = state.toggle_dark_mode();
        repo.persist(&state, outcome.touched).unwrap();

        let keys = repo.keys();
        assert!(repo.store().contains(&keys.dark_mode));
        assert!(!repo.store().contains(&keys.boards));
        assert!(!repo.store().contains(&keys.user));
    }

    #[test]
    fn test_write_through_then_reload() {
        let repo = setup_repo();
        let mut state = repo.load();

        let mut draft = TaskDraft::for_quadrant(Quadrant::DoFirst);
        draft.title = "Persist me".into();
        let touched = [
            state.add_task(draft).touched,
            state.create_board("Personal").touched,
            state.login("ada@example.com").touched,
            state.toggle_dark_mode().touched,
        ]
        .into_iter()
        .fold(Touched::NONE, Touched::union);
        repo.persist(&state, touched).unwrap();

        let reloaded = repo.load();
        assert_eq!(reloaded, state);
    }

    #[test]
    fn test_logout_removes_user_key() {
        let repo = setup_repo();
        let mut state = repo.load();

        let outcome = state.continue_as_guest();
        repo.persist(&state, outcome.touched).unwrap();
        assert!(repo.store().contains(&repo.keys().user));

        let outcome = state.logout();
        repo.persist(&state, outcome.touched).unwrap();
        assert!(!repo.store().contains(&repo.keys().user));
        assert!(repo.load().user.is_none());
    }

    #[test]
    fn test_failed_write_still_attempts_other_keys() {
        let keys = AppConfig::default().storage_keys();
        let store = RejectingStore {
            inner: MemoryStore::new(),
            rejected_key: keys.boards.clone(),
        };
        let repo = StateRepository::new(store, &AppConfig::default());
        let mut state = repo.load();

        let outcome = state.create_board("Errands");
        let after_mutation = state.clone();
        let result = repo.persist(&state, outcome.touched);

        assert!(matches!(result, Err(StorageError::Unavailable(_))));
        assert!(!repo.store().inner.contains(&keys.boards));
        assert_eq!(
            repo.store().inner.raw(&keys.current_board),
            Some(format!("\"{}\"", state.current_board_id))
        );
        // the in-memory mutation is kept
        assert_eq!(state, after_mutation);
        assert_eq!(state.current_board().unwrap().name, "Errands");
    }

    #[test]
    fn test_corrupt_values_fall_back_to_defaults() {
        let repo = setup_repo();
        let keys = repo.keys().clone();
        repo.store().insert_raw(&keys.boards, "[{\"broken\":");
        repo.store().insert_raw(&keys.dark_mode, "\"yes\"");
        repo.store().insert_raw(&keys.user, "null");

        let state = repo.load();
        assert_eq!(state.boards[0].id, DEFAULT_BOARD_ID);
        assert!(!state.dark_mode);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_empty_board_list_is_respected() {
        let repo = setup_repo();
        repo.store().insert_raw(&repo.keys().boards, "[]");
        let state = repo.load();
        assert!(state.boards.is_empty());
        assert!(state.current_board().is_none());
    }
}

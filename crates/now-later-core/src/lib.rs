//! Now & Later Core
//!
//! Layered architecture:
//! - domain: boards, tasks, subtasks, users and the quadrant partition
//! - service: the in-memory `BoardState` and its mutation operations
//! - repository: key-value persistence of the state
//! - config: storage prefix, toast timing, seeding

pub mod config;
pub mod domain;
pub mod notice;
pub mod repository;
pub mod service;

pub use config::{AppConfig, StorageKeys};
pub use domain::{
    Board, DomainError, DomainResult, Entity, Partition, Quadrant, Subtask, Task, TaskDraft,
    TaskPatch, User,
};
pub use notice::{Notice, NoticeKind};
pub use repository::{KeyValueStore, MemoryStore, StateRepository, StorageError, StorageResult};
pub use service::{BoardState, Outcome, Touched};

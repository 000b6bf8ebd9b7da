//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has no browser dependencies.

mod board;
mod entity;
mod quadrant;
mod sample;
mod tag;
mod task;
mod user;

pub use board::Board;
pub use entity::{find_by_id, new_id, required, DomainError, DomainResult, Entity};
pub use quadrant::{Partition, Quadrant};
pub use sample::{sample_board, DEFAULT_BOARD_ID, DEFAULT_BOARD_NAME};
pub use tag::{insert_tag, tag_color_index, TAG_PALETTE_SIZE};
pub use task::{due_label, parse_due_date, Subtask, Task, TaskDraft, TaskPatch};
pub use user::{User, GUEST_USER_ID};

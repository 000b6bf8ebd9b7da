//! Board Entity
//!
//! A named, ordered list of tasks. The archive is the subset of completed
//! tasks, not a separate collection.

use serde::{Deserialize, Serialize};

use super::entity::{find_by_id, new_id, Entity};
use super::quadrant::Partition;
use super::task::{Task, TaskPatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Board {
    /// Empty board with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(new_id(), name, Vec::new())
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks,
        }
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        find_by_id(&self.tasks, id)
    }

    /// Merges `patch` into the task; `false` when no task has that id.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                patch.apply_to(task);
                true
            }
            None => false,
        }
    }

    /// Removes the task; `false` when it was not there.
    pub fn remove_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn active_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    pub fn archived_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    /// Drops every completed task and returns how many went.
    pub fn clear_archive(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    pub fn partition(&self) -> Partition<'_> {
        Partition::of(&self.tasks)
    }
}

impl Entity for Board {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(tasks: &[(&str, bool)]) -> Board {
        let tasks = tasks
            .iter()
            .map(|(title, completed)| {
                let mut task = Task::new(*title);
                task.completed = *completed;
                task
            })
            .collect();
        Board::with_id("b", "Board", tasks)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new("Personal");
        assert_eq!(board.name, "Personal");
        assert!(board.tasks.is_empty());
        assert!(!board.id.is_empty());
    }

    #[test]
    fn test_remove_task_is_idempotent() {
        let mut board = board_with(&[("a", false), ("b", false)]);
        let id = board.tasks[0].id.clone();
        assert!(board.remove_task(&id));
        assert!(!board.remove_task(&id));
        assert!(board.task(&id).is_none());
        assert_eq!(board.tasks.len(), 1);
    }

    #[test]
    fn test_update_missing_task_is_noop() {
        let mut board = board_with(&[("a", false)]);
        let before = board.clone();
        assert!(!board.update_task("missing", TaskPatch::completed(true)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_archive_keeps_active() {
        let mut board = board_with(&[("a", true), ("b", false), ("c", true)]);
        assert_eq!(board.archived_tasks().count(), 2);
        assert_eq!(board.clear_archive(), 2);
        assert_eq!(board.archived_tasks().count(), 0);
        let active: Vec<&str> = board.active_tasks().map(|t| t.title.as_str()).collect();
        assert_eq!(active, vec!["b"]);
    }
}

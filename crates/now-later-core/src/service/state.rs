//! Board State
//!
//! The whole in-memory model and every mutation the views can request.
//! Mutations are total: bad input and unknown ids are silent no-ops that
//! report an unchanged `Outcome`.

use chrono::Utc;
use log::debug;

use super::outcome::{Outcome, Touched};
use crate::domain::{
    find_by_id, required, sample_board, Board, Partition, Quadrant, Subtask, Task, TaskDraft,
    TaskPatch, User, DEFAULT_BOARD_ID,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub boards: Vec<Board>,
    pub current_board_id: String,
    pub user: Option<User>,
    pub dark_mode: bool,
}

impl Default for BoardState {
    /// First-run state: the sample board, no user, light mode
    fn default() -> Self {
        Self::new(vec![sample_board(Utc::now())], DEFAULT_BOARD_ID)
    }
}

impl BoardState {
    pub fn new(boards: Vec<Board>, current_board_id: impl Into<String>) -> Self {
        Self {
            boards,
            current_board_id: current_board_id.into(),
            user: None,
            dark_mode: false,
        }
    }

    // ========================
    // Queries
    // ========================

    /// Board matching `current_board_id`, or the first board when that id is
    /// stale.
    pub fn current_board(&self) -> Option<&Board> {
        find_by_id(&self.boards, &self.current_board_id).or_else(|| self.boards.first())
    }

    fn current_board_mut(&mut self) -> Option<&mut Board> {
        let index = self
            .boards
            .iter()
            .position(|b| b.id == self.current_board_id)
            .unwrap_or(0);
        self.boards.get_mut(index)
    }

    pub fn board(&self, id: &str) -> Option<&Board> {
        find_by_id(&self.boards, id)
    }

    /// Task on the current board
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.current_board()?.task(id)
    }

    pub fn partition(&self) -> Partition<'_> {
        self.current_board()
            .map(Board::partition)
            .unwrap_or_default()
    }

    pub fn archived_tasks(&self) -> Vec<&Task> {
        self.current_board()
            .map(|b| b.archived_tasks().collect())
            .unwrap_or_default()
    }

    // ========================
    // Tasks
    // ========================

    /// Appends a task built from `draft` to the current board.
    pub fn add_task(&mut self, draft: TaskDraft) -> Outcome {
        let Ok(task) = draft.into_task() else {
            return Outcome::unchanged();
        };
        let Some(board) = self.current_board_mut() else {
            return Outcome::unchanged();
        };
        debug!("add task {} to board {}", task.id, board.id);
        board.tasks.push(task);
        Outcome::touched(Touched::BOARDS).with_notice("Task added!")
    }

    /// Merges `patch` into a task of the current board.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Outcome {
        if !patch.is_valid() {
            return Outcome::unchanged();
        }
        let completed = patch.completed;
        let Some(board) = self.current_board_mut() else {
            return Outcome::unchanged();
        };
        if !board.update_task(id, patch) {
            debug!("update of unknown task {id} ignored");
            return Outcome::unchanged();
        }
        let outcome = Outcome::touched(Touched::BOARDS);
        match completed {
            Some(true) => outcome.with_notice("Task completed!"),
            Some(false) => outcome.with_notice("Task restored!"),
            None => outcome,
        }
    }

    /// Applies the edit dialog's draft to an existing task.
    pub fn edit_task(&mut self, id: &str, draft: TaskDraft) -> Outcome {
        match draft.into_patch() {
            Ok(patch) => self.update_task(id, patch),
            Err(_) => Outcome::unchanged(),
        }
    }

    pub fn toggle_task(&mut self, id: &str) -> Outcome {
        let Some(completed) = self.find_task(id).map(|t| t.completed) else {
            return Outcome::unchanged();
        };
        self.update_task(id, TaskPatch::completed(!completed))
    }

    pub fn restore_task(&mut self, id: &str) -> Outcome {
        self.update_task(id, TaskPatch::completed(false))
    }

    /// Removes a task; deleting a missing id is a no-op.
    pub fn delete_task(&mut self, id: &str) -> Outcome {
        let removed = self
            .current_board_mut()
            .map(|board| board.remove_task(id))
            .unwrap_or(false);
        if !removed {
            return Outcome::unchanged();
        }
        debug!("deleted task {id}");
        Outcome::touched(Touched::BOARDS).with_notice("Task deleted")
    }

    /// Drops every completed task of the current board.
    pub fn clear_archive(&mut self) -> Outcome {
        let Some(board) = self.current_board_mut() else {
            return Outcome::unchanged();
        };
        let cleared = board.clear_archive();
        debug!("cleared {cleared} archived tasks from board {}", board.id);
        Outcome::touched(Touched::BOARDS).with_notice("Archive cleared")
    }

    /// Drop handler of the matrix. Dropping a task on its own quadrant does
    /// nothing.
    pub fn move_task_to_quadrant(&mut self, id: &str, quadrant: Quadrant) -> Outcome {
        match self.find_task(id) {
            Some(task) if task.quadrant() != quadrant => {}
            _ => return Outcome::unchanged(),
        }
        self.update_task(id, TaskPatch::quadrant(quadrant))
            .with_notice(format!("Task moved to \"{}\" quadrant", quadrant.title()))
    }

    // ========================
    // Subtasks
    // ========================

    fn replace_subtasks(
        &mut self,
        task_id: &str,
        edit: impl FnOnce(&mut Vec<Subtask>) -> bool,
    ) -> Outcome {
        let Some(mut subtasks) = self.find_task(task_id).map(|t| t.subtasks.clone()) else {
            return Outcome::unchanged();
        };
        if !edit(&mut subtasks) {
            return Outcome::unchanged();
        }
        self.update_task(task_id, TaskPatch::subtasks(subtasks))
    }

    pub fn add_subtask(&mut self, task_id: &str, title: &str) -> Outcome {
        let Ok(title) = required("subtask title", title) else {
            return Outcome::unchanged();
        };
        self.replace_subtasks(task_id, |subtasks| {
            subtasks.push(Subtask::new(title));
            true
        })
    }

    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> Outcome {
        self.replace_subtasks(task_id, |subtasks| {
            match subtasks.iter_mut().find(|s| s.id == subtask_id) {
                Some(subtask) => {
                    subtask.completed = !subtask.completed;
                    true
                }
                None => false,
            }
        })
    }

    pub fn delete_subtask(&mut self, task_id: &str, subtask_id: &str) -> Outcome {
        self.replace_subtasks(task_id, |subtasks| {
            let before = subtasks.len();
            subtasks.retain(|s| s.id != subtask_id);
            subtasks.len() != before
        })
    }

    // ========================
    // Boards
    // ========================

    /// Creates an empty board and makes it current.
    pub fn create_board(&mut self, name: &str) -> Outcome {
        let Ok(name) = required("board name", name) else {
            return Outcome::unchanged();
        };
        let board = Board::new(name);
        debug!("created board {} ({})", board.id, board.name);
        self.current_board_id = board.id.clone();
        self.boards.push(board);
        Outcome::touched(Touched::BOARDS.union(Touched::CURRENT_BOARD))
            .with_notice("Board created!")
    }

    pub fn switch_board(&mut self, id: &str) -> Outcome {
        if self.current_board_id == id || self.board(id).is_none() {
            return Outcome::unchanged();
        }
        self.current_board_id = id.to_string();
        Outcome::touched(Touched::CURRENT_BOARD)
    }

    // ========================
    // Session & preferences
    // ========================

    /// Simulated magic-link login.
    pub fn login(&mut self, email: &str) -> Outcome {
        let Ok(user) = User::magic_link(email) else {
            return Outcome::unchanged();
        };
        self.user = Some(user);
        Outcome::touched(Touched::USER)
            .with_notice("Magic link sent! (Demo: automatically logged in)")
    }

    pub fn continue_as_guest(&mut self) -> Outcome {
        self.user = Some(User::guest());
        Outcome::touched(Touched::USER).with_notice("Continuing as guest")
    }

    pub fn logout(&mut self) -> Outcome {
        self.user = None;
        Outcome::touched(Touched::USER).with_notice("Logged out")
    }

    pub fn toggle_dark_mode(&mut self) -> Outcome {
        self.dark_mode = !self.dark_mode;
        Outcome::touched(Touched::DARK_MODE)
    }
}

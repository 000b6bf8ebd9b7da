//! BoardState Mutation Tests
//!
//! Exercises every mutation against a fresh two-board state.

#[cfg(test)]
mod tests {
    use crate::domain::{Board, Quadrant, Task, TaskDraft, TaskPatch, GUEST_USER_ID};
    use crate::service::{BoardState, Touched};
    use pretty_assertions::assert_eq;

    fn task(title: &str, quadrant: Quadrant, completed: bool) -> Task {
        let mut task = Task::new(title);
        task.set_quadrant(quadrant);
        task.completed = completed;
        task
    }

    fn setup_state() -> BoardState {
        let work = Board::with_id(
            "work",
            "Work",
            vec![
                task("Ship release", Quadrant::DoFirst, false),
                task("Write docs", Quadrant::Schedule, false),
                task("Old chore", Quadrant::Eliminate, true),
            ],
        );
        let home = Board::with_id(
            "home",
            "Home",
            vec![task("Water plants", Quadrant::Delegate, false)],
        );
        BoardState::new(vec![work, home], "work")
    }

    fn draft(title: &str, quadrant: Quadrant) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..TaskDraft::for_quadrant(quadrant)
        }
    }

    fn task_id(state: &BoardState, title: &str) -> String {
        state
            .current_board()
            .and_then(|b| b.tasks.iter().find(|t| t.title == title))
            .map(|t| t.id.clone())
            .expect("task should exist")
    }

    #[test]
    fn test_add_task_appends_to_current_board() {
        let mut state = setup_state();
        let outcome = state.add_task(draft("Call bank", Quadrant::Delegate));

        assert_eq!(outcome.touched, Touched::BOARDS);
        assert_eq!(outcome.message(), Some("Task added!"));
        let board = state.current_board().unwrap();
        assert_eq!(board.tasks.len(), 4);
        assert_eq!(board.tasks.last().unwrap().title, "Call bank");
        assert_eq!(state.board("home").unwrap().tasks.len(), 1);
    }

    #[test]
    fn test_add_task_with_blank_title_is_rejected() {
        let mut state = setup_state();
        let before = state.clone();
        let outcome = state.add_task(draft("   ", Quadrant::DoFirst));

        assert!(!outcome.changed());
        assert!(outcome.notice.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_sets_quadrant_membership() {
        let mut state = setup_state();
        let id = task_id(&state, "Ship release");

        state.update_task(
            &id,
            TaskPatch {
                urgent: Some(false),
                ..Default::default()
            },
        );

        let partition = state.partition();
        assert!(partition.get(Quadrant::Schedule).iter().any(|t| t.id == id));
        assert!(!partition.get(Quadrant::DoFirst).iter().any(|t| t.id == id));
    }

    #[test]
    fn test_update_missing_task_is_silent() {
        let mut state = setup_state();
        let before = state.clone();
        let outcome = state.update_task("missing", TaskPatch::completed(true));
        assert!(!outcome.changed());
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_with_blank_title_is_rejected() {
        let mut state = setup_state();
        let id = task_id(&state, "Write docs");
        let outcome = state.update_task(
            &id,
            TaskPatch {
                title: Some(" ".into()),
                completed: Some(true),
                ..Default::default()
            },
        );
        assert!(!outcome.changed());
        assert!(!state.find_task(&id).unwrap().completed);
    }

    #[test]
    fn test_completion_notices() {
        let mut state = setup_state();
        let id = task_id(&state, "Write docs");

        assert_eq!(state.toggle_task(&id).message(), Some("Task completed!"));
        assert!(state.find_task(&id).unwrap().completed);
        assert_eq!(state.restore_task(&id).message(), Some("Task restored!"));
        assert!(!state.find_task(&id).unwrap().completed);

        // plain field edits stay quiet
        let outcome = state.update_task(
            &id,
            TaskPatch {
                title: Some("Docs".into()),
                ..Default::default()
            },
        );
        assert!(outcome.changed());
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_edit_task_replaces_dialog_fields() {
        let mut state = setup_state();
        let id = task_id(&state, "Write docs");
        let mut edit = TaskDraft::from_task(state.find_task(&id).unwrap());
        edit.title = "Write API docs".into();
        edit.add_tag("docs");
        edit.urgent = true;

        let outcome = state.edit_task(&id, edit);
        assert!(outcome.changed());
        let task = state.find_task(&id).unwrap();
        assert_eq!(task.title, "Write API docs");
        assert_eq!(task.tags, vec!["docs".to_string()]);
        assert_eq!(task.quadrant(), Quadrant::DoFirst);
    }

    #[test]
    fn test_archived_task_can_be_edited() {
        let mut state = setup_state();
        let id = task_id(&state, "Old chore");
        let mut edit = TaskDraft::from_task(state.find_task(&id).unwrap());
        edit.title = "Old chore, revisited".into();

        assert!(state.edit_task(&id, edit).changed());
        let task = state.find_task(&id).unwrap();
        assert_eq!(task.title, "Old chore, revisited");
        assert!(task.completed);
        assert_eq!(state.archived_tasks().len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut state = setup_state();
        let id = task_id(&state, "Ship release");

        let first = state.delete_task(&id);
        assert_eq!(first.message(), Some("Task deleted"));
        assert!(state.find_task(&id).is_none());

        let after_first = state.clone();
        let second = state.delete_task(&id);
        assert!(!second.changed());
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_clear_archive() {
        let mut state = setup_state();
        let active_before = state.current_board().unwrap().active_tasks().count();
        assert_eq!(state.archived_tasks().len(), 1);

        let outcome = state.clear_archive();
        assert_eq!(outcome.message(), Some("Archive cleared"));
        assert!(state.archived_tasks().is_empty());
        assert_eq!(
            state.current_board().unwrap().active_tasks().count(),
            active_before
        );
    }

    #[test]
    fn test_drop_on_other_quadrant_moves_task() {
        let mut state = setup_state();
        let id = task_id(&state, "Write docs");
        let created_at = state.find_task(&id).unwrap().created_at;

        let outcome = state.move_task_to_quadrant(&id, Quadrant::Eliminate);
        assert_eq!(outcome.message(), Some("Task moved to \"Eliminate\" quadrant"));
        let task = state.find_task(&id).unwrap();
        assert_eq!(task.quadrant(), Quadrant::Eliminate);
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn test_drop_on_same_quadrant_is_noop() {
        let mut state = setup_state();
        let id = task_id(&state, "Write docs");
        let before = state.clone();

        let outcome = state.move_task_to_quadrant(&id, Quadrant::Schedule);
        assert!(!outcome.changed());
        assert!(outcome.notice.is_none());
        assert_eq!(state, before);

        assert!(!state.move_task_to_quadrant("missing", Quadrant::DoFirst).changed());
    }

    #[test]
    fn test_subtask_lifecycle() {
        let mut state = setup_state();
        let id = task_id(&state, "Ship release");

        assert!(!state.add_subtask(&id, "  ").changed());
        assert!(state.add_subtask(&id, "Tag build").changed());
        assert!(state.add_subtask(&id, "Publish notes").changed());

        let subtasks = state.find_task(&id).unwrap().subtasks.clone();
        assert_eq!(subtasks.len(), 2);

        state.toggle_subtask(&id, &subtasks[0].id);
        let task = state.find_task(&id).unwrap();
        assert!(task.subtasks[0].completed);
        assert!(!task.subtasks[1].completed);
        assert_eq!(task.subtask_progress(), (1, 2));

        state.delete_subtask(&id, &subtasks[0].id);
        let task = state.find_task(&id).unwrap();
        assert_eq!(task.subtasks.len(), 1);
        assert_eq!(task.subtasks[0].title, "Publish notes");

        assert!(!state.delete_subtask(&id, "missing").changed());
        assert!(!state.toggle_subtask(&id, "missing").changed());
        assert!(!state.add_subtask("missing", "Orphan").changed());
    }

    #[test]
    fn test_create_and_switch_board() {
        let mut state = setup_state();

        assert!(!state.create_board(" ").changed());
        let outcome = state.create_board("Personal");
        assert_eq!(outcome.touched, Touched::BOARDS.union(Touched::CURRENT_BOARD));
        assert_eq!(outcome.message(), Some("Board created!"));
        assert_eq!(state.current_board().unwrap().name, "Personal");

        let outcome = state.switch_board("home");
        assert_eq!(outcome.touched, Touched::CURRENT_BOARD);
        assert_eq!(state.current_board().unwrap().name, "Home");

        assert!(!state.switch_board("home").changed());
        assert!(!state.switch_board("nowhere").changed());
        assert_eq!(state.current_board_id, "home");
    }

    #[test]
    fn test_stale_current_board_falls_back_to_first() {
        let mut state = setup_state();
        state.current_board_id = "deleted".into();

        assert_eq!(state.current_board().unwrap().id, "work");
        state.add_task(draft("Fallback", Quadrant::DoFirst));
        assert_eq!(state.board("work").unwrap().tasks.len(), 4);
    }

    #[test]
    fn test_no_boards_makes_task_mutations_noops() {
        let mut state = BoardState::new(Vec::new(), "none");
        assert!(state.current_board().is_none());
        assert!(!state.add_task(draft("Lost", Quadrant::DoFirst)).changed());
        assert!(!state.clear_archive().changed());
        assert!(state.partition().is_empty());
        assert!(state.create_board("First").changed());
        assert!(state.add_task(draft("Found", Quadrant::DoFirst)).changed());
    }

    #[test]
    fn test_session_operations() {
        let mut state = setup_state();

        assert!(!state.login("").changed());
        assert!(state.user.is_none());

        let outcome = state.login("ada@example.com");
        assert_eq!(outcome.touched, Touched::USER);
        assert_eq!(
            state.user.as_ref().unwrap().email.as_deref(),
            Some("ada@example.com")
        );

        state.continue_as_guest();
        assert_eq!(state.user.as_ref().unwrap().id, GUEST_USER_ID);

        assert_eq!(state.logout().message(), Some("Logged out"));
        assert!(state.user.is_none());
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut state = setup_state();
        let outcome = state.toggle_dark_mode();
        assert!(state.dark_mode);
        assert_eq!(outcome.touched, Touched::DARK_MODE);
        assert!(outcome.notice.is_none());
        state.toggle_dark_mode();
        assert!(!state.dark_mode);
    }
}

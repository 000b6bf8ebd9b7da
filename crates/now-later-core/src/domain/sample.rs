//! First-run board, shown until the user has saved boards of their own.

use chrono::{DateTime, Utc};

use super::board::Board;
use super::task::{Subtask, Task};

pub const DEFAULT_BOARD_ID: &str = "default";
pub const DEFAULT_BOARD_NAME: &str = "My Tasks";

fn sample_task(
    id: &str,
    title: &str,
    (urgent, important): (bool, bool),
    tags: &[&str],
    now: DateTime<Utc>,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        due_date: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        urgent,
        important,
        completed: false,
        subtasks: Vec::new(),
        created_at: now,
    }
}

fn sample_subtask(id: &str, title: &str, completed: bool) -> Subtask {
    Subtask {
        id: id.to_string(),
        title: title.to_string(),
        completed,
    }
}

/// One task per quadrant; the Eliminate one is already archived.
pub fn sample_board(now: DateTime<Utc>) -> Board {
    let mut bug = sample_task(
        "1",
        "Fix critical bug in production",
        (true, true),
        &["bug", "production"],
        now,
    );
    bug.description = Some("Users are reporting login issues".into());
    bug.due_date = Some(now.date_naive());

    let mut review = sample_task(
        "2",
        "Plan quarterly review meeting",
        (false, true),
        &["meeting", "quarterly"],
        now,
    );
    review.description = Some("Prepare agenda and schedule with team".into());
    review.subtasks = vec![
        sample_subtask("2a", "Send calendar invites", false),
        sample_subtask("2b", "Prepare presentation", true),
    ];

    let emails = sample_task("3", "Respond to non-urgent emails", (true, false), &["email"], now);

    let mut drawer = sample_task(
        "4",
        "Organize desk drawer",
        (false, false),
        &["organization"],
        now,
    );
    drawer.completed = true;

    Board::with_id(
        DEFAULT_BOARD_ID,
        DEFAULT_BOARD_NAME,
        vec![bug, review, emails, drawer],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quadrant;

    #[test]
    fn test_sample_covers_every_quadrant() {
        let board = sample_board(Utc::now());
        assert_eq!(board.id, DEFAULT_BOARD_ID);
        for q in Quadrant::ALL {
            assert_eq!(board.tasks.iter().filter(|t| t.quadrant() == q).count(), 1);
        }
        assert_eq!(board.archived_tasks().count(), 1);
        assert_eq!(board.partition().get(Quadrant::Eliminate).len(), 0);
    }
}

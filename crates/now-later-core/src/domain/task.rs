//! Task Entity
//!
//! A task lives on exactly one board and owns its subtasks. Its quadrant is
//! computed from `urgent` and `important`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{new_id, required, DomainResult, Entity};
use super::quadrant::Quadrant;
use super::tag::insert_tag;

/// A checklist entry inside a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            completed: false,
        }
    }
}

impl Entity for Subtask {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A task on a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Required, trimmed title
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar date, serialized as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// New task in the Eliminate quadrant, created now
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            description: None,
            due_date: None,
            tags: Vec::new(),
            urgent: false,
            important: false,
            completed: false,
            subtasks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_flags(self.urgent, self.important)
    }

    pub fn set_quadrant(&mut self, quadrant: Quadrant) {
        (self.urgent, self.important) = quadrant.flags();
    }

    /// `(done, total)` subtask counts
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        (done, self.subtasks.len())
    }
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update merged into an existing task.
///
/// `None` leaves a field untouched. The doubly optional fields can clear a
/// value with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub tags: Option<Vec<String>>,
    pub urgent: Option<bool>,
    pub important: Option<bool>,
    pub completed: Option<bool>,
    pub subtasks: Option<Vec<Subtask>>,
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn quadrant(quadrant: Quadrant) -> Self {
        let (urgent, important) = quadrant.flags();
        Self {
            urgent: Some(urgent),
            important: Some(important),
            ..Default::default()
        }
    }

    /// Whole-list replacement of the subtasks
    pub fn subtasks(subtasks: Vec<Subtask>) -> Self {
        Self {
            subtasks: Some(subtasks),
            ..Default::default()
        }
    }

    /// A title present in the patch must not be blank.
    pub fn is_valid(&self) -> bool {
        self.title.as_deref().map_or(true, |t| !t.trim().is_empty())
    }

    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
        if let Some(urgent) = self.urgent {
            task.urgent = urgent;
        }
        if let Some(important) = self.important {
            task.important = important;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(subtasks) = self.subtasks {
            task.subtasks = subtasks;
        }
    }
}

/// Form state of the add/edit task dialogs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub urgent: bool,
    pub important: bool,
}

impl TaskDraft {
    /// Empty draft pre-seeded with a quadrant's flags
    pub fn for_quadrant(quadrant: Quadrant) -> Self {
        let (urgent, important) = quadrant.flags();
        Self {
            urgent,
            important,
            ..Default::default()
        }
    }

    /// Draft holding an existing task's editable fields
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task.due_date,
            tags: task.tags.clone(),
            urgent: task.urgent,
            important: task.important,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_flags(self.urgent, self.important)
    }

    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn add_tag(&mut self, raw: &str) -> bool {
        insert_tag(&mut self.tags, raw)
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    fn trimmed_description(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }

    /// Builds a new, uncompleted task with no subtasks.
    pub fn into_task(self) -> DomainResult<Task> {
        let title = required("title", &self.title)?;
        let mut task = Task::new(title);
        task.description = self.trimmed_description();
        task.due_date = self.due_date;
        task.tags = self.tags;
        task.urgent = self.urgent;
        task.important = self.important;
        Ok(task)
    }

    /// Patch replacing every field the edit dialog shows.
    pub fn into_patch(self) -> DomainResult<TaskPatch> {
        let title = required("title", &self.title)?;
        Ok(TaskPatch {
            title: Some(title),
            description: Some(self.trimmed_description()),
            due_date: Some(self.due_date),
            tags: Some(self.tags),
            urgent: Some(self.urgent),
            important: Some(self.important),
            ..Default::default()
        })
    }
}

/// Parses the `YYYY-MM-DD` value of a date input; blank or invalid is `None`.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Short card label for a due date, e.g. `Oct 19`.
pub fn due_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Test task");
        assert_eq!(task.title, "Test task");
        assert!(!task.completed);
        assert!(task.subtasks.is_empty());
        assert_eq!(task.quadrant(), Quadrant::Eliminate);
    }

    #[test]
    fn test_set_quadrant_only_touches_flags() {
        let mut task = Task::new("Plan");
        let before = task.clone();
        task.set_quadrant(Quadrant::Schedule);
        assert!(!task.urgent);
        assert!(task.important);
        assert_eq!(task.title, before.title);
        assert_eq!(task.created_at, before.created_at);
    }

    #[test]
    fn test_patch_merges_only_given_fields() {
        let mut task = Task::new("Original");
        task.description = Some("keep me".into());
        task.tags = vec!["bug".into()];

        TaskPatch {
            title: Some("  Updated ".into()),
            completed: Some(true),
            ..Default::default()
        }
        .apply_to(&mut task);

        assert_eq!(task.title, "Updated");
        assert!(task.completed);
        assert_eq!(task.description.as_deref(), Some("keep me"));
        assert_eq!(task.tags, vec!["bug".to_string()]);
    }

    #[test]
    fn test_patch_can_clear_optional_fields() {
        let mut task = Task::new("Dated");
        task.due_date = parse_due_date("2024-03-01");
        TaskPatch {
            due_date: Some(None),
            ..Default::default()
        }
        .apply_to(&mut task);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_blank_title_patch_is_invalid() {
        let patch = TaskPatch {
            title: Some("  ".into()),
            ..Default::default()
        };
        assert!(!patch.is_valid());
        assert!(TaskPatch::completed(true).is_valid());
    }

    #[test]
    fn test_draft_into_task() {
        let mut draft = TaskDraft::for_quadrant(Quadrant::DoFirst);
        draft.title = " Write report ".into();
        draft.description = "   ".into();
        draft.add_tag("work");
        draft.add_tag("work");

        let task = draft.into_task().unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, None);
        assert_eq!(task.tags, vec!["work".to_string()]);
        assert_eq!(task.quadrant(), Quadrant::DoFirst);
        assert!(!task.completed);
    }

    #[test]
    fn test_draft_with_blank_title_is_rejected() {
        let draft = TaskDraft::default();
        assert!(!draft.is_submittable());
        assert!(draft.clone().into_task().is_err());
        assert!(draft.into_patch().is_err());
    }

    #[test]
    fn test_draft_round_trips_task_fields() {
        let mut task = Task::new("Edit me");
        task.description = Some("details".into());
        task.due_date = parse_due_date("2024-10-19");
        task.tags = vec!["a".into(), "b".into()];
        task.set_quadrant(Quadrant::Delegate);

        let mut copy = task.clone();
        TaskDraft::from_task(&task).into_patch().unwrap().apply_to(&mut copy);
        assert_eq!(copy, task);
    }

    #[test]
    fn test_due_date_helpers() {
        let date = parse_due_date("2024-10-09").unwrap();
        assert_eq!(due_label(date), "Oct 9");
        assert!(parse_due_date("").is_none());
        assert!(parse_due_date("not a date").is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut task = Task::new("Wire format");
        task.due_date = parse_due_date("2024-01-02");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2024-01-02");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{"id":"1","title":"Bare","createdAt":"2024-01-01T00:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.tags.is_empty());
        assert!(task.subtasks.is_empty());
        assert_eq!(task.subtask_progress(), (0, 0));
    }
}

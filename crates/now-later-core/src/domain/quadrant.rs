//! Eisenhower Quadrants
//!
//! A task's quadrant is derived from its `(urgent, important)` flags and is
//! never stored on the task itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::DomainError;
use super::task::Task;

/// One of the four priority buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Urgent & important
    #[serde(rename = "urgent-important")]
    DoFirst,
    /// Important, not urgent
    #[serde(rename = "not-urgent-important")]
    Schedule,
    /// Urgent, not important
    #[serde(rename = "urgent-not-important")]
    Delegate,
    /// Neither urgent nor important
    #[serde(rename = "not-urgent-not-important")]
    Eliminate,
}

impl Quadrant {
    /// Display order of the matrix (row-major, important row first).
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoFirst,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    pub fn from_flags(urgent: bool, important: bool) -> Self {
        match (urgent, important) {
            (true, true) => Quadrant::DoFirst,
            (false, true) => Quadrant::Schedule,
            (true, false) => Quadrant::Delegate,
            (false, false) => Quadrant::Eliminate,
        }
    }

    /// `(urgent, important)` pair for this quadrant
    pub fn flags(self) -> (bool, bool) {
        match self {
            Quadrant::DoFirst => (true, true),
            Quadrant::Schedule => (false, true),
            Quadrant::Delegate => (true, false),
            Quadrant::Eliminate => (false, false),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Do First",
            Quadrant::Schedule => "Schedule",
            Quadrant::Delegate => "Delegate",
            Quadrant::Eliminate => "Eliminate",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Urgent & Important",
            Quadrant::Schedule => "Not Urgent but Important",
            Quadrant::Delegate => "Urgent but Not Important",
            Quadrant::Eliminate => "Not Urgent & Not Important",
        }
    }

    /// Stable kebab-case name, also used as a CSS class suffix.
    pub fn slug(self) -> &'static str {
        match self {
            Quadrant::DoFirst => "urgent-important",
            Quadrant::Schedule => "not-urgent-important",
            Quadrant::Delegate => "urgent-not-important",
            Quadrant::Eliminate => "not-urgent-not-important",
        }
    }

    fn index(self) -> usize {
        match self {
            Quadrant::DoFirst => 0,
            Quadrant::Schedule => 1,
            Quadrant::Delegate => 2,
            Quadrant::Eliminate => 3,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Quadrant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quadrant::ALL
            .into_iter()
            .find(|q| q.slug() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown quadrant `{s}`")))
    }
}

/// Active tasks of a board split into the four quadrants.
///
/// Completed tasks are skipped. Within a group, tasks keep their source order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    groups: [Vec<&'a Task>; 4],
}

impl<'a> Partition<'a> {
    pub fn of<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut partition = Partition::default();
        for task in tasks.into_iter().filter(|t| !t.completed) {
            partition.groups[task.quadrant().index()].push(task);
        }
        partition
    }

    pub fn get(&self, quadrant: Quadrant) -> &[&'a Task] {
        &self.groups[quadrant.index()]
    }

    /// Groups in display order
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &[&'a Task])> + '_ {
        Quadrant::ALL.into_iter().map(move |q| (q, self.get(q)))
    }

    /// Number of active tasks across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Closed set of orderings for task listings.

use super::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field a task listing is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSortKey {
    /// Creation time.
    #[default]
    CreatedAt,
    /// Due date; tasks without one sort after dated tasks.
    DueDate,
    /// Title, compared case-insensitively.
    Title,
    /// Lifecycle status, in lifecycle order.
    Status,
}

impl TaskSortKey {
    /// Parses a request value, falling back to [`TaskSortKey::CreatedAt`]
    /// for absent or unrecognized keys.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "due_date" | "duedate" => Self::DueDate,
            "title" => Self::Title,
            "status" => Self::Status,
            _ => Self::default(),
        }
    }
}

/// Direction of a task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Sort key and direction for a task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskOrdering {
    /// Field to sort by.
    pub key: TaskSortKey,
    /// Sort direction.
    pub direction: SortDirection,
}

impl TaskOrdering {
    /// Creates an ordering.
    #[must_use]
    pub const fn new(key: TaskSortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compares two tasks under this ordering.
    ///
    /// Ties on the sort key fall back to creation time, then identifier, so
    /// listings are deterministic. Undated tasks stay last in both
    /// directions when sorting by due date.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        let primary = match self.key {
            TaskSortKey::CreatedAt => left.created_at().cmp(&right.created_at()),
            TaskSortKey::DueDate => {
                return compare_due_dates(left, right, self.direction)
                    .then_with(|| tie_break(left, right));
            }
            TaskSortKey::Title => left
                .title()
                .uniqueness_key()
                .cmp(&right.title().uniqueness_key()),
            TaskSortKey::Status => left.status().cmp(&right.status()),
        };
        apply_direction(primary, self.direction).then_with(|| tie_break(left, right))
    }
}

/// Sorts `tasks` in place under `ordering`.
pub fn sort_tasks(tasks: &mut [Task], ordering: TaskOrdering) {
    tasks.sort_by(|left, right| ordering.compare(left, right));
}

fn compare_due_dates(left: &Task, right: &Task, direction: SortDirection) -> Ordering {
    match (left.due_date(), right.due_date()) {
        (Some(left_due), Some(right_due)) => apply_direction(left_due.cmp(&right_due), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

const fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn tie_break(left: &Task, right: &Task) -> Ordering {
    left.created_at()
        .cmp(&right.created_at())
        .then_with(|| left.id().cmp(&right.id()))
}

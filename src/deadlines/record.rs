use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A single tracked deadline
///
/// Records are owned by a `DeadlineList` and referenced by their `id`.
/// Insertion order carries no meaning; display order is always recomputed
/// from completion status and due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRecord {
    /// Session-scoped identifier, assigned by the list when the record is
    /// created. Not written to the data file; reassigned on load.
    #[serde(skip)]
    pub id: u32,
    /// Canonical course code (e.g., "CSC230", "SENG275")
    pub course: String,
    /// Task description, trimmed free text
    pub task: String,
    /// Due date (format: YYYY-MM-DD)
    pub deadline: NaiveDate,
    /// Whether the task has been completed
    pub completed: bool,
}

impl DeadlineRecord {
    /// Create an incomplete record. The id is assigned later by the list.
    pub fn new(course: String, task: String, deadline: NaiveDate) -> Self {
        Self {
            id: 0,
            course,
            task,
            deadline,
            completed: false,
        }
    }
}

//! Deadline tracker library
//!
//! This library implements a deadline list engine for course-associated
//! tasks: add, edit, delete, and toggle-complete operations over a list of
//! deadline records, with urgency classification and a display-ready
//! ordering, persisted wholesale to a TOML file after every mutation.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Front end**: the `duedates` binary - a thin CLI over the tracker
//! - **Domain Layer**: `deadlines` module - records, urgency, list operations
//! - **Persistence Layer**: `storage` module - file-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use duedates::DeadlineTracker;
//! use anyhow::Result;
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<()> {
//!     let mut tracker = DeadlineTracker::new("deadlines.toml")?;
//!     let due = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
//!     tracker.add("csc 230", "Assignment 2", due)?;
//!     for entry in tracker.ordered_view(false) {
//!         println!("{} {}", entry.record.course, entry.urgency.label());
//!     }
//!     Ok(())
//! }
//! ```

mod deadlines;
mod error;
pub mod formatting;
mod storage;

use anyhow::Result;
use chrono::NaiveDate;

// Re-export commonly used types
pub use deadlines::{
    DeadlineEntry, DeadlineList, DeadlineRecord, Urgency, format_course_code, local_date_today,
};
pub use error::StoreError;
pub use storage::Storage;

/// Deadline store bound to its persistence file
///
/// Owns the in-memory list and the storage handle. Every mutation edits the
/// list in memory and then re-serializes the whole list to disk. A failed
/// write is reported as [`StoreError::Persistence`] but the in-memory edit
/// is kept; the list stays authoritative for the rest of the session.
pub struct DeadlineTracker {
    pub(crate) data: DeadlineList,
    pub(crate) storage: Storage,
}

impl DeadlineTracker {
    /// Open a tracker backed by the given data file
    ///
    /// A missing or unparseable file yields an empty list, not an error.
    ///
    /// # Example
    /// ```no_run
    /// # use duedates::DeadlineTracker;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let tracker = DeadlineTracker::new("deadlines.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = storage.load()?;
        Ok(Self { data, storage })
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.storage
            .save(&self.data)
            .map_err(|e| StoreError::Persistence(e.to_string()))
    }

    /// Add a new deadline and persist
    ///
    /// The course code is normalized inside the store, for both this and
    /// [`update`](Self::update); callers pass raw input.
    ///
    /// # Returns
    /// The ID assigned to the new record
    pub fn add(&mut self, course: &str, task: &str, deadline: NaiveDate) -> Result<u32, StoreError> {
        let id = self.data.add(course, task, deadline)?;
        self.persist()?;
        Ok(id)
    }

    /// Replace a record's course, task, and due date, then persist
    pub fn update(
        &mut self,
        id: u32,
        course: &str,
        task: &str,
        deadline: NaiveDate,
    ) -> Result<(), StoreError> {
        self.data.update(id, course, task, deadline)?;
        self.persist()
    }

    /// Delete a record and persist
    pub fn remove(&mut self, id: u32) -> Result<DeadlineRecord, StoreError> {
        let removed = self.data.remove(id)?;
        self.persist()?;
        Ok(removed)
    }

    /// Flip a record's completed flag and persist
    ///
    /// # Returns
    /// The new value of the flag
    pub fn toggle_complete(&mut self, id: u32) -> Result<bool, StoreError> {
        let completed = self.data.toggle_complete(id)?;
        self.persist()?;
        Ok(completed)
    }

    /// Delete all completed records in one persisted mutation
    ///
    /// # Returns
    /// The number of records removed
    pub fn clear_completed(&mut self) -> Result<usize, StoreError> {
        let count = self.data.clear_completed();
        if count > 0 {
            self.persist()?;
        }
        Ok(count)
    }

    /// The display-ready ordered sequence (see [`DeadlineList::ordered_view`])
    pub fn ordered_view(&self, hide_completed: bool) -> Vec<DeadlineEntry<'_>> {
        self.data.ordered_view(hide_completed)
    }

    /// True if at least one record is not completed
    pub fn has_any_incomplete(&self) -> bool {
        self.data.has_any_incomplete()
    }

    /// Read access to the underlying list
    pub fn data(&self) -> &DeadlineList {
        &self.data
    }
}

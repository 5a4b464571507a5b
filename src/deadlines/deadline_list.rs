use crate::deadlines::course::format_course_code;
use crate::deadlines::record::DeadlineRecord;
use crate::deadlines::urgency::Urgency;
use crate::error::StoreError;
use chrono::NaiveDate;

/// One row of the display-ready ordered view
///
/// Bundles a record with its urgency (classified at view time) and a marker
/// for the first completed record in the sequence, which consumers use to
/// draw a section divider.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineEntry<'a> {
    pub record: &'a DeadlineRecord,
    pub urgency: Urgency,
    pub first_completed: bool,
}

pub struct DeadlineList {
    /// All deadline records in insertion order
    ///
    /// Vec is the primary storage:
    /// 1. Insertion order makes the stable sort deterministic for equal dates
    /// 2. Produces stable diffs when serialized to TOML
    /// 3. Simple ownership model - the Vec owns all data directly
    ///
    /// Display order is never this order; it is recomputed by
    /// `ordered_view` on every read.
    pub(crate) records: Vec<DeadlineRecord>,

    /// Counter for generating unique record IDs
    ///
    /// IDs are session-scoped handles, not durable identity: they are never
    /// serialized, and deserialization reassigns them in list order. Their
    /// only job is to give mutation operations a stable reference that
    /// cannot be invalidated by re-sorting or by removals elsewhere in the
    /// list, which positional indexes cannot guarantee.
    pub(crate) id_counter: u32,
}

impl Default for DeadlineList {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            id_counter: 0,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl DeadlineList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Generate a new unique record ID
    fn generate_id(&mut self) -> u32 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Find a record by its ID
    pub fn find_by_id(&self, id: u32) -> Option<&DeadlineRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn find_by_id_mut(&mut self, id: u32) -> Option<&mut DeadlineRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Validate and normalize the user-supplied fields shared by add and
    /// update. The course formatter runs here so both operations follow the
    /// same formatting contract.
    fn normalize_fields(course: &str, task: &str) -> Result<(String, String), StoreError> {
        let course = format_course_code(course);
        if course.is_empty() {
            return Err(StoreError::Validation("course must not be empty".into()));
        }
        let task = task.trim();
        if task.is_empty() {
            return Err(StoreError::Validation("task must not be empty".into()));
        }
        Ok((course, task.to_string()))
    }

    /// Append a new incomplete record
    ///
    /// The course code is normalized through the formatter; the task text is
    /// trimmed. Either being empty afterwards rejects the add without
    /// mutating the list.
    ///
    /// # Arguments
    /// * `course` - Raw course input (e.g., "cSc 230")
    /// * `task` - Task description
    /// * `deadline` - Due date
    ///
    /// # Returns
    /// The ID assigned to the new record
    pub fn add(&mut self, course: &str, task: &str, deadline: NaiveDate) -> Result<u32, StoreError> {
        let (course, task) = Self::normalize_fields(course, task)?;
        let id = self.generate_id();
        let mut record = DeadlineRecord::new(course, task, deadline);
        record.id = id;
        self.records.push(record);
        Ok(id)
    }

    /// Replace all three user-editable fields of a record
    ///
    /// Same normalization as `add`. Validation failures leave the record
    /// untouched. The completed flag is not an editable field; it changes
    /// only through `toggle_complete`.
    pub fn update(
        &mut self,
        id: u32,
        course: &str,
        task: &str,
        deadline: NaiveDate,
    ) -> Result<(), StoreError> {
        let (course, task) = Self::normalize_fields(course, task)?;
        let record = self.find_by_id_mut(id).ok_or(StoreError::NotFound(id))?;
        record.course = course;
        record.task = task;
        record.deadline = deadline;
        Ok(())
    }

    /// Remove a record and return it
    pub fn remove(&mut self, id: u32) -> Result<DeadlineRecord, StoreError> {
        match self.records.iter().position(|r| r.id == id) {
            Some(pos) => Ok(self.records.remove(pos)),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Flip a record's completed flag
    ///
    /// # Returns
    /// The new value of the flag
    pub fn toggle_complete(&mut self, id: u32) -> Result<bool, StoreError> {
        let record = self.find_by_id_mut(id).ok_or(StoreError::NotFound(id))?;
        record.completed = !record.completed;
        Ok(record.completed)
    }

    /// Remove all completed records
    ///
    /// # Returns
    /// The number of records removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.completed);
        before - self.records.len()
    }

    /// True if at least one record is not completed
    ///
    /// Drives the "no upcoming deadlines" indicator: the list may still hold
    /// completed records while this is false.
    pub fn has_any_incomplete(&self) -> bool {
        self.records.iter().any(|r| !r.completed)
    }

    /// The display-ready ordered sequence
    ///
    /// Total order: incomplete records before completed ones, then ascending
    /// due date within each group, stable for equal dates. Urgency is
    /// classified against today's date at call time; nothing is cached
    /// between reads.
    ///
    /// # Arguments
    /// * `hide_completed` - Exclude completed records from the result
    pub fn ordered_view(&self, hide_completed: bool) -> Vec<DeadlineEntry<'_>> {
        let mut ordered: Vec<&DeadlineRecord> = self.records.iter().collect();
        ordered.sort_by_key(|r| (r.completed, r.deadline));

        let first_completed_id = ordered.iter().find(|r| r.completed).map(|r| r.id);

        ordered
            .into_iter()
            .filter(|r| !(hide_completed && r.completed))
            .map(|r| DeadlineEntry {
                record: r,
                urgency: Urgency::classify(r.deadline, r.completed),
                first_completed: first_completed_id == Some(r.id),
            })
            .collect()
    }
}

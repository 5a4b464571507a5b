//! Common test utilities for integration tests

use chrono::{Days, NaiveDate};
use duedates::{DeadlineTracker, local_date_today};
use tempfile::NamedTempFile;

/// Create a test tracker with temporary storage
pub fn get_test_tracker() -> (DeadlineTracker, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let tracker = DeadlineTracker::new(temp_file.path().to_str().unwrap()).unwrap();
    (tracker, temp_file)
}

/// Today's local date plus an offset in days (negative for past dates)
pub fn today_offset(days: i64) -> NaiveDate {
    let today = local_date_today();
    if days >= 0 {
        today + Days::new(days as u64)
    } else {
        today - Days::new((-days) as u64)
    }
}

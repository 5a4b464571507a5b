//! Formatting helper functions for list output
//!
//! This module renders the store's ordered view as plain text for the CLI.
//! The engine itself never formats anything; it only hands over the ordered
//! entries with their urgency and the completed-section marker.

use crate::deadlines::DeadlineEntry;

/// Divider printed above the first completed entry
const COMPLETED_DIVIDER: &str = "---------- completed ----------";

/// Message shown when no incomplete deadlines exist
const EMPTY_MESSAGE: &str = "No upcoming deadlines";

/// Format ordered view entries into a display string
///
/// Rows appear in the order given: incomplete deadlines first (nearest due
/// date on top), then a divider and the completed section. When no
/// incomplete deadlines exist the empty message is shown first; completed
/// rows, if any are present, still follow it.
///
/// # Arguments
/// * `entries` - The store's ordered view
/// * `has_any_incomplete` - Whether any incomplete deadline exists at all
///   (not derivable from `entries` when completed records are hidden)
pub fn format_deadlines(entries: &[DeadlineEntry<'_>], has_any_incomplete: bool) -> String {
    let mut result = String::new();

    if !has_any_incomplete {
        result.push_str(EMPTY_MESSAGE);
        result.push('\n');
        if entries.is_empty() {
            return result;
        }
        result.push('\n');
    }

    for entry in entries {
        if entry.first_completed {
            result.push_str(COMPLETED_DIVIDER);
            result.push('\n');
        }
        result.push_str(&format!(
            "{:>4}  [{:<7}]  {}  {:<10} {}\n",
            entry.record.id,
            entry.urgency.label(),
            entry.record.deadline,
            entry.record.course,
            entry.record.task,
        ));
    }

    result
}

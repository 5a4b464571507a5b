//! Basic tracker tests: mutations, validation, and persistence round-trips

mod common;

use common::{get_test_tracker, today_offset};
use duedates::{DeadlineTracker, StoreError, Urgency};
use std::fs;

#[test]
fn test_add_persists_and_reload_reproduces_record() {
    let (mut tracker, temp_file) = get_test_tracker();

    let due = today_offset(5);
    let id = tracker.add("cSc    230", "Assignment 1", due).unwrap();
    assert_eq!(id, 1);

    // Simulate a process restart by opening a fresh tracker on the same file
    let reloaded = DeadlineTracker::new(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(reloaded.data().len(), 1);
    let record = reloaded.data().find_by_id(1).unwrap();
    assert_eq!(record.course, "CSC230");
    assert_eq!(record.task, "Assignment 1");
    assert_eq!(record.deadline, due);
    assert!(!record.completed);
}

#[test]
fn test_persisted_file_has_no_ids() {
    let (mut tracker, temp_file) = get_test_tracker();
    tracker.add("csc230", "Assignment 1", today_offset(3)).unwrap();

    let content = fs::read_to_string(temp_file.path()).unwrap();
    assert!(content.contains("[[deadlines]]"));
    assert!(content.contains("course = \"CSC230\""));
    assert!(!content.contains("id"));
    assert!(!content.contains("counter"));
}

#[test]
fn test_reload_reassigns_ids_in_list_order() {
    let (mut tracker, temp_file) = get_test_tracker();
    tracker.add("csc230", "First", today_offset(1)).unwrap();
    tracker.add("seng275", "Second", today_offset(2)).unwrap();
    tracker.remove(1).unwrap();
    tracker.add("math100", "Third", today_offset(3)).unwrap();

    // In-session ids keep counting; after reload they compact to 1..=n
    let reloaded = DeadlineTracker::new(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(reloaded.data().len(), 2);
    assert_eq!(reloaded.data().find_by_id(1).unwrap().task, "Second");
    assert_eq!(reloaded.data().find_by_id(2).unwrap().task, "Third");
}

#[test]
fn test_update_rewrites_all_fields() {
    let (mut tracker, temp_file) = get_test_tracker();
    let id = tracker.add("csc230", "Assignment 1", today_offset(5)).unwrap();

    let new_due = today_offset(9);
    tracker.update(id, "s e n g 275", "Lab report", new_due).unwrap();

    let reloaded = DeadlineTracker::new(temp_file.path().to_str().unwrap()).unwrap();
    let record = reloaded.data().find_by_id(1).unwrap();
    assert_eq!(record.course, "SENG275");
    assert_eq!(record.task, "Lab report");
    assert_eq!(record.deadline, new_due);
}

#[test]
fn test_update_validation_failure_leaves_file_untouched() {
    let (mut tracker, temp_file) = get_test_tracker();
    let id = tracker.add("csc230", "Assignment 1", today_offset(5)).unwrap();
    let before = fs::read_to_string(temp_file.path()).unwrap();

    let result = tracker.update(id, "csc230", "   ", today_offset(9));
    assert!(matches!(result, Err(StoreError::Validation(_))));

    let after = fs::read_to_string(temp_file.path()).unwrap();
    assert_eq!(before, after);
    assert_eq!(tracker.data().find_by_id(id).unwrap().task, "Assignment 1");
}

#[test]
fn test_remove_never_returned_again() {
    let (mut tracker, _temp_file) = get_test_tracker();
    let keep = tracker.add("csc230", "Keep", today_offset(1)).unwrap();
    let gone = tracker.add("csc230", "Gone", today_offset(2)).unwrap();

    tracker.remove(gone).unwrap();
    assert_eq!(tracker.data().len(), 1);

    let view = tracker.ordered_view(false);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].record.id, keep);

    assert!(matches!(
        tracker.remove(gone),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_toggle_complete_round_trip() {
    let (mut tracker, temp_file) = get_test_tracker();
    let id = tracker.add("csc230", "Assignment 1", today_offset(5)).unwrap();

    assert!(tracker.toggle_complete(id).unwrap());
    let reloaded = DeadlineTracker::new(temp_file.path().to_str().unwrap()).unwrap();
    assert!(reloaded.data().find_by_id(1).unwrap().completed);

    assert!(!tracker.toggle_complete(id).unwrap());
    assert!(!tracker.data().find_by_id(id).unwrap().completed);
}

#[test]
fn test_toggle_unknown_id() {
    let (mut tracker, _temp_file) = get_test_tracker();
    assert!(matches!(
        tracker.toggle_complete(42),
        Err(StoreError::NotFound(42))
    ));
}

#[test]
fn test_clear_completed_persists() {
    let (mut tracker, temp_file) = get_test_tracker();
    tracker.add("csc230", "Open", today_offset(1)).unwrap();
    let a = tracker.add("csc230", "Done A", today_offset(2)).unwrap();
    let b = tracker.add("seng275", "Done B", today_offset(3)).unwrap();
    tracker.toggle_complete(a).unwrap();
    tracker.toggle_complete(b).unwrap();

    assert_eq!(tracker.clear_completed().unwrap(), 2);

    let reloaded = DeadlineTracker::new(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(reloaded.data().len(), 1);
    assert_eq!(reloaded.data().find_by_id(1).unwrap().task, "Open");
}

#[test]
fn test_load_from_garbage_file_starts_empty() {
    let (_, temp_file) = get_test_tracker();
    fs::write(temp_file.path(), "deadlines = \"this is not a list\"").unwrap();

    let tracker = DeadlineTracker::new(temp_file.path().to_str().unwrap()).unwrap();
    assert!(tracker.data().is_empty());
}

#[test]
fn test_urgency_in_view_tracks_record_state() {
    let (mut tracker, _temp_file) = get_test_tracker();
    let id = tracker.add("csc230", "Due today", today_offset(0)).unwrap();

    assert_eq!(tracker.ordered_view(false)[0].urgency, Urgency::Urgent);
    tracker.toggle_complete(id).unwrap();
    assert_eq!(tracker.ordered_view(false)[0].urgency, Urgency::Completed);
}

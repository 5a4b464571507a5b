//! Urgency classification
//!
//! A record's urgency is a pure function of its due date, its completion
//! flag, and the current local date. "Today" is read at call time rather
//! than cached, so a long-lived process reclassifies correctly after
//! crossing midnight.

use crate::deadlines::record::local_date_today;
use chrono::NaiveDate;

/// Urgency level of a deadline relative to the current date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Due date has passed
    Overdue,
    /// Due today or within the next 3 days
    Urgent,
    /// Due within the next 7 days
    Soon,
    /// Due more than a week out
    Normal,
    /// Task is completed (due date is irrelevant)
    Completed,
}

impl Urgency {
    /// Classify a deadline against today's local date
    pub fn classify(due: NaiveDate, completed: bool) -> Urgency {
        Self::classify_at(due, completed, local_date_today())
    }

    /// Classify a deadline against an explicit reference date
    ///
    /// Completed records classify as `Completed` unconditionally. Otherwise
    /// the whole-day difference decides, first match wins: negative ->
    /// `Overdue`, 0..=3 -> `Urgent`, 4..=7 -> `Soon`, 8+ -> `Normal`.
    pub fn classify_at(due: NaiveDate, completed: bool, today: NaiveDate) -> Urgency {
        if completed {
            return Urgency::Completed;
        }

        let diff_days = (due - today).num_days();
        if diff_days < 0 {
            Urgency::Overdue
        } else if diff_days <= 3 {
            Urgency::Urgent
        } else if diff_days <= 7 {
            Urgency::Soon
        } else {
            Urgency::Normal
        }
    }

    /// Short display tag for list output
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Overdue => "OVERDUE",
            Urgency::Urgent => "URGENT",
            Urgency::Soon => "SOON",
            Urgency::Normal => "OK",
            Urgency::Completed => "DONE",
        }
    }
}

//! Deadline domain models and business logic
//!
//! This module contains the core deadline engine, split into submodules:
//! - `record`: the deadline record structure
//! - `course`: course code normalization
//! - `urgency`: urgency classification against the current date
//! - `deadline_list`: list container with all mutation operations and the
//!   ordered view
//! - `serde_impl`: serialization/deserialization implementations

mod course;
mod deadline_list;
mod record;
mod serde_impl;
mod urgency;

// Re-export all public types
pub use course::format_course_code;
pub use deadline_list::{DeadlineEntry, DeadlineList};
pub use record::{DeadlineRecord, local_date_today};
pub use urgency::Urgency;

use thiserror::Error;

/// Errors surfaced by deadline store operations
///
/// `Validation` and `NotFound` reject the operation before anything is
/// mutated. `Persistence` means the in-memory mutation succeeded but the
/// write to disk failed; in-memory state remains authoritative and the
/// caller decides whether to warn or abort.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was empty after trimming/formatting
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record exists with the given id
    #[error("no deadline with ID {0}")]
    NotFound(u32),

    /// Writing the data file failed
    #[error("failed to save deadlines: {0}")]
    Persistence(String),
}

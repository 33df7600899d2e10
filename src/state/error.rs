//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Operating hours slot index is out of range
    #[error("Operating hours slot not found: {index}")]
    SlotNotFound { index: usize },

    /// The form always keeps one operating hours slot
    #[error("Cannot remove the last operating hours slot")]
    LastSlotRemoval,

    /// A submission is already waiting on the API
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// Form operation requested while another view is shown
    #[error("Form is not open (current view: {0})")]
    FormNotOpen(String),
}

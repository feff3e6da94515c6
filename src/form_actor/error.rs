//! Error types for the form actor.

use thiserror::Error;

/// Errors that can occur while driving the order form.
///
/// Submission failures are not errors at this level: the actor folds them
/// into the feedback banner and still replies with a view, so the form
/// stays interactive.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Submit was requested while the form state fails validation.
    #[error("Form is not eligible for submission")]
    NotEligible,

    /// The actor's channel is closed (system shut down).
    #[error("Form actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without replying.
    #[error("Form actor dropped response channel")]
    ActorDropped,
}

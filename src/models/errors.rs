//! Error types for annotation operations
//!
//! All core errors are synchronous and reported to the immediate caller;
//! the document is guaranteed unchanged when an operation fails.

use thiserror::Error;

/// Errors raised by the span store, mutation engine, and analysis seams
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Span offsets fail validation on add (inverted, out of bounds, or
    /// duplicating an existing span's exact range)
    #[error("Invalid span [{start}, {end}) for text of length {max}")]
    InvalidSpan {
        start: usize,
        end: usize,
        max: usize,
    },

    /// An id or phrase lookup missed
    #[error("Not found: {0}")]
    NotFound(String),

    /// The external analyzer failed; surfaced for a user-visible retry
    #[error("Text analysis failed: {0}")]
    AnalysisFailed(String),

    /// The external suggestion oracle failed; surfaced for a user-visible retry
    #[error("Suggestion generation failed: {0}")]
    SuggestionFailed(String),
}

//! Rephrase suggestion records
//!
//! Suggestions are produced by an external oracle, consumed read-only, and
//! discarded once accepted or ignored. They are never mutated in place.

use serde::{Deserialize, Serialize};

/// Original `{start, end}` hint carried by a suggestion
///
/// Advisory only: accept/ignore match on the phrase text, not on this
/// position, since offsets may have shifted since the oracle ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasePosition {
    pub start: usize,
    pub end: usize,
}

/// Candidate replacements for one tagged phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The original phrase this suggestion targets (join key against
    /// `Highlight::text`)
    pub phrase: String,

    /// Ordered candidate replacement strings, non-empty when surfaced
    pub alternatives: Vec<String>,

    /// Where the phrase sat when the oracle ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PhrasePosition>,
}

impl Suggestion {
    pub fn new(phrase: String, alternatives: Vec<String>, position: Option<PhrasePosition>) -> Self {
        Self {
            phrase,
            alternatives,
            position,
        }
    }
}

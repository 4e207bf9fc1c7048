//! Core document model
//!
//! The `Document` is the single canonical state: the mutable text plus its
//! highlight collection and the pending suggestion set. All mutation goes
//! through the engine operations (see `crate::engine`); every operation
//! begins and ends with the consistency invariant holding: each span in
//! bounds with `start < end`, and no two spans sharing an exact
//! `(start, end)` pair.

use crate::models::suggestion::Suggestion;
use crate::spans::store::HighlightStore;
use crate::utils::chars::char_len;
use serde::{Deserialize, Serialize};

/// The annotated document: text, spans, and pending suggestions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The current text, mutated only by accepting a replacement
    pub text: String,

    /// Highlight spans over `text`
    pub highlights: HighlightStore,

    /// Suggestions awaiting accept/ignore; orphans (no matching span) are
    /// tolerated and stay inert
    pub suggestions: Vec<Suggestion>,

    /// Whether an analysis pass has produced the initial span set
    pub analyzed: bool,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from pasted text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Char length of the current text (the bound for span offsets)
    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }
}

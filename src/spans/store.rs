//! In-memory highlight store
//!
//! Owns the span collection for a document. Insertion order is preserved;
//! consumers that need document order ask for `sorted_by_start()` on
//! demand, since offsets can change between renders.

use super::highlight::Highlight;
use crate::models::errors::EditError;
use serde::{Deserialize, Serialize};

/// Collection of highlight spans over one document text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightStore {
    highlights: Vec<Highlight>,
}

impl HighlightStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            highlights: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }

    /// Iterate spans in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        self.highlights.iter()
    }

    /// Insert a span, validating it against the current text length
    ///
    /// Fails with `InvalidSpan` when `start >= end`, when `end` exceeds
    /// `max_len` (the char length of the document text), or when another
    /// span already covers the identical `(start, end)` pair.
    pub fn insert(&mut self, highlight: Highlight, max_len: usize) -> Result<(), EditError> {
        if highlight.start >= highlight.end || highlight.end > max_len {
            return Err(EditError::InvalidSpan {
                start: highlight.start,
                end: highlight.end,
                max: max_len,
            });
        }

        if self
            .highlights
            .iter()
            .any(|h| h.start == highlight.start && h.end == highlight.end)
        {
            return Err(EditError::InvalidSpan {
                start: highlight.start,
                end: highlight.end,
                max: max_len,
            });
        }

        self.highlights.push(highlight);
        Ok(())
    }

    /// Spans ordered by ascending `start`, ties broken by ascending `end`
    ///
    /// The tie-break makes render order deterministic when two spans share
    /// a start offset (shorter span first). Computed fresh on every call.
    pub fn sorted_by_start(&self) -> Vec<&Highlight> {
        let mut sorted: Vec<&Highlight> = self.highlights.iter().collect();
        sorted.sort_by_key(|h| (h.start, h.end));
        sorted
    }

    /// Look up a span by id
    pub fn get(&self, id: &str) -> Option<&Highlight> {
        self.highlights.iter().find(|h| h.id == id)
    }

    /// Look up a span by id for mutation
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Highlight> {
        self.highlights.iter_mut().find(|h| h.id == id)
    }

    /// First span in sort order whose snapshot text equals `phrase`
    ///
    /// When several spans share identical text this resolves to the
    /// earliest one in the document, which is the pinned lookup policy for
    /// accept/ignore.
    pub fn find_by_phrase(&self, phrase: &str) -> Option<&Highlight> {
        self.sorted_by_start().into_iter().find(|h| h.text == phrase)
    }

    /// Remove a span by id, returning it
    pub fn remove_by_id(&mut self, id: &str) -> Result<Highlight, EditError> {
        let index = self
            .highlights
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| EditError::NotFound(format!("highlight id '{}'", id)))?;

        Ok(self.highlights.remove(index))
    }

    /// Shift every span strictly after a threshold by `delta` chars
    ///
    /// Spans with `start > threshold_start` get `delta` added to both
    /// offsets; spans with `start <= threshold_start` are untouched. This
    /// is the sole offset-repair primitive after a length-changing edit.
    pub fn shift_after(&mut self, threshold_start: usize, delta: i64) {
        if delta == 0 {
            return;
        }

        for h in &mut self.highlights {
            if h.start > threshold_start {
                h.start = (h.start as i64 + delta).max(0) as usize;
                h.end = (h.end as i64 + delta).max(0) as usize;
            }
        }
    }
}

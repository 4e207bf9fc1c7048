//! Mutation engine: the document state machine
//!
//! Every operation here is atomic from the caller's perspective:
//! validation and lookup happen before any state is touched, so a failed
//! call leaves the document byte-identical. The only length-changing
//! operation is `accept_suggestion`; it is also the only one that shifts
//! other spans' offsets.

use crate::models::core::Document;
use crate::models::errors::EditError;
use crate::models::suggestion::Suggestion;
use crate::spans::highlight::{FamiliarityLevel, Highlight, SelectionSpan};
use crate::spans::store::HighlightStore;
use crate::utils::chars::{char_len, splice_chars};
use serde::{Deserialize, Serialize};

/// Per-level tag counts for the summary sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCounts {
    #[serde(rename = "not-familiar")]
    pub not_familiar: usize,

    #[serde(rename = "somewhat-familiar")]
    pub somewhat_familiar: usize,

    pub familiar: usize,

    /// Total highlights, classified or not
    pub total: usize,
}

impl Document {
    /// Create a highlight from a user selection
    ///
    /// The selection comes from the Selection Adapter already reduced to
    /// char offsets. Snapshot text is taken from the selection, not
    /// re-sliced from the document. No other span moves.
    pub fn add_highlight(
        &mut self,
        selection: &SelectionSpan,
        level: FamiliarityLevel,
    ) -> Result<Highlight, EditError> {
        let highlight = Highlight::new(
            selection.text.clone(),
            selection.start,
            selection.end,
            Some(level),
        );

        let max_len = self.char_len();
        self.highlights.insert(highlight.clone(), max_len)?;

        Ok(highlight)
    }

    /// Change a highlight's familiarity level
    ///
    /// Offsets and snapshot text are untouched.
    pub fn reclassify(&mut self, id: &str, level: FamiliarityLevel) -> Result<(), EditError> {
        let highlight = self
            .highlights
            .get_mut(id)
            .ok_or_else(|| EditError::NotFound(format!("highlight id '{}'", id)))?;

        highlight.familiarity_level = Some(level);
        Ok(())
    }

    /// Delete a highlight by id
    ///
    /// Removal alone never changes other spans' offsets.
    pub fn remove_highlight(&mut self, id: &str) -> Result<Highlight, EditError> {
        self.highlights.remove_by_id(id)
    }

    /// Accept a replacement for a tagged phrase
    ///
    /// The one length-changing operation. Locates the span whose snapshot
    /// text equals `phrase` (first in sort order when several match),
    /// splices `replacement` into that span's exact `[start, end)` range,
    /// removes the span, shifts every later span by the length delta, and
    /// drops the matching pending suggestions, all as one transition. A
    /// missing span aborts before the text is touched.
    pub fn accept_suggestion(
        &mut self,
        phrase: &str,
        replacement: &str,
    ) -> Result<(), EditError> {
        let matched = self
            .highlights
            .find_by_phrase(phrase)
            .cloned()
            .ok_or_else(|| EditError::NotFound(format!("highlight for phrase '{}'", phrase)))?;

        let new_text = splice_chars(&self.text, matched.start, matched.end, replacement);
        let delta = char_len(replacement) as i64 - matched.len() as i64;

        // Commit point: nothing below can fail
        self.highlights
            .remove_by_id(&matched.id)
            .expect("matched span present");
        self.highlights.shift_after(matched.start, delta);
        self.text = new_text;
        self.suggestions.retain(|s| s.phrase != phrase);

        log::debug!(
            "accepted replacement for '{}' at [{}, {}), delta {}",
            phrase,
            matched.start,
            matched.end,
            delta
        );

        Ok(())
    }

    /// Dismiss a suggestion and its highlight without touching the text
    ///
    /// Same lookup policy as accept. A second ignore of the same phrase
    /// reports `NotFound` and changes nothing, which also covers orphan
    /// suggestions whose span never existed.
    pub fn ignore_suggestion(&mut self, phrase: &str) -> Result<(), EditError> {
        let id = self
            .highlights
            .find_by_phrase(phrase)
            .map(|h| h.id.clone())
            .ok_or_else(|| EditError::NotFound(format!("highlight for phrase '{}'", phrase)))?;

        self.highlights
            .remove_by_id(&id)
            .expect("matched span present");
        self.suggestions.retain(|s| s.phrase != phrase);

        Ok(())
    }

    /// Install an externally produced span set
    ///
    /// Every span is validated against the current text before anything is
    /// committed; one bad span rejects the whole batch. Marks the document
    /// analyzed.
    pub fn apply_analysis(&mut self, highlights: Vec<Highlight>) -> Result<usize, EditError> {
        let max_len = self.char_len();
        let mut store = HighlightStore::new();
        for highlight in highlights {
            store.insert(highlight, max_len)?;
        }

        let count = store.len();
        self.highlights = store;
        self.analyzed = true;

        log::debug!("analysis applied: {} highlight(s)", count);
        Ok(count)
    }

    /// Replace the pending suggestion set
    ///
    /// Orphan suggestions (no span with a matching snapshot) are accepted
    /// and simply stay inert until reset.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
    }

    /// Count classified highlights per level
    pub fn tag_counts(&self) -> TagCounts {
        let mut counts = TagCounts {
            total: self.highlights.len(),
            ..TagCounts::default()
        };

        for h in self.highlights.iter() {
            match h.familiarity_level {
                Some(FamiliarityLevel::NotFamiliar) => counts.not_familiar += 1,
                Some(FamiliarityLevel::SomewhatFamiliar) => counts.somewhat_familiar += 1,
                Some(FamiliarityLevel::Familiar) => counts.familiar += 1,
                None => {}
            }
        }

        counts
    }

    /// Start over: clear text, spans, suggestions, and the analyzed flag
    pub fn reset(&mut self) {
        *self = Document::new();
    }
}

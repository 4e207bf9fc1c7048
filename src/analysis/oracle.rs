//! Table-driven rephrase suggestions
//!
//! The fallback oracle: serves alternatives from a preloaded
//! phrase → alternatives table, one suggestion per highlight whose
//! snapshot text is known. Position hints carry the span's offsets at
//! suggestion time and are advisory only.

use super::SuggestionOracle;
use crate::models::errors::EditError;
use crate::models::suggestion::{PhrasePosition, Suggestion};
use crate::spans::highlight::Highlight;
use std::collections::HashMap;

/// Suggestion oracle backed by a static phrase table
#[derive(Debug, Clone, Default)]
pub struct LexiconOracle {
    alternatives: HashMap<String, Vec<String>>,
}

impl LexiconOracle {
    pub fn new(alternatives: HashMap<String, Vec<String>>) -> Self {
        Self { alternatives }
    }

    /// Register alternatives for a phrase
    pub fn add_entry(&mut self, phrase: &str, alternatives: Vec<String>) {
        self.alternatives.insert(phrase.to_string(), alternatives);
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl SuggestionOracle for LexiconOracle {
    fn suggest(
        &self,
        highlights: &[Highlight],
        _text: &str,
    ) -> Result<Vec<Suggestion>, EditError> {
        let mut ordered: Vec<&Highlight> = highlights.iter().collect();
        ordered.sort_by_key(|h| (h.start, h.end));

        let suggestions = ordered
            .into_iter()
            .filter_map(|h| {
                self.alternatives.get(&h.text).map(|alts| {
                    Suggestion::new(
                        h.text.clone(),
                        alts.clone(),
                        Some(PhrasePosition {
                            start: h.start,
                            end: h.end,
                        }),
                    )
                })
            })
            .collect();

        Ok(suggestions)
    }
}

//! Lexicon-driven phrase detection
//!
//! The fallback analyzer: scans the text for known complex phrases and
//! emits a pre-classified highlight per non-overlapping occurrence.
//! Matching is case-insensitive; offsets are char offsets into the
//! original text.

use super::Analyzer;
use crate::models::errors::EditError;
use crate::spans::highlight::{FamiliarityLevel, Highlight};
use crate::utils::chars::slice_chars;
use serde::{Deserialize, Serialize};

/// One known phrase and the level it gets tagged with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub phrase: String,
    pub level: FamiliarityLevel,
}

impl LexiconEntry {
    pub fn new(phrase: &str, level: FamiliarityLevel) -> Self {
        Self {
            phrase: phrase.to_string(),
            level,
        }
    }
}

/// Case-insensitive substring scanner over a phrase lexicon
#[derive(Debug, Clone, Default)]
pub struct PhraseScanner {
    entries: Vec<LexiconEntry>,
}

/// Single-char case fold, length-preserving so offsets stay aligned
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl PhraseScanner {
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        Self { entries }
    }

    /// Scanner seeded with the stock complex-phrase lexicon
    pub fn with_default_lexicon() -> Self {
        Self::new(vec![
            LexiconEntry::new("large language model", FamiliarityLevel::NotFamiliar),
            LexiconEntry::new("LLM agents", FamiliarityLevel::NotFamiliar),
            LexiconEntry::new("composable patterns", FamiliarityLevel::SomewhatFamiliar),
            LexiconEntry::new("complex frameworks", FamiliarityLevel::SomewhatFamiliar),
            LexiconEntry::new("specialized libraries", FamiliarityLevel::Familiar),
            LexiconEntry::new("implementations", FamiliarityLevel::Familiar),
        ])
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// All non-overlapping occurrences of one phrase, as char offsets
    fn occurrences(haystack: &[char], needle: &[char]) -> Vec<usize> {
        let mut starts = Vec::new();
        if needle.is_empty() || needle.len() > haystack.len() {
            return starts;
        }

        let mut i = 0;
        while i + needle.len() <= haystack.len() {
            if haystack[i..i + needle.len()] == *needle {
                starts.push(i);
                i += needle.len();
            } else {
                i += 1;
            }
        }
        starts
    }
}

impl Analyzer for PhraseScanner {
    fn analyze(&self, text: &str) -> Result<Vec<Highlight>, EditError> {
        if text.trim().is_empty() {
            return Err(EditError::AnalysisFailed(
                "nothing to analyze: text is empty".to_string(),
            ));
        }

        let haystack: Vec<char> = text.chars().map(fold).collect();
        let mut highlights = Vec::new();

        for entry in &self.entries {
            let needle: Vec<char> = entry.phrase.chars().map(fold).collect();
            for start in Self::occurrences(&haystack, &needle) {
                let end = start + needle.len();
                highlights.push(Highlight::new(
                    slice_chars(text, start, end).to_string(),
                    start,
                    end,
                    Some(entry.level),
                ));
            }
        }

        highlights.sort_by_key(|h| (h.start, h.end));
        Ok(highlights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_is_case_insensitive() {
        let scanner = PhraseScanner::new(vec![LexiconEntry::new(
            "heuristics",
            FamiliarityLevel::NotFamiliar,
        )]);

        let found = scanner.analyze("Heuristics help. HEURISTICS too.").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].start, 0);
        assert_eq!(found[1].start, 17);
        // Snapshot keeps the original casing
        assert_eq!(found[0].text, "Heuristics");
        assert_eq!(found[1].text, "HEURISTICS");
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        let scanner = PhraseScanner::new(vec![LexiconEntry::new(
            "aa",
            FamiliarityLevel::Familiar,
        )]);

        let found = scanner.analyze("aaaa").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!((found[0].start, found[0].end), (0, 2));
        assert_eq!((found[1].start, found[1].end), (2, 4));
    }

    #[test]
    fn test_results_sorted_by_start() {
        let scanner = PhraseScanner::new(vec![
            LexiconEntry::new("zebra", FamiliarityLevel::Familiar),
            LexiconEntry::new("apple", FamiliarityLevel::Familiar),
        ]);

        let found = scanner.analyze("zebra then apple").unwrap();
        assert_eq!(found[0].text, "zebra");
        assert_eq!(found[1].text, "apple");
    }

    #[test]
    fn test_empty_text_fails_analysis() {
        let scanner = PhraseScanner::with_default_lexicon();
        let err = scanner.analyze("   ").unwrap_err();
        assert!(matches!(err, EditError::AnalysisFailed(_)));
    }

    #[test]
    fn test_offsets_are_char_offsets() {
        let scanner = PhraseScanner::new(vec![LexiconEntry::new(
            "modèle",
            FamiliarityLevel::NotFamiliar,
        )]);

        let found = scanner.analyze("un modèle simple").unwrap();
        assert_eq!((found[0].start, found[0].end), (3, 9));
    }
}

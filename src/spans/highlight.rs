//! Highlight span records and familiarity classification
//!
//! Pure text spans with no rendering knowledge. A highlight is a half-open
//! char range `[start, end)` into the document text, plus the snapshot of
//! that text taken at creation time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User-assigned classification of how well-known a phrase is
///
/// Serialized with the kebab-case wire strings the JavaScript shell uses
/// (`"not-familiar"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamiliarityLevel {
    #[serde(rename = "not-familiar")]
    NotFamiliar,

    #[serde(rename = "somewhat-familiar")]
    SomewhatFamiliar,

    #[serde(rename = "familiar")]
    Familiar,
}

impl FamiliarityLevel {
    /// All levels in severity order (least familiar first)
    pub const ALL: [FamiliarityLevel; 3] = [
        FamiliarityLevel::NotFamiliar,
        FamiliarityLevel::SomewhatFamiliar,
        FamiliarityLevel::Familiar,
    ];

    /// The wire string for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            FamiliarityLevel::NotFamiliar => "not-familiar",
            FamiliarityLevel::SomewhatFamiliar => "somewhat-familiar",
            FamiliarityLevel::Familiar => "familiar",
        }
    }

    /// Parse a wire string back into a level
    pub fn parse(s: &str) -> Option<FamiliarityLevel> {
        match s {
            "not-familiar" => Some(FamiliarityLevel::NotFamiliar),
            "somewhat-familiar" => Some(FamiliarityLevel::SomewhatFamiliar),
            "familiar" => Some(FamiliarityLevel::Familiar),
            _ => None,
        }
    }
}

/// A tagged half-open char range within the document text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Opaque unique identifier, stable for the lifetime of the span
    pub id: String,

    /// Start char offset (inclusive)
    pub start: usize,

    /// End char offset (exclusive)
    pub end: usize,

    /// Creation-time snapshot of the covered text
    ///
    /// Used for display and as the match key for accept/ignore. Not
    /// re-synced when other spans shift the text, so it can go stale
    /// relative to the live slice.
    pub text: String,

    /// Unset until the user (or analyzer) classifies the phrase
    #[serde(rename = "familiarityLevel")]
    pub familiarity_level: Option<FamiliarityLevel>,
}

impl Highlight {
    /// Create a highlight with a fresh unique id
    pub fn new(text: String, start: usize, end: usize, level: Option<FamiliarityLevel>) -> Self {
        Self {
            id: format!("highlight-{}", Uuid::new_v4()),
            start,
            end,
            text,
            familiarity_level: level,
        }
    }

    /// Create a highlight with a caller-supplied id (analyzer results carry their own)
    pub fn with_id(
        id: String,
        text: String,
        start: usize,
        end: usize,
        level: Option<FamiliarityLevel>,
    ) -> Self {
        Self {
            id,
            start,
            end,
            text,
            familiarity_level: level,
        }
    }

    /// Span length in chars
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the span covers no chars (never valid in a store)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if a char offset falls inside this span
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if two spans share at least one char
    pub fn overlaps(&self, other: &Highlight) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A raw user selection reduced to char offsets
///
/// This is the Selection Adapter contract: the host UI walks the DOM
/// selection range, measures the char offset of its start relative to the
/// rendered text, and hands the core this tuple. The screen-space anchor
/// for the contextual menu stays on the UI side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSpan {
    /// The selected text as the user saw it
    pub text: String,

    /// Start char offset into the rendered text (inclusive)
    pub start: usize,

    /// End char offset (exclusive)
    pub end: usize,
}

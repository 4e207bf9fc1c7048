//! Shared types for the WASM API
//!
//! Result payloads handed back to JavaScript after each operation.

use crate::models::core::Document;
use crate::models::palette::ColorPalette;
use crate::models::suggestion::Suggestion;
use crate::spans::highlight::{FamiliarityLevel, Highlight};
use crate::spans::segment::Run;

/// Flat snapshot of the document for the JavaScript shell
///
/// Highlights are pre-sorted in render order so the shell never has to
/// re-derive it.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct DocumentSnapshot {
    pub text: String,
    pub highlights: Vec<Highlight>,
    pub suggestions: Vec<Suggestion>,
    pub analyzed: bool,
}

impl DocumentSnapshot {
    /// Build a snapshot from the canonical document
    pub fn from_document(doc: &Document) -> Self {
        Self {
            text: doc.text.clone(),
            highlights: doc
                .highlights
                .sorted_by_start()
                .into_iter()
                .cloned()
                .collect(),
            suggestions: doc.suggestions.clone(),
            analyzed: doc.analyzed,
        }
    }
}

/// A render run with its display color resolved from the palette
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct StyledRun {
    /// "plain" or "tagged"
    pub kind: String,

    pub text: String,

    /// Highlight id for tagged runs
    pub id: Option<String>,

    pub level: Option<FamiliarityLevel>,

    /// Background color for tagged runs; unclassified spans get the
    /// not-familiar color so they stay visible
    pub color: Option<String>,
}

impl StyledRun {
    /// Resolve a segmenter run against a palette
    pub fn from_run(run: Run, palette: &ColorPalette) -> Self {
        match run {
            Run::Plain { text } => Self {
                kind: "plain".to_string(),
                text,
                id: None,
                level: None,
                color: None,
            },
            Run::Tagged { text, id, level } => Self {
                kind: "tagged".to_string(),
                text,
                id: Some(id),
                level,
                color: Some(
                    palette
                        .color_for(level.unwrap_or(FamiliarityLevel::NotFamiliar))
                        .to_string(),
                ),
            },
        }
    }
}

//! Analysis collaborators
//!
//! The analyzer and suggestion oracle are external services from the
//! core's point of view: they produce an initial span set and candidate
//! rephrasings, and they may fail. The traits here are the seams; the
//! built-in implementations cover the offline fallback path so the editor
//! stays usable without a backend.
//!
//! ## Modules
//!
//! - `scanner`: lexicon-driven phrase detection (fallback analyzer)
//! - `oracle`: table-driven rephrase suggestions (fallback oracle)

pub mod oracle;
pub mod scanner;

use crate::models::errors::EditError;
use crate::models::suggestion::Suggestion;
use crate::spans::highlight::Highlight;

pub use oracle::LexiconOracle;
pub use scanner::{LexiconEntry, PhraseScanner};

/// Produces an initial, non-final span set for a text
///
/// The user may still add, reclassify, and remove highlights afterwards.
/// Failures surface as `AnalysisFailed` with no automatic retry.
pub trait Analyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Highlight>, EditError>;
}

/// Produces candidate rephrasings for tagged phrases
///
/// Each suggestion should reference a phrase matching a current
/// highlight's snapshot text, but consumers must tolerate orphans.
/// Failures surface as `SuggestionFailed` with no automatic retry.
pub trait SuggestionOracle {
    fn suggest(&self, highlights: &[Highlight], text: &str) -> Result<Vec<Suggestion>, EditError>;
}

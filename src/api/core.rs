//! WASM API for the annotation document
//!
//! JavaScript-facing operations over the WASM-owned document: analysis
//! intake, highlight lifecycle (add/update/remove), suggestion
//! accept/ignore, and render-run generation. The document held here is the
//! canonical source of truth; the shell re-renders from the snapshot or
//! run list returned by each call.

use crate::analysis::{Analyzer, LexiconOracle, PhraseScanner, SuggestionOracle};
use crate::api::helpers::{
    deserialize, edit_error, parse_level, serialize, validate_selection_range, validation_error,
};
use crate::api::types::{DocumentSnapshot, StyledRun};
use crate::models::core::Document;
use crate::models::palette::palette_for_need;
use crate::models::suggestion::Suggestion;
use crate::spans::highlight::{Highlight, SelectionSpan};
use crate::spans::segment::segment;
use crate::{wasm_error, wasm_info, wasm_warn};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

// WASM-owned document storage (canonical source of truth)
lazy_static! {
    static ref DOCUMENT: Mutex<Option<Document>> = Mutex::new(None);
}

/// Serialize the current document state for the shell
fn snapshot(doc: &Document) -> Result<JsValue, JsValue> {
    serialize(
        &DocumentSnapshot::from_document(doc),
        "Snapshot serialization error",
    )
}

// ============================================================================
// Document lifecycle
// ============================================================================

/// Load pasted text as a fresh document
///
/// # Parameters
/// - `text`: the raw text to annotate
///
/// # Returns
/// Snapshot of the new (unanalyzed, unannotated) document
#[wasm_bindgen(js_name = initDocument)]
pub fn init_document(text: String) -> Result<JsValue, JsValue> {
    wasm_info!("initDocument called: {} chars", text.chars().count());

    let doc = Document::from_text(text);
    let result = snapshot(&doc)?;
    *DOCUMENT.lock().unwrap() = Some(doc);

    Ok(result)
}

/// Clear the document and all derived state
#[wasm_bindgen(js_name = resetDocument)]
pub fn reset_document() -> Result<(), JsValue> {
    wasm_info!("resetDocument called");

    *DOCUMENT.lock().unwrap() = None;

    Ok(())
}

/// Get the current document snapshot
#[wasm_bindgen(js_name = getDocument)]
pub fn get_document() -> Result<JsValue, JsValue> {
    let doc_guard = DOCUMENT.lock().unwrap();
    match doc_guard.as_ref() {
        Some(doc) => snapshot(doc),
        None => {
            wasm_warn!("No document loaded");
            Err(JsValue::from_str("No document loaded"))
        }
    }
}

// ============================================================================
// Analysis intake
// ============================================================================

/// Install highlights produced by an external analyzer
///
/// # Parameters
/// - `highlights_js`: JavaScript array of Highlight objects
///
/// # Returns
/// Snapshot after the whole batch is validated and committed; one invalid
/// span rejects the batch and leaves the document unchanged
#[wasm_bindgen(js_name = applyAnalysis)]
pub fn apply_analysis(highlights_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("applyAnalysis called");

    let highlights: Vec<Highlight> =
        deserialize(highlights_js, "Highlight deserialization error")?;

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    let count = doc.apply_analysis(highlights).map_err(edit_error)?;
    wasm_info!("  Installed {} highlight(s)", count);

    snapshot(doc)
}

/// Analyze the current text with the built-in phrase scanner
///
/// Offline fallback for when no external analyzer is reachable: scans the
/// stock lexicon of complex phrases and installs the matches.
#[wasm_bindgen(js_name = analyzeDocument)]
pub fn analyze_document() -> Result<JsValue, JsValue> {
    wasm_info!("analyzeDocument called");

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    let scanner = PhraseScanner::with_default_lexicon();
    let highlights = scanner.analyze(&doc.text).map_err(edit_error)?;
    let count = doc.apply_analysis(highlights).map_err(edit_error)?;
    wasm_info!("  Scanner found {} phrase(s)", count);

    snapshot(doc)
}

// ============================================================================
// Highlight lifecycle
// ============================================================================

/// Create a highlight from a user selection
///
/// # Parameters
/// - `selection_js`: JavaScript object `{text, start, end}` in char
///   offsets of the currently rendered text (Selection Adapter contract)
/// - `level`: familiarity level wire string
///
/// # Returns
/// The created Highlight (with its fresh id)
#[wasm_bindgen(js_name = addHighlight)]
pub fn add_highlight(selection_js: JsValue, level: &str) -> Result<JsValue, JsValue> {
    let selection: SelectionSpan = deserialize(selection_js, "Selection deserialization error")?;
    let level = parse_level(level)?;

    wasm_info!(
        "addHighlight called: [{}, {}) '{}'",
        selection.start,
        selection.end,
        selection.text
    );

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    validate_selection_range(selection.start, selection.end, doc.char_len())
        .map_err(validation_error)?;

    let highlight = doc.add_highlight(&selection, level).map_err(edit_error)?;

    serialize(&highlight, "Highlight serialization error")
}

/// Change an existing highlight's familiarity level
#[wasm_bindgen(js_name = updateHighlight)]
pub fn update_highlight(id: &str, level: &str) -> Result<JsValue, JsValue> {
    wasm_info!("updateHighlight called: id={}, level={}", id, level);

    let level = parse_level(level)?;

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    doc.reclassify(id, level).map_err(edit_error)?;

    snapshot(doc)
}

/// Remove a highlight by id
///
/// Removal never shifts other spans.
#[wasm_bindgen(js_name = removeHighlight)]
pub fn remove_highlight(id: &str) -> Result<JsValue, JsValue> {
    wasm_info!("removeHighlight called: id={}", id);

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    doc.remove_highlight(id).map_err(edit_error)?;

    snapshot(doc)
}

// ============================================================================
// Suggestions
// ============================================================================

/// Replace the pending suggestion set with externally fetched suggestions
#[wasm_bindgen(js_name = setSuggestions)]
pub fn set_suggestions(suggestions_js: JsValue) -> Result<JsValue, JsValue> {
    let suggestions: Vec<Suggestion> =
        deserialize(suggestions_js, "Suggestion deserialization error")?;

    wasm_info!("setSuggestions called: {} suggestion(s)", suggestions.len());

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    doc.set_suggestions(suggestions);

    snapshot(doc)
}

/// Generate suggestions from a phrase → alternatives table
///
/// Offline fallback for when no external oracle is reachable. The table
/// is matched against the current highlights' snapshot text.
///
/// # Parameters
/// - `lexicon_js`: JavaScript object mapping phrase strings to arrays of
///   alternative strings
#[wasm_bindgen(js_name = generateSuggestions)]
pub fn generate_suggestions(lexicon_js: JsValue) -> Result<JsValue, JsValue> {
    let table: HashMap<String, Vec<String>> =
        deserialize(lexicon_js, "Lexicon deserialization error")?;

    wasm_info!("generateSuggestions called: {} table entries", table.len());

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    let oracle = LexiconOracle::new(table);
    let highlights: Vec<Highlight> = doc.highlights.iter().cloned().collect();
    let suggestions = oracle
        .suggest(&highlights, &doc.text)
        .map_err(edit_error)?;

    wasm_info!("  Oracle produced {} suggestion(s)", suggestions.len());
    doc.set_suggestions(suggestions);

    snapshot(doc)
}

/// Accept a replacement for a tagged phrase
///
/// Splices the replacement into the matched span's range, removes the
/// span, shifts every later span, and drops the matching suggestions as
/// one atomic transition.
#[wasm_bindgen(js_name = acceptSuggestion)]
pub fn accept_suggestion(phrase: &str, replacement: &str) -> Result<JsValue, JsValue> {
    wasm_info!(
        "acceptSuggestion called: '{}' -> '{}'",
        phrase,
        replacement
    );

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    doc.accept_suggestion(phrase, replacement)
        .map_err(edit_error)?;

    snapshot(doc)
}

/// Dismiss a suggestion and its highlight without touching the text
#[wasm_bindgen(js_name = ignoreSuggestion)]
pub fn ignore_suggestion(phrase: &str) -> Result<JsValue, JsValue> {
    wasm_info!("ignoreSuggestion called: '{}'", phrase);

    let mut doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_mut()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    doc.ignore_suggestion(phrase).map_err(edit_error)?;

    snapshot(doc)
}

// ============================================================================
// Rendering
// ============================================================================

/// Produce the styled run list for the current document
///
/// # Parameters
/// - `accessibility_need`: palette selector ("colorblind", "dyslexia",
///   "low-vision", or anything else for the default palette)
///
/// # Returns
/// JavaScript array of runs; concatenating their text reconstructs the
/// document text exactly
#[wasm_bindgen(js_name = renderRuns)]
pub fn render_runs(accessibility_need: Option<String>) -> Result<js_sys::Array, JsValue> {
    let doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_ref()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    let palette = palette_for_need(accessibility_need.as_deref().unwrap_or("default"));

    let result = js_sys::Array::new();
    for run in segment(&doc.text, &doc.highlights) {
        let styled = StyledRun::from_run(run, palette);
        result.push(&serialize(&styled, "Run serialization error")?);
    }

    Ok(result)
}

/// Export the current document snapshot as a JSON string
///
/// For the shell to stash (e.g. in local storage) and reload later via
/// `initDocument` + `applyAnalysis` + `setSuggestions`.
#[wasm_bindgen(js_name = exportDocument)]
pub fn export_document() -> Result<String, JsValue> {
    let doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_ref()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    serde_json::to_string(&DocumentSnapshot::from_document(doc)).map_err(|e| {
        wasm_error!("Snapshot JSON error: {}", e);
        JsValue::from_str(&format!("Snapshot JSON error: {}", e))
    })
}

/// Count classified highlights per familiarity level
#[wasm_bindgen(js_name = tagSummary)]
pub fn tag_summary() -> Result<JsValue, JsValue> {
    let doc_guard = DOCUMENT.lock().unwrap();
    let doc = doc_guard
        .as_ref()
        .ok_or_else(|| validation_error("No document loaded - call initDocument first"))?;

    serialize(&doc.tag_counts(), "Tag count serialization error")
}

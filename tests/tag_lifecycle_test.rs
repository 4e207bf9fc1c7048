// Test the highlight life cycle: create, reclassify, remove, ignore,
// and the analyzer/oracle intake paths

use annotator_wasm::analysis::{Analyzer, LexiconEntry, LexiconOracle, PhraseScanner, SuggestionOracle};
use annotator_wasm::{Document, EditError, FamiliarityLevel, SelectionSpan, Suggestion};

fn select(text: &str, start: usize, end: usize) -> SelectionSpan {
    SelectionSpan {
        text: text.to_string(),
        start,
        end,
    }
}

#[test]
fn test_reclassify_and_remove_never_shift_other_spans() {
    let mut doc = Document::from_text("alpha beta gamma delta epsilon");
    let a = doc
        .add_highlight(&select("alpha", 0, 5), FamiliarityLevel::NotFamiliar)
        .unwrap();
    let b = doc
        .add_highlight(&select("gamma", 11, 16), FamiliarityLevel::NotFamiliar)
        .unwrap();
    doc.add_highlight(&select("epsilon", 23, 30), FamiliarityLevel::NotFamiliar)
        .unwrap();

    let offsets_before: Vec<(usize, usize)> = doc
        .highlights
        .sorted_by_start()
        .iter()
        .map(|h| (h.start, h.end))
        .collect();

    doc.reclassify(&a.id, FamiliarityLevel::Familiar).unwrap();
    doc.remove_highlight(&b.id).unwrap();

    let offsets_after: Vec<(usize, usize)> = doc
        .highlights
        .sorted_by_start()
        .iter()
        .map(|h| (h.start, h.end))
        .collect();

    assert_eq!(offsets_after, vec![offsets_before[0], offsets_before[2]]);
    assert_eq!(doc.text, "alpha beta gamma delta epsilon");
}

#[test]
fn test_remove_missing_id_reports_not_found() {
    let mut doc = Document::from_text("text");
    let err = doc.remove_highlight("highlight-gone").unwrap_err();
    assert!(matches!(err, EditError::NotFound(_)));
}

#[test]
fn test_ignore_removes_span_and_suggestion_without_text_change() {
    let mut doc = Document::from_text("keep the jargon here");
    doc.add_highlight(&select("jargon", 9, 15), FamiliarityLevel::NotFamiliar)
        .unwrap();
    doc.set_suggestions(vec![Suggestion::new(
        "jargon".to_string(),
        vec!["slang".to_string()],
        None,
    )]);

    doc.ignore_suggestion("jargon").unwrap();

    assert_eq!(doc.text, "keep the jargon here", "ignore must not touch the text");
    assert!(doc.highlights.is_empty());
    assert!(doc.suggestions.is_empty());
}

#[test]
fn test_ignore_twice_reports_not_found_and_changes_nothing() {
    let mut doc = Document::from_text("keep the jargon here");
    doc.add_highlight(&select("jargon", 9, 15), FamiliarityLevel::NotFamiliar)
        .unwrap();

    doc.ignore_suggestion("jargon").unwrap();
    let after_first = doc.clone();

    let err = doc.ignore_suggestion("jargon").unwrap_err();

    assert!(matches!(err, EditError::NotFound(_)));
    assert_eq!(doc, after_first);
}

#[test]
fn test_orphan_suggestions_stay_inert() {
    let mut doc = Document::from_text("plain text with no tags");
    doc.set_suggestions(vec![Suggestion::new(
        "phantom".to_string(),
        vec!["ghost".to_string()],
        None,
    )]);
    let before = doc.clone();

    assert!(matches!(
        doc.accept_suggestion("phantom", "x").unwrap_err(),
        EditError::NotFound(_)
    ));
    assert!(matches!(
        doc.ignore_suggestion("phantom").unwrap_err(),
        EditError::NotFound(_)
    ));
    assert_eq!(doc, before, "orphan suggestions must be inert");
}

#[test]
fn test_duplicate_range_add_is_rejected() {
    let mut doc = Document::from_text("the same words twice");
    doc.add_highlight(&select("same", 4, 8), FamiliarityLevel::NotFamiliar)
        .unwrap();

    let err = doc
        .add_highlight(&select("same", 4, 8), FamiliarityLevel::Familiar)
        .unwrap_err();

    assert!(matches!(err, EditError::InvalidSpan { .. }));
    assert_eq!(doc.highlights.len(), 1);
}

#[test]
fn test_scanner_then_oracle_end_to_end() {
    let text = "Our large language model ships with specialized libraries.";
    let mut doc = Document::from_text(text);

    let scanner = PhraseScanner::with_default_lexicon();
    let found = scanner.analyze(text).unwrap();
    doc.apply_analysis(found).unwrap();

    assert!(doc.analyzed);
    assert_eq!(doc.highlights.len(), 2);

    let mut oracle = LexiconOracle::default();
    oracle.add_entry("large language model", vec!["AI system".to_string()]);

    let highlights: Vec<_> = doc.highlights.iter().cloned().collect();
    let suggestions = oracle.suggest(&highlights, &doc.text).unwrap();
    doc.set_suggestions(suggestions);
    assert_eq!(doc.suggestions.len(), 1);

    doc.accept_suggestion("large language model", "AI system")
        .unwrap();

    assert_eq!(
        doc.text,
        "Our AI system ships with specialized libraries."
    );
    assert!(doc.suggestions.is_empty());

    // The remaining span still covers its phrase after the shift
    let remaining = doc.highlights.sorted_by_start();
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        annotator_wasm::current_slice(&doc.text, remaining[0]),
        "specialized libraries"
    );
}

#[test]
fn test_custom_lexicon_levels_flow_into_tag_counts() {
    let text = "heuristics and abstractions";
    let scanner = PhraseScanner::new(vec![
        LexiconEntry::new("heuristics", FamiliarityLevel::NotFamiliar),
        LexiconEntry::new("abstractions", FamiliarityLevel::SomewhatFamiliar),
    ]);

    let mut doc = Document::from_text(text);
    doc.apply_analysis(scanner.analyze(text).unwrap()).unwrap();

    let counts = doc.tag_counts();
    assert_eq!(counts.not_familiar, 1);
    assert_eq!(counts.somewhat_familiar, 1);
    assert_eq!(counts.familiar, 0);
    assert_eq!(counts.total, 2);
}

#[test]
fn test_reset_returns_to_pristine_state() {
    let mut doc = Document::from_text("some analyzed text");
    doc.apply_analysis(vec![]).unwrap();
    doc.set_suggestions(vec![Suggestion::new(
        "x".to_string(),
        vec!["y".to_string()],
        None,
    )]);
    assert!(doc.analyzed);

    doc.reset();

    assert_eq!(doc, Document::new());
    assert!(!doc.analyzed);
}

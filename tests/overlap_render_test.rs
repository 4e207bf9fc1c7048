// Test run segmentation: round-trip coverage and overlap resolution

use annotator_wasm::{
    segment, Document, FamiliarityLevel, Highlight, HighlightStore, Run, SelectionSpan,
};

fn select(text: &str, start: usize, end: usize) -> SelectionSpan {
    SelectionSpan {
        text: text.to_string(),
        start,
        end,
    }
}

fn reconstruct(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text()).collect()
}

#[test]
fn test_runs_reconstruct_text_exactly() {
    let mut doc = Document::from_text("Select any text to add or modify tags.");
    doc.add_highlight(&select("any text", 7, 15), FamiliarityLevel::NotFamiliar)
        .unwrap();
    doc.add_highlight(&select("tags", 33, 37), FamiliarityLevel::Familiar)
        .unwrap();

    let runs = segment(&doc.text, &doc.highlights);

    assert_eq!(
        reconstruct(&runs),
        doc.text,
        "concatenated runs must reconstruct the text with no gaps or duplicates"
    );
}

#[test]
fn test_overlapping_spans_share_region_with_earlier_span() {
    let text = "0123456789abcdefghij";
    let mut store = HighlightStore::new();
    store
        .insert(
            Highlight::new("A".to_string(), 0, 10, Some(FamiliarityLevel::NotFamiliar)),
            20,
        )
        .unwrap();
    store
        .insert(
            Highlight::new("B".to_string(), 5, 15, Some(FamiliarityLevel::Familiar)),
            20,
        )
        .unwrap();

    let runs = segment(text, &store);

    // A covers [0,10); B renders only [10,15); trailing plain [15,20)
    assert_eq!(runs.len(), 3);
    assert!(matches!(&runs[0], Run::Tagged { text, .. } if text == "0123456789"));
    assert!(matches!(&runs[1], Run::Tagged { text, .. } if text == "abcde"));
    assert!(matches!(&runs[2], Run::Plain { text } if text == "fghij"));
    assert_eq!(reconstruct(&runs), text);
}

#[test]
fn test_shared_start_renders_shorter_span_first() {
    let text = "overlapping spans here";
    let mut store = HighlightStore::new();
    store
        .insert(Highlight::new("long".to_string(), 0, 11, None), 22)
        .unwrap();
    store
        .insert(Highlight::new("short".to_string(), 0, 4, None), 22)
        .unwrap();

    let runs = segment(text, &store);

    // Tie on start resolves by ascending end: "over" first, then the
    // remainder of the longer span
    assert!(matches!(&runs[0], Run::Tagged { text, .. } if text == "over"));
    assert!(matches!(&runs[1], Run::Tagged { text, .. } if text == "lapping"));
    assert_eq!(reconstruct(&runs), text);
}

#[test]
fn test_render_order_stable_across_calls() {
    let mut doc = Document::from_text("stable render order required");
    doc.add_highlight(&select("render", 7, 13), FamiliarityLevel::SomewhatFamiliar)
        .unwrap();
    doc.add_highlight(&select("stable", 0, 6), FamiliarityLevel::NotFamiliar)
        .unwrap();

    let first = segment(&doc.text, &doc.highlights);
    let second = segment(&doc.text, &doc.highlights);

    assert_eq!(first, second, "segmentation must be a pure function of its inputs");
}

#[test]
fn test_tagged_run_carries_id_and_level() {
    let mut doc = Document::from_text("one tagged word");
    let h = doc
        .add_highlight(&select("tagged", 4, 10), FamiliarityLevel::SomewhatFamiliar)
        .unwrap();

    let runs = segment(&doc.text, &doc.highlights);

    match &runs[1] {
        Run::Tagged { text, id, level } => {
            assert_eq!(text, "tagged");
            assert_eq!(id, &h.id);
            assert_eq!(level, &Some(FamiliarityLevel::SomewhatFamiliar));
        }
        other => panic!("expected tagged run, got {:?}", other),
    }
}

#[test]
fn test_runs_after_accept_follow_new_offsets() {
    let mut doc = Document::from_text("first phrase and second phrase");
    doc.add_highlight(&select("first", 0, 5), FamiliarityLevel::NotFamiliar)
        .unwrap();
    doc.add_highlight(&select("second", 17, 23), FamiliarityLevel::NotFamiliar)
        .unwrap();

    doc.accept_suggestion("first", "1st").unwrap();

    let runs = segment(&doc.text, &doc.highlights);
    assert_eq!(reconstruct(&runs), "1st phrase and second phrase");
    assert!(
        runs.iter()
            .any(|r| matches!(r, Run::Tagged { text, .. } if text == "second")),
        "the shifted span must still cover its word after the accept"
    );
}

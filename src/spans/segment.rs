//! Segmenter: split text into renderable runs at span boundaries
//!
//! A pure function of `(text, spans)`. The host UI renders each plain run
//! as-is and each tagged run as a highlighted region colored by its
//! familiarity level. Concatenating every run's text reconstructs the
//! input exactly.

use super::highlight::{FamiliarityLevel, Highlight};
use super::store::HighlightStore;
use crate::utils::chars::slice_chars;
use serde::{Deserialize, Serialize};

/// One renderable run of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Run {
    /// Untagged text between highlights
    Plain { text: String },

    /// Text covered by a highlight span
    Tagged {
        text: String,
        id: String,
        level: Option<FamiliarityLevel>,
    },
}

impl Run {
    /// The text carried by this run, whatever its kind
    pub fn text(&self) -> &str {
        match self {
            Run::Plain { text } => text,
            Run::Tagged { text, .. } => text,
        }
    }
}

/// Split text into plain/tagged runs in left-to-right document order
///
/// Walks `sorted_by_start()` with a cursor. For each span: emit the plain
/// gap before it (if any), then the tagged body, then advance the cursor
/// to the span's end. A span that starts before the cursor overlaps the
/// previously emitted one; its leading overlap is silently truncated so
/// the earlier span keeps the shared region. A span the cursor has already
/// passed entirely emits nothing.
pub fn segment(text: &str, store: &HighlightStore) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut cursor = 0usize;

    for highlight in store.sorted_by_start() {
        let run_start = highlight.start.max(cursor);
        if highlight.end <= run_start {
            // Fully swallowed by the previous span
            continue;
        }

        if cursor < run_start {
            runs.push(Run::Plain {
                text: slice_chars(text, cursor, run_start).to_string(),
            });
        }

        runs.push(Run::Tagged {
            text: slice_chars(text, run_start, highlight.end).to_string(),
            id: highlight.id.clone(),
            level: highlight.familiarity_level,
        });

        cursor = highlight.end;
    }

    let total = crate::utils::chars::char_len(text);
    if cursor < total {
        runs.push(Run::Plain {
            text: slice_chars(text, cursor, total).to_string(),
        });
    }

    runs
}

/// The live text currently covered by a highlight's range
///
/// Distinct from `Highlight::text`, which is the creation-time snapshot
/// and may be stale after shifts.
pub fn current_slice(text: &str, highlight: &Highlight) -> String {
    slice_chars(text, highlight.start, highlight.end).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spans::highlight::FamiliarityLevel;

    fn store_with(text_len: usize, spans: &[(&str, usize, usize)]) -> HighlightStore {
        let mut store = HighlightStore::new();
        for (snapshot, start, end) in spans {
            store
                .insert(
                    Highlight::new(
                        snapshot.to_string(),
                        *start,
                        *end,
                        Some(FamiliarityLevel::NotFamiliar),
                    ),
                    text_len,
                )
                .unwrap();
        }
        store
    }

    fn reconstruct(runs: &[Run]) -> String {
        runs.iter().map(|r| r.text()).collect()
    }

    #[test]
    fn test_no_spans_single_plain_run() {
        let text = "just plain text";
        let runs = segment(text, &HighlightStore::new());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text(), text);
    }

    #[test]
    fn test_empty_text_no_runs() {
        let runs = segment("", &HighlightStore::new());
        assert!(runs.is_empty());
    }

    #[test]
    fn test_round_trip_reconstruction() {
        let text = "The algorithm uses heuristics.";
        let store = store_with(30, &[("algorithm", 4, 13), ("heuristics", 19, 29)]);

        let runs = segment(text, &store);
        assert_eq!(reconstruct(&runs), text);
        assert_eq!(runs.len(), 5); // plain, tagged, plain, tagged, plain
    }

    #[test]
    fn test_span_at_text_edges() {
        let text = "edge";
        let store = store_with(4, &[("edge", 0, 4)]);

        let runs = segment(text, &store);
        assert_eq!(runs.len(), 1);
        assert!(matches!(&runs[0], Run::Tagged { text, .. } if text == "edge"));
    }

    #[test]
    fn test_adjacent_spans_no_gap_run() {
        let text = "abcdef";
        let store = store_with(6, &[("abc", 0, 3), ("def", 3, 6)]);

        let runs = segment(text, &store);
        assert_eq!(runs.len(), 2);
        assert_eq!(reconstruct(&runs), text);
    }

    #[test]
    fn test_overlap_attributed_to_earlier_span() {
        let text = "0123456789abcde";
        let store = store_with(15, &[("A", 0, 10), ("B", 5, 15)]);

        let runs = segment(text, &store);
        assert_eq!(runs.len(), 2);
        assert!(matches!(&runs[0], Run::Tagged { text, .. } if text == "0123456789"));
        // B renders only its tail; the shared [5,10) stays with A
        assert!(matches!(&runs[1], Run::Tagged { text, .. } if text == "abcde"));
        assert_eq!(reconstruct(&runs), text);
    }

    #[test]
    fn test_swallowed_span_emits_nothing() {
        let text = "0123456789";
        let store = store_with(10, &[("outer", 0, 8), ("inner", 2, 5)]);

        let runs = segment(text, &store);
        assert_eq!(runs.len(), 2); // outer tagged + trailing plain
        assert_eq!(reconstruct(&runs), text);
    }

    #[test]
    fn test_current_slice_differs_from_stale_snapshot() {
        let text = "one XYZ three";
        let mut store = HighlightStore::new();
        let h = Highlight::new("two".to_string(), 4, 7, None);
        let id = h.id.clone();
        store.insert(h, 13).unwrap();

        let h = store.get(&id).unwrap();
        assert_eq!(h.text, "two"); // snapshot untouched
        assert_eq!(current_slice(text, h), "XYZ");
    }
}

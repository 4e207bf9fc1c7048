//! Text Annotation WASM API
//!
//! This module provides the JavaScript-facing API for the annotation
//! document. It includes shared utilities for serialization, validation,
//! and error handling, as well as the core API functions.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `types`: Result payloads returned to JavaScript
//! - `core`: Document lifecycle, highlight/suggestion operations, rendering

pub mod core;
pub mod helpers;
pub mod types;

// Re-export all public functions to keep a flat public API
pub use self::core::{
    accept_suggestion, add_highlight, analyze_document, apply_analysis, export_document,
    generate_suggestions, get_document, ignore_suggestion, init_document, remove_highlight,
    render_runs, reset_document, set_suggestions, tag_summary, update_highlight,
};
pub use types::{DocumentSnapshot, StyledRun};

//! Text Annotation & Rephrasing WASM Module
//!
//! This is the main WASM module for the text annotation assistant.
//! It owns the span-based highlight model and keeps offsets consistent
//! as replacements are accepted into the text.

pub mod analysis;
pub mod api;
pub mod engine;
pub mod models;
pub mod spans;
pub mod utils;

// Re-export commonly used types
pub use engine::TagCounts;
pub use models::core::Document;
pub use models::errors::EditError;
pub use models::palette::{palette_for_need, ColorPalette};
pub use models::suggestion::{PhrasePosition, Suggestion};
pub use spans::highlight::{FamiliarityLevel, Highlight, SelectionSpan};
pub use spans::segment::{current_slice, segment, Run};
pub use spans::store::HighlightStore;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Text annotation WASM module initialized");
}

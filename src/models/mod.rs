//! Models module for the annotation core
//!
//! Data structures shared across the engine, analysis seams, and the
//! WASM API layer.

pub mod core;
pub mod errors;
pub mod palette;
pub mod suggestion;

// Re-export commonly used types
pub use self::core::Document;
pub use errors::EditError;
pub use palette::{palette_for_need, ColorPalette};
pub use suggestion::{PhrasePosition, Suggestion};

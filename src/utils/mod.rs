//! Utility modules for the annotation core
//!
//! Low-level helpers with no knowledge of highlights or suggestions.

pub mod chars;

// Re-export commonly used helpers
pub use chars::{byte_of_char, char_len, slice_chars, splice_chars};

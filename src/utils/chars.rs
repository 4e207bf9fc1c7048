//! Character-offset indexing utilities
//!
//! Highlight offsets are Unicode scalar (char) offsets, while `String` is
//! UTF-8. These helpers convert char ranges to byte ranges so slicing and
//! splicing never land inside a multi-byte sequence.

/// Number of chars in a string (not bytes)
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the given char index
///
/// A char index equal to `char_len(s)` maps to `s.len()` so it can be used
/// as an exclusive range end.
pub fn byte_of_char(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

/// Slice a string by char offsets (half-open range)
pub fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    let b_start = byte_of_char(s, start);
    let b_end = byte_of_char(s, end);
    &s[b_start..b_end]
}

/// Replace the char range `[start, end)` with `replacement`
pub fn splice_chars(s: &str, start: usize, end: usize, replacement: &str) -> String {
    let b_start = byte_of_char(s, start);
    let b_end = byte_of_char(s, end);
    let mut out = String::with_capacity(s.len() - (b_end - b_start) + replacement.len());
    out.push_str(&s[..b_start]);
    out.push_str(replacement);
    out.push_str(&s[b_end..]);
    out
}

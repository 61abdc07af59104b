//! Line and token handling for OCR text blocks.
//!
//! OCR text arrives as newline-joined fragments. Line ordinals are
//! positions in the raw split: empty lines keep their index, because both
//! the next-line fallback and the engine lookahead window count them.

/// Split a text block into raw lines, preserving ordinal positions.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Split a trimmed line into whitespace-separated tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

//! Codepoint-indexed text access and small text predicates
//!
//! Every position handed to or returned from this crate counts Unicode
//! scalar values, never UTF-8 bytes. [`CharIndex`] keeps the byte offset of
//! each codepoint boundary so that codepoint slicing stays O(1) and the
//! transformations never cut through a multi-byte character.

/// Shared empty text returned for absent inputs
pub const EMPTY: &str = "";

/// Byte offsets of every codepoint boundary in a text
///
/// For a text of `n` codepoints the table holds `n + 1` entries: the start of
/// each codepoint followed by the total byte length.
#[derive(Debug, Clone)]
pub struct CharIndex<'a> {
    text: &'a str,
    bounds: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    /// Build the boundary table for `text`
    pub fn new(text: &'a str) -> Self {
        let mut bounds: Vec<usize> = text.char_indices().map(|(pos, _)| pos).collect();
        bounds.push(text.len());
        Self { text, bounds }
    }

    /// The indexed text
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Number of codepoints
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Whether the text has no codepoints
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset where codepoint `index` starts (`len()` maps to the byte length)
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn byte_offset(&self, index: usize) -> usize {
        self.bounds[index]
    }

    /// Codepoint index of the boundary at byte offset `byte`
    ///
    /// Offsets inside a multi-byte codepoint resolve to the codepoint that
    /// contains them.
    pub fn char_position(&self, byte: usize) -> usize {
        match self.bounds.binary_search(&byte) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        }
    }

    /// Codepoints `start..end` as a string slice
    ///
    /// # Panics
    /// Panics if `start > end` or `end > len()`.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.bounds[start]..self.bounds[end]]
    }

    /// Codepoints from `start` to the end of the text
    pub fn tail(&self, start: usize) -> &'a str {
        &self.text[self.bounds[start]..]
    }

    /// Bounded search: first occurrence of `needle` at or after codepoint `from`
    pub fn index_of(&self, needle: &str, from: usize) -> Option<usize> {
        if from > self.len() {
            return None;
        }
        let base = self.bounds[from];
        self.text[base..]
            .find(needle)
            .map(|pos| self.char_position(base + pos))
    }
}

/// Whether the text is absent or has no codepoints
pub fn is_empty(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

/// Whether the text is absent, empty, or only whitespace
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |s| s.chars().all(is_whitespace))
}

/// Codepoint count, zero for absent text
pub fn length_of(text: Option<&str>) -> usize {
    text.map_or(0, |s| s.chars().count())
}

/// The text itself, or the empty text when absent
pub fn default_str(text: Option<&str>) -> &str {
    text.unwrap_or(EMPTY)
}

/// First occurrence of `needle` in `text` at or after codepoint `from`
pub fn index_of(text: &str, needle: &str, from: usize) -> Option<usize> {
    CharIndex::new(text).index_of(needle, from)
}

/// Breaking whitespace
///
/// Unicode `White_Space` without the no-break spaces (U+00A0, U+2007,
/// U+202F) and NEL (U+0085), plus the information separators
/// U+001C..=U+001F.
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

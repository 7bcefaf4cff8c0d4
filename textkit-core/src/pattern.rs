//! Break patterns for the line wrapper
//!
//! The wrapper only needs one capability from a matcher: "find the next
//! match at or after a position inside this haystack". A bounded search is
//! that call on a window slice; an unbounded search is the same call on the
//! remaining tail. Anchors and word boundaries therefore see the slice
//! edges, not the surrounding text.

use crate::error::{Result, TextError};
use regex::Regex;
use std::ops::Range;
use tracing::debug;

/// Something that can locate break points in text
pub trait BreakPattern {
    /// Byte span of the first match in `haystack` starting at or after byte
    /// offset `start`
    ///
    /// `start` is always a char boundary. Returned spans must lie on char
    /// boundaries and may be empty.
    fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>>;
}

impl<P: BreakPattern + ?Sized> BreakPattern for &P {
    fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        (**self).find_at(haystack, start)
    }
}

/// Single-codepoint scanner
impl BreakPattern for char {
    fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        haystack[start..]
            .find(*self)
            .map(|pos| start + pos..start + pos + self.len_utf8())
    }
}

impl BreakPattern for Regex {
    fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        Regex::find_at(self, haystack, start).map(|m| m.range())
    }
}

/// Fixed-string break pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralPattern {
    needle: String,
}

impl LiteralPattern {
    /// Match `needle` literally
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }

    /// The literal being searched for
    pub fn as_str(&self) -> &str {
        &self.needle
    }
}

impl BreakPattern for LiteralPattern {
    fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        haystack[start..]
            .find(self.needle.as_str())
            .map(|pos| start + pos..start + pos + self.needle.len())
    }
}

/// A break pattern compiled from its textual form
///
/// Patterns without regex metacharacters are searched as plain literals;
/// everything else goes through the `regex` engine.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Plain substring search
    Literal(LiteralPattern),
    /// Regular expression search
    Regex(Regex),
}

impl CompiledPattern {
    /// Compile `pattern`
    ///
    /// # Errors
    /// Returns [`TextError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn compile(pattern: &str) -> Result<Self> {
        if !pattern.is_empty() && regex::escape(pattern) == pattern {
            debug!(pattern, "compiled literal break pattern");
            return Ok(CompiledPattern::Literal(LiteralPattern::new(pattern)));
        }

        let regex = Regex::new(pattern).map_err(|source| TextError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        debug!(pattern, "compiled regex break pattern");
        Ok(CompiledPattern::Regex(regex))
    }

    /// Whether the pattern is searched as a plain literal
    pub fn is_literal(&self) -> bool {
        matches!(self, CompiledPattern::Literal(_))
    }
}

impl BreakPattern for CompiledPattern {
    fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        match self {
            CompiledPattern::Literal(literal) => literal.find_at(haystack, start),
            CompiledPattern::Regex(regex) => BreakPattern::find_at(regex, haystack, start),
        }
    }
}

/// Successive matches of a pattern in one haystack
///
/// Each search resumes where the previous match ended. After an empty match
/// the search first steps over one codepoint, so the iterator always makes
/// progress.
#[derive(Debug)]
pub struct Matches<'p, 'h, P: ?Sized> {
    pattern: &'p P,
    haystack: &'h str,
    next_start: Option<usize>,
}

impl<'p, 'h, P: BreakPattern + ?Sized> Matches<'p, 'h, P> {
    /// Iterate over the matches of `pattern` in `haystack`
    pub fn new(pattern: &'p P, haystack: &'h str) -> Self {
        Self {
            pattern,
            haystack,
            next_start: Some(0),
        }
    }
}

impl<P: BreakPattern + ?Sized> Iterator for Matches<'_, '_, P> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;
        let found = self.pattern.find_at(self.haystack, start);
        self.next_start = match &found {
            None => None,
            Some(span) if span.is_empty() => self.haystack[span.end..]
                .chars()
                .next()
                .map(|c| span.end + c.len_utf8()),
            Some(span) => Some(span.end),
        };
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans<P: BreakPattern + ?Sized>(pattern: &P, haystack: &str) -> Vec<Range<usize>> {
        Matches::new(pattern, haystack).collect()
    }

    #[test]
    fn test_char_pattern() {
        assert_eq!(' '.find_at("a b c", 0), Some(1..2));
        assert_eq!(' '.find_at("a b c", 2), Some(3..4));
        assert_eq!(' '.find_at("abc", 0), None);
        assert_eq!('é'.find_at("caféx", 0), Some(3..5));
    }

    #[test]
    fn test_literal_pattern() {
        let pattern = LiteralPattern::new("--");
        assert_eq!(pattern.find_at("a--b--c", 0), Some(1..3));
        assert_eq!(spans(&pattern, "a--b--c"), vec![1..3, 4..6]);
        assert_eq!(pattern.as_str(), "--");
    }

    #[test]
    fn test_compile_literal() {
        let pattern = CompiledPattern::compile(" ").unwrap();
        assert!(pattern.is_literal());
        let pattern = CompiledPattern::compile("abc").unwrap();
        assert!(pattern.is_literal());
    }

    #[test]
    fn test_compile_regex() {
        let pattern = CompiledPattern::compile("[,;]").unwrap();
        assert!(!pattern.is_literal());
        assert_eq!(spans(&pattern, "a,b;c"), vec![1..2, 3..4]);
    }

    #[test]
    fn test_compile_invalid() {
        match CompiledPattern::compile("(unclosed") {
            Err(TextError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_matches_make_progress() {
        let pattern = CompiledPattern::compile(r"\b").unwrap();
        assert_eq!(spans(&pattern, "ab cd"), vec![0..0, 2..2, 3..3, 5..5]);

        let pattern = CompiledPattern::compile("x*").unwrap();
        assert_eq!(spans(&pattern, "éé").len(), 3);
    }

    #[test]
    fn test_anchors_see_slice_edges() {
        let pattern = CompiledPattern::compile("$").unwrap();
        let text = "abc def";
        assert_eq!(pattern.find_at(&text[..3], 0), Some(3..3));
    }

    #[test]
    fn test_trait_object() {
        let pattern = ' ';
        let by_ref: &dyn BreakPattern = &pattern;
        assert_eq!(spans(by_ref, "a b"), vec![1..2]);
    }
}

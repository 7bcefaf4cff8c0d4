//! Delimiter sets for word-run scanning

use crate::text::is_whitespace;
use std::collections::HashSet;

/// Codepoints that separate word runs
///
/// Built from an optional delimiter list:
/// - `None`: the space character, plus any whitespace matched on the fly
/// - `Some(&[])`: nothing at all
/// - `Some(list)`: exactly the listed characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimiterSet {
    chars: HashSet<char>,
    match_whitespace: bool,
}

impl DelimiterSet {
    /// Build a set from an optional list of delimiter characters
    pub fn from_delimiters(delimiters: Option<&[char]>) -> Self {
        match delimiters {
            None => Self {
                chars: HashSet::from([' ']),
                match_whitespace: true,
            },
            Some(list) => Self {
                chars: list.iter().copied().collect(),
                match_whitespace: false,
            },
        }
    }

    /// Whether `c` separates two runs
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c) || (self.match_whitespace && is_whitespace(c))
    }

    /// Whether no codepoint can ever match
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && !self.match_whitespace
    }

    /// Whether whitespace is matched dynamically
    pub fn matches_whitespace(&self) -> bool {
        self.match_whitespace
    }
}

//! Pattern-driven line wrapping
//!
//! The wrapper walks the text with a cursor and, for each line, looks at a
//! window of `wrap_length + 1` codepoints. The rightmost break-pattern match
//! inside that window ends the line. When the window holds no match, a long
//! word is either split at exactly `wrap_length` codepoints or kept whole up
//! to the next match further on.
//!
//! Break patterns that can match the empty string (`\b`, `(?:)`, `$`) need
//! extra bookkeeping: the width of the last consumed match is tracked, and
//! each branch steps the cursor back by one when that match was empty.
//! This keeps the scan moving forward without stalling.

use crate::error::Result;
use crate::pattern::{BreakPattern, CompiledPattern, Matches};
use crate::text::{is_blank, CharIndex};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::trace;

/// Platform line terminator used when no separator is configured
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Platform line terminator used when no separator is configured
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Break pattern used when none (or a blank one) is configured
pub const DEFAULT_BREAK_PATTERN: &str = " ";

/// Line length used when none is configured
pub const DEFAULT_WRAP_LENGTH: usize = 80;

/// Settings for [`WrapOptions::wrap`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    /// Maximum codepoints per line; values below 1 are treated as 1
    pub wrap_length: usize,
    /// Inserted between lines; the platform terminator when `None`
    pub line_separator: Option<String>,
    /// Split words longer than `wrap_length`
    pub wrap_long_words: bool,
    /// Where lines may break; a single space when `None` or blank
    pub break_pattern: Option<String>,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            wrap_length: DEFAULT_WRAP_LENGTH,
            line_separator: None,
            wrap_long_words: false,
            break_pattern: None,
        }
    }
}

impl WrapOptions {
    /// Options wrapping at `wrap_length` codepoints with everything else
    /// left at its default
    pub fn new(wrap_length: usize) -> Self {
        Self {
            wrap_length,
            ..Self::default()
        }
    }

    /// Set the maximum line length
    pub fn wrap_length(mut self, wrap_length: usize) -> Self {
        self.wrap_length = wrap_length;
        self
    }

    /// Set the line separator
    pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = Some(separator.into());
        self
    }

    /// Allow or forbid splitting long words
    pub fn wrap_long_words(mut self, wrap_long_words: bool) -> Self {
        self.wrap_long_words = wrap_long_words;
        self
    }

    /// Set the break pattern
    pub fn break_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.break_pattern = Some(pattern.into());
        self
    }

    /// The line length actually used
    pub fn effective_wrap_length(&self) -> usize {
        self.wrap_length.max(1)
    }

    /// The separator actually inserted between lines
    pub fn effective_line_separator(&self) -> &str {
        self.line_separator.as_deref().unwrap_or(LINE_SEPARATOR)
    }

    /// The break pattern actually used
    pub fn effective_break_pattern(&self) -> &str {
        match self.break_pattern.as_deref() {
            pattern @ Some(p) if !is_blank(pattern) => p,
            _ => DEFAULT_BREAK_PATTERN,
        }
    }

    /// Compile the configured break pattern
    pub fn compile_pattern(&self) -> Result<CompiledPattern> {
        CompiledPattern::compile(self.effective_break_pattern())
    }

    /// Wrap `text` with these options
    ///
    /// # Errors
    /// Returns [`TextError::InvalidPattern`](crate::TextError::InvalidPattern)
    /// if the break pattern does not compile.
    pub fn wrap(&self, text: &str) -> Result<String> {
        let pattern = self.compile_pattern()?;
        Ok(wrap_with(text, self, &pattern))
    }
}

/// Wrap `text` into lines of at most `wrap_length` codepoints
///
/// Absent text stays absent. `wrap_length` is clamped to at least 1, the
/// separator defaults to [`LINE_SEPARATOR`] and a blank or absent pattern
/// defaults to a single space.
///
/// # Errors
/// Returns [`TextError::InvalidPattern`](crate::TextError::InvalidPattern)
/// if `break_pattern` does not compile.
///
/// # Example
/// ```rust
/// use textkit_core::wrap;
///
/// let wrapped = wrap(Some("Hello World, have a nice day!"), 10, Some("\n"), true, Some(" "))
///     .unwrap()
///     .unwrap();
/// assert_eq!(wrapped, "Hello\nWorld,\nhave a\nnice day!");
/// assert_eq!(wrap(None, 10, None, true, None).unwrap(), None);
/// ```
pub fn wrap(
    text: Option<&str>,
    wrap_length: usize,
    line_separator: Option<&str>,
    wrap_long_words: bool,
    break_pattern: Option<&str>,
) -> Result<Option<String>> {
    let Some(text) = text else {
        return Ok(None);
    };
    let options = WrapOptions {
        wrap_length,
        line_separator: line_separator.map(str::to_string),
        wrap_long_words,
        break_pattern: break_pattern.map(str::to_string),
    };
    options.wrap(text).map(Some)
}

/// Wrap `text` using an already built break pattern
///
/// `options.break_pattern` is ignored; `pattern` decides every break.
pub fn wrap_with<P: BreakPattern + ?Sized>(text: &str, options: &WrapOptions, pattern: &P) -> String {
    let index = CharIndex::new(text);
    let len = index.len();
    let wrap_length = options.effective_wrap_length();
    let separator = options.effective_line_separator();

    let mut wrapped = String::with_capacity(text.len() + 32);
    let mut offset = 0;
    // Width of the last consumed match, `None` until one is seen
    let mut match_width: Option<usize> = None;

    while offset < len {
        let mut break_at: Option<usize> = None;

        let window_start = offset;
        let window_end = offset.saturating_add(wrap_length).saturating_add(1).min(len);
        let window_base = index.byte_offset(window_start);
        let to_chars = |span: Range<usize>| {
            let start = index.char_position(window_base + span.start);
            let end = index.char_position(window_base + span.end);
            (start - window_start, end - start)
        };
        let mut matches = Matches::new(pattern, index.slice(window_start, window_end)).map(to_chars);

        if let Some((start, width)) = matches.next() {
            if start == 0 {
                match_width = Some(width);
                if width != 0 {
                    offset += width;
                    continue;
                }
                offset += 1;
            }
            break_at = Some(start + offset);
        }

        if len - offset <= wrap_length {
            break;
        }

        // Later positions stay relative to the window but land on the
        // current cursor, which may have stepped past an empty match
        for (start, _) in matches {
            break_at = Some(start + offset);
        }

        match break_at {
            Some(at) if at >= offset => {
                wrapped.push_str(index.slice(offset, at));
                wrapped.push_str(separator);
                offset = at + 1;
            }
            _ if options.wrap_long_words => {
                if match_width == Some(0) {
                    trace!(offset, "stepping back over empty match before split");
                    offset = offset.saturating_sub(1);
                }
                trace!(offset, wrap_length, "splitting long word");
                wrapped.push_str(index.slice(offset, offset + wrap_length));
                wrapped.push_str(separator);
                offset += wrap_length;
                match_width = None;
            }
            _ => {
                let lookahead = offset + wrap_length;
                let tail_base = index.byte_offset(lookahead);
                if let Some(span) = pattern.find_at(index.tail(lookahead), 0) {
                    let start = index.char_position(tail_base + span.start);
                    let end = index.char_position(tail_base + span.end);
                    match_width = Some(end - start);
                    break_at = Some(start);
                }

                if match_width == Some(0) && offset != 0 {
                    trace!(offset, "stepping back over empty match before look-ahead");
                    offset -= 1;
                }
                match break_at {
                    Some(at) => {
                        trace!(offset, break_at = at, "breaking after long word");
                        wrapped.push_str(index.slice(offset, at));
                        wrapped.push_str(separator);
                        offset = at + 1;
                    }
                    None => {
                        wrapped.push_str(index.tail(offset));
                        offset = len;
                        match_width = None;
                    }
                }
            }
        }
    }

    if match_width == Some(0) && offset < len {
        offset = offset.saturating_sub(1);
    }
    // An empty match at the very end can leave the cursor one past it
    wrapped.push_str(index.tail(offset.min(len)));

    wrapped
}

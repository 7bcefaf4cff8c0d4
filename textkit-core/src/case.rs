//! Case inversion
//!
//! [`swap_case`] flips upper and lower case codepoint by codepoint and
//! capitalizes a lowercase letter that starts a word. All mappings here are
//! simple one-to-one mappings, so the output always has exactly as many
//! codepoints as the input.

use crate::text::is_whitespace;

/// Invert the case of every cased codepoint in `text`
///
/// Upper and titlecase letters become lowercase. Lowercase letters become
/// titlecase at the start of a word and uppercase elsewhere. Only
/// whitespace starts a new word; punctuation and digits do not.
///
/// # Example
/// ```rust
/// use textkit_core::swap_case;
///
/// assert_eq!(swap_case("Hello World"), "hELLO wORLD");
/// assert_eq!(swap_case("hello world"), "HELLO WORLD");
/// assert_eq!(swap_case("a b"), "A B");
/// ```
pub fn swap_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        let swapped = if c.is_uppercase() || is_titlecase(c) {
            word_start = false;
            simple_lowercase(c)
        } else if c.is_lowercase() {
            if word_start {
                word_start = false;
                simple_titlecase(c)
            } else {
                simple_uppercase(c)
            }
        } else {
            word_start = is_whitespace(c);
            c
        };
        result.push(swapped);
    }
    result
}

/// Whether `c` is a titlecase letter (general category Lt)
pub fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Lowercase mapping restricted to a single codepoint
pub fn simple_lowercase(c: char) -> char {
    // Only U+0130 expands, to 'i' plus a combining dot
    c.to_lowercase().next().unwrap_or(c)
}

/// Uppercase mapping restricted to a single codepoint
///
/// Codepoints whose full mapping expands (such as 'ß') are left as they are.
pub fn simple_uppercase(c: char) -> char {
    if let Some(titled) = greek_iota_titlecase(c) {
        return titled;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Titlecase mapping restricted to a single codepoint
pub fn simple_titlecase(c: char) -> char {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        _ => simple_uppercase(c),
    }
}

/// Greek letters with ypogegrammeni map to their prosgegrammeni form
fn greek_iota_titlecase(c: char) -> Option<char> {
    let mapped = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            u32::from(c) + 8
        }
        '\u{1FB3}' => 0x1FBC,
        '\u{1FC3}' => 0x1FCC,
        '\u{1FF3}' => 0x1FFC,
        _ => return None,
    };
    char::from_u32(mapped)
}

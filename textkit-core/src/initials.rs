//! Initials extraction

use crate::delimiters::DelimiterSet;

/// First codepoint of every delimiter-separated run in `text`
///
/// With `delimiters == None` runs are separated by whitespace. An explicit
/// but empty delimiter list yields no initials at all.
///
/// # Example
/// ```rust
/// use textkit_core::initials;
///
/// assert_eq!(initials("John A. Doe", Some(&['.', ' '])), "JAD");
/// assert_eq!(initials("Ben J. Lee", None), "BJL");
/// assert_eq!(initials("abc", Some(&[])), "");
/// ```
pub fn initials(text: &str, delimiters: Option<&[char]>) -> String {
    if text.is_empty() {
        return String::new();
    }
    if delimiters.is_some_and(<[char]>::is_empty) {
        return String::new();
    }

    let delimiters = DelimiterSet::from_delimiters(delimiters);
    let mut result = String::new();
    let mut at_boundary = true;
    for c in text.chars() {
        if delimiters.contains(c) {
            at_boundary = true;
        } else if at_boundary {
            result.push(c);
            at_boundary = false;
        }
    }
    result
}

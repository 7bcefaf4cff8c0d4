//! Truncation with a continuation marker
//!
//! [`abbreviate`] cuts a text somewhere between a lower and an upper bound,
//! preferring the first space at or after the lower bound so that words are
//! kept whole where possible.

use crate::error::{Result, TextError};
use crate::text::{default_str, CharIndex};

/// Upper bound meaning "no upper limit"
pub const NO_UPPER_BOUND: isize = -1;

/// Truncate `text` to at most `upper` codepoints, breaking at a space if one
/// exists at or after `lower`.
///
/// `upper == -1` means the text length. The marker is appended whenever a
/// space was used as the break point, or when truncation actually removed
/// characters.
///
/// # Errors
/// Returns [`TextError::InvalidArgument`] if `upper < -1`, or if
/// `upper < lower` and `upper != -1`.
///
/// # Example
/// ```rust
/// use textkit_core::abbreviate;
///
/// assert_eq!(abbreviate("Hello World", 3, 7, Some("...")).unwrap(), "Hello...");
/// assert_eq!(abbreviate("Helloooooo", 3, 7, Some("...")).unwrap(), "Hellooo...");
/// assert_eq!(abbreviate("Hi", 0, 10, Some("...")).unwrap(), "Hi");
/// ```
pub fn abbreviate(text: &str, lower: usize, upper: isize, marker: Option<&str>) -> Result<String> {
    check_bounds(lower, upper)?;
    if text.is_empty() {
        return Ok(String::new());
    }

    let index = CharIndex::new(text);
    let len = index.len();
    let lower = lower.min(len);
    let upper = match usize::try_from(upper) {
        Ok(upper) if upper <= len => upper,
        _ => len,
    };

    let mut result = String::with_capacity(text.len());
    match index.index_of(" ", lower) {
        None => {
            result.push_str(index.slice(0, upper));
            if upper != len {
                result.push_str(default_str(marker));
            }
        }
        Some(space) => {
            result.push_str(index.slice(0, space.min(upper)));
            result.push_str(default_str(marker));
        }
    }

    Ok(result)
}

/// [`abbreviate`] for a possibly absent text
///
/// Bounds are validated even when `text` is `None`.
pub fn abbreviate_opt(
    text: Option<&str>,
    lower: usize,
    upper: isize,
    marker: Option<&str>,
) -> Result<Option<String>> {
    check_bounds(lower, upper)?;
    text.map(|text| abbreviate(text, lower, upper, marker))
        .transpose()
}

/// Validate an abbreviation range
///
/// `upper` may be [`NO_UPPER_BOUND`] or any value not below `lower`.
pub(crate) fn check_bounds(lower: usize, upper: isize) -> Result<()> {
    if upper == NO_UPPER_BOUND {
        return Ok(());
    }
    match usize::try_from(upper) {
        Err(_) => Err(TextError::invalid_argument(
            "upper value cannot be less than -1",
        )),
        Ok(upper) if upper < lower => Err(TextError::invalid_argument(
            "upper value is less than lower value",
        )),
        Ok(_) => Ok(()),
    }
}

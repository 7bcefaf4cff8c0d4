//! Codepoint-exact text transformations
//!
//! This crate provides a small set of pure functions over text:
//! - [`abbreviate`]: truncate with a continuation marker, preferring a space
//! - [`initials`]: first letter of each delimiter-separated run
//! - [`swap_case`]: invert letter case, capitalizing word starts
//! - [`wrap`]: break long text into lines at a configurable pattern
//!
//! Every index and length counts Unicode scalar values, so no function ever
//! cuts through a multi-byte character. Nothing here holds shared state; all
//! functions may be called from any number of threads at once.
//!
//! # Example
//!
//! ```rust
//! use textkit_core::{abbreviate, initials, swap_case, WrapOptions};
//!
//! assert_eq!(abbreviate("Hello World", 0, 8, Some("...")).unwrap(), "Hello...");
//! assert_eq!(initials("John A. Doe", Some(&['.', ' '])), "JAD");
//! assert_eq!(swap_case("Hello World"), "hELLO wORLD");
//!
//! let options = WrapOptions::new(10).line_separator("\n");
//! let wrapped = options.wrap("Hello World, have a nice day!").unwrap();
//! assert_eq!(wrapped, "Hello\nWorld,\nhave a\nnice day!");
//! ```

pub mod abbreviate;
pub mod case;
pub mod config;
pub mod delimiters;
pub mod error;
pub mod initials;
pub mod pattern;
pub mod text;
pub mod wrap;

pub use abbreviate::{abbreviate, abbreviate as truncate, abbreviate_opt, NO_UPPER_BOUND};
pub use case::swap_case;
pub use config::{AbbreviateOptions, InitialsOptions, TextConfig};
pub use delimiters::DelimiterSet;
pub use error::{Result, TextError};
pub use initials::initials;
pub use pattern::{BreakPattern, CompiledPattern, LiteralPattern, Matches};
pub use text::{default_str, index_of, is_blank, is_empty, is_whitespace, length_of, CharIndex};
pub use wrap::{wrap, wrap_with, WrapOptions, LINE_SEPARATOR};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_alias() {
        assert_eq!(
            truncate("Hello World", 0, 8, Some("...")).unwrap(),
            abbreviate("Hello World", 0, 8, Some("...")).unwrap()
        );
    }

    #[test]
    fn test_transformations_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledPattern>();
        assert_send_sync::<WrapOptions>();
        assert_send_sync::<TextConfig>();
        assert_send_sync::<TextError>();
    }
}

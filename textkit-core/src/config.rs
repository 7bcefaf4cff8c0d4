//! Configuration structures and loading
//!
//! This module defines the TOML schema for transformation settings. Every
//! section and every field is optional:
//!
//! ```toml
//! [wrap]
//! wrap_length = 40
//! line_separator = "\n"
//! wrap_long_words = true
//! break_pattern = " "
//!
//! [abbreviate]
//! lower = 10
//! upper = 20
//! marker = "..."
//!
//! [initials]
//! delimiters = [" ", "."]
//! ```

use crate::abbreviate::{abbreviate, check_bounds, NO_UPPER_BOUND};
use crate::error::{Result, TextError};
use crate::initials::initials;
use crate::wrap::WrapOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub wrap: WrapOptions,
    pub abbreviate: AbbreviateOptions,
    pub initials: InitialsOptions,
}

/// Abbreviation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbbreviateOptions {
    pub lower: usize,
    /// `-1` for no upper bound
    pub upper: isize,
    pub marker: Option<String>,
}

impl Default for AbbreviateOptions {
    fn default() -> Self {
        Self {
            lower: 0,
            upper: NO_UPPER_BOUND,
            marker: None,
        }
    }
}

impl AbbreviateOptions {
    /// Abbreviate `text` with these settings
    pub fn apply(&self, text: &str) -> Result<String> {
        abbreviate(text, self.lower, self.upper, self.marker.as_deref())
    }
}

/// Initials settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialsOptions {
    /// Whitespace separates runs when absent
    pub delimiters: Option<Vec<char>>,
}

impl InitialsOptions {
    /// Extract initials from `text` with these settings
    pub fn apply(&self, text: &str) -> String {
        initials(text, self.delimiters.as_deref())
    }
}

impl TextConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TextConfig = toml::from_str(content)
            .map_err(|e| TextError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        debug!(
            wrap_length = config.wrap.wrap_length,
            lower = config.abbreviate.lower,
            upper = config.abbreviate.upper,
            "loaded text config"
        );
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading text config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            TextError::Config(msg) => TextError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Check value ranges that the schema alone cannot express
    pub fn validate(&self) -> Result<()> {
        if self.wrap.wrap_length == 0 {
            return Err(TextError::Config(
                "wrap.wrap_length must be at least 1".to_string(),
            ));
        }
        let AbbreviateOptions { lower, upper, .. } = self.abbreviate;
        check_bounds(lower, upper).map_err(|e| match e {
            TextError::InvalidArgument { reason } => {
                TextError::Config(format!("abbreviate: {reason} (lower {lower}, upper {upper})"))
            }
            other => other,
        })?;
        self.wrap.compile_pattern()?;
        Ok(())
    }
}

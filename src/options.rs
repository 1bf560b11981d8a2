//! Parsing switches passed to the native library before a file is opened.

use serde::{Deserialize, Serialize};

/// How thoroughly the library parses a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseSpeed {
    /// Reads only what is needed for the common fields. Suitable for most files.
    #[default]
    Fast,
    /// Reads the whole file.
    ///
    /// Can take significantly longer on large files. Use it when `Fast`
    /// leaves fields missing.
    Full,
}

impl ParseSpeed {
    /// Value for the native `ParseSpeed` option.
    pub fn option_value(self) -> &'static str {
        match self {
            ParseSpeed::Fast => "0",
            ParseSpeed::Full => "1",
        }
    }
}

/// Whether the library reports its full, verbose field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complete {
    /// Essential fields only.
    #[default]
    No,
    /// Every field the library knows about.
    Yes,
}

impl Complete {
    /// Value for the native `Complete` option.
    pub fn option_value(self) -> &'static str {
        match self {
            Complete::No => "0",
            Complete::Yes => "1",
        }
    }
}

/// The pair of switches applied to every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    #[serde(default)]
    pub speed: ParseSpeed,
    #[serde(default)]
    pub complete: Complete,
}

impl ParseOptions {
    pub fn new(speed: ParseSpeed, complete: Complete) -> Self {
        Self { speed, complete }
    }
}

//! Resolved symbols and the identity keys derived from them.
//!
//! Address-to-symbol resolution happens outside this crate. What arrives
//! here is a [`ResolvedSymbol`] whose name fields are either known text or
//! the distinguished [`SymbolName::Unknown`] sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown for a name the debug information could not provide
pub const UNKNOWN_NAME: &str = "???";

/// Longest function or library name kept in a [`FunctionRecord`](crate::FunctionRecord)
pub const MAX_NAME_LEN: usize = 255;

/// A name from debug information, or the unknown sentinel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum SymbolName {
    /// Name resolved from debug information
    Known(String),
    /// Resolution failed
    #[default]
    Unknown,
}

impl SymbolName {
    /// Create a known name
    #[must_use]
    pub fn known(name: impl Into<String>) -> Self {
        Self::Known(name.into())
    }

    /// Text used for matching and display; `???` for unknown names
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(name) => name,
            Self::Unknown => UNKNOWN_NAME,
        }
    }

    /// Check for the unknown sentinel
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<String>> for SymbolName {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl From<SymbolName> for Option<String> {
    fn from(value: SymbolName) -> Self {
        match value {
            SymbolName::Known(name) => Some(name),
            SymbolName::Unknown => None,
        }
    }
}

impl From<&str> for SymbolName {
    fn from(value: &str) -> Self {
        Self::Known(value.to_string())
    }
}

/// Debug information for one instruction address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolvedSymbol {
    /// Object file (library or executable) holding the instruction
    #[serde(default)]
    pub library: SymbolName,
    /// Source directory
    #[serde(default)]
    pub directory: SymbolName,
    /// Source file
    #[serde(default)]
    pub file: SymbolName,
    /// Function name
    #[serde(default)]
    pub function: SymbolName,
    /// Source line, 0 when unknown
    #[serde(default)]
    pub line: u32,
    /// The instruction is the first one of its function
    #[serde(default, rename = "entry")]
    pub is_entry: bool,
}

impl ResolvedSymbol {
    /// Symbol with every field unknown
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Symbol for a function, other fields unknown
    #[must_use]
    pub fn for_function(function: impl Into<String>) -> Self {
        Self {
            function: SymbolName::known(function),
            ..Self::default()
        }
    }

    /// Set the library
    #[must_use]
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = SymbolName::known(library);
        self
    }

    /// Set the source directory
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = SymbolName::known(directory);
        self
    }

    /// Set the source file
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = SymbolName::known(file);
        self
    }

    /// Set the source line
    #[must_use]
    pub const fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Mark the instruction as a function entry
    #[must_use]
    pub const fn with_entry(mut self, is_entry: bool) -> Self {
        self.is_entry = is_entry;
        self
    }

    /// Identity key of the function holding this instruction
    #[must_use]
    pub fn key(&self) -> FunctionKey {
        FunctionKey::new(&self.directory, &self.file, &self.function)
    }
}

/// Identity of a source function: `{directory}/{file}:{function}`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionKey(String);

impl FunctionKey {
    /// Build the key from its three parts
    #[must_use]
    pub fn new(directory: &SymbolName, file: &SymbolName, function: &SymbolName) -> Self {
        Self(format!("{directory}/{file}:{function}"))
    }

    /// Key text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cut `name` down to [`MAX_NAME_LEN`] characters
#[must_use]
pub fn bounded_name(name: &str) -> String {
    match name.char_indices().nth(MAX_NAME_LEN) {
        Some((end, _)) => name[..end].to_string(),
        None => name.to_string(),
    }
}

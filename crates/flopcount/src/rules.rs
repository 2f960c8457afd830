//! Classification rule sets.
//!
//! Six ordered pattern lists decide which instruction sites are ignored and
//! which belong to an Interflop library. The defaults below reproduce the
//! stock behavior; [`RuleConfig`] lets a configuration file replace any of
//! them.

use crate::glob::GlobPattern;
use crate::result::FlopResult;
use serde::{Deserialize, Serialize};

/// Libraries whose instructions are never counted
pub const IGNORED_LIBRARIES: &[&str] = &["*/ld-*", "*/libc-*", "*libdl-*", "/libmpfr.*"];

/// Functions whose instructions are never counted
pub const IGNORED_FUNCTIONS: &[&str] = &["???", "__libc*", "_start"];

/// Interflop support files that are not part of the arithmetic layer
pub const INTERFLOP_EXCLUDED_FILES: &[&str] =
    &["logger.c", "options.c", "tinymt64.*", "printf_specifier.c"];

/// Interflop support functions that are not part of the arithmetic layer
pub const INTERFLOP_EXCLUDED_FUNCTIONS: &[&str] = &[
    "*logger*",
    "_set_seed_default",
    "init_context",
    "interflop_init",
    "parse_opt",
    "print_information_header",
    "_mca_inexact*",
    "tinymt64*",
    "vfc_init",
    "vfc_atexit",
    "_floatadd",
    "_floatsub",
    "_floatmul",
    "_floatdiv",
    "_doubleadd",
    "_doublesub",
    "_doublemul",
    "_doublediv",
    "_fast_pow2_binary64",
    "_fast_pow2_binary128",
];

/// Interflop entry points
pub const INTERFLOP_INCLUDED_FUNCTIONS: &[&str] = &["*_interflop_*"];

/// Interflop backend libraries
pub const INTERFLOP_INCLUDED_LIBRARIES: &[&str] = &["*/libinterflop_*"];

/// Which rule list a pattern belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleList {
    /// Ignored libraries
    IgnoredLibraries,
    /// Ignored functions
    IgnoredFunctions,
    /// Interflop-excluded files
    InterflopExcludedFiles,
    /// Interflop-excluded functions
    InterflopExcludedFunctions,
    /// Interflop-included functions
    InterflopIncludedFunctions,
    /// Interflop-included libraries
    InterflopIncludedLibraries,
}

impl RuleList {
    /// All lists, in classification order
    pub const ALL: [Self; 6] = [
        Self::IgnoredLibraries,
        Self::IgnoredFunctions,
        Self::InterflopExcludedFiles,
        Self::InterflopExcludedFunctions,
        Self::InterflopIncludedFunctions,
        Self::InterflopIncludedLibraries,
    ];

    /// Name used in configuration files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IgnoredLibraries => "ignored_libraries",
            Self::IgnoredFunctions => "ignored_functions",
            Self::InterflopExcludedFiles => "interflop_excluded_files",
            Self::InterflopExcludedFunctions => "interflop_excluded_functions",
            Self::InterflopIncludedFunctions => "interflop_included_functions",
            Self::InterflopIncludedLibraries => "interflop_included_libraries",
        }
    }

    /// Built-in patterns
    #[must_use]
    pub const fn defaults(self) -> &'static [&'static str] {
        match self {
            Self::IgnoredLibraries => IGNORED_LIBRARIES,
            Self::IgnoredFunctions => IGNORED_FUNCTIONS,
            Self::InterflopExcludedFiles => INTERFLOP_EXCLUDED_FILES,
            Self::InterflopExcludedFunctions => INTERFLOP_EXCLUDED_FUNCTIONS,
            Self::InterflopIncludedFunctions => INTERFLOP_INCLUDED_FUNCTIONS,
            Self::InterflopIncludedLibraries => INTERFLOP_INCLUDED_LIBRARIES,
        }
    }
}

/// An ordered list of compiled patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternList {
    list: RuleList,
    patterns: Vec<GlobPattern>,
}

impl PatternList {
    /// Compile a list of patterns
    pub fn new<S: AsRef<str>>(list: RuleList, patterns: &[S]) -> FlopResult<Self> {
        let patterns = patterns
            .iter()
            .map(|p| GlobPattern::new(p.as_ref()))
            .collect::<FlopResult<Vec<_>>>()?;
        Ok(Self { list, patterns })
    }

    /// Check whether any pattern matches `subject`
    #[must_use]
    pub fn matches_any(&self, subject: &str) -> bool {
        let hit = self.patterns.iter().find(|p| p.matches(subject));
        if let Some(pattern) = hit {
            tracing::trace!(list = self.list.name(), %pattern, subject, "pattern matched");
        }
        hit.is_some()
    }

    /// Which list this is
    #[must_use]
    pub const fn list(&self) -> RuleList {
        self.list
    }

    /// Patterns in order
    #[must_use]
    pub fn patterns(&self) -> &[GlobPattern] {
        &self.patterns
    }

    /// Number of patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The six compiled rule lists used by the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSets {
    /// Ignored libraries
    pub ignored_libraries: PatternList,
    /// Ignored functions
    pub ignored_functions: PatternList,
    /// Interflop-excluded files
    pub interflop_excluded_files: PatternList,
    /// Interflop-excluded functions
    pub interflop_excluded_functions: PatternList,
    /// Interflop-included functions
    pub interflop_included_functions: PatternList,
    /// Interflop-included libraries
    pub interflop_included_libraries: PatternList,
}

impl RuleSets {
    /// Compile rule sets from their textual form
    pub fn from_config(config: &RuleConfig) -> FlopResult<Self> {
        let compile = |list: RuleList| PatternList::new(list, config.patterns(list));
        Ok(Self {
            ignored_libraries: compile(RuleList::IgnoredLibraries)?,
            ignored_functions: compile(RuleList::IgnoredFunctions)?,
            interflop_excluded_files: compile(RuleList::InterflopExcludedFiles)?,
            interflop_excluded_functions: compile(RuleList::InterflopExcludedFunctions)?,
            interflop_included_functions: compile(RuleList::InterflopIncludedFunctions)?,
            interflop_included_libraries: compile(RuleList::InterflopIncludedLibraries)?,
        })
    }

    /// Look up a list by kind
    #[must_use]
    pub const fn get(&self, list: RuleList) -> &PatternList {
        match list {
            RuleList::IgnoredLibraries => &self.ignored_libraries,
            RuleList::IgnoredFunctions => &self.ignored_functions,
            RuleList::InterflopExcludedFiles => &self.interflop_excluded_files,
            RuleList::InterflopExcludedFunctions => &self.interflop_excluded_functions,
            RuleList::InterflopIncludedFunctions => &self.interflop_included_functions,
            RuleList::InterflopIncludedLibraries => &self.interflop_included_libraries,
        }
    }
}

impl Default for RuleSets {
    fn default() -> Self {
        let list = |list: RuleList| PatternList {
            list,
            patterns: list
                .defaults()
                .iter()
                .filter_map(|p| GlobPattern::new(p).ok())
                .collect(),
        };
        Self {
            ignored_libraries: list(RuleList::IgnoredLibraries),
            ignored_functions: list(RuleList::IgnoredFunctions),
            interflop_excluded_files: list(RuleList::InterflopExcludedFiles),
            interflop_excluded_functions: list(RuleList::InterflopExcludedFunctions),
            interflop_included_functions: list(RuleList::InterflopIncludedFunctions),
            interflop_included_libraries: list(RuleList::InterflopIncludedLibraries),
        }
    }
}

/// Textual rule lists as found in a configuration file
///
/// A list left out of the file keeps its built-in patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Ignored libraries
    pub ignored_libraries: Vec<String>,
    /// Ignored functions
    pub ignored_functions: Vec<String>,
    /// Interflop-excluded files
    pub interflop_excluded_files: Vec<String>,
    /// Interflop-excluded functions
    pub interflop_excluded_functions: Vec<String>,
    /// Interflop-included functions
    pub interflop_included_functions: Vec<String>,
    /// Interflop-included libraries
    pub interflop_included_libraries: Vec<String>,
}

impl RuleConfig {
    /// Patterns of one list
    #[must_use]
    pub fn patterns(&self, list: RuleList) -> &[String] {
        match list {
            RuleList::IgnoredLibraries => &self.ignored_libraries,
            RuleList::IgnoredFunctions => &self.ignored_functions,
            RuleList::InterflopExcludedFiles => &self.interflop_excluded_files,
            RuleList::InterflopExcludedFunctions => &self.interflop_excluded_functions,
            RuleList::InterflopIncludedFunctions => &self.interflop_included_functions,
            RuleList::InterflopIncludedLibraries => &self.interflop_included_libraries,
        }
    }

    /// Mutable access to the patterns of one list
    pub fn patterns_mut(&mut self, list: RuleList) -> &mut Vec<String> {
        match list {
            RuleList::IgnoredLibraries => &mut self.ignored_libraries,
            RuleList::IgnoredFunctions => &mut self.ignored_functions,
            RuleList::InterflopExcludedFiles => &mut self.interflop_excluded_files,
            RuleList::InterflopExcludedFunctions => &mut self.interflop_excluded_functions,
            RuleList::InterflopIncludedFunctions => &mut self.interflop_included_functions,
            RuleList::InterflopIncludedLibraries => &mut self.interflop_included_libraries,
        }
    }

    /// Append a pattern to one list
    #[must_use]
    pub fn with_pattern(mut self, list: RuleList, pattern: impl Into<String>) -> Self {
        self.patterns_mut(list).push(pattern.into());
        self
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        let owned = |list: RuleList| list.defaults().iter().map(|p| (*p).to_string()).collect();
        Self {
            ignored_libraries: owned(RuleList::IgnoredLibraries),
            ignored_functions: owned(RuleList::IgnoredFunctions),
            interflop_excluded_files: owned(RuleList::InterflopExcludedFiles),
            interflop_excluded_functions: owned(RuleList::InterflopExcludedFunctions),
            interflop_included_functions: owned(RuleList::InterflopIncludedFunctions),
            interflop_included_libraries: owned(RuleList::InterflopIncludedLibraries),
        }
    }
}

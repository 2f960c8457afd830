//! Shell-style wildcard matching for symbol names.
//!
//! Only `*` is special: it matches any run of characters, `/` included.
//! Every other character, `?` and `[` among them, matches itself, and the
//! whole subject has to match the whole pattern.

use crate::result::{FlopError, FlopResult};
use ::glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled wildcard pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    source: String,
    compiled: Pattern,
}

impl GlobPattern {
    /// Compile a pattern
    pub fn new(pattern: &str) -> FlopResult<Self> {
        let compiled =
            Pattern::new(&translate(pattern)).map_err(|e| FlopError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            source: pattern.to_string(),
            compiled,
        })
    }

    /// Check whether `subject` matches this pattern as a whole
    #[inline]
    #[must_use]
    pub fn matches(&self, subject: &str) -> bool {
        self.compiled.matches_with(subject, MATCH_OPTIONS)
    }

    /// The pattern as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Match `subject` against `pattern` without keeping the compiled form
#[must_use]
pub fn glob_match(pattern: &str, subject: &str) -> bool {
    GlobPattern::new(pattern).is_ok_and(|p| p.matches(subject))
}

/// Rewrite a `*`-only pattern into the `glob` crate syntax: literals are
/// escaped and runs of stars collapse into one, since `**` has path meaning
/// there.
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    for (i, literal) in pattern.split('*').enumerate() {
        if i > 0 && !out.ends_with('*') {
            out.push('*');
        }
        out.push_str(&Pattern::escape(literal));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Straightforward backtracking matcher used as an oracle.
    fn naive(pattern: &[char], subject: &[char]) -> bool {
        match pattern.split_first() {
            None => subject.is_empty(),
            Some(('*', rest)) => (0..=subject.len()).any(|i| naive(rest, &subject[i..])),
            Some((c, rest)) => subject.first() == Some(c) && naive(rest, &subject[1..]),
        }
    }

    #[test]
    fn test_star_matches_across_slashes() {
        assert!(glob_match("*/libc-*", "/usr/lib/libc-2.31.so"));
        assert!(glob_match("*/libinterflop_*", "/opt/lib/libinterflop_mca.so"));
    }

    #[test]
    fn test_match_is_anchored() {
        assert!(!glob_match("_start", "_start_main"));
        assert!(!glob_match("logger.c", "my_logger.c"));
        assert!(glob_match("*logger*", "my_logger_init"));
    }

    #[test]
    fn test_star_matches_empty() {
        assert!(glob_match("tinymt64*", "tinymt64"));
        assert!(glob_match("*", ""));
        assert!(glob_match("**", "anything"));
    }

    #[test]
    fn test_question_mark_is_literal() {
        assert!(glob_match("???", "???"));
        assert!(!glob_match("???", "foo"));
    }

    #[test]
    fn test_brackets_are_literal() {
        assert!(glob_match("f[0]", "f[0]"));
        assert!(!glob_match("f[0]", "f0"));
    }

    #[test]
    fn test_leading_slash_pattern_needs_exact_prefix() {
        assert!(glob_match("/libmpfr.*", "/libmpfr.so.6"));
        assert!(!glob_match("/libmpfr.*", "/usr/lib/libmpfr.so.6"));
    }

    #[test]
    fn test_display_keeps_source() {
        let p = GlobPattern::new("*_interflop_*").unwrap();
        assert_eq!(p.to_string(), "*_interflop_*");
        assert_eq!(p.as_str(), "*_interflop_*");
    }

    proptest! {
        #[test]
        fn prop_agrees_with_naive_matcher(
            pattern in "[ab?\\[*]{0,8}",
            subject in "[ab?\\[]{0,10}",
        ) {
            let p: Vec<char> = pattern.chars().collect();
            let s: Vec<char> = subject.chars().collect();
            prop_assert_eq!(glob_match(&pattern, &subject), naive(&p, &s));
        }

        #[test]
        fn prop_literal_matches_itself(subject in "[a-z_./?\\[\\]-]{0,24}") {
            prop_assert!(glob_match(&subject, &subject));
        }
    }
}

//! # Regex Extraction
//!
//! The leaf primitive every parser bottoms out in. A [`Pattern`] finds the
//! first match of its regular expression *anywhere* in the query, cuts the
//! matched text out, and reports the non-empty capture groups.
//!
//! Matching is not anchored: `b` against `"ab"` succeeds and leaves `"a"`.
//! Characters before the match are skipped over, not consumed. Start a
//! pattern with `^` to require a prefix match.

use regex::{Regex, RegexBuilder};

use crate::config::PatternConfig;
use crate::error::{PatternError, Result};

/// Output of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexResult {
    /// The query with the matched text removed
    pub stripped_input: String,
    /// Non-empty capture groups, in pattern order
    pub groups: Vec<String>,
}

impl LexResult {
    pub fn new(stripped_input: impl Into<String>, groups: Vec<String>) -> Self {
        Self {
            stripped_input: stripped_input.into(),
            groups,
        }
    }
}

/// A compiled regular expression ready for extraction.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern` case-insensitively.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_config(pattern, &PatternConfig::default())
    }

    pub fn with_config(pattern: &str, config: &PatternConfig) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(config.case_insensitive)
            .multi_line(config.multi_line)
            .dot_matches_new_line(config.dot_matches_new_line)
            .size_limit(config.size_limit)
            .nest_limit(config.nest_limit)
            .build()
            .map_err(|e| {
                let err = PatternError::from_regex(pattern, e);
                tracing::error!(
                    target: "parser::pattern",
                    pattern,
                    error = %err,
                    "Failed to compile pattern"
                );
                err
            })?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Removes the first match from `query`.
    ///
    /// Returns `None` when the pattern does not occur in `query`.
    pub fn extract(&self, query: &str) -> Option<LexResult> {
        let Some(captures) = self.regex.captures(query) else {
            tracing::trace!(
                target: "parser::extract",
                pattern = self.as_str(),
                query,
                "No match"
            );
            return None;
        };
        // group 0 always participates
        let whole = captures.get(0)?;

        let mut stripped_input = String::with_capacity(query.len() - whole.len());
        stripped_input.push_str(&query[..whole.start()]);
        stripped_input.push_str(&query[whole.end()..]);

        let groups = captures
            .iter()
            .skip(1)
            .flatten()
            .filter(|m| !m.is_empty())
            .map(|m| m.as_str().to_string())
            .collect();

        Some(LexResult {
            stripped_input,
            groups,
        })
    }
}

/// Compiles `pattern` and extracts its first match from `query`.
///
/// The outer `Result` reports an unusable pattern; the inner `Option` is the
/// ordinary matched / not matched outcome.
pub fn extract(pattern: &str, query: &str) -> Result<Option<LexResult>> {
    Ok(Pattern::new(pattern)?.extract(query))
}

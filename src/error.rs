//! # Construction-time Errors
//!
//! Failures that can only happen while a parser is being assembled. A parser
//! that has been built never produces one of these; parse failures are plain
//! `None` results (see [`crate::parser::ParseResult`]).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// The pattern is not a valid regular expression
    #[error("Invalid regular expression `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
    /// The compiled pattern exceeds the configured size limit
    #[error("Regular expression `{pattern}` is too large: {message}")]
    PatternTooLarge { pattern: String, message: String },
    /// Pattern options could not be read
    #[error("Invalid pattern config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PatternError>;

impl PatternError {
    pub fn pattern(&self) -> Option<&str> {
        match self {
            PatternError::InvalidPattern { pattern, .. } => Some(pattern),
            PatternError::PatternTooLarge { pattern, .. } => Some(pattern),
            PatternError::InvalidConfig(_) => None,
        }
    }

    pub(crate) fn from_regex(pattern: &str, err: regex::Error) -> Self {
        match err {
            regex::Error::CompiledTooBig(limit) => PatternError::PatternTooLarge {
                pattern: pattern.to_string(),
                message: format!("compiled size exceeds {} bytes", limit),
            },
            other => PatternError::InvalidPattern {
                pattern: pattern.to_string(),
                message: other.to_string(),
            },
        }
    }
}

//! Regex compilation options for primitive parsers.

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::error::{PatternError, Result};

/// Options used when compiling the regular expression behind a primitive parser.
///
/// The defaults compile patterns case-insensitively, which is what
/// [`crate::lexer::extract`] and [`crate::prelude::build_parser`] use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    #[serde(default)]
    pub multi_line: bool,

    #[serde(default)]
    pub dot_matches_new_line: bool,

    /// Upper bound on the compiled program, in bytes
    #[serde(default = "default_size_limit")]
    pub size_limit: usize,

    #[serde(default = "default_nest_limit")]
    pub nest_limit: u32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            case_insensitive: default_true(),
            multi_line: false,
            dot_matches_new_line: false,
            size_limit: default_size_limit(),
            nest_limit: default_nest_limit(),
        }
    }
}

impl PatternConfig {
    pub fn case_sensitive() -> Self {
        Self {
            case_insensitive: false,
            ..Self::default()
        }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| PatternError::InvalidConfig(format!("Failed to parse config: {}", e)))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| PatternError::InvalidConfig(format!("Failed to open config file: {}", e)))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| PatternError::InvalidConfig(format!("Failed to parse config file: {}", e)))
    }
}

fn default_true() -> bool {
    true
}
fn default_size_limit() -> usize {
    10 * (1 << 20)
}
fn default_nest_limit() -> u32 {
    250
}

//! Serializable pipeline output
//!
//! The complete analysis record for one source: tokens, lexical error
//! messages, the processed code rendering, the parse verdict and the
//! derivation trace, plus run metadata.

use crate::tokens::Token;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the front end produced for one source input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Source file path, if the input came from a file
    pub source_path: Option<String>,
    /// Tokens in scan order
    pub tokens: Vec<Token>,
    /// Lexical error messages in collection order
    pub lexical_errors: Vec<String>,
    /// Normalized source as the scanner saw it
    pub processed_code: String,
    /// Parser acceptance verdict
    pub parse_success: bool,
    /// Leftmost-derivation trace lines
    pub derivation_steps: Vec<String>,
    /// Number of tokens produced
    pub token_count: usize,
    /// Number of derivation steps recorded
    pub step_count: usize,
    /// Total analysis duration in milliseconds
    pub duration_ms: f64,
    /// When this analysis ran
    pub analyzed_at: DateTime<Utc>,
}

impl PipelineOutput {
    /// Check if the run had no findings at all
    pub fn is_fully_clean(&self) -> bool {
        self.lexical_errors.is_empty() && self.parse_success
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

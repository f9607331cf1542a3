//! Lexical analysis for MiniC source text
//!
//! Two passes: preprocessing (comment stripping and whitespace
//! normalization, returned to the caller as the processed code) and
//! longest-match scanning into classified tokens. Lexical errors are
//! collected, never thrown; downstream use of a dirty token sequence is
//! the caller's decision.

pub mod analyzer;
pub mod preprocessor;

use crate::config::runtime::LexicalPreferences;

pub use analyzer::{LexicalAnalyzer, LexicalError, LexicalMetrics, TokenizeResult};
pub use preprocessor::preprocess;

/// Tokenize a MiniC source string with default preferences
pub fn tokenize(source: &str) -> TokenizeResult {
    LexicalAnalyzer::new().tokenize(source)
}

/// Tokenize with custom runtime preferences
pub fn tokenize_with_preferences(source: &str, preferences: LexicalPreferences) -> TokenizeResult {
    LexicalAnalyzer::with_preferences(preferences).tokenize(source)
}

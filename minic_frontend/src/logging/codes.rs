//! Consolidated error codes and classification metadata
//!
//! Single source of truth for all error and success codes used by the
//! front end, with behavioral metadata attached to each error code.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const EMPTY_FILE: Code = Code::new("E008");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const UNKNOWN_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const UNTERMINATED_CHAR: Code = Code::new("E022");
    pub const UNTERMINATED_COMMENT: Code = Code::new("E023");
    pub const UNMATCHED_CLOSING_BRACKET: Code = Code::new("E024");
    pub const UNMATCHED_OPENING_BRACKET: Code = Code::new("E025");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E040");
    pub const EMPTY_TOKEN_STREAM: Code = Code::new("E041");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I000");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I001");
    pub const PARSE_COMPLETE: Code = Code::new("I002");
    pub const PIPELINE_COMPLETE: Code = Code::new("I003");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static METADATA: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn metadata_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    METADATA.get_or_init(|| {
        let entries = [
            ErrorMetadata {
                code: "ERR001",
                category: "System",
                severity: Severity::Critical,
                recoverable: false,
                description: "Internal front end error",
            },
            ErrorMetadata {
                code: "ERR002",
                category: "System",
                severity: Severity::Critical,
                recoverable: false,
                description: "Subsystem initialization failed",
            },
            ErrorMetadata {
                code: "E005",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: true,
                description: "Source file not found",
            },
            ErrorMetadata {
                code: "E006",
                category: "FileProcessing",
                severity: Severity::Medium,
                recoverable: true,
                description: "Source file does not have the .mc extension",
            },
            ErrorMetadata {
                code: "E007",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: true,
                description: "Source file exceeds the maximum allowed size",
            },
            ErrorMetadata {
                code: "E008",
                category: "FileProcessing",
                severity: Severity::Low,
                recoverable: true,
                description: "Source file is empty",
            },
            ErrorMetadata {
                code: "E010",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: true,
                description: "Source file is not valid UTF-8",
            },
            ErrorMetadata {
                code: "E011",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: true,
                description: "I/O error while reading source file",
            },
            ErrorMetadata {
                code: "E012",
                category: "FileProcessing",
                severity: Severity::Medium,
                recoverable: true,
                description: "Source path is not a readable file",
            },
            ErrorMetadata {
                code: "E020",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                description: "Character does not begin any MiniC token",
            },
            ErrorMetadata {
                code: "E021",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                description: "String literal not closed before end of input",
            },
            ErrorMetadata {
                code: "E022",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                description: "Character literal not closed before end of input",
            },
            ErrorMetadata {
                code: "E023",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                description: "Block comment not closed before end of input",
            },
            ErrorMetadata {
                code: "E024",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                description: "Closing bracket has no matching opener",
            },
            ErrorMetadata {
                code: "E025",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                description: "Opening bracket left unclosed at end of input",
            },
            ErrorMetadata {
                code: "E040",
                category: "Syntax",
                severity: Severity::High,
                recoverable: false,
                description: "Expected token or production not found",
            },
            ErrorMetadata {
                code: "E041",
                category: "Syntax",
                severity: Severity::Low,
                recoverable: true,
                description: "Parser invoked on an empty token sequence",
            },
        ];

        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

/// Look up the full metadata for an error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    metadata_registry().get(code)
}

/// Get the description for a code, or "Unknown error"
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

/// Get the category for a code, or "Unknown"
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code).map(|m| m.category).unwrap_or("Unknown")
}

/// Get the severity for a code (defaults to Low for unregistered codes)
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Low)
}

/// Check whether processing can continue after an error with this code
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code).map(|m| m.recoverable).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_codes_are_registered() {
        for code in [
            lexical::UNKNOWN_CHARACTER,
            lexical::UNTERMINATED_STRING,
            lexical::UNTERMINATED_CHAR,
            lexical::UNTERMINATED_COMMENT,
            lexical::UNMATCHED_CLOSING_BRACKET,
            lexical::UNMATCHED_OPENING_BRACKET,
        ] {
            assert_ne!(get_description(code.as_str()), "Unknown error");
            assert_eq!(get_category(code.as_str()), "Lexical");
        }
    }

    #[test]
    fn lexical_errors_are_recoverable() {
        // Lexical problems never stop the scan
        assert!(is_recoverable(lexical::UNKNOWN_CHARACTER.as_str()));
        assert!(is_recoverable(lexical::UNMATCHED_CLOSING_BRACKET.as_str()));
    }

    #[test]
    fn syntax_mismatch_is_not_recoverable() {
        // The sticky flag ends productive parsing after the first mismatch
        assert!(!is_recoverable(syntax::UNEXPECTED_TOKEN.as_str()));
    }

    #[test]
    fn unknown_code_has_fallback_metadata() {
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert_eq!(get_severity("E999"), Severity::Low);
    }

    #[test]
    fn code_display_matches_as_str() {
        assert_eq!(format!("{}", system::INTERNAL_ERROR), "ERR001");
        assert_eq!(system::INTERNAL_ERROR.as_str(), "ERR001");
    }
}

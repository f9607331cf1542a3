//! Event system for MiniC front end logging

use super::codes::Code;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub context: HashMap<String, String>,
}

impl LogEvent {
    /// Create a new error event
    pub fn error(error_code: Code, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Error,
            code: error_code,
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    /// Create a new warning event (warnings may not have codes)
    pub fn warning(message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Warning,
            code: Code::new("W000"),
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    /// Create a new info event
    pub fn info(message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            code: Code::new("I999"),
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    /// Create a success event (info with success code)
    pub fn success(success_code: Code, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            code: success_code,
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    /// Create a debug event
    pub fn debug(message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Debug,
            code: Code::new("D000"),
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    /// Check if this is an error event
    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    /// Check if this is a warning event
    pub fn is_warning(&self) -> bool {
        self.level == LogLevel::Warning
    }

    /// Check if this is an info event
    pub fn is_info(&self) -> bool {
        self.level == LogLevel::Info
    }

    /// Get error category from the code registry
    pub fn category(&self) -> &'static str {
        super::codes::get_category(self.code.as_str())
    }

    /// Get error description from the code registry
    pub fn description(&self) -> &'static str {
        super::codes::get_description(self.code.as_str())
    }

    /// Format for display
    pub fn format(&self) -> String {
        let mut line = format!(
            "[{}] {} - {}",
            self.level.as_str(),
            self.code.as_str(),
            self.message
        );

        if !self.context.is_empty() {
            let mut pairs: Vec<_> = self
                .context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            pairs.sort();
            line.push_str(&format!(" ({})", pairs.join(", ")));
        }

        line
    }

    /// Format as JSON for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
            "category": self.category(),
        });

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn error_event_creation() {
        let event = LogEvent::error(codes::lexical::UNKNOWN_CHARACTER, "Unknown character");

        assert!(event.is_error());
        assert_eq!(event.code.as_str(), "E020");
        assert_eq!(event.message, "Unknown character");
        assert_eq!(event.category(), "Lexical");
    }

    #[test]
    fn success_event_creation() {
        let event = LogEvent::success(codes::success::TOKENIZATION_COMPLETE, "Tokenized");

        assert!(event.is_info());
        assert_eq!(event.code.as_str(), "I001");
    }

    #[test]
    fn event_with_context() {
        let event = LogEvent::error(codes::syntax::UNEXPECTED_TOKEN, "Mismatch")
            .with_context("position", "3")
            .with_context("lexeme", ";");

        assert_eq!(event.context.get("position"), Some(&"3".to_string()));
        assert_eq!(event.context.get("lexeme"), Some(&";".to_string()));
    }

    #[test]
    fn event_formatting() {
        let event = LogEvent::error(codes::lexical::UNTERMINATED_STRING, "Unterminated string");
        let formatted = event.format();

        assert!(formatted.contains("[ERROR]"));
        assert!(formatted.contains("E021"));
        assert!(formatted.contains("Unterminated string"));
    }

    #[test]
    fn json_formatting() {
        let event = LogEvent::error(codes::file_processing::FILE_NOT_FOUND, "Missing file")
            .with_context("file", "test.mc");

        let json = event.format_json().unwrap();
        assert!(json.contains("\"level\":\"ERROR\""));
        assert!(json.contains("\"code\":\"E005\""));
        assert!(json.contains("\"message\":\"Missing file\""));
    }

    #[test]
    fn level_ordering_supports_filtering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }
}

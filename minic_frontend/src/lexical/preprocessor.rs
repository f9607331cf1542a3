//! Source preprocessing: comment stripping and whitespace normalization
//!
//! Runs once before scanning. The output is also handed back to the
//! caller as the "processed code" rendering, showing exactly what the
//! scanner saw. Preprocessing is string-literal-unaware, like the rest of
//! this pass: comment markers and whitespace inside quotes are rewritten
//! too. Positions are not tracked past this point.

use super::analyzer::LexicalError;
use crate::grammar::keywords::is_symbol_char;

/// Strip comments and normalize whitespace.
///
/// Rules, applied left to right over the raw source:
/// - `//` skips to the end of the line; `/* */` skips to the terminator.
///   An unterminated block comment records an error and stops
///   preprocessing at that point.
/// - Newlines and tabs are deleted outright.
/// - A space survives only when the previously emitted character is
///   neither whitespace nor a special symbol; emitting a symbol deletes
///   any spaces accumulated directly before it.
/// - The result is trimmed at both ends.
pub fn preprocess(source: &str) -> (String, Vec<LexicalError>) {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut errors = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        // Line comment
        if ch == '/' && chars.get(i + 1) == Some(&'/') {
            i += 2;
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        // Block comment
        if ch == '/' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            loop {
                if i + 1 >= chars.len() {
                    errors.push(LexicalError::UnterminatedComment);
                    let trimmed = out.trim().to_string();
                    return (trimmed, errors);
                }
                if chars[i] == '*' && chars[i + 1] == '/' {
                    i += 2;
                    break;
                }
                i += 1;
            }
            continue;
        }

        // Newlines and tabs are deleted outright
        if ch == '\n' || ch == '\t' {
            i += 1;
            continue;
        }

        if ch == ' ' {
            match out.chars().last() {
                Some(prev) if !prev.is_whitespace() && !is_symbol_char(prev) => out.push(' '),
                _ => {}
            }
        } else {
            if is_symbol_char(ch) {
                while out.ends_with(|c: char| c.is_whitespace()) {
                    out.pop();
                }
            }
            out.push(ch);
        }

        i += 1;
    }

    let trimmed = out.trim().to_string();
    (trimmed, errors)
}

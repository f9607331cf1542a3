//! Core lexical analyzer
//!
//! Longest-match scanning over the preprocessed source. All failures are
//! collected as `LexicalError` values; the scan itself never stops early
//! and always produces best-effort tokens.

use crate::config::constants::compile_time::lexical::{
    INITIAL_TOKEN_CAPACITY, LARGE_SOURCE_WARN_THRESHOLD,
};
use crate::config::runtime::LexicalPreferences;
use crate::grammar::keywords::{is_symbol_char, lookup_keyword};
use crate::lexical::preprocessor::preprocess;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::{log_debug, log_success, log_warning};

/// Lexical analysis errors. All are non-fatal to the scan; the `Display`
/// strings are the messages handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    #[error("Unterminated comment")]
    UnterminatedComment,

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unterminated character literal")]
    UnterminatedChar,

    #[error("Unmatched {0}")]
    UnmatchedClosingBracket(char),

    #[error("Unmatched {0}")]
    UnmatchedOpeningBracket(char),

    #[error("Unknown character: {0}")]
    UnknownCharacter(char),
}

impl LexicalError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexicalError::UnterminatedComment => codes::lexical::UNTERMINATED_COMMENT,
            LexicalError::UnterminatedString => codes::lexical::UNTERMINATED_STRING,
            LexicalError::UnterminatedChar => codes::lexical::UNTERMINATED_CHAR,
            LexicalError::UnmatchedClosingBracket(_) => codes::lexical::UNMATCHED_CLOSING_BRACKET,
            LexicalError::UnmatchedOpeningBracket(_) => codes::lexical::UNMATCHED_OPENING_BRACKET,
            LexicalError::UnknownCharacter(_) => codes::lexical::UNKNOWN_CHARACTER,
        }
    }
}

/// Result of a tokenize call: the token sequence in scan order, the
/// collected lexical errors, and the normalized source the scanner saw.
#[derive(Debug, Clone)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexicalError>,
    pub processed_code: String,
}

impl TokenizeResult {
    /// Caller-facing error messages, in collection order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Check if the scan produced no lexical errors
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Per-class token counts collected during scanning
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub literal_tokens: usize,
    pub symbol_tokens: usize,
    pub error_count: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token) {
        self.total_tokens += 1;
        match token.kind {
            kind if kind.is_keyword() => self.keyword_tokens += 1,
            TokenKind::Id => self.identifier_tokens += 1,
            TokenKind::Dec
            | TokenKind::Otc
            | TokenKind::Hex
            | TokenKind::StringConst
            | TokenKind::CharConst => self.literal_tokens += 1,
            kind if kind.is_symbol() => self.symbol_tokens += 1,
            _ => {}
        }
    }
}

/// Cursor and bracket-matching state for one scan.
/// Created fresh per tokenize call, discarded at the end.
struct LexState {
    pos: usize,
    braces: Vec<char>,
    brackets: Vec<char>,
    parens: Vec<char>,
}

impl LexState {
    fn new() -> Self {
        Self {
            pos: 0,
            braces: Vec::new(),
            brackets: Vec::new(),
            parens: Vec::new(),
        }
    }
}

/// Core lexical analyzer with per-scan metrics
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Get the metrics from the most recent tokenize call
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Get current preferences
    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Tokenize a MiniC source string. Never fails: lexical problems are
    /// collected in the result alongside best-effort tokens.
    pub fn tokenize(&mut self, source: &str) -> TokenizeResult {
        self.metrics = LexicalMetrics::default();

        log_debug!("Starting lexical analysis", "source_chars" => source.chars().count());

        let (processed, mut errors) = preprocess(source);

        if self.preferences.warn_on_large_source && processed.len() > LARGE_SOURCE_WARN_THRESHOLD {
            log_warning!("Large source after preprocessing",
                "chars" => processed.len(),
                "threshold" => LARGE_SOURCE_WARN_THRESHOLD
            );
        }

        let chars: Vec<char> = processed.chars().collect();
        let mut tokens: Vec<Token> = Vec::with_capacity(INITIAL_TOKEN_CAPACITY);
        let mut state = LexState::new();

        while let Some(&ch) = chars.get(state.pos) {
            if ch.is_whitespace() {
                state.pos += 1;
                continue;
            }

            let token = if ch == '_' || ch.is_ascii_alphabetic() {
                Some(self.scan_word(&chars, &mut state))
            } else if ch.is_ascii_digit() {
                Some(self.scan_number(&chars, &mut state))
            } else if ch == '"' {
                Some(self.scan_string(&chars, &mut state, &mut errors))
            } else if ch == '\'' {
                Some(self.scan_char(&chars, &mut state, &mut errors))
            } else if is_symbol_char(ch) {
                Some(self.scan_symbol(&chars, &mut state, &mut errors))
            } else {
                errors.push(LexicalError::UnknownCharacter(ch));
                state.pos += 1;
                None
            };

            if let Some(token) = token {
                self.metrics.record_token(&token);
                tokens.push(token);
            }
        }

        // One message per bracket family left open
        if !state.braces.is_empty() {
            errors.push(LexicalError::UnmatchedOpeningBracket('{'));
        }
        if !state.brackets.is_empty() {
            errors.push(LexicalError::UnmatchedOpeningBracket('['));
        }
        if !state.parens.is_empty() {
            errors.push(LexicalError::UnmatchedOpeningBracket('('));
        }

        self.metrics.error_count = errors.len();

        if self.preferences.log_token_statistics {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Lexical analysis completed",
                "tokens" => self.metrics.total_tokens,
                "keywords" => self.metrics.keyword_tokens,
                "identifiers" => self.metrics.identifier_tokens,
                "literals" => self.metrics.literal_tokens,
                "symbols" => self.metrics.symbol_tokens,
                "errors" => errors.len()
            );
        } else {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Lexical analysis completed",
                "tokens" => self.metrics.total_tokens,
                "errors" => errors.len()
            );
        }

        TokenizeResult {
            tokens,
            errors,
            processed_code: processed,
        }
    }

    // ========================================================================
    // Per-class scanners
    // ========================================================================

    /// Identifier or reserved word: letter or `_`, then letters, digits, `_`
    fn scan_word(&self, chars: &[char], state: &mut LexState) -> Token {
        let start = state.pos;
        while let Some(&ch) = chars.get(state.pos) {
            if ch == '_' || ch.is_ascii_alphanumeric() {
                state.pos += 1;
            } else {
                break;
            }
        }

        let lexeme: String = chars[start..state.pos].iter().collect();
        let kind = lookup_keyword(&lexeme).unwrap_or(TokenKind::Id);
        Token::new(kind, lexeme)
    }

    /// Numeric literal. Decimal by default; a leading `0` followed by `x`
    /// switches to hex, a leading `0` followed by another digit switches
    /// to octal (consuming digits 0-7). No sign, no fraction, no exponent.
    fn scan_number(&self, chars: &[char], state: &mut LexState) -> Token {
        let start = state.pos;
        let first = chars[state.pos];
        state.pos += 1;
        let next = chars.get(state.pos).copied();

        let kind = if first == '0' && next == Some('x') {
            state.pos += 1;
            while chars
                .get(state.pos)
                .map_or(false, |c| c.is_ascii_hexdigit())
            {
                state.pos += 1;
            }
            TokenKind::Hex
        } else if first == '0' && next.map_or(false, |c| c.is_ascii_digit()) {
            while chars.get(state.pos).map_or(false, |c| ('0'..='7').contains(c)) {
                state.pos += 1;
            }
            TokenKind::Otc
        } else {
            while chars.get(state.pos).map_or(false, |c| c.is_ascii_digit()) {
                state.pos += 1;
            }
            TokenKind::Dec
        };

        let lexeme: String = chars[start..state.pos].iter().collect();
        Token::new(kind, lexeme)
    }

    /// String constant, delimiters included in the lexeme. An unterminated
    /// literal records an error but still emits the partial token.
    fn scan_string(
        &self,
        chars: &[char],
        state: &mut LexState,
        errors: &mut Vec<LexicalError>,
    ) -> Token {
        let start = state.pos;
        state.pos += 1;
        while state.pos < chars.len() && chars[state.pos] != '"' {
            state.pos += 1;
        }
        if state.pos < chars.len() {
            state.pos += 1;
        } else {
            errors.push(LexicalError::UnterminatedString);
        }

        let lexeme: String = chars[start..state.pos].iter().collect();
        Token::new(TokenKind::StringConst, lexeme)
    }

    /// Character constant, symmetric with string scanning
    fn scan_char(
        &self,
        chars: &[char],
        state: &mut LexState,
        errors: &mut Vec<LexicalError>,
    ) -> Token {
        let start = state.pos;
        state.pos += 1;
        while state.pos < chars.len() && chars[state.pos] != '\'' {
            state.pos += 1;
        }
        if state.pos < chars.len() {
            state.pos += 1;
        } else {
            errors.push(LexicalError::UnterminatedChar);
        }

        let lexeme: String = chars[start..state.pos].iter().collect();
        Token::new(TokenKind::CharConst, lexeme)
    }

    /// Special symbol: single character by default, upgraded to a
    /// two-character token for `==`, `<=`, `>=`, `&&`, `!=`. Brackets
    /// maintain their per-family matching stacks.
    fn scan_symbol(
        &self,
        chars: &[char],
        state: &mut LexState,
        errors: &mut Vec<LexicalError>,
    ) -> Token {
        let ch = chars[state.pos];
        let next = chars.get(state.pos + 1).copied();

        let (kind, length) = match ch {
            '+' => (TokenKind::Plus, 1),
            '-' => (TokenKind::Minus, 1),
            ',' => (TokenKind::Comma, 1),
            '/' => (TokenKind::Div, 1),
            ';' => (TokenKind::Semicolon, 1),
            '#' => (TokenKind::Hash, 1),
            '=' => {
                if next == Some('=') {
                    (TokenKind::Eq, 2)
                } else {
                    (TokenKind::Assign, 1)
                }
            }
            '<' => {
                if next == Some('=') {
                    (TokenKind::Leq, 2)
                } else {
                    (TokenKind::Lt, 1)
                }
            }
            '>' => {
                if next == Some('=') {
                    (TokenKind::Geq, 2)
                } else {
                    (TokenKind::Gt, 1)
                }
            }
            '&' => {
                if next == Some('&') {
                    (TokenKind::And, 2)
                } else {
                    (TokenKind::Amp, 1)
                }
            }
            '!' => {
                if next == Some('=') {
                    (TokenKind::Neq, 2)
                } else {
                    (TokenKind::Exclam, 1)
                }
            }
            '{' => {
                state.braces.push(ch);
                (TokenKind::LBrace, 1)
            }
            '}' => {
                if state.braces.pop().is_none() {
                    errors.push(LexicalError::UnmatchedClosingBracket('}'));
                }
                (TokenKind::RBrace, 1)
            }
            '[' => {
                state.brackets.push(ch);
                (TokenKind::LBracket, 1)
            }
            ']' => {
                if state.brackets.pop().is_none() {
                    errors.push(LexicalError::UnmatchedClosingBracket(']'));
                }
                (TokenKind::RBracket, 1)
            }
            '(' => {
                state.parens.push(ch);
                (TokenKind::LParen, 1)
            }
            ')' => {
                if state.parens.pop().is_none() {
                    errors.push(LexicalError::UnmatchedClosingBracket(')'));
                }
                (TokenKind::RParen, 1)
            }
            // scan_symbol is only entered for SPECIAL_SYMBOLS characters
            _ => unreachable!("not a special symbol: {ch}"),
        };

        let lexeme: String = chars[state.pos..state.pos + length].iter().collect();
        state.pos += length;
        Token::new(kind, lexeme)
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokenize(source: &str) -> TokenizeResult {
        LexicalAnalyzer::new().tokenize(source)
    }

    fn kinds(result: &TokenizeResult) -> Vec<TokenKind> {
        result.tokens.iter().map(|t| t.kind).collect()
    }

    fn lexemes(result: &TokenizeResult) -> Vec<&str> {
        result.tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    #[test]
    fn classifies_keywords_and_identifiers() {
        let result = tokenize("while mainx main _tmp x1");
        assert_eq!(
            kinds(&result),
            vec![
                TokenKind::While,
                TokenKind::Id,
                TokenKind::Main,
                TokenKind::Id,
                TokenKind::Id,
            ]
        );
        assert_eq!(lexemes(&result), vec!["while", "mainx", "main", "_tmp", "x1"]);
        assert!(result.is_clean());
    }

    #[test]
    fn numeric_classification() {
        let result = tokenize("0x1A 017 42 0");
        assert_eq!(
            kinds(&result),
            vec![TokenKind::Hex, TokenKind::Otc, TokenKind::Dec, TokenKind::Dec]
        );
        assert_eq!(lexemes(&result), vec!["0x1A", "017", "42", "0"]);
        assert!(result.is_clean());
    }

    #[test]
    fn octal_stops_at_non_octal_digit() {
        let result = tokenize("089");
        assert_eq!(kinds(&result), vec![TokenKind::Otc, TokenKind::Dec]);
        assert_eq!(lexemes(&result), vec!["0", "89"]);
    }

    #[test]
    fn float_literal_splits_into_error_path() {
        // The grammar has no DOT token: `3.14` is a decimal, an unknown
        // character error for `.`, then another decimal.
        let result = tokenize("3.14");
        assert_eq!(kinds(&result), vec![TokenKind::Dec, TokenKind::Dec]);
        assert_eq!(lexemes(&result), vec!["3", "14"]);
        assert_eq!(result.errors, vec![LexicalError::UnknownCharacter('.')]);
    }

    #[test]
    fn two_character_operators_win_longest_match() {
        let result = tokenize("a==b<=c>=d&&e!=f");
        assert_eq!(
            lexemes(&result),
            vec!["a", "==", "b", "<=", "c", ">=", "d", "&&", "e", "!=", "f"]
        );
        assert_eq!(result.tokens[1].kind, TokenKind::Eq);
        assert_eq!(result.tokens[3].kind, TokenKind::Leq);
        assert_eq!(result.tokens[5].kind, TokenKind::Geq);
        assert_eq!(result.tokens[7].kind, TokenKind::And);
        assert_eq!(result.tokens[9].kind, TokenKind::Neq);
    }

    #[test]
    fn single_character_operator_fallbacks() {
        let result = tokenize("a=b<c>d&e!f");
        assert_eq!(
            kinds(&result),
            vec![
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::Id,
                TokenKind::Lt,
                TokenKind::Id,
                TokenKind::Gt,
                TokenKind::Id,
                TokenKind::Amp,
                TokenKind::Id,
                TokenKind::Exclam,
                TokenKind::Id,
            ]
        );
    }

    #[test]
    fn string_constant_keeps_delimiters() {
        let result = tokenize("s=\"hello world\";");
        let string_token = &result.tokens[2];
        assert_eq!(string_token.kind, TokenKind::StringConst);
        assert_eq!(string_token.lexeme, "\"hello world\"");
        assert!(result.is_clean());
    }

    #[test]
    fn unterminated_string_emits_partial_token() {
        let result = tokenize("s=\"abc");
        assert_eq!(result.errors, vec![LexicalError::UnterminatedString]);
        let string_token = result.tokens.last().unwrap();
        assert_eq!(string_token.kind, TokenKind::StringConst);
        assert_eq!(string_token.lexeme, "\"abc");
    }

    #[test]
    fn char_constant_and_unterminated_char() {
        let result = tokenize("c='x'");
        assert_eq!(result.tokens[2].kind, TokenKind::CharConst);
        assert_eq!(result.tokens[2].lexeme, "'x'");

        let result = tokenize("c='x");
        assert_eq!(result.errors, vec![LexicalError::UnterminatedChar]);
        assert_eq!(result.tokens[2].lexeme, "'x");
    }

    #[test]
    fn balanced_brackets_yield_no_errors() {
        let result = tokenize("{ [ ( x ) ] }");
        assert!(result.is_clean());
        assert_eq!(result.tokens.len(), 7);
    }

    #[test]
    fn unmatched_closing_bracket_reports_and_continues() {
        let result = tokenize("} x = 1 ;");
        assert_eq!(result.errors, vec![LexicalError::UnmatchedClosingBracket('}')]);
        // The token is still emitted and the scan continues
        assert_eq!(result.tokens[0].kind, TokenKind::RBrace);
        assert_eq!(result.tokens.len(), 5);
    }

    #[test]
    fn unmatched_opening_brackets_report_per_family() {
        let result = tokenize("{ [ (");
        assert_eq!(
            result.errors,
            vec![
                LexicalError::UnmatchedOpeningBracket('{'),
                LexicalError::UnmatchedOpeningBracket('['),
                LexicalError::UnmatchedOpeningBracket('('),
            ]
        );
        assert_eq!(result.error_messages(), vec![
            "Unmatched {",
            "Unmatched [",
            "Unmatched (",
        ]);
    }

    #[test]
    fn nested_same_family_brackets_balance() {
        let result = tokenize("{ { } } ( ( ) )");
        assert!(result.is_clean());
    }

    #[test]
    fn unknown_characters_are_collected_not_fatal() {
        let result = tokenize("a * b @ c");
        assert_eq!(
            result.errors,
            vec![
                LexicalError::UnknownCharacter('*'),
                LexicalError::UnknownCharacter('@'),
            ]
        );
        // Identifiers around the bad characters still tokenize
        assert_eq!(lexemes(&result), vec!["a", "b", "c"]);
        assert_eq!(result.error_messages()[0], "Unknown character: *");
    }

    #[test]
    fn processed_code_is_returned() {
        let result = tokenize("x  =  1 ; // comment");
        assert_eq!(result.processed_code, "x=1;");
    }

    #[test]
    fn lexeme_concatenation_rebuilds_processed_code() {
        // With no unknown characters, the processed code minus separator
        // spaces is exactly the token lexemes in order.
        for source in ["{ x = 0x1F + 017 ; }", "while ( a <= b ) { a = a + 1 ; }"] {
            let result = tokenize(source);
            assert!(result.is_clean());
            let rebuilt: String = result.tokens.iter().map(|t| t.lexeme.as_str()).collect();
            let stripped: String = result
                .processed_code
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            assert_eq!(rebuilt, stripped);
        }
    }

    #[test]
    fn empty_source_yields_nothing() {
        let result = tokenize("");
        assert!(result.tokens.is_empty());
        assert!(result.is_clean());
        assert_eq!(result.processed_code, "");
    }

    #[test]
    fn metrics_count_token_classes() {
        let mut analyzer = LexicalAnalyzer::new();
        let result = analyzer.tokenize("while ( x <= 10 ) { x = x + 1 ; }");
        assert!(result.is_clean());

        let metrics = analyzer.metrics();
        assert_eq!(metrics.total_tokens, result.tokens.len());
        assert_eq!(metrics.keyword_tokens, 1);
        assert_eq!(metrics.identifier_tokens, 3);
        assert_eq!(metrics.literal_tokens, 2);
        assert_eq!(
            metrics.symbol_tokens,
            result.tokens.len() - metrics.keyword_tokens - metrics.identifier_tokens - 2
        );
    }

    #[test]
    fn error_codes_map_to_lexical_category() {
        let error = LexicalError::UnknownCharacter('@');
        assert_matches!(error.error_code().as_str(), "E020");
        assert_eq!(
            crate::logging::codes::get_category(error.error_code().as_str()),
            "Lexical"
        );
    }
}

//! Token stream cursor for the parser
//!
//! A forward-only cursor over an ordered token sequence. Lookahead past
//! the end yields `None`, the "no token" sentinel that matches nothing.

use crate::tokens::token::{Token, TokenKind};

/// Ordered token sequence with a single scan position
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Create a new stream positioned at the first token
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Get the current token, or `None` past the end
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Get the current token's lexeme
    pub fn current_lexeme(&self) -> Option<&str> {
        self.current().map(|token| token.lexeme.as_str())
    }

    /// Get the current token's kind
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    /// Advance to the next token
    pub fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Advance only if the current token's lexeme equals `lexeme` exactly.
    /// Kind is deliberately not validated; terminal matching in the
    /// grammar is by lexeme.
    pub fn match_lexeme(&mut self, lexeme: &str) -> bool {
        if self.current_lexeme() == Some(lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Check if the cursor has consumed every token
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Number of tokens in the stream
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the stream holds no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Tokens not yet consumed
    pub fn remaining_count(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stream() -> TokenStream {
        TokenStream::new(vec![
            Token::new(TokenKind::LBrace, "{"),
            Token::new(TokenKind::Id, "x"),
            Token::new(TokenKind::RBrace, "}"),
        ])
    }

    #[test]
    fn cursor_walks_in_order() {
        let mut stream = sample_stream();
        assert_eq!(stream.current_lexeme(), Some("{"));
        stream.advance();
        assert_eq!(stream.current_lexeme(), Some("x"));
        assert_eq!(stream.current_kind(), Some(TokenKind::Id));
        stream.advance();
        stream.advance();
        assert!(stream.is_at_end());
        assert_eq!(stream.current(), None);
    }

    #[test]
    fn match_lexeme_advances_only_on_equality() {
        let mut stream = sample_stream();
        assert!(!stream.match_lexeme("}"));
        assert_eq!(stream.position(), 0);
        assert!(stream.match_lexeme("{"));
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn match_lexeme_ignores_kind() {
        // A hand-built token with the wrong kind but the right lexeme
        // still matches; terminal dispatch is textual.
        let mut stream = TokenStream::new(vec![Token::new(TokenKind::Error, "{")]);
        assert!(stream.match_lexeme("{"));
    }

    #[test]
    fn end_of_stream_is_a_sentinel() {
        let mut stream = TokenStream::new(vec![]);
        assert!(stream.is_empty());
        assert!(stream.is_at_end());
        assert_eq!(stream.current_lexeme(), None);
        assert!(!stream.match_lexeme("{"));
        // Advancing past the end stays put
        stream.advance();
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn remaining_count_tracks_cursor() {
        let mut stream = sample_stream();
        assert_eq!(stream.remaining_count(), 3);
        stream.advance();
        assert_eq!(stream.remaining_count(), 2);
    }
}

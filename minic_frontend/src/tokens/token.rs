//! Token model with a stable numeric code table
//!
//! Every token kind carries a fixed numeric code. The codes are a public
//! contract: the parser classifies numeric literals by the 98..=100 band
//! and callers render tokens as `<code, lexeme>` pairs, so the values must
//! never be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of MiniC token kinds with fixed numeric identity.
///
/// Codes are partitioned into disjoint bands: keywords 0..=20, special
/// symbols 22..=44, end-of-input 50, error 51, numeric literals 98..=100,
/// identifier 101, string/char constants 102..=103. `Or` (42) and the
/// `Eof`/`Error` codes are reserved table entries the tokenizer never
/// produces itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TokenKind {
    // === KEYWORDS ===
    If = 0,
    Else = 1,
    While = 2,
    Do = 3,
    Break = 4,
    Main = 5,
    Int = 6,
    Float = 7,
    Double = 8,
    Return = 9,
    Const = 10,
    Void = 11,
    Continue = 12,
    Char = 13,
    Unsigned = 14,
    Enum = 15,
    Long = 16,
    Switch = 17,
    Case = 18,
    Auto = 19,
    Static = 20,

    // === SPECIAL SYMBOLS ===
    Plus = 22,
    Minus = 23,
    Comma = 24,
    Div = 25,
    Assign = 26,
    Lt = 27,
    Gt = 28,
    LBrace = 29,
    RBrace = 30,
    Semicolon = 31,
    LParen = 32,
    RParen = 33,
    Amp = 34,
    Exclam = 35,
    Hash = 36,
    LBracket = 37,
    RBracket = 38,
    Eq = 39,
    Neq = 40,
    And = 41,
    Or = 42,
    Geq = 43,
    Leq = 44,

    // === SENTINELS ===
    Eof = 50,
    Error = 51,

    // === LITERALS AND IDENTIFIERS ===
    Dec = 98,
    Otc = 99,
    Hex = 100,
    Id = 101,
    StringConst = 102,
    CharConst = 103,
}

/// Lower bound of the numeric-literal code band
pub const NUMERIC_LITERAL_BAND_START: u8 = 98;
/// Upper bound (inclusive) of the numeric-literal code band
pub const NUMERIC_LITERAL_BAND_END: u8 = 100;

impl TokenKind {
    /// The stable numeric code of this kind
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Stable display name used by renderers (`IF`, `ID`, `HEX`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Do => "DO",
            Self::Break => "BREAK",
            Self::Main => "MAIN",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Return => "RETURN",
            Self::Const => "CONST",
            Self::Void => "VOID",
            Self::Continue => "CONTINUE",
            Self::Char => "CHAR",
            Self::Unsigned => "UNSIGNED",
            Self::Enum => "ENUM",
            Self::Long => "LONG",
            Self::Switch => "SWITCH",
            Self::Case => "CASE",
            Self::Auto => "AUTO",
            Self::Static => "STATIC",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Comma => "COMMA",
            Self::Div => "DIV",
            Self::Assign => "ASSIGN",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Amp => "AMP",
            Self::Exclam => "EXCLAM",
            Self::Hash => "HASH",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Eq => "EQ",
            Self::Neq => "NEQ",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Geq => "GEQ",
            Self::Leq => "LEQ",
            Self::Eof => "EOF",
            Self::Error => "ERROR",
            Self::Dec => "DEC",
            Self::Otc => "OTC",
            Self::Hex => "HEX",
            Self::Id => "ID",
            Self::StringConst => "STRING_CONST",
            Self::CharConst => "CHAR_CONST",
        }
    }

    /// Check if this kind is a reserved-word code (band 0..=20)
    pub const fn is_keyword(self) -> bool {
        (self as u8) <= 20
    }

    /// Check if this kind is a numeric literal (decimal, octal or hex)
    pub const fn is_numeric_literal(self) -> bool {
        let code = self as u8;
        code >= NUMERIC_LITERAL_BAND_START && code <= NUMERIC_LITERAL_BAND_END
    }

    /// Check if this kind is a special-symbol code (band 22..=44)
    pub const fn is_symbol(self) -> bool {
        let code = self as u8;
        code >= 22 && code <= 44
    }
}

impl From<TokenKind> for u8 {
    fn from(kind: TokenKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for TokenKind {
    type Error = InvalidTokenCode;

    fn try_from(code: u8) -> Result<Self, InvalidTokenCode> {
        let kind = match code {
            0 => Self::If,
            1 => Self::Else,
            2 => Self::While,
            3 => Self::Do,
            4 => Self::Break,
            5 => Self::Main,
            6 => Self::Int,
            7 => Self::Float,
            8 => Self::Double,
            9 => Self::Return,
            10 => Self::Const,
            11 => Self::Void,
            12 => Self::Continue,
            13 => Self::Char,
            14 => Self::Unsigned,
            15 => Self::Enum,
            16 => Self::Long,
            17 => Self::Switch,
            18 => Self::Case,
            19 => Self::Auto,
            20 => Self::Static,
            22 => Self::Plus,
            23 => Self::Minus,
            24 => Self::Comma,
            25 => Self::Div,
            26 => Self::Assign,
            27 => Self::Lt,
            28 => Self::Gt,
            29 => Self::LBrace,
            30 => Self::RBrace,
            31 => Self::Semicolon,
            32 => Self::LParen,
            33 => Self::RParen,
            34 => Self::Amp,
            35 => Self::Exclam,
            36 => Self::Hash,
            37 => Self::LBracket,
            38 => Self::RBracket,
            39 => Self::Eq,
            40 => Self::Neq,
            41 => Self::And,
            42 => Self::Or,
            43 => Self::Geq,
            44 => Self::Leq,
            50 => Self::Eof,
            51 => Self::Error,
            98 => Self::Dec,
            99 => Self::Otc,
            100 => Self::Hex,
            101 => Self::Id,
            102 => Self::StringConst,
            103 => Self::CharConst,
            _ => return Err(InvalidTokenCode(code)),
        };
        Ok(kind)
    }
}

/// Returned when deserializing a numeric code outside the token table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTokenCode(pub u8);

impl fmt::Display for InvalidTokenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid token type code: {}", self.0)
    }
}

impl std::error::Error for InvalidTokenCode {}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified lexical unit: kind code plus the exact matched text.
///
/// String and char constant lexemes include their delimiters. Tokens are
/// immutable once produced and ordering in the token sequence is
/// significant end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Check if this token is an identifier
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Id
    }

    /// Check if this token is a numeric literal (decimal, octal or hex)
    pub fn is_numeric_literal(&self) -> bool {
        self.kind.is_numeric_literal()
    }

    /// Check if this token carries a reserved-word code
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind.code(), self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_codes_are_stable() {
        assert_eq!(TokenKind::If.code(), 0);
        assert_eq!(TokenKind::Break.code(), 4);
        assert_eq!(TokenKind::Main.code(), 5);
        assert_eq!(TokenKind::Static.code(), 20);
    }

    #[test]
    fn symbol_codes_are_stable() {
        assert_eq!(TokenKind::Plus.code(), 22);
        assert_eq!(TokenKind::Assign.code(), 26);
        assert_eq!(TokenKind::LBrace.code(), 29);
        assert_eq!(TokenKind::Semicolon.code(), 31);
        assert_eq!(TokenKind::Eq.code(), 39);
        assert_eq!(TokenKind::Geq.code(), 43);
        assert_eq!(TokenKind::Leq.code(), 44);
    }

    #[test]
    fn literal_and_sentinel_codes_are_stable() {
        assert_eq!(TokenKind::Eof.code(), 50);
        assert_eq!(TokenKind::Error.code(), 51);
        assert_eq!(TokenKind::Dec.code(), 98);
        assert_eq!(TokenKind::Otc.code(), 99);
        assert_eq!(TokenKind::Hex.code(), 100);
        assert_eq!(TokenKind::Id.code(), 101);
        assert_eq!(TokenKind::StringConst.code(), 102);
        assert_eq!(TokenKind::CharConst.code(), 103);
    }

    #[test]
    fn numeric_literal_band_classification() {
        assert!(TokenKind::Dec.is_numeric_literal());
        assert!(TokenKind::Otc.is_numeric_literal());
        assert!(TokenKind::Hex.is_numeric_literal());
        assert!(!TokenKind::Id.is_numeric_literal());
        assert!(!TokenKind::StringConst.is_numeric_literal());
        assert!(!TokenKind::Semicolon.is_numeric_literal());
    }

    #[test]
    fn keyword_and_symbol_bands() {
        assert!(TokenKind::While.is_keyword());
        assert!(!TokenKind::Id.is_keyword());
        assert!(TokenKind::Comma.is_symbol());
        assert!(!TokenKind::Static.is_symbol());
        assert!(!TokenKind::Dec.is_symbol());
    }

    #[test]
    fn code_round_trip() {
        for code in 0u8..=255 {
            if let Ok(kind) = TokenKind::try_from(code) {
                assert_eq!(kind.code(), code);
            }
        }
        assert!(TokenKind::try_from(21).is_err());
        assert!(TokenKind::try_from(97).is_err());
        assert!(TokenKind::try_from(104).is_err());
    }

    #[test]
    fn token_serializes_code_and_lexeme() {
        let token = Token::new(TokenKind::Id, "counter");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"type":101,"lexeme":"counter"}"#);

        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn token_display_is_code_lexeme_pair() {
        let token = Token::new(TokenKind::While, "while");
        assert_eq!(token.to_string(), "<2, while>");
    }

    #[test]
    fn renderer_names() {
        assert_eq!(TokenKind::If.name(), "IF");
        assert_eq!(TokenKind::Id.name(), "ID");
        assert_eq!(TokenKind::Hex.name(), "HEX");
        assert_eq!(TokenKind::StringConst.name(), "STRING_CONST");
    }
}

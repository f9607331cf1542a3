//! Nonterminals of the MiniC statement/expression grammar
//!
//! The `as_str` names are the exact placeholders written into derivation
//! trace lines, so they are part of the displayed output.

use std::fmt;

/// Nonterminal symbols of the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    Program,
    Block,
    Stmts,
    Stmt,
    Stmt1,
    Bool,
    Bool1,
    Expr,
    Expr1,
    Term,
    Term1,
    Factor,
}

impl Nonterminal {
    /// Placeholder text as it appears in sentential forms
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Block => "block",
            Self::Stmts => "stmts",
            Self::Stmt => "stmt",
            Self::Stmt1 => "stmt1",
            Self::Bool => "bool",
            Self::Bool1 => "bool1",
            Self::Expr => "expr",
            Self::Expr1 => "expr1",
            Self::Term => "term",
            Self::Term1 => "term1",
            Self::Factor => "factor",
        }
    }

    /// All nonterminals, for table-driven tests
    pub const fn all() -> [Nonterminal; 12] {
        [
            Self::Program,
            Self::Block,
            Self::Stmts,
            Self::Stmt,
            Self::Stmt1,
            Self::Bool,
            Self::Bool1,
            Self::Expr,
            Self::Expr1,
            Self::Term,
            Self::Term1,
            Self::Factor,
        ]
    }
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! MiniC grammar vocabulary: reserved words, special symbols, nonterminals

pub mod keywords;
pub mod nonterminals;

pub use keywords::{is_reserved_word, is_symbol_char, lookup_keyword};
pub use nonterminals::Nonterminal;

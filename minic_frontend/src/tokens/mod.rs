//! Token system for the MiniC front end

pub mod token;
pub mod token_stream;

pub use token::{InvalidTokenCode, Token, TokenKind};
pub use token_stream::TokenStream;

//! MiniC front end
//!
//! Tokenizes a small C-like teaching language and runs a predictive
//! recursive-descent parser over the token stream, emitting a
//! step-by-step leftmost-derivation trace.

// Internal modules
pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;

// Re-export key types for library consumers
pub use lexical::{tokenize, LexicalError, TokenizeResult};
pub use pipeline::{PipelineError, PipelineOutput};
pub use syntax::{parse_tokens, ParseOutcome, Parser};
pub use tokens::{Token, TokenKind};

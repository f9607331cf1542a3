//! Configuration for the MiniC front end
//!
//! Compile-time constants bound resource use; runtime preferences tune
//! logging and reporting without changing analysis semantics.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    FileProcessorPreferences, LexicalPreferences, LoggingPreferences, RuntimeConfig,
};

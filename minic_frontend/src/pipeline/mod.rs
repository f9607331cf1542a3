//! Analysis pipeline (source -> lexical -> syntax)
//!
//! Orchestrates the two core stages and assembles their results into one
//! serializable output. Lexical errors and parse rejection are data in
//! the output, never an `Err`: only file-level problems abort a run.

mod error;
pub mod output;

pub use error::PipelineError;
pub use output::PipelineOutput;

use crate::logging::codes;
use crate::{lexical, log_info, log_success, syntax};
use chrono::Utc;
use std::time::Instant;

/// Run the full analysis over an in-memory source string
pub fn process_source(source: &str) -> PipelineOutput {
    process_source_internal(source, None)
}

/// Run the full analysis over a source file
pub fn process_file(file_path: &str) -> Result<PipelineOutput, PipelineError> {
    let file_result = crate::file_processor::process_file(file_path)?;
    Ok(process_source_internal(
        &file_result.source,
        Some(file_path.to_string()),
    ))
}

fn process_source_internal(source: &str, source_path: Option<String>) -> PipelineOutput {
    let start_time = Instant::now();

    log_info!("Starting analysis pipeline",
        "source_chars" => source.chars().count(),
        "from_file" => source_path.is_some()
    );

    // Stage 1: lexical analysis
    let tokenize_result = lexical::tokenize(source);

    // Stage 2: syntax analysis over the token sequence
    let parse_outcome = syntax::parse_tokens(tokenize_result.tokens.clone());

    let duration = start_time.elapsed();
    let output = PipelineOutput {
        source_path,
        lexical_errors: tokenize_result.error_messages(),
        processed_code: tokenize_result.processed_code,
        parse_success: parse_outcome.success,
        token_count: tokenize_result.tokens.len(),
        step_count: parse_outcome.steps.len(),
        tokens: tokenize_result.tokens,
        derivation_steps: parse_outcome.steps,
        duration_ms: duration.as_secs_f64() * 1000.0,
        analyzed_at: Utc::now(),
    };

    log_success!(codes::success::PIPELINE_COMPLETE,
        "Analysis pipeline completed",
        "tokens" => output.token_count,
        "lexical_errors" => output.lexical_errors.len(),
        "parse_success" => output.parse_success,
        "steps" => output.step_count,
        "duration_ms" => format!("{:.2}", output.duration_ms)
    );

    output
}

//! Pipeline error type
//!
//! Only file-level problems abort the pipeline. Lexical errors and parse
//! rejection are findings carried inside the pipeline output.

use crate::file_processor::FileProcessorError;

/// Errors that abort a pipeline run
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: impl Into<String>) -> Self {
        Self::Pipeline {
            message: message.into(),
        }
    }
}

//! Source file intake for file-based callers

pub mod processor;

pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

/// Read and validate a source file with default preferences
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

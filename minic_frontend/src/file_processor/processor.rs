//! File processor implementation
//!
//! Validates and reads MiniC source files before analysis. The core
//! tokenizer/parser never touch the filesystem; this layer sits in front
//! of them for file-based callers.

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE,
};
use crate::config::runtime::FileProcessorPreferences;
use crate::logging::codes;
use crate::{log_debug, log_success, log_warning};
use std::fs;
use std::path::{Path, PathBuf};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid file extension: expected .mc, found {extension:?}")]
    InvalidExtension { extension: Option<String> },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("File is empty")]
    EmptyFile,

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },
}

impl FileProcessorError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::InvalidExtension { .. } => {
                codes::file_processing::INVALID_EXTENSION
            }
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::EmptyFile => codes::file_processing::EMPTY_FILE,
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
            FileProcessorError::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
        }
    }
}

/// File metadata collected during processing
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// File path as given by the caller
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// File extension (if any)
    pub extension: Option<String>,
    /// Number of lines in the file
    pub line_count: usize,
    /// Modification time (if available)
    pub modified: Option<std::time::SystemTime>,
}

impl FileMetadata {
    /// Check if the file crosses the large-file threshold
    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }
}

/// File processing result containing source and metadata
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    /// File contents as a UTF-8 string
    pub source: String,
    /// File metadata
    pub metadata: FileMetadata,
    /// Processing duration
    pub duration: std::time::Duration,
}

impl FileProcessingResult {
    /// Character count of the source
    pub fn char_count(&self) -> usize {
        self.source.chars().count()
    }
}

/// File processor with runtime preferences
pub struct FileProcessor {
    preferences: FileProcessorPreferences,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            preferences: FileProcessorPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: FileProcessorPreferences) -> Self {
        Self { preferences }
    }

    /// Read and validate a source file
    pub fn process_file(&self, file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = std::time::Instant::now();

        log_debug!("Starting file processing", "file" => file_path);

        let path = Path::new(file_path);
        if !path.exists() {
            return Err(FileProcessorError::FileNotFound {
                path: file_path.to_string(),
            });
        }
        if !path.is_file() {
            return Err(FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            });
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_string());

        if self.preferences.require_mc_extension && extension.as_deref() != Some("mc") {
            return Err(FileProcessorError::InvalidExtension { extension });
        }

        let file_meta = fs::metadata(path).map_err(|e| FileProcessorError::IoError {
            message: e.to_string(),
        })?;

        let size = file_meta.len();
        if size > MAX_FILE_SIZE {
            return Err(FileProcessorError::FileTooLarge {
                size,
                max_size: MAX_FILE_SIZE,
            });
        }
        if size == 0 {
            return Err(FileProcessorError::EmptyFile);
        }

        let bytes = fs::read(path).map_err(|e| FileProcessorError::IoError {
            message: e.to_string(),
        })?;
        let source = String::from_utf8(bytes).map_err(|_| FileProcessorError::InvalidEncoding {
            path: file_path.to_string(),
        })?;

        let metadata = FileMetadata {
            path: path.to_path_buf(),
            size,
            extension,
            line_count: source.lines().count(),
            modified: file_meta.modified().ok(),
        };

        if metadata.is_large_file() {
            log_warning!("Large source file", "file" => file_path, "size_bytes" => size);
        }

        let duration = start_time.elapsed();

        if self.preferences.enable_performance_logging {
            log_success!(codes::success::FILE_PROCESSING_SUCCESS,
                "File processed",
                "file" => file_path,
                "size_bytes" => size,
                "lines" => metadata.line_count,
                "duration_ms" => format!("{:.2}", duration.as_secs_f64() * 1000.0)
            );
        }

        Ok(FileProcessingResult {
            source,
            metadata,
            duration,
        })
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn write_temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn reads_source_with_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_file(&dir, "program.mc", "{ x = 1 ; }\n{ y = 2 ; }\n");

        let result = FileProcessor::new().process_file(&path).unwrap();
        assert_eq!(result.source, "{ x = 1 ; }\n{ y = 2 ; }\n");
        assert_eq!(result.metadata.line_count, 2);
        assert_eq!(result.metadata.extension.as_deref(), Some("mc"));
        assert!(!result.metadata.is_large_file());
    }

    #[test]
    fn missing_file_is_reported() {
        let error = FileProcessor::new()
            .process_file("/nonexistent/source.mc")
            .unwrap_err();
        assert_matches!(error, FileProcessorError::FileNotFound { .. });
        assert_eq!(error.error_code().as_str(), "E005");
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_file(&dir, "empty.mc", "");

        let error = FileProcessor::new().process_file(&path).unwrap_err();
        assert_matches!(error, FileProcessorError::EmptyFile);
    }

    #[test]
    fn extension_check_is_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_file(&dir, "program.txt", "{ }");

        // Default preferences accept any extension
        assert!(FileProcessor::new().process_file(&path).is_ok());

        let strict = FileProcessor::with_preferences(FileProcessorPreferences {
            require_mc_extension: true,
            ..Default::default()
        });
        let error = strict.process_file(&path).unwrap_err();
        assert_matches!(
            error,
            FileProcessorError::InvalidExtension { extension: Some(ref ext) } if ext == "txt"
        );
    }

    #[test]
    fn directory_path_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let error = FileProcessor::new()
            .process_file(dir.path().to_str().unwrap())
            .unwrap_err();
        assert_matches!(error, FileProcessorError::InvalidPath { .. });
    }

    #[test]
    fn non_utf8_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.mc");
        fs::write(&path, [0x7b, 0xff, 0xfe, 0x7d]).unwrap();

        let error = FileProcessor::new()
            .process_file(path.to_str().unwrap())
            .unwrap_err();
        assert_matches!(error, FileProcessorError::InvalidEncoding { .. });
    }
}

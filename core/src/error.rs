//! Error types for building habit reports.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HabitError {
    /// Filename does not follow `<month>_<year>.<ext>`.
    #[error("malformed data filename '{filename}': expected <month>_<year>.csv")]
    MalformedFilename { filename: String },

    #[error("failed to parse CSV {filename} (line {line}): {message}")]
    CsvParse {
        filename: String,
        line: u64,
        message: String,
    },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Bad password, missing password or a failing decryption program.
    #[error("decryption failed: {reason}")]
    Decryption { reason: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl HabitError {
    pub(crate) fn csv(filename: &str, err: &csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        Self::CsvParse {
            filename: filename.to_string(),
            line,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HabitError>;

// ==========================================
// Stockwatch - Import Error Types
// ==========================================
// thiserror derive enum. Per-row data problems are NOT errors --
// they become markers or defaults and are counted in the
// ValidationReport. Only structural problems surface here.
// ==========================================

use thiserror::Error;

/// Import-layer error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv is supported)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("CSV parse failure: {0}")]
    CsvParseError(String),

    // ===== Mapping errors =====
    #[error("column mapping is missing the required '{role}' role")]
    MissingColumnRole { role: String },

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result alias for the import layer
pub type ImportResult<T> = Result<T, ImportError>;

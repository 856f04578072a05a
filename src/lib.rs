//! LAS Processor Library
//!
//! A Rust library for converting Log ASCII Standard (LAS) well-log files,
//! versions 2.0 and 3.0, into CSV curve data plus a JSON header metadata
//! document.
//!
//! This library provides tools for:
//! - Cleaning raw LAS text and indexing its `~` sections
//! - Parsing `MNEM.UNIT VALUE : DESCRIPTION` header lines
//! - Interpreting version, wrap mode, delimiter and null declarations
//! - Assembling canonicalized, version-aware section metadata
//! - Reconstructing curve data rows, including wrapped records
//! - Writing deterministic CSV and JSON artifacts
//!
//! The parser is deliberately forgiving: malformed header lines and broken
//! data sections degrade the output instead of aborting the file.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod las_parser;
        pub mod output_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Delimiter, FieldRecord, LasVersion, Metadata, RowSet, WellLogDocument};
pub use app::services::las_parser::LasParser;
pub use app::services::output_writer::OutputWriter;
pub use config::Config;

/// Result type alias for the LAS processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for LAS processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// `VERS` missing, not numeric, or not one of the supported versions
    #[error("Unsupported LAS version in file '{file}': {found}")]
    UnsupportedVersion { file: String, found: String },

    /// No curve mapping could be resolved for a data section
    #[error("No curve definition for data section '{section}'")]
    MissingCurveDefinition { section: String },

    /// Wrapped data whose first curve is not the depth index
    #[error("Wrapped data section '{section}' must start with DEPTH, found '{first_curve}'")]
    WrapOrder { section: String, first_curve: String },

    /// The file produced no curve data at all
    #[error("No curve data could be extracted from file '{file}'")]
    NoDataSections { file: String },

    /// CSV writing error
    #[error("CSV writing error for '{file}': {message}")]
    CsvWriting {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON serialization or config decoding error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// A conversion worker stopped before returning a result
    #[error("Worker for '{file}' failed: {reason}")]
    WorkerFailed { file: String, reason: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported version error
    pub fn unsupported_version(file: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            file: file.into(),
            found: found.into(),
        }
    }

    /// Create a missing curve definition error
    pub fn missing_curve_definition(section: impl Into<String>) -> Self {
        Self::MissingCurveDefinition {
            section: section.into(),
        }
    }

    /// Create a wrap order error
    pub fn wrap_order(section: impl Into<String>, first_curve: impl Into<String>) -> Self {
        Self::WrapOrder {
            section: section.into(),
            first_curve: first_curve.into(),
        }
    }

    /// Create a no data sections error
    pub fn no_data_sections(file: impl Into<String>) -> Self {
        Self::NoDataSections { file: file.into() }
    }

    /// Create a CSV writing error
    pub fn csv_writing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvWriting {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a worker failure error
    pub fn worker_failed(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WorkerFailed {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Errors that should stop a whole batch rather than a single file
    pub fn is_fatal_for_run(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::ProcessingInterrupted { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            file: "unknown".to_string(),
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

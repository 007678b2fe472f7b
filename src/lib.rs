//! Dinosaur Dataset Analyzer Library
//!
//! A small data-cleaning and analysis pipeline for CSV files of dinosaur
//! records with `name`, `species` and `length` columns.
//!
//! This library provides tools for:
//! - Sniffing and validating CSV input before it is loaded
//! - Loading rows into raw records with polars
//! - Normalizing unit-suffixed length values (`"12m"`) with a configurable default
//! - Dropping records without a species
//! - Finding the species with the largest average length
//! - Grouping names that are anagrams of one another
//! - Rendering the results as human-readable text or JSON

pub mod config;
pub mod constants;
pub mod pipeline;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analysis;
        pub mod record_loader;
        pub mod record_processor;
        pub mod report;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    AnagramGroup, AnalysisOutcome, AnalysisReport, CleanRecord, FailureKind, RawRecord,
    SpeciesAggregate,
};
pub use config::{AnalysisConfig, SuffixPolicy};
pub use pipeline::{analyze_file, analyze_records};

use std::path::PathBuf;

/// Result type alias for the analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading and analysing a dinosaur dataset
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A length value could not be normalized (non-numeric, negative or non-finite)
    #[error("Data validation error: {message}")]
    Validation { message: String },

    /// Aggregation was attempted over zero clean records
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file is not a usable CSV file
    #[error("CSV format error in file '{path}': {reason}")]
    CsvFormat { path: PathBuf, reason: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to read or access the data
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a data validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a CSV format error
    pub fn csv_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CsvFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
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

    /// Classify errors raised by the analysis core.
    ///
    /// Collaborator errors (file access, CSV format, configuration) return `None`.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Validation { .. } => Some(FailureKind::ValidationError),
            Self::EmptyInput { .. } => Some(FailureKind::EmptyInputError),
            _ => None,
        }
    }

    /// Message without the variant prefix, used when reporting a failure
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } | Self::EmptyInput { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

//! Data models for dinosaur dataset analysis
//!
//! This module contains the records flowing through the pipeline, from raw
//! loader rows to validated records, and the result types handed to the
//! report emitter.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Input Records
// =============================================================================

/// A row as produced by the record loader, before any validation
///
/// Empty cells are represented as `None`; the name is never absent but may
/// be the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub species: Option<String>,
    pub length: Option<String>,
}

impl RawRecord {
    /// Create a raw record, treating blank cells as absent
    pub fn new(name: impl Into<String>, species: Option<&str>, length: Option<&str>) -> Self {
        Self {
            name: name.into(),
            species: non_blank(species),
            length: non_blank(length),
        }
    }

    /// Species exactly as read, if present and not blank
    pub fn species(&self) -> Option<&str> {
        self.species.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Whitespace only decides absence; kept values are not altered
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// A row whose length has been normalized but whose species has not yet been checked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub name: String,
    pub species: Option<String>,
    pub length: f64,
}

// =============================================================================
// Clean Records
// =============================================================================

/// A validated record ready for aggregation
///
/// Invariants: `length` is finite and non-negative, `species` is non-empty.
/// Fields are private so the invariants can only be established by [`CleanRecord::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRecord {
    name: String,
    species: String,
    length: f64,
}

impl CleanRecord {
    /// Create a clean record with validation
    pub fn new(name: impl Into<String>, species: impl Into<String>, length: f64) -> Result<Self> {
        let species = species.into();

        if species.trim().is_empty() {
            return Err(Error::validation("Species cannot be empty"));
        }

        if !length.is_finite() || length < 0.0 {
            return Err(Error::validation(format!(
                "Length must be a non-negative number, got {}",
                length
            )));
        }

        Ok(Self {
            name: name.into(),
            species,
            // folds -0.0 into 0.0
            length: length + 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

// =============================================================================
// Analysis Results
// =============================================================================

/// Mean length of all clean records sharing a species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesAggregate {
    pub species: String,
    pub mean_length: f64,
    pub count: usize,
}

/// Names sharing the same canonical letter-sorted key
///
/// Names keep their original casing and spacing, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramGroup {
    pub key: String,
    pub names: Vec<String>,
}

impl AnagramGroup {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names joined as "A and B and C"
    pub fn joined(&self) -> String {
        self.names.join(" and ")
    }
}

/// Successful result of an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub largest_avg_species: String,
    pub largest_avg_length: f64,
    pub anagram_groups: Vec<AnagramGroup>,
    /// Every species aggregate in first-seen order
    pub species_aggregates: Vec<SpeciesAggregate>,
}

/// Classification of errors raised by the analysis core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    ValidationError,
    EmptyInputError,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::ValidationError => write!(f, "ValidationError"),
            FailureKind::EmptyInputError => write!(f, "EmptyInputError"),
        }
    }
}

/// Result value handed to the report emitter: a full report or a classified failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Success(AnalysisReport),
    Failure { kind: FailureKind, message: String },
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }

    /// Convert a pipeline result into an outcome
    ///
    /// Only core errors become a `Failure`; collaborator errors (missing file,
    /// unreadable CSV, bad configuration) are returned unchanged.
    pub fn from_result(result: Result<AnalysisReport>) -> Result<Self> {
        match result {
            Ok(report) => Ok(AnalysisOutcome::Success(report)),
            Err(error) => match error.failure_kind() {
                Some(kind) => Ok(AnalysisOutcome::Failure {
                    kind,
                    message: error.message(),
                }),
                None => Err(error),
            },
        }
    }
}

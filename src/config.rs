//! Configuration management and validation.
//!
//! Provides the analysis configuration passed explicitly into the loader and
//! the normalizer: the default length for missing values, the unit suffix
//! policy and CSV sniffing settings.

use crate::constants::{DEFAULT_LENGTH_M, DEFAULT_SNIFF_SAMPLE_BYTES, DEFAULT_UNIT_SUFFIX};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the unit marker is removed from a length field before parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixPolicy {
    /// Remove every occurrence of the marker, wherever it appears (`"1m2m"` -> `"12"`)
    RemoveAll,
    /// Remove only trailing markers (`"12mm"` -> `"12"`, `"1m2"` stays as is)
    TrailingOnly,
}

impl SuffixPolicy {
    /// Policy used when none is configured
    pub const DEFAULT: SuffixPolicy = SuffixPolicy::RemoveAll;

    /// Apply the policy to a raw field value
    pub fn strip<'a>(&self, value: &'a str, suffix: char) -> std::borrow::Cow<'a, str> {
        match self {
            SuffixPolicy::RemoveAll if value.contains(suffix) => {
                std::borrow::Cow::Owned(value.replace(suffix, ""))
            }
            SuffixPolicy::RemoveAll => std::borrow::Cow::Borrowed(value),
            SuffixPolicy::TrailingOnly => std::borrow::Cow::Borrowed(value.trim_end_matches(suffix)),
        }
    }
}

impl Default for SuffixPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for a single analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Length substituted for absent or empty length fields
    pub default_length_m: f64,

    /// Unit marker removed from length fields
    pub unit_suffix: char,

    /// Strategy used to remove the unit marker
    pub suffix_policy: SuffixPolicy,

    /// Reject input paths that do not end in `.csv`
    pub require_csv_extension: bool,

    /// Bytes read from the start of the file when sniffing its format
    pub sniff_sample_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_length_m: DEFAULT_LENGTH_M,
            unit_suffix: DEFAULT_UNIT_SUFFIX,
            suffix_policy: SuffixPolicy::DEFAULT,
            require_csv_extension: true,
            sniff_sample_bytes: DEFAULT_SNIFF_SAMPLE_BYTES,
        }
    }
}

impl AnalysisConfig {
    /// Set the default length used for missing values
    pub fn with_default_length(mut self, default_length_m: f64) -> Self {
        self.default_length_m = default_length_m;
        self
    }

    /// Set the unit suffix removal policy
    pub fn with_suffix_policy(mut self, suffix_policy: SuffixPolicy) -> Self {
        self.suffix_policy = suffix_policy;
        self
    }

    /// Set the unit marker
    pub fn with_unit_suffix(mut self, unit_suffix: char) -> Self {
        self.unit_suffix = unit_suffix;
        self
    }

    /// Accept input files regardless of their extension
    pub fn without_extension_check(mut self) -> Self {
        self.require_csv_extension = false;
        self
    }

    /// Set the sniffing sample size
    pub fn with_sniff_sample_bytes(mut self, sniff_sample_bytes: usize) -> Self {
        self.sniff_sample_bytes = sniff_sample_bytes;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.default_length_m.is_finite() || self.default_length_m < 0.0 {
            return Err(Error::configuration(format!(
                "Default length must be a non-negative number, got {}",
                self.default_length_m
            )));
        }

        if self.unit_suffix.is_ascii_digit() || matches!(self.unit_suffix, '-' | '+' | '.') {
            return Err(Error::configuration(format!(
                "Unit suffix '{}' would corrupt numeric values",
                self.unit_suffix
            )));
        }

        if self.sniff_sample_bytes == 0 {
            return Err(Error::configuration(
                "Sniff sample size must be greater than zero",
            ));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

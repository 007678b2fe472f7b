//! Command-line argument definitions for the dinosaur dataset analyzer
//!
//! Defines the CLI interface using the clap derive API and converts the
//! parsed arguments into an [`AnalysisConfig`].

use crate::app::services::report::OutputFormat;
use crate::config::{AnalysisConfig, SuffixPolicy};
use crate::constants::{DEFAULT_LENGTH_M, DEFAULT_SNIFF_SAMPLE_BYTES};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the dinosaur dataset analyzer
///
/// Processes dinosaur data from a CSV file: finds the species with the
/// largest average length and the names that are anagrams of each other.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dino-analyzer",
    version,
    about = "Find the longest dinosaur species on average and anagram name groups in a CSV file",
    long_about = "Processes dinosaur data from a CSV file with name, species and length columns. \
                  Lengths may carry a unit suffix (\"12m\"); missing lengths get a default value and \
                  rows without a species are skipped. Reports the species with the largest average \
                  length and the dinosaur names that are anagrams of each other.",
    after_help = "Example: dino-analyzer dinosaurs.csv --default-length 1.5"
)]
pub struct Args {
    /// Path to the CSV file containing dinosaur data
    ///
    /// The file must have a header with name, species and length columns.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file_path: PathBuf,

    /// Length used when a row has no length value, in metres
    #[arg(
        long = "default-length",
        value_name = "METRES",
        default_value_t = DEFAULT_LENGTH_M,
        help = "Length substituted for missing values"
    )]
    pub default_length: f64,

    /// How the unit marker is removed from length values
    ///
    /// remove-all deletes every "m" in the value; trailing-only trims only
    /// trailing markers, so a value like "1m2" is rejected.
    #[arg(
        long = "suffix-policy",
        value_enum,
        default_value = "remove-all",
        help = "How the unit marker is removed from length values"
    )]
    pub suffix_policy: SuffixPolicy,

    /// Accept files that do not end in .csv
    #[arg(long = "allow-any-extension", help = "Accept files that do not end in .csv")]
    pub allow_any_extension: bool,

    /// Bytes sampled from the start of the file to check its format
    #[arg(
        long = "sniff-bytes",
        value_name = "BYTES",
        default_value_t = DEFAULT_SNIFF_SAMPLE_BYTES,
        help = "Bytes sampled to sniff the CSV format"
    )]
    pub sniff_bytes: usize,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info and species table, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Build the analysis configuration from the arguments
    ///
    /// Values are checked by [`AnalysisConfig::validate`] when the analysis runs.
    pub fn to_config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::default()
            .with_default_length(self.default_length)
            .with_suffix_policy(self.suffix_policy)
            .with_sniff_sample_bytes(self.sniff_bytes);

        if self.allow_any_extension {
            config.without_extension_check()
        } else {
            config
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether the human report should include the per-species table
    pub fn show_details(&self) -> bool {
        !self.quiet && self.verbose > 0
    }
}

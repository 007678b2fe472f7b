//! Application constants for the dinosaur dataset analyzer
//!
//! Column names, default values and sniffing parameters used throughout
//! the loader, the normalizer and the CLI.

// =============================================================================
// Input Schema
// =============================================================================

/// Column holding the dinosaur's name
pub const NAME_COLUMN: &str = "name";

/// Column holding the species, required for aggregation
pub const SPECIES_COLUMN: &str = "species";

/// Column holding the body length, optionally suffixed with a unit marker
pub const LENGTH_COLUMN: &str = "length";

/// Columns that must be present in the header of every input file
pub const REQUIRED_COLUMNS: &[&str] = &[NAME_COLUMN, SPECIES_COLUMN, LENGTH_COLUMN];

/// File extension expected for input files
pub const CSV_EXTENSION: &str = "csv";

// =============================================================================
// Normalization Defaults
// =============================================================================

/// Length substituted for missing or empty length fields, in metres
pub const DEFAULT_LENGTH_M: f64 = 1.0;

/// Unit marker removed from length fields before parsing
pub const DEFAULT_UNIT_SUFFIX: char = 'm';

// =============================================================================
// CSV Sniffing
// =============================================================================

/// Number of bytes read from the start of a file to sniff its format
pub const DEFAULT_SNIFF_SAMPLE_BYTES: usize = 2048;

/// Delimiters tried when sniffing, in order of preference
pub const CANDIDATE_DELIMITERS: &[u8] = b",;\t|";

/// Quote character honoured when counting delimiters
pub const QUOTE_CHAR: u8 = b'"';

// =============================================================================
// Logging
// =============================================================================

/// Target used in the default tracing filter
pub const LOG_TARGET: &str = "dino_analyzer";

/// Get a printable name for a delimiter byte
pub fn delimiter_name(delimiter: u8) -> &'static str {
    match delimiter {
        b',' => "comma",
        b';' => "semicolon",
        b'\t' => "tab",
        b'|' => "pipe",
        _ => "other",
    }
}

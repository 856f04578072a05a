//! Application constants for the LAS processor
//!
//! This module contains the configuration defaults, reserved mnemonics,
//! canonical section labels and output naming used throughout the
//! application.

// =============================================================================
// Header Mnemonics
// =============================================================================

/// Version declaration mnemonic
pub const VERSION_MNEMONIC: &str = "VERS";

/// Wrap mode declaration mnemonic
pub const WRAP_MNEMONIC: &str = "WRAP";

/// Data delimiter declaration mnemonic (LAS 3.0)
pub const DELIMITER_MNEMONIC: &str = "DLM";

/// Declared null value mnemonic
pub const NULL_MNEMONIC: &str = "NULL";

/// Value of `WRAP` that enables wrapped data
pub const WRAP_ENABLED: &str = "YES";

/// Required first curve when wrap mode is enabled
pub const WRAP_INDEX_CURVE: &str = "DEPTH";

// =============================================================================
// Section Markers
// =============================================================================

/// Prefix that opens every section header line
pub const SECTION_MARKER: char = '~';

/// Prefix of comment lines
pub const COMMENT_MARKER: char = '#';

/// Separator between a v3 data section and its definition section
pub const DATA_REFERENCE_SEPARATOR: char = '|';

/// Section id of the LAS 2.0 ASCII data block
pub const ASCII_SECTION_ID: &str = "~A";

/// Section id of the LAS 2.0 free-text block
pub const OTHER_SECTION_ID: &str = "~O";

/// Name fragment marking LAS 3.0 data sections
pub const DATA_NAME_FRAGMENT: &str = "DATA";

/// Name fragment marking LAS 3.0 definition sections
pub const DEFINITION_NAME_FRAGMENT: &str = "DEFINITION";

/// Name fragment of v3 data sections that are never exported
pub const INPUT_NAME_FRAGMENT: &str = "INPUT";

// =============================================================================
// Canonical Section Labels
// =============================================================================

pub mod labels {
    pub const VERSION: &str = "VERSION INFORMATION SECTION";
    pub const WELL: &str = "WELL INFORMATION SECTION";
    pub const CURVE: &str = "CURVE INFORMATION SECTION";
    pub const PARAMETER: &str = "PARAMETER INFORMATION SECTION";
    pub const OTHER: &str = "OTHER";

    /// Keyword → canonical label, checked in order; first hit wins
    pub const CANONICAL_RULES: &[(&str, &str)] = &[
        ("VERSION", VERSION),
        ("WELL", WELL),
        ("CURVE", CURVE),
        ("PARAMETER", PARAMETER),
        ("OTHER", OTHER),
        ("REMARKS", OTHER),
    ];
}

// =============================================================================
// Null Handling
// =============================================================================

/// Sentinel that marks a missing sample in curve data.
///
/// Always used for substitution, whatever the file declares under `NULL`.
pub const NULL_SENTINEL: &str = "-999.25";

/// Marker written in place of null samples
pub const DEFAULT_MISSING_VALUE_MARKER: &str = "NaN";

// =============================================================================
// Output Layout
// =============================================================================

/// Directory created next to the source file that holds all artifacts
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "outputDir";

/// Tabular artifact extension
pub const CSV_EXTENSION: &str = "csv";

/// Metadata artifact extension
pub const JSON_EXTENSION: &str = "json";

/// Metadata key holding the comment text of the OTHER section
pub const COMMENT_KEY: &str = "Comment";

/// Metadata key holding the source file name
pub const SOURCE_FILE_KEY: &str = "LAS file";

/// Metadata key holding the written tabular file path(s)
pub const DATA_FILES_KEY: &str = "Data files";

// =============================================================================
// Discovery & Processing Defaults
// =============================================================================

/// File extensions picked up when walking directories
pub const DEFAULT_LAS_EXTENSIONS: &[&str] = &["las", "LAS"];

/// Default number of files converted concurrently
pub const DEFAULT_WORKERS: usize = 1;

/// Upper bound accepted for `--workers`
pub const MAX_WORKERS: usize = 64;

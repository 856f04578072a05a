//! Resilient LAS 2.0/3.0 parser
//!
//! This module parses LAS well-log files by hand, tolerating the vendor
//! deviations and legacy quirks that make strict readers give up. A malformed
//! header line costs one metadata entry, a broken data section costs that
//! section; only an unreadable version declaration rejects the whole file.
//!
//! ## Architecture
//!
//! The parser is organized into stages that run in order:
//! - [`cleaner`] - Line-ending normalization, comment and blank removal
//! - [`sections`] - `~` section indexing with inclusive line ranges
//! - [`line_metadata`] - `MNEM.UNIT VALUE : DESCRIPTION` grammar
//! - [`header`] - Version, wrap, delimiter and null declarations
//! - [`metadata`] - Version-aware assembly and label canonicalization
//! - [`curve_data`] - Column resolution and row reconstruction
//! - [`parser`] - Orchestration over one file
//! - [`events`] - Injected diagnostics sink
//! - [`stats`] - Per-file statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use las_processor::app::services::las_parser::{LasParser, TracingSink};
//! use std::path::Path;
//!
//! # fn example() -> las_processor::Result<()> {
//! let path = Path::new("well.las");
//! let parser = LasParser::default();
//! let result = parser.parse_file(path, &mut TracingSink::new("well.las"))?;
//!
//! println!(
//!     "LAS {} with {} rows",
//!     result.document.version,
//!     result.stats.rows_emitted
//! );
//! # Ok(())
//! # }
//! ```

pub mod cleaner;
pub mod curve_data;
pub mod events;
pub mod header;
pub mod line_metadata;
pub mod metadata;
pub mod parser;
pub mod sections;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use curve_data::{CurveDataExtractor, NullPolicy};
pub use events::{EventSink, ParseEvent, RecordingSink, TracingSink};
pub use header::HeaderInfo;
pub use line_metadata::{LineParseError, parse_field_line};
pub use metadata::canonicalize;
pub use parser::LasParser;
pub use stats::{ParseResult, ParseStats};

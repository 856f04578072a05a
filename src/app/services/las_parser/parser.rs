//! Core LAS parser implementation
//!
//! Runs the cleaning, indexing, header, metadata and curve data stages for
//! one file and bundles the outcome into a [`WellLogDocument`].

use std::path::Path;

use super::cleaner::clean_lines;
use super::curve_data::{CurveDataExtractor, NullPolicy};
use super::events::{CountingSink, EventSink};
use super::header::HeaderInfo;
use super::metadata::assemble_metadata;
use super::sections::index_sections;
use super::stats::ParseResult;
use crate::app::models::WellLogDocument;
use crate::config::Config;
use crate::{Error, Result};

/// Fallback LAS parser for files the strict reader rejects
///
/// The parser holds no per-file state; every call builds a fresh document
/// so one instance can be shared between workers.
#[derive(Debug, Clone, Default)]
pub struct LasParser {
    nulls: NullPolicy,
}

impl LasParser {
    /// Create a parser with the given null handling
    pub fn new(nulls: NullPolicy) -> Self {
        Self { nulls }
    }

    /// Create a parser from run configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(NullPolicy::new(config.missing_value_marker.as_str()))
    }

    /// Read and parse a LAS file
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected;
    /// legacy files are frequently Latin-1.
    pub fn parse_file(&self, path: &Path, sink: &mut dyn EventSink) -> Result<ParseResult> {
        if !path.is_file() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;
        let content = String::from_utf8_lossy(&bytes);

        self.parse_str(&content, path, sink)
    }

    /// Parse LAS text that was read from `source`
    pub fn parse_str(
        &self,
        content: &str,
        source: &Path,
        sink: &mut dyn EventSink,
    ) -> Result<ParseResult> {
        let file = source.display().to_string();
        let mut sink = CountingSink::new(sink);

        let lines = clean_lines(content, &mut sink);
        let sections = index_sections(&lines);
        let header = HeaderInfo::interpret(&lines, &file, &mut sink)?;

        let metadata = assemble_metadata(&lines, &sections, header.version, &mut sink);

        let row_sets =
            CurveDataExtractor::new(&lines, &sections, &metadata, &header, &self.nulls)
                .extract(&mut sink);

        if row_sets.is_empty() {
            return Err(Error::no_data_sections(file));
        }

        let mut stats = sink.stats;
        stats.cleaned_lines = lines.len();

        let document = WellLogDocument {
            source: source.to_path_buf(),
            version: header.version,
            wrap: header.wrap,
            delimiter: header.delimiter,
            declared_null: header.declared_null,
            metadata,
            row_sets,
        };
        stats.rows_emitted = document.total_rows();

        Ok(ParseResult {
            document,
            stats,
            sections,
        })
    }
}

//! Parsing statistics and result structures for LAS processing

use super::events::{DropReason, ParseEvent};
use crate::app::models::{Section, WellLogDocument};

/// Parsed document together with its statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub document: WellLogDocument,
    pub stats: ParseStats,

    /// Sections as indexed over the cleaned lines
    pub sections: Vec<Section>,
}

/// Per-file parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Lines left after cleaning
    pub cleaned_lines: usize,

    /// Comment lines removed by the cleaner
    pub comment_lines: usize,

    /// Blank lines removed by the cleaner
    pub blank_lines: usize,

    /// Header lines rejected by the field grammar
    pub malformed_lines: usize,

    /// Data sections abandoned
    pub sections_skipped: usize,

    /// Rows whose length differs from the curve count
    pub row_length_mismatches: usize,

    /// Wrapped records dropped before completion
    pub wrapped_records_dropped: usize,

    /// Rows emitted across all row-sets
    pub rows_emitted: usize,

    /// Section skip reasons for reporting
    pub errors: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the counters
    pub fn record(&mut self, event: &ParseEvent) {
        match event {
            ParseEvent::LineDropped { reason, .. } => match reason {
                DropReason::Comment => self.comment_lines += 1,
                DropReason::Blank => self.blank_lines += 1,
            },
            ParseEvent::MalformedLine { .. } => self.malformed_lines += 1,
            ParseEvent::SectionSkipped { section, reason } => {
                self.sections_skipped += 1;
                self.errors.push(format!("{}: {}", section, reason));
            }
            ParseEvent::RowLengthMismatch { .. } => self.row_length_mismatches += 1,
            ParseEvent::IncompleteWrappedRecord { .. } => self.wrapped_records_dropped += 1,
            _ => {}
        }
    }

    /// True when nothing was dropped or skipped
    pub fn is_clean(&self) -> bool {
        self.malformed_lines == 0
            && self.sections_skipped == 0
            && self.row_length_mismatches == 0
            && self.wrapped_records_dropped == 0
    }
}

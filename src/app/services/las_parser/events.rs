//! Structured diagnostics emitted while parsing
//!
//! Parser components never log directly. They report [`ParseEvent`]s to an
//! injected [`EventSink`]; the CLI wires in [`TracingSink`], tests use
//! [`RecordingSink`].

use super::line_metadata::LineParseError;
use super::stats::ParseStats;
use tracing::{debug, error, info, warn};

/// Why the cleaner dropped a raw line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Comment,
    Blank,
}

/// A recoverable event observed while parsing one file
#[derive(Debug, Clone, PartialEq)]
pub enum ParseEvent {
    /// Raw line removed by the cleaner (1-based raw line number)
    LineDropped { line_number: usize, reason: DropReason },

    /// LAS 2.0 header line that failed the field grammar
    MalformedLine {
        section: String,
        line: String,
        reason: LineParseError,
    },

    /// LAS 3.0 header line skipped without counting as an error
    LineSkipped {
        section: String,
        line: String,
        reason: LineParseError,
    },

    /// `DLM` value that is not SPACE, COMMA or TAB
    UnrecognizedDelimiter { value: String },

    /// A CURVE section found in a LAS 3.0 file
    NonConformantCurveSection { label: String },

    /// CURVE mapping re-registered under a v3 definition name
    CurveSectionAliased { label: String, alias: String },

    /// Data section abandoned; other sections continue
    SectionSkipped { section: String, reason: String },

    /// Unwrapped row whose token count differs from the curve count
    RowLengthMismatch {
        section: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Wrapped record that never reached the curve count
    IncompleteWrappedRecord {
        section: String,
        index_value: String,
        expected: usize,
        found: usize,
    },

    /// Wrapped data line seen before any record was opened
    OrphanWrappedLine { section: String, line: String },

    /// A v3 file with no usable data sections retried with v2 rules
    Version2LayoutFallback,
}

/// Receiver of parse events
pub trait EventSink {
    fn emit(&mut self, event: ParseEvent);
}

/// Forwards events to `tracing`, tagged with the source file
#[derive(Debug, Clone)]
pub struct TracingSink {
    file: String,
}

impl TracingSink {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }
}

impl EventSink for TracingSink {
    fn emit(&mut self, event: ParseEvent) {
        let file = self.file.as_str();
        match event {
            ParseEvent::LineDropped {
                line_number,
                reason,
            } => {
                debug!(file, line_number, ?reason, "Dropped raw line");
            }
            ParseEvent::MalformedLine {
                section,
                line,
                reason,
            } => {
                error!(file, %section, %line, %reason, "Malformed header line");
            }
            ParseEvent::LineSkipped {
                section,
                line,
                reason,
            } => {
                debug!(file, %section, %line, %reason, "Skipped header line");
            }
            ParseEvent::UnrecognizedDelimiter { value } => {
                warn!(file, %value, "Unrecognized DLM value, using SPACE");
            }
            ParseEvent::NonConformantCurveSection { label } => {
                error!(file, %label, "CURVE is reserved for LAS 2.0");
            }
            ParseEvent::CurveSectionAliased { label, alias } => {
                info!(file, %label, %alias, "Registered CURVE section under definition name");
            }
            ParseEvent::SectionSkipped { section, reason } => {
                error!(file, %section, %reason, "Skipped data section");
            }
            ParseEvent::RowLengthMismatch {
                section,
                row,
                expected,
                found,
            } => {
                warn!(file, %section, row, expected, found, "Row length does not match curve count");
            }
            ParseEvent::IncompleteWrappedRecord {
                section,
                index_value,
                expected,
                found,
            } => {
                warn!(file, %section, %index_value, expected, found, "Dropped incomplete wrapped record");
            }
            ParseEvent::OrphanWrappedLine { section, line } => {
                warn!(file, %section, %line, "Wrapped data line outside any record");
            }
            ParseEvent::Version2LayoutFallback => {
                warn!(file, "No LAS 3.0 data sections produced rows, retrying with LAS 2.0 layout");
            }
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<ParseEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events matching `predicate`
    pub fn count(&self, predicate: impl Fn(&ParseEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: ParseEvent) {
        self.events.push(event);
    }
}

/// Updates [`ParseStats`] and passes events on to the wrapped sink
pub(crate) struct CountingSink<'a> {
    inner: &'a mut dyn EventSink,
    pub(crate) stats: ParseStats,
}

impl<'a> CountingSink<'a> {
    pub(crate) fn new(inner: &'a mut dyn EventSink) -> Self {
        Self {
            inner,
            stats: ParseStats::new(),
        }
    }
}

impl EventSink for CountingSink<'_> {
    fn emit(&mut self, event: ParseEvent) {
        self.stats.record(&event);
        self.inner.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_sink_forwards_and_counts() {
        let mut recorder = RecordingSink::new();
        let mut counting = CountingSink::new(&mut recorder);

        counting.emit(ParseEvent::MalformedLine {
            section: "~W".to_string(),
            line: "garbage".to_string(),
            reason: LineParseError::MissingColon,
        });
        counting.emit(ParseEvent::Version2LayoutFallback);
        let stats = counting.stats;

        assert_eq!(stats.malformed_lines, 1);
        assert!(!stats.is_clean());
        assert_eq!(recorder.events.len(), 2);
        assert_eq!(
            recorder.count(|e| matches!(e, ParseEvent::Version2LayoutFallback)),
            1
        );
    }

    #[test]
    fn test_tracing_sink_accepts_every_event() {
        // No subscriber installed; emitting must not panic
        let mut sink = TracingSink::new("well.las");
        sink.emit(ParseEvent::UnrecognizedDelimiter {
            value: "PIPE".to_string(),
        });
        sink.emit(ParseEvent::OrphanWrappedLine {
            section: "~A".to_string(),
            line: "1 2".to_string(),
        });
    }
}

//! Curve data extraction
//!
//! Resolves the column order of every data section from the assembled
//! metadata and rebuilds its rows, in either one-line-per-record or wrapped
//! layout. Problems in one data section never affect the others.

use super::events::{EventSink, ParseEvent};
use super::header::HeaderInfo;
use super::sections::find_by_id;
use crate::app::models::{Delimiter, LasVersion, Metadata, RowSet, Section};
use crate::constants::{
    ASCII_SECTION_ID, DEFAULT_MISSING_VALUE_MARKER, NULL_SENTINEL, WRAP_INDEX_CURVE, labels,
};
use crate::{Error, Result};

/// Null handling applied to every emitted token
///
/// Any token containing [`NULL_SENTINEL`] is missing. The value a file
/// declares under `NULL` plays no part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullPolicy {
    /// Written in place of missing tokens
    pub marker: String,
}

impl Default for NullPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MISSING_VALUE_MARKER)
    }
}

impl NullPolicy {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    fn apply(&self, token: &str) -> String {
        if token.contains(NULL_SENTINEL) {
            self.marker.clone()
        } else {
            token.to_string()
        }
    }
}

/// Extracts row-sets for one file
pub struct CurveDataExtractor<'a> {
    lines: &'a [String],
    sections: &'a [Section],
    metadata: &'a Metadata,
    header: &'a HeaderInfo,
    nulls: &'a NullPolicy,
}

impl<'a> CurveDataExtractor<'a> {
    pub fn new(
        lines: &'a [String],
        sections: &'a [Section],
        metadata: &'a Metadata,
        header: &'a HeaderInfo,
        nulls: &'a NullPolicy,
    ) -> Self {
        Self {
            lines,
            sections,
            metadata,
            header,
            nulls,
        }
    }

    /// Row-sets of every exportable data section, in file order
    pub fn extract(&self, sink: &mut dyn EventSink) -> Vec<RowSet> {
        match self.header.version {
            LasVersion::V2 => self.extract_v2(sink).into_iter().collect(),
            LasVersion::V3 => {
                let row_sets = self.extract_v3(sink);
                if row_sets.is_empty() {
                    // Files declared as 3.0 but laid out as 2.0
                    sink.emit(ParseEvent::Version2LayoutFallback);
                    self.extract_v2(sink).into_iter().collect()
                } else {
                    row_sets
                }
            }
        }
    }

    fn extract_v2(&self, sink: &mut dyn EventSink) -> Option<RowSet> {
        let section = find_by_id(self.sections, ASCII_SECTION_ID)?;

        let result = self
            .metadata
            .fields(labels::CURVE)
            .filter(|fields| !fields.is_empty())
            .map(|fields| fields.mnemonics())
            .ok_or_else(|| Error::missing_curve_definition(&section.name))
            .and_then(|curves| {
                let rows = self.extract_rows(section, &section.name, &curves, sink)?;
                Ok(RowSet {
                    section: None,
                    curves,
                    rows,
                })
            });

        skip_on_error(result, &section.name, sink)
    }

    fn extract_v3(&self, sink: &mut dyn EventSink) -> Vec<RowSet> {
        self.sections
            .iter()
            .filter(|section| section.is_v3_data_section())
            .filter_map(|section| {
                let result = self.extract_v3_section(section, sink);
                skip_on_error(result, &section.name, sink)
            })
            .collect()
    }

    fn extract_v3_section(&self, section: &Section, sink: &mut dyn EventSink) -> Result<RowSet> {
        let reference = section
            .data_reference()
            .ok_or_else(|| Error::missing_curve_definition(&section.name))?;

        let curves = self
            .metadata
            .fields(&reference.definition)
            .or_else(|| self.metadata.fields(&reference.definition.replace(' ', "_")))
            .filter(|fields| !fields.is_empty())
            .map(|fields| fields.mnemonics())
            .ok_or_else(|| Error::missing_curve_definition(&section.name))?;

        let rows = self.extract_rows(section, &reference.section, &curves, sink)?;

        Ok(RowSet {
            section: Some(reference.section),
            curves,
            rows,
        })
    }

    fn extract_rows(
        &self,
        section: &Section,
        name: &str,
        curves: &[String],
        sink: &mut dyn EventSink,
    ) -> Result<Vec<Vec<String>>> {
        let body = section.body(self.lines);
        if self.header.wrap {
            unwrap_records(body, name, curves, self.nulls, sink)
        } else {
            Ok(split_records(body, name, curves.len(), self.header.delimiter, self.nulls, sink))
        }
    }
}

fn skip_on_error<T>(result: Result<T>, section: &str, sink: &mut dyn EventSink) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            sink.emit(ParseEvent::SectionSkipped {
                section: section.to_string(),
                reason: e.to_string(),
            });
            None
        }
    }
}

/// One physical line per record
pub fn split_records(
    body: &[String],
    section: &str,
    curve_count: usize,
    delimiter: Delimiter,
    nulls: &NullPolicy,
    sink: &mut dyn EventSink,
) -> Vec<Vec<String>> {
    body.iter()
        .enumerate()
        .map(|(row, line)| {
            let tokens: Vec<String> = split_tokens(line, delimiter)
                .map(|token| nulls.apply(token))
                .collect();

            if tokens.len() != curve_count {
                sink.emit(ParseEvent::RowLengthMismatch {
                    section: section.to_string(),
                    row,
                    expected: curve_count,
                    found: tokens.len(),
                });
            }

            tokens
        })
        .collect()
}

fn split_tokens(line: &str, delimiter: Delimiter) -> Box<dyn Iterator<Item = &str> + '_> {
    let line = line.trim_end();
    match delimiter {
        Delimiter::Space => Box::new(line.split_whitespace()),
        other => Box::new(line.split(other.as_char()).map(str::trim)),
    }
}

/// Rebuild records spread over several lines
///
/// A line holding a single token opens a record with that index value; the
/// following lines fill it until it has one token per curve. A continuation
/// line that happens to hold a single token cannot be told apart from a new
/// record and is treated as one.
pub fn unwrap_records(
    body: &[String],
    section: &str,
    curves: &[String],
    nulls: &NullPolicy,
    sink: &mut dyn EventSink,
) -> Result<Vec<Vec<String>>> {
    let first_curve = curves.first().map(String::as_str).unwrap_or_default();
    if !first_curve.eq_ignore_ascii_case(WRAP_INDEX_CURVE) {
        return Err(Error::wrap_order(section, first_curve));
    }

    let expected = curves.len();
    let mut records = Vec::new();
    let mut open: Option<Vec<String>> = None;

    for line in body {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() == 1 {
            if let Some(record) = open.take() {
                report_incomplete(&record, section, expected, sink);
            }
            open = Some(vec![tokens[0].to_string()]);
        } else {
            match open.as_mut() {
                Some(record) => record.extend(tokens.iter().map(|t| t.to_string())),
                None => {
                    sink.emit(ParseEvent::OrphanWrappedLine {
                        section: section.to_string(),
                        line: line.clone(),
                    });
                    continue;
                }
            }
        }

        if open.as_ref().is_some_and(|record| record.len() >= expected) {
            if let Some(record) = open.take() {
                if record.len() != expected {
                    sink.emit(ParseEvent::RowLengthMismatch {
                        section: section.to_string(),
                        row: records.len(),
                        expected,
                        found: record.len(),
                    });
                }
                records.push(record.iter().map(|token| nulls.apply(token)).collect());
            }
        }
    }

    if let Some(record) = open {
        report_incomplete(&record, section, expected, sink);
    }

    Ok(records)
}

fn report_incomplete(record: &[String], section: &str, expected: usize, sink: &mut dyn EventSink) {
    sink.emit(ParseEvent::IncompleteWrappedRecord {
        section: section.to_string(),
        index_value: record.first().cloned().unwrap_or_default(),
        expected,
        found: record.len(),
    });
}

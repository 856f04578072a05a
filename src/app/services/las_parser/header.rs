//! File-wide header scalars
//!
//! Extracts version, wrap mode, delimiter and the declared null value from
//! the cleaned lines. Header order is not guaranteed, so every line is
//! scanned and the first field whose mnemonic matches exactly wins. Lines
//! that do not follow the field grammar are ignored here.

use super::events::{EventSink, ParseEvent};
use super::line_metadata::parse_field_line;
use crate::app::models::{Delimiter, LasVersion};
use crate::constants::{
    DELIMITER_MNEMONIC, NULL_MNEMONIC, VERSION_MNEMONIC, WRAP_ENABLED, WRAP_MNEMONIC,
};
use crate::{Error, Result};

/// Scalars that drive metadata assembly and data extraction
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    pub version: LasVersion,
    pub wrap: bool,
    pub delimiter: Delimiter,

    /// Parsed but never used for substitution
    pub declared_null: Option<String>,
}

impl HeaderInfo {
    /// Interpret the header scalars of one file
    pub fn interpret(lines: &[String], file: &str, sink: &mut dyn EventSink) -> Result<Self> {
        let mut version = None;
        let mut wrap = None;
        let mut delimiter = None;
        let mut declared_null = None;

        for line in lines {
            let Ok(record) = parse_field_line(line) else {
                continue;
            };

            let slot = match record.mnemonic.as_str() {
                VERSION_MNEMONIC => &mut version,
                WRAP_MNEMONIC => &mut wrap,
                DELIMITER_MNEMONIC => &mut delimiter,
                NULL_MNEMONIC => &mut declared_null,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(record.value);
            }
        }

        let version = parse_version(version, file)?;

        let wrap = wrap.is_some_and(|value| value == WRAP_ENABLED);

        let delimiter = match delimiter {
            Some(value) => Delimiter::from_declared(&value).unwrap_or_else(|| {
                sink.emit(ParseEvent::UnrecognizedDelimiter { value });
                Delimiter::Space
            }),
            None => Delimiter::Space,
        };

        Ok(Self {
            version,
            wrap,
            delimiter,
            declared_null,
        })
    }
}

fn parse_version(value: Option<String>, file: &str) -> Result<LasVersion> {
    let value = value.ok_or_else(|| Error::unsupported_version(file, "missing VERS line"))?;

    value
        .parse::<f64>()
        .ok()
        .and_then(LasVersion::from_value)
        .ok_or_else(|| Error::unsupported_version(file, value))
}

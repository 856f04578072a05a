//! Header line grammar
//!
//! Parses `MNEM.UNIT  VALUE : DESCRIPTION` lines. The description starts
//! after the *last* colon so values such as times may contain colons; the
//! mnemonic ends at the *first* dot so values may contain dots.

use crate::app::models::FieldRecord;

/// Why a header line could not be read as a field record
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineParseError {
    #[error("missing ':' before description")]
    MissingColon,

    #[error("missing '.' after mnemonic")]
    MissingDot,

    #[error("empty mnemonic")]
    EmptyMnemonic,
}

/// Parse one header line into a [`FieldRecord`]
pub fn parse_field_line(line: &str) -> Result<FieldRecord, LineParseError> {
    let (head, description) = line
        .trim()
        .rsplit_once(':')
        .ok_or(LineParseError::MissingColon)?;

    let (mnemonic, rest) = head
        .trim()
        .split_once('.')
        .ok_or(LineParseError::MissingDot)?;

    let mnemonic = mnemonic.trim();
    if mnemonic.is_empty() {
        return Err(LineParseError::EmptyMnemonic);
    }

    let (unit, value) = split_unit_value(rest);

    Ok(FieldRecord {
        mnemonic: mnemonic.to_string(),
        unit: unit.to_string(),
        value: value.to_string(),
        description: description.trim().to_string(),
    })
}

/// Whitespace right after the dot means "no unit"
fn split_unit_value(rest: &str) -> (&str, &str) {
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return ("", rest.trim());
    }

    match rest.split_once(char::is_whitespace) {
        Some((unit, value)) => (unit, value.trim()),
        None => (rest, ""),
    }
}

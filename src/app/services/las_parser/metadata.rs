//! Version-aware metadata assembly
//!
//! Builds the label → section mapping written to the JSON document. Labels
//! are canonicalized as they are inserted so downstream consumers see a
//! fixed set of keys regardless of the free-text section names in the file.

use super::events::{EventSink, ParseEvent};
use super::line_metadata::{LineParseError, parse_field_line};
use crate::app::models::{FieldMap, LasVersion, Metadata, Section, SectionContent};
use crate::constants::{
    ASCII_SECTION_ID, DATA_NAME_FRAGMENT, DATA_REFERENCE_SEPARATOR, DEFINITION_NAME_FRAGMENT,
    OTHER_SECTION_ID, labels,
};

/// Map a raw section label onto its canonical metadata key
///
/// Labels naming data or definition sections are left alone; otherwise the
/// first keyword found decides the label.
pub fn canonicalize(raw_label: &str) -> String {
    let upper = raw_label.to_uppercase();
    if upper.contains(DATA_NAME_FRAGMENT) || upper.contains(DEFINITION_NAME_FRAGMENT) {
        return raw_label.to_string();
    }

    labels::CANONICAL_RULES
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| raw_label.to_string())
}

/// Assemble the metadata of one file
pub fn assemble_metadata(
    lines: &[String],
    sections: &[Section],
    version: LasVersion,
    sink: &mut dyn EventSink,
) -> Metadata {
    match version {
        LasVersion::V2 => assemble_v2(lines, sections, sink),
        LasVersion::V3 => assemble_v3(lines, sections, sink),
    }
}

fn assemble_v2(lines: &[String], sections: &[Section], sink: &mut dyn EventSink) -> Metadata {
    let mut metadata = Metadata::new();

    for section in sections.iter().filter(|s| s.id != ASCII_SECTION_ID) {
        let label = canonicalize(&section.raw_label());
        let body = section.body(lines);

        let content = if section.id == OTHER_SECTION_ID {
            let comment = body
                .iter()
                .map(|line| line.trim())
                .collect::<Vec<_>>()
                .join(" ");
            SectionContent::Comment(comment)
        } else {
            SectionContent::Fields(parse_fields(body, &section.name, sink, malformed_line))
        };

        metadata.insert(label, content);
    }

    metadata
}

fn assemble_v3(lines: &[String], sections: &[Section], sink: &mut dyn EventSink) -> Metadata {
    let mut metadata = Metadata::new();
    let mut curve_fields: Option<FieldMap> = None;

    for section in sections
        .iter()
        .filter(|s| !s.name.to_uppercase().contains(DATA_NAME_FRAGMENT))
    {
        let raw_label = section.raw_label();
        let fields = parse_fields(section.body(lines), &section.name, sink, skipped_line);

        if raw_label.to_uppercase().contains("CURVE") {
            sink.emit(ParseEvent::NonConformantCurveSection {
                label: raw_label.clone(),
            });
            curve_fields.get_or_insert_with(|| fields.clone());
        }

        metadata.insert(canonicalize(&raw_label), SectionContent::Fields(fields));
    }

    if let Some(fields) = curve_fields {
        if let Some(alias) = find_definition_reference(lines) {
            sink.emit(ParseEvent::CurveSectionAliased {
                label: labels::CURVE.to_string(),
                alias: alias.clone(),
            });
            metadata.insert(alias, SectionContent::Fields(fields));
        }
    }

    metadata
}

/// Definition name referenced by the first line mentioning both DATA and
/// DEFINITION
fn find_definition_reference(lines: &[String]) -> Option<String> {
    let line = lines.iter().find(|line| {
        let upper = line.to_uppercase();
        upper.contains(DATA_NAME_FRAGMENT) && upper.contains(DEFINITION_NAME_FRAGMENT)
    })?;

    line.split(DATA_REFERENCE_SEPARATOR)
        .nth(1)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn parse_fields(
    body: &[String],
    section_name: &str,
    sink: &mut dyn EventSink,
    on_failure: impl Fn(String, String, LineParseError) -> ParseEvent,
) -> FieldMap {
    let mut fields = FieldMap::new();

    for line in body {
        match parse_field_line(line) {
            Ok(record) => {
                fields.insert(record);
            }
            Err(reason) => sink.emit(on_failure(section_name.to_string(), line.clone(), reason)),
        }
    }

    fields
}

fn malformed_line(section: String, line: String, reason: LineParseError) -> ParseEvent {
    ParseEvent::MalformedLine {
        section,
        line,
        reason,
    }
}

fn skipped_line(section: String, line: String, reason: LineParseError) -> ParseEvent {
    ParseEvent::LineSkipped {
        section,
        line,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("VERSION_INFORMATION"), labels::VERSION);
        assert_eq!(canonicalize("Version"), labels::VERSION);
        assert_eq!(canonicalize("WELL_INFORMATION_BLOCK"), labels::WELL);
        assert_eq!(canonicalize("CURVE_INFORMATION"), labels::CURVE);
        assert_eq!(canonicalize("Parameter"), labels::PARAMETER);
        assert_eq!(canonicalize("OTHER_INFORMATION"), labels::OTHER);
        assert_eq!(canonicalize("Remarks"), labels::OTHER);
    }

    #[test]
    fn test_canonicalize_leaves_data_and_definitions() {
        assert_eq!(canonicalize("CURVE_DEFINITION"), "CURVE_DEFINITION");
        assert_eq!(canonicalize("Log_Definition"), "Log_Definition");
        assert_eq!(canonicalize("WELL_DATA"), "WELL_DATA");
        assert_eq!(canonicalize("Core_Parameters"), labels::PARAMETER);
        assert_eq!(canonicalize("Tops"), "Tops");
    }

    #[test]
    fn test_definition_reference() {
        let lines: Vec<String> = ["~Log_Definition", "~ASCII_DATA | CURVE_DEFINITION", "1 2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            find_definition_reference(&lines),
            Some("CURVE_DEFINITION".to_string())
        );

        let no_pipe: Vec<String> = vec!["~DATA DEFINITION".to_string()];
        assert_eq!(find_definition_reference(&no_pipe), None);
    }
}

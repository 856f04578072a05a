//! End-to-end tests for the LAS parser over in-memory fixtures

use super::*;
use crate::Error;
use crate::app::models::{Delimiter, LasVersion};
use crate::app::services::las_parser::events::ParseEvent;
use crate::app::services::las_parser::sections::index_sections;

#[test]
fn test_las2_unwrapped_document() {
    let (result, sink) = parse(LAS2_UNWRAPPED);
    let result = result.unwrap();
    let document = &result.document;

    assert_eq!(document.version, LasVersion::V2);
    assert!(!document.wrap);
    assert_eq!(document.delimiter, Delimiter::Space);
    assert_eq!(document.declared_null.as_deref(), Some("-999.2500"));
    assert_eq!(document.base_name(), "well");

    assert_eq!(document.row_sets.len(), 1);
    let row_set = &document.row_sets[0];
    assert_eq!(row_set.section, None);
    assert_eq!(row_set.curves, vec!["DEPT", "DT", "RHOB", "NPHI"]);
    assert_eq!(
        row_set.rows,
        vec![
            vec!["1670.000", "123.450", "2550.000", "0.450"],
            vec!["1669.875", "123.450", "2550.000", "0.450"],
            vec!["1669.750", "NaN", "2550.000", "0.450"],
        ]
    );

    assert_eq!(
        sink.count(|e| matches!(e, ParseEvent::MalformedLine { .. })),
        0
    );
    assert!(result.stats.is_clean());
    assert_eq!(result.stats.comment_lines, 2);
    assert_eq!(result.stats.rows_emitted, 3);
}

#[test]
fn test_las2_wrapped_document() {
    let (result, _sink) = parse(LAS2_WRAPPED);
    let document = result.unwrap().document;

    assert!(document.wrap);
    assert_eq!(
        document.row_sets[0].rows,
        vec![
            vec!["910.000000", "NaN", "2692.7075", "0.3140"],
            vec!["909.875000", "67.1", "2712.6460", "NaN"],
        ]
    );
}

#[test]
fn test_las2_wrapped_without_depth_first() {
    let content = LAS2_WRAPPED.replace(" DEPTH.M    : 1 DEPTH\n", "").replace(
        " NPHI .V/V  : 4 NEUTRON\n",
        " NPHI .V/V  : 4 NEUTRON\n DEPTH.M    : 1 DEPTH\n",
    );
    let (result, sink) = parse(&content);

    // the only data section is skipped, which leaves nothing to write
    assert!(matches!(result, Err(Error::NoDataSections { .. })));
    assert_eq!(
        sink.count(|e| matches!(e, ParseEvent::SectionSkipped { .. })),
        1
    );
}

#[test]
fn test_las3_multi_section_document() {
    let (result, sink) = parse(LAS3_MULTI_SECTION);
    let document = result.unwrap().document;

    assert_eq!(document.version, LasVersion::V3);
    assert_eq!(document.delimiter, Delimiter::Comma);
    assert_eq!(document.row_sets.len(), 2);

    let log = &document.row_sets[0];
    assert_eq!(log.section.as_deref(), Some("Log_Data"));
    assert_eq!(log.curves, vec!["DEPT", "DT", "RHOB"]);
    assert_eq!(
        log.rows,
        vec![
            vec!["1670.000", "123.450", "2550.000"],
            vec!["1669.875", "NaN", "2550.000"],
        ]
    );

    let core = &document.row_sets[1];
    assert_eq!(core.section.as_deref(), Some("Core_Data"));
    assert_eq!(core.curves, vec!["CDEP", "POR"]);
    assert_eq!(core.rows, vec![vec!["1669.5", "12.5"]]);

    assert!(!sink.events.contains(&ParseEvent::Version2LayoutFallback));
}

#[test]
fn test_las3_missing_definition_skips_only_that_section() {
    let content = LAS3_MULTI_SECTION.replace("~Core_Definition\r\n", "~Core_Defs\r\n");
    let (result, sink) = parse(&content);
    let result = result.unwrap();

    assert_eq!(result.document.row_sets.len(), 1);
    assert_eq!(
        result.document.row_sets[0].section.as_deref(),
        Some("Log_Data")
    );
    assert_eq!(result.stats.sections_skipped, 1);
    assert!(sink.events.iter().any(|e| matches!(
        e,
        ParseEvent::SectionSkipped { section, .. } if section == "Core_Data | Core_Definition"
    )));
}

#[test]
fn test_las3_legacy_curve_section_is_aliased() {
    let (result, sink) = parse(LAS3_LEGACY_CURVE);
    let document = result.unwrap().document;

    assert_eq!(document.row_sets.len(), 1);
    let row_set = &document.row_sets[0];
    assert_eq!(row_set.section.as_deref(), Some("ASCII_DATA"));
    assert_eq!(row_set.curves, vec!["DEPTH", "GR"]);
    assert_eq!(row_set.rows[1], vec!["100.5", "NaN"]);

    assert_eq!(
        sink.count(|e| matches!(e, ParseEvent::NonConformantCurveSection { .. })),
        1
    );
}

#[test]
fn test_las3_with_v2_layout_falls_back() {
    let (result, sink) = parse(LAS3_WITH_V2_LAYOUT);
    let document = result.unwrap().document;

    assert!(sink.events.contains(&ParseEvent::Version2LayoutFallback));
    assert_eq!(document.version, LasVersion::V3);
    assert_eq!(document.row_sets[0].section, None);
    assert_eq!(document.row_sets[0].rows, vec![vec!["1.0", "2.0"]]);
}

#[test]
fn test_unsupported_version_is_fatal() {
    let content = LAS2_UNWRAPPED.replace("VERS.                  2.0", "VERS.                  1.2");
    let (result, _sink) = parse(&content);
    assert!(matches!(result, Err(Error::UnsupportedVersion { .. })));

    let (result, _sink) = parse("~A\n1 2\n");
    assert!(matches!(result, Err(Error::UnsupportedVersion { .. })));
}

#[test]
fn test_malformed_lines_are_dropped_not_fatal() {
    let content = LAS2_UNWRAPPED.replace(
        " BS  .MM              200.0000:   BIT SIZE\n",
        " BS  .MM              200.0000:   BIT SIZE\n BROKEN LINE WITHOUT GRAMMAR\n",
    );
    let (result, sink) = parse(&content);
    let result = result.unwrap();

    assert_eq!(result.stats.malformed_lines, 1);
    assert!(sink.events.iter().any(|e| matches!(
        e,
        ParseEvent::MalformedLine { line, .. } if line == "BROKEN LINE WITHOUT GRAMMAR"
    )));
    assert_eq!(result.document.row_sets[0].row_count(), 3);
}

#[test]
fn test_parse_is_deterministic() {
    let (first, _) = parse(LAS3_MULTI_SECTION);
    let (second, _) = parse(LAS3_MULTI_SECTION);
    let first = first.unwrap().document;
    let second = second.unwrap().document;

    assert_eq!(first.row_sets, second.row_sets);
    assert_eq!(first.metadata, second.metadata);
}

#[test]
fn test_parse_file_reads_latin1() {
    let mut bytes = LAS2_UNWRAPPED.as_bytes().to_vec();
    let marker = b"ANY OIL COMPANY";
    let at = bytes
        .windows(marker.len())
        .position(|w| w == marker)
        .unwrap();
    bytes[at + 1] = 0xD1; // Latin-1 'Ñ'

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.las");
    std::fs::write(&path, bytes).unwrap();

    let result = LasParser::default()
        .parse_file(&path, &mut RecordingSink::new())
        .unwrap();
    assert_eq!(result.document.base_name(), "latin1");
    assert_eq!(result.document.row_sets[0].row_count(), 3);
}

#[test]
fn test_parse_missing_file() {
    let err = LasParser::default()
        .parse_file(Path::new("/nonexistent/well.las"), &mut RecordingSink::new())
        .unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_result_carries_indexed_sections() {
    let (result, _) = parse(LAS2_UNWRAPPED);
    let result = result.unwrap();

    assert_eq!(result.sections, index_sections(&cleaned(LAS2_UNWRAPPED)));
    assert_eq!(result.sections.first().map(|s| s.id.as_str()), Some("~V"));
    assert_eq!(result.sections.last().map(|s| s.id.as_str()), Some("~A"));
}

#[test]
fn test_declared_null_is_not_the_sentinel() {
    let content = "~V\n\
VERS. 2.0 : v\n\
~W\n\
NULL. -9999 : null value\n\
~CURVE\n\
DEPT.M : depth\n\
GR.GAPI : gamma\n\
~A\n\
100.0 -9999\n\
100.5 -999.25\n";
    let (result, _) = parse(content);
    let document = result.unwrap().document;

    assert_eq!(document.declared_null.as_deref(), Some("-9999"));
    assert_eq!(
        document.row_sets[0].rows,
        vec![vec!["100.0", "-9999"], vec!["100.5", "NaN"]]
    );
}

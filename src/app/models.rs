//! Data models for LAS processing
//!
//! This module contains the core data structures for representing a parsed
//! LAS file: its sections, header field records, assembled metadata and the
//! reconstructed curve data rows.

use crate::constants::{
    COMMENT_KEY, DATA_NAME_FRAGMENT, DATA_REFERENCE_SEPARATOR, INPUT_NAME_FRAGMENT,
    SECTION_MARKER,
};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// File-wide Scalars
// =============================================================================

/// Supported LAS major versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LasVersion {
    V2,
    V3,
}

impl LasVersion {
    /// Map a numeric `VERS` value onto a supported version
    pub fn from_value(value: f64) -> Option<Self> {
        if value == 2.0 {
            Some(Self::V2)
        } else if value == 3.0 {
            Some(Self::V3)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::V2 => 2.0,
            Self::V3 => 3.0,
        }
    }
}

impl fmt::Display for LasVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.as_f64())
    }
}

/// Column delimiter of the curve data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delimiter {
    #[default]
    Space,
    Comma,
    Tab,
}

impl Delimiter {
    /// Resolve a declared `DLM` value
    ///
    /// An empty value means the declaration was a literal space that the
    /// line parser trimmed away.
    pub fn from_declared(value: &str) -> Option<Self> {
        match value {
            "SPACE" | " " | "" => Some(Self::Space),
            "COMMA" => Some(Self::Comma),
            "TAB" => Some(Self::Tab),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Space => ' ',
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Space => "SPACE",
            Self::Comma => "COMMA",
            Self::Tab => "TAB",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Sections
// =============================================================================

/// A `~`-headed block of the cleaned file
///
/// `start` and `end` are inclusive indices into the cleaned line list. A
/// section without body lines has `end == start - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Two-character tag, `~` plus the first header character (e.g. `~V`)
    pub id: String,

    /// Header text without `~`, trimmed
    pub name: String,

    /// Index of the header line itself
    pub header_line: usize,

    /// First body line
    pub start: usize,

    /// Last body line
    pub end: usize,
}

/// The two halves of a v3 data section name such as `Log_Data | Log_Definition`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataReference {
    pub section: String,
    pub definition: String,
}

impl Section {
    /// Body lines of this section
    pub fn body<'a>(&self, lines: &'a [String]) -> &'a [String] {
        let stop = (self.end + 1).min(lines.len());
        if self.start >= stop {
            &[]
        } else {
            &lines[self.start..stop]
        }
    }

    pub fn line_count(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    /// Metadata label before canonicalization: `~` dropped, spaces as `_`
    pub fn raw_label(&self) -> String {
        self.name.replace(SECTION_MARKER, "").replace(' ', "_")
    }

    /// True for LAS 3.0 data sections that should be exported
    pub fn is_v3_data_section(&self) -> bool {
        let upper = self.name.to_uppercase();
        upper.contains(DATA_NAME_FRAGMENT) && !upper.contains(INPUT_NAME_FRAGMENT)
    }

    /// Split a v3 data section name on its `|` reference
    pub fn data_reference(&self) -> Option<DataReference> {
        let (section, definition) = self.name.split_once(DATA_REFERENCE_SEPARATOR)?;
        Some(DataReference {
            section: section.trim().to_string(),
            definition: definition.trim().to_string(),
        })
    }
}

// =============================================================================
// Header Records
// =============================================================================

/// One parsed `MNEM.UNIT VALUE : DESCRIPTION` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub mnemonic: String,

    /// May be empty
    #[serde(rename = "units")]
    pub unit: String,

    /// Raw value text
    pub value: String,

    pub description: String,
}

/// Insertion-ordered mnemonic → record mapping of one section
///
/// Re-inserting a mnemonic replaces the record but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<FieldRecord>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, record: FieldRecord) -> Option<FieldRecord> {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.mnemonic == record.mnemonic)
        {
            Some(existing) => Some(std::mem::replace(existing, record)),
            None => {
                self.entries.push(record);
                None
            }
        }
    }

    pub fn get(&self, mnemonic: &str) -> Option<&FieldRecord> {
        self.entries.iter().find(|r| r.mnemonic == mnemonic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRecord> {
        self.entries.iter()
    }

    /// Mnemonics in column order
    pub fn mnemonics(&self) -> Vec<String> {
        self.entries.iter().map(|r| r.mnemonic.clone()).collect()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for record in &self.entries {
            map.serialize_entry(&record.mnemonic, record)?;
        }
        map.end()
    }
}

/// Content stored under one metadata label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Fields(FieldMap),
    /// Free text of the OTHER section, lines joined with single spaces
    Comment(String),
}

impl Serialize for SectionContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fields(fields) => fields.serialize(serializer),
            Self::Comment(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(COMMENT_KEY, text)?;
                map.end()
            }
        }
    }
}

/// Ordered label → section content mapping for a whole file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    sections: Vec<(String, SectionContent)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `label`, replacing an existing entry in place
    pub fn insert(&mut self, label: impl Into<String>, content: SectionContent) {
        let label = label.into();
        match self.sections.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = content,
            None => self.sections.push((label, content)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&SectionContent> {
        self.sections
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, content)| content)
    }

    /// Field mapping under `label`, if that label holds fields
    pub fn fields(&self, label: &str) -> Option<&FieldMap> {
        match self.get(label)? {
            SectionContent::Fields(fields) => Some(fields),
            SectionContent::Comment(_) => None,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionContent)> {
        self.sections.iter().map(|(l, c)| (l.as_str(), c))
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (label, content) in &self.sections {
            map.serialize_entry(label, content)?;
        }
        map.end()
    }
}

// =============================================================================
// Curve Data
// =============================================================================

/// Reconstructed rows of one data section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    /// Section name used for the output file suffix; `None` for LAS 2.0
    pub section: Option<String>,

    /// Curve mnemonics in column order
    pub curves: Vec<String>,

    /// One token list per logical record
    pub rows: Vec<Vec<String>>,
}

impl RowSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Everything parsed out of one LAS file
#[derive(Debug, Clone)]
pub struct WellLogDocument {
    pub source: PathBuf,
    pub version: LasVersion,
    pub wrap: bool,
    pub delimiter: Delimiter,

    /// `NULL` as declared in the header; informational only
    pub declared_null: Option<String>,

    pub metadata: Metadata,
    pub row_sets: Vec<RowSet>,
}

impl WellLogDocument {
    /// Source file name without extension
    pub fn base_name(&self) -> String {
        base_name(&self.source)
    }

    /// Source file name with extension
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn total_rows(&self) -> usize {
        self.row_sets.iter().map(RowSet::row_count).sum()
    }
}

/// File stem of `path`, or an empty string
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

//! CSV and JSON artifact writer
//!
//! Data files are plain comma-joined text: a header row of curve mnemonics,
//! then one line per record. Tokens are written as-is, without quoting, and
//! rows keep whatever length the extractor produced.

use super::layout::OutputLayout;
use crate::app::models::{Metadata, RowSet, WellLogDocument};
use crate::config::Config;
use crate::constants::{DATA_FILES_KEY, DEFAULT_OUTPUT_DIR_NAME, SOURCE_FILE_KEY};
use crate::{Error, Result};

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Summary of what was written for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenArtifacts {
    /// Directory that holds all artifacts of the document
    pub directory: PathBuf,
    /// Data files in row-set order
    pub data_files: Vec<PathBuf>,
    pub metadata_file: PathBuf,
    /// Data rows written, headers excluded
    pub rows_written: usize,
    /// Size on disk of all artifacts
    pub bytes_written: u64,
}

impl WrittenArtifacts {
    pub fn artifact_count(&self) -> usize {
        self.data_files.len() + 1
    }
}

/// `Data files` entry: a single path for LAS 2.0 layouts, a list for v3
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DataFiles {
    Single(String),
    Multiple(Vec<String>),
}

/// The JSON metadata document: section labels, then source and data files
struct MetadataDocument<'a> {
    metadata: &'a Metadata,
    source_file: String,
    data_files: DataFiles,
}

impl Serialize for MetadataDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.metadata.len() + 2))?;
        for (label, content) in self.metadata.iter() {
            map.serialize_entry(label, content)?;
        }
        map.serialize_entry(SOURCE_FILE_KEY, &self.source_file)?;
        map.serialize_entry(DATA_FILES_KEY, &self.data_files)?;
        map.end()
    }
}

/// Writes the artifacts of parsed documents next to their source files
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir_name: String,
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR_NAME)
    }
}

impl OutputWriter {
    pub fn new(output_dir_name: impl Into<String>) -> Self {
        Self {
            output_dir_name: output_dir_name.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.output_dir_name.clone())
    }

    pub fn output_dir_name(&self) -> &str {
        &self.output_dir_name
    }

    /// Output locations for `document`, without touching the filesystem
    pub fn layout(&self, document: &WellLogDocument) -> OutputLayout {
        OutputLayout::for_source(&document.source, &self.output_dir_name)
    }

    /// Write every row-set and the metadata document
    ///
    /// Existing artifacts are overwritten. Identical documents produce
    /// byte-identical files.
    pub fn write(&self, document: &WellLogDocument) -> Result<WrittenArtifacts> {
        let layout = self.layout(document);
        let directory = layout.document_dir();

        std::fs::create_dir_all(&directory).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", directory.display()),
                e,
            )
        })?;
        debug!("Writing artifacts to {}", directory.display());

        let mut artifacts = WrittenArtifacts {
            directory,
            ..Default::default()
        };
        let mut references = Vec::with_capacity(document.row_sets.len());

        for row_set in &document.row_sets {
            let section = row_set.section.as_deref();
            let path = layout.data_file_path(section);
            write_row_set(&path, row_set)?;

            artifacts.rows_written += row_set.row_count();
            artifacts.bytes_written += file_size(&path);
            references.push(layout.relative_reference(&layout.data_file_name(section)));
            artifacts.data_files.push(path);
        }

        let data_files = if document.row_sets.iter().all(|r| r.section.is_none()) {
            DataFiles::Single(references.into_iter().next().unwrap_or_default())
        } else {
            DataFiles::Multiple(references)
        };

        let metadata_file = layout.metadata_file_path();
        write_metadata(
            &metadata_file,
            &MetadataDocument {
                metadata: &document.metadata,
                source_file: document.file_name(),
                data_files,
            },
        )?;
        artifacts.bytes_written += file_size(&metadata_file);
        artifacts.metadata_file = metadata_file;

        info!(
            "Wrote {} rows to {} data file(s) for {}",
            artifacts.rows_written,
            artifacts.data_files.len(),
            document.file_name()
        );

        Ok(artifacts)
    }
}

/// Write one row-set as comma-joined text
pub fn write_row_set(path: &Path, row_set: &RowSet) -> Result<()> {
    let file_label = path.display().to_string();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create data file {}", file_label), e))?;
    let mut out = BufWriter::new(file);

    let records: Vec<&[String]> = std::iter::once(row_set.curves.as_slice())
        .chain(row_set.rows.iter().map(Vec::as_slice))
        .collect();

    // csv writes a record without any bytes as `""`; those become empty lines
    for (index, run) in records.split(|record| is_blank_record(record)).enumerate() {
        if index > 0 {
            out.write_all(b"\n")
                .map_err(|e| Error::io(format!("Failed to write {}", file_label), e))?;
        }
        write_records(&mut out, run, &file_label)?;
    }

    out.flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", file_label), e))?;
    Ok(())
}

fn write_records<W: Write>(out: W, records: &[&[String]], file_label: &str) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(out);

    for record in records {
        writer
            .write_record(*record)
            .map_err(|e| Error::csv_writing(file_label, "Failed to write record", Some(e)))?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", file_label), e))?;
    Ok(())
}

fn is_blank_record(record: &[String]) -> bool {
    record.len() <= 1 && record.iter().all(String::is_empty)
}

fn write_metadata(path: &Path, document: &MetadataDocument<'_>) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| {
        Error::json(
            format!("Failed to serialize metadata to {}", path.display()),
            e,
        )
    })?;

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;
    Ok(())
}

fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

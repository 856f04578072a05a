//! Artifact naming and directory layout
//!
//! Every artifact of a source file `<dir>/<base>.las` lands in
//! `<dir>/<output_dir_name>/<base>/`. Paths recorded inside the metadata
//! document are relative to `<dir>/<output_dir_name>/` and always use `/`.

use crate::app::models::base_name;
use crate::constants::{CSV_EXTENSION, JSON_EXTENSION};
use std::path::{Path, PathBuf};

/// Resolved output locations for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    base: String,
}

impl OutputLayout {
    pub fn for_source(source: &Path, output_dir_name: &str) -> Self {
        let source_dir = source.parent().unwrap_or_else(|| Path::new(""));
        Self {
            root: source_dir.join(output_dir_name),
            base: base_name(source),
        }
    }

    /// Output root shared by every file of the same source directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Directory holding this file's artifacts
    pub fn document_dir(&self) -> PathBuf {
        self.root.join(&self.base)
    }

    /// `<base>.csv` for LAS 2.0, `<base>_<section>.csv` for a v3 section
    pub fn data_file_name(&self, section: Option<&str>) -> String {
        match section {
            Some(section) => format!(
                "{}_{}.{}",
                self.base,
                section.replace(' ', "_"),
                CSV_EXTENSION
            ),
            None => format!("{}.{}", self.base, CSV_EXTENSION),
        }
    }

    pub fn data_file_path(&self, section: Option<&str>) -> PathBuf {
        self.document_dir().join(self.data_file_name(section))
    }

    pub fn metadata_file_path(&self) -> PathBuf {
        self.document_dir()
            .join(format!("{}.{}", self.base, JSON_EXTENSION))
    }

    /// Reference to `file_name` as recorded under `Data files`
    pub fn relative_reference(&self, file_name: &str) -> String {
        format!("{}/{}", self.base, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_next_to_source() {
        let layout = OutputLayout::for_source(Path::new("/data/wells/A-1.las"), "outputDir");

        assert_eq!(layout.root(), Path::new("/data/wells/outputDir"));
        assert_eq!(layout.document_dir(), Path::new("/data/wells/outputDir/A-1"));
        assert_eq!(
            layout.metadata_file_path(),
            Path::new("/data/wells/outputDir/A-1/A-1.json")
        );
    }

    #[test]
    fn test_data_file_names() {
        let layout = OutputLayout::for_source(Path::new("well.las"), "out");

        assert_eq!(layout.data_file_name(None), "well.csv");
        assert_eq!(layout.data_file_name(Some("Log Data")), "well_Log_Data.csv");
        assert_eq!(layout.relative_reference("well.csv"), "well/well.csv");
        assert_eq!(
            layout.data_file_path(Some("Core_Data")),
            Path::new("out/well/well_Core_Data.csv")
        );
    }
}

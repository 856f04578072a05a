//! Artifact writer for parsed LAS documents
//!
//! Each parsed file yields one comma-joined data file per row-set and one
//! JSON metadata document, all placed under
//! `<source dir>/<output dir name>/<base name>/`.
//!
//! - [`layout`] - Directory and file naming
//! - [`writer`] - CSV and JSON serialization
//!
//! # Usage
//!
//! ```rust,no_run
//! use las_processor::app::services::las_parser::{LasParser, TracingSink};
//! use las_processor::app::services::output_writer::OutputWriter;
//! use std::path::Path;
//!
//! # fn example() -> las_processor::Result<()> {
//! let path = Path::new("wells/A-1.las");
//! let result = LasParser::default().parse_file(path, &mut TracingSink::new("A-1.las"))?;
//!
//! let artifacts = OutputWriter::default().write(&result.document)?;
//! println!("Metadata written to {}", artifacts.metadata_file.display());
//! # Ok(())
//! # }
//! ```

pub mod layout;
pub mod writer;


pub use layout::OutputLayout;
pub use writer::{DataFiles, OutputWriter, WrittenArtifacts, write_row_set};

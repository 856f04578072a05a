//! Configuration management and validation.
//!
//! Holds the settings shared by the parser, the writer and the batch
//! driver. Values come from defaults, then an optional JSON file, then
//! command-line overrides.

use crate::constants::{
    DEFAULT_LAS_EXTENSIONS, DEFAULT_MISSING_VALUE_MARKER, DEFAULT_OUTPUT_DIR_NAME, DEFAULT_WORKERS,
    MAX_WORKERS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Global configuration for LAS processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory created next to each source file for its artifacts
    pub output_dir_name: String,

    /// Text written in place of null samples
    pub missing_value_marker: String,

    /// Files converted concurrently; 0 uses every available core
    pub workers: usize,

    /// Extensions accepted when walking directories
    pub extensions: Vec<String>,

    /// Descend into subdirectories of directory inputs
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir_name: DEFAULT_OUTPUT_DIR_NAME.to_string(),
            missing_value_marker: DEFAULT_MISSING_VALUE_MARKER.to_string(),
            workers: DEFAULT_WORKERS,
            extensions: DEFAULT_LAS_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            recursive: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON configuration file; missing keys take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::json(format!("Invalid config file {}", path.display()), e))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn with_output_dir_name(mut self, name: impl Into<String>) -> Self {
        self.output_dir_name = name.into();
        self
    }

    pub fn with_missing_value_marker(mut self, marker: impl Into<String>) -> Self {
        self.missing_value_marker = marker.into();
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Worker count with `0` resolved to the number of cores
    pub fn effective_workers(&self) -> usize {
        match self.workers {
            0 => num_cpus::get().clamp(1, MAX_WORKERS),
            n => n,
        }
    }

    /// True when `path` carries one of the accepted extensions
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|accepted| accepted == ext))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output_dir_name.trim().is_empty() {
            return Err(Error::configuration("Output directory name cannot be empty"));
        }

        if self.output_dir_name.contains(['/', '\\']) {
            return Err(Error::configuration(format!(
                "Output directory name must be a single path component, got '{}'",
                self.output_dir_name
            )));
        }

        if self.missing_value_marker.contains(',') {
            return Err(Error::configuration(format!(
                "Missing value marker cannot contain a comma, got '{}'",
                self.missing_value_marker
            )));
        }

        if self.workers > MAX_WORKERS {
            return Err(Error::configuration(format!(
                "Worker count must be at most {}, got {}",
                MAX_WORKERS, self.workers
            )));
        }

        if self.extensions.is_empty() {
            return Err(Error::configuration(
                "At least one file extension must be accepted",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_dir_name, "outputDir");
        assert_eq!(config.missing_value_marker, "NaN");
        assert_eq!(config.workers, 1);
        assert!(config.recursive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::new()
            .with_output_dir_name("exports")
            .with_missing_value_marker("")
            .with_workers(4)
            .with_recursive(false);

        assert_eq!(config.output_dir_name, "exports");
        assert_eq!(config.missing_value_marker, "");
        assert_eq!(config.effective_workers(), 4);
        assert!(!config.recursive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        assert!(Config::new().with_output_dir_name("").validate().is_err());
        assert!(Config::new().with_output_dir_name("a/b").validate().is_err());
        assert!(Config::new().with_missing_value_marker("n,a").validate().is_err());
        assert!(Config::new().with_workers(MAX_WORKERS + 1).validate().is_err());
        assert!(Config::new().with_extensions(vec![]).validate().is_err());
    }

    #[test]
    fn test_zero_workers_uses_cores() {
        let config = Config::new().with_workers(0);
        assert!(config.effective_workers() >= 1);
    }

    #[test]
    fn test_accepts_extension() {
        let config = Config::default();
        assert!(config.accepts_extension(Path::new("a/well.las")));
        assert!(config.accepts_extension(Path::new("WELL.LAS")));
        assert!(!config.accepts_extension(Path::new("well.Las")));
        assert!(!config.accepts_extension(Path::new("well")));
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "output_dir_name": "converted", "workers": 2 }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.output_dir_name, "converted");
        assert_eq!(config.workers, 2);
        assert_eq!(config.missing_value_marker, "NaN");
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(Error::Json { .. })
        ));
        assert!(matches!(
            Config::load_from_file(&temp_dir.path().join("missing.json")),
            Err(Error::FileNotFound { .. })
        ));
    }
}

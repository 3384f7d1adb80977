//! Report persistence.
//!
//! Persistence is the one pipeline stage whose failures propagate instead
//! of degrading to fallback values: a report that cannot be written is a
//! failed run.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::MarketReport;

/// Errors while writing the report file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Directory creation or file write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes finished reports as pretty-printed UTF-8 JSON.
///
/// Non-ASCII text is written literally, not escaped, so the summary stays
/// readable in the file.
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    /// Store writing to `path`. Missing parent directories are created on
    /// save, not here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize and write the report, overwriting any previous file.
    pub fn save(&self, report: &MarketReport) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

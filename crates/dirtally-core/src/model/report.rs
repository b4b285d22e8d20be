//! Serializable report records.
//!
//! Field declaration order is the JSON key order, and the key names are the
//! persisted-state contract — readers of `file_report.json` depend on this
//! exact shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate statistics for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStatsSummary {
    /// Number of readable regular files under the root.
    pub total_files: u64,
    /// Sum of their sizes in bytes.
    pub total_size_bytes: u64,
    /// `total_size_bytes` in megabytes, rounded to two decimals.
    pub total_size_mb: f64,
    /// File count per extension key (lower-cased, leading dot, `""` when a
    /// file has no extension).
    pub extensions_count: BTreeMap<String, u64>,
}

impl FileStatsSummary {
    /// The summary for a directory with no readable files.
    pub fn empty() -> Self {
        Self {
            total_files: 0,
            total_size_bytes: 0,
            total_size_mb: 0.0,
            extensions_count: BTreeMap::new(),
        }
    }
}

/// One file at or above the large-file threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargeFileEntry {
    /// Full path as encountered during traversal.
    pub path: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// `size_bytes` in megabytes, same rounding as the summary.
    pub size_mb: f64,
}

/// The single JSON artifact summarizing one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The analyzed root, exactly as given at construction.
    pub directory: String,
    pub statistics: FileStatsSummary,
    /// Extension key → full paths of the files carrying it.
    pub files_by_extension: BTreeMap<String, Vec<String>>,
    /// Top entries by `size_bytes` descending, capped at ten.
    pub large_files: Vec<LargeFileEntry>,
}

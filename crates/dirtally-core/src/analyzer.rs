//! The [`DirectoryAnalyzer`] facade — root validation, the public analysis
//! operations, and report assembly.
//!
//! Each operation re-walks the tree independently; there is no shared cache
//! between scans. That trades throughput for simplicity, which is the right
//! trade at the scale this tool targets.

use crate::analysis;
use crate::error::AnalyzerError;
use crate::model::{FileStatsSummary, LargeFileEntry, Report};
use crate::scanner;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Threshold used by [`DirectoryAnalyzer::generate_report`] for the
/// report's large-file section, in megabytes.
pub const DEFAULT_MIN_SIZE_MB: f64 = 10.0;

/// File name [`DirectoryAnalyzer::generate_report`] writes when the caller
/// has no preference.
pub const DEFAULT_REPORT_FILE_NAME: &str = "file_report.json";

/// Maximum number of entries the report's `large_files` section carries.
pub const LARGE_FILES_REPORT_CAP: usize = 10;

/// Analyzes one directory tree: classification by extension, aggregate
/// statistics, and large-file discovery, persisted together as a JSON
/// report.
///
/// The root is validated once at construction and stored exactly as given,
/// so the report's `directory` field round-trips the caller's input. A root
/// that disappears afterwards is not an error — scans simply see zero files.
#[derive(Debug)]
pub struct DirectoryAnalyzer {
    root: PathBuf,
}

impl DirectoryAnalyzer {
    /// Validate `directory` and build an analyzer rooted there.
    ///
    /// Fails with [`AnalyzerError::InvalidRoot`] when the path does not
    /// exist or exists but is not a directory. No other filesystem access
    /// happens here.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, AnalyzerError> {
        let root = directory.into();

        if !root.exists() {
            return Err(AnalyzerError::InvalidRoot {
                message: format!("{} does not exist", root.display()),
            });
        }
        if !root.is_dir() {
            return Err(AnalyzerError::InvalidRoot {
                message: format!("{} is not a directory", root.display()),
            });
        }

        Ok(Self { root })
    }

    /// The validated root, as given at construction.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Group every readable file under the root by extension key, full
    /// paths in encounter order.
    ///
    /// With a `filter`, only files whose key is a member are retained;
    /// `None` retains everything. Never fails — unreadable entries are
    /// skipped during traversal.
    pub fn classify_by_extension(
        &self,
        filter: Option<&HashSet<String>>,
    ) -> BTreeMap<String, Vec<PathBuf>> {
        analysis::classify_by_extension(scanner::walk_files(&self.root), filter)
    }

    /// Walk the tree once and accumulate totals and per-extension counts.
    pub fn compute_stats(&self) -> FileStatsSummary {
        analysis::compute_stats(scanner::walk_files(&self.root))
    }

    /// Every file at or above `min_size_mb`, largest first. Untruncated;
    /// empty when nothing qualifies.
    pub fn find_large_files(&self, min_size_mb: f64) -> Vec<LargeFileEntry> {
        analysis::find_large_files(scanner::walk_files(&self.root), min_size_mb)
    }

    /// Run all three scans, assemble the [`Report`], and write it as
    /// pretty-printed UTF-8 JSON to `<root>/<output_file_name>`, overwriting
    /// any existing file there.
    ///
    /// Returns the absolute path of the written report. This is the only
    /// operation that propagates an I/O failure, as
    /// [`AnalyzerError::ReportWrite`].
    pub fn generate_report(&self, output_file_name: &str) -> Result<PathBuf, AnalyzerError> {
        let statistics = self.compute_stats();
        let files_by_extension = self
            .classify_by_extension(None)
            .into_iter()
            .map(|(key, paths)| {
                let paths = paths
                    .into_iter()
                    .map(|p| p.display().to_string())
                    .collect();
                (key, paths)
            })
            .collect();
        let mut large_files = self.find_large_files(DEFAULT_MIN_SIZE_MB);
        large_files.truncate(LARGE_FILES_REPORT_CAP);

        debug!(
            files = statistics.total_files,
            bytes = statistics.total_size_bytes,
            "report assembled"
        );

        let report = Report {
            directory: self.root.display().to_string(),
            statistics,
            files_by_extension,
            large_files,
        };

        let output_path = self.root.join(output_file_name);
        let write_err = |source| AnalyzerError::ReportWrite {
            path: output_path.clone(),
            source,
        };

        // serde_json::to_string_pretty gives the contract shape directly:
        // two-space indentation, non-ASCII rendered literally.
        let json = serde_json::to_string_pretty(&report).map_err(|e| write_err(e.into()))?;
        fs::write(&output_path, json).map_err(write_err)?;

        let absolute = std::path::absolute(&output_path).map_err(write_err)?;
        info!(path = %absolute.display(), "report written");
        Ok(absolute)
    }
}

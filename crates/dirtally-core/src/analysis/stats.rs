//! One-pass aggregate statistics.

use crate::analysis::classify::extension_key;
use crate::model::{bytes_to_mb, FileStatsSummary};
use crate::scanner::FileMeta;

/// Accumulate totals and per-extension counts over one traversal.
///
/// An empty stream yields the all-zero summary with an empty (not absent)
/// extension map.
pub fn compute_stats<I>(files: I) -> FileStatsSummary
where
    I: IntoIterator<Item = FileMeta>,
{
    let mut summary = FileStatsSummary::empty();

    for file in files {
        summary.total_files += 1;
        summary.total_size_bytes += file.size;
        *summary
            .extensions_count
            .entry(extension_key(&file.path))
            .or_insert(0) += 1;
    }

    summary.total_size_mb = bytes_to_mb(summary.total_size_bytes);
    summary
}

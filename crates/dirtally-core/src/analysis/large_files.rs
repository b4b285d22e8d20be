//! Large-file discovery — threshold filter plus a stable descending rank.

use crate::model::{bytes_to_mb, size::BYTES_PER_MB, LargeFileEntry};
use crate::scanner::FileMeta;

/// Collect every file whose size is at or above `min_size_mb`, sorted by
/// `size_bytes` descending.
///
/// The threshold comparison is inclusive and in f64, so `min_size_mb = 0.0`
/// matches every file. The sort is stable: equal sizes keep traversal
/// encounter order. The result is untruncated — capping to the report's
/// top ten is the caller's concern.
pub fn find_large_files<I>(files: I, min_size_mb: f64) -> Vec<LargeFileEntry>
where
    I: IntoIterator<Item = FileMeta>,
{
    let threshold_bytes = min_size_mb * BYTES_PER_MB;

    let mut entries: Vec<LargeFileEntry> = files
        .into_iter()
        .filter(|file| file.size as f64 >= threshold_bytes)
        .map(|file| LargeFileEntry {
            path: file.path.display().to_string(),
            size_bytes: file.size,
            size_mb: bytes_to_mb(file.size),
        })
        .collect();

    // Vec::sort_by is stable, which the tie-break contract relies on.
    entries.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
    entries
}

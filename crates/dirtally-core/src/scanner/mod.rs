//! Scanner module — the single sequential traversal primitive.
//!
//! Every analysis operation consumes the same walker, so the set of files
//! they see is identical: a file counts if and only if it is a regular file
//! whose metadata could be read. Unreadable entries (permission denied,
//! vanished mid-walk, broken symlink targets) are skipped, never fatal.
//! Symlinks are not followed, so the walk cannot loop.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A regular file whose metadata was successfully read during traversal.
#[derive(Debug, Clone)]
pub struct FileMeta {
    /// Full path as encountered (rooted at the analysis root).
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
}

/// Walk the tree under `root` depth-first, yielding every readable regular
/// file in encounter order.
///
/// Per-entry errors are logged at debug level and skipped; the iterator
/// itself never fails. A `root` that does not exist (e.g. removed after the
/// analyzer was constructed) yields nothing.
pub fn walk_files(root: &Path) -> impl Iterator<Item = FileMeta> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("skipping unreadable entry: {err}");
                    return None;
                }
            };
            if !entry.file_type().is_file() {
                return None;
            }
            match entry.metadata() {
                Ok(meta) => Some(FileMeta {
                    path: entry.into_path(),
                    size: meta.len(),
                }),
                Err(err) => {
                    debug!(
                        path = %entry.path().display(),
                        "skipping file with unreadable metadata: {err}"
                    );
                    None
                }
            }
        })
}

//! Grouping of files by extension key.

use crate::scanner::FileMeta;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Derive the extension key for a path: the lower-cased extension including
/// its leading dot, or the empty string when the file has no extension.
///
/// Follows `Path::extension` semantics, so dotfiles like `.bashrc` have no
/// extension and key as `""`.
pub fn extension_key(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}

/// Group file paths by extension key, in encounter order within each key.
///
/// When `filter` is given, only files whose key is a member are retained;
/// filtered-out keys do not appear in the result at all (no empty vectors).
pub fn classify_by_extension<I>(
    files: I,
    filter: Option<&HashSet<String>>,
) -> BTreeMap<String, Vec<PathBuf>>
where
    I: IntoIterator<Item = FileMeta>,
{
    let mut by_ext: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

    for file in files {
        let key = extension_key(&file.path);
        if let Some(allowed) = filter {
            if !allowed.contains(&key) {
                continue;
            }
        }
        by_ext.entry(key).or_default().push(file.path);
    }

    by_ext
}

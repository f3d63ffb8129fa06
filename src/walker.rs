//! Directory traversal with pruned subtrees.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lazily yield files under `root` whose base name satisfies `predicate`,
/// never descending into directories whose name is in `exclude_dirs`.
///
/// Pruning happens before descent, so an excluded subtree is never visited
/// even when matching files exist deeper inside it. The root itself is never
/// pruned. Unreadable entries are skipped; file-level read errors surface
/// later when the file is actually scanned.
pub fn files_matching<'a>(
    root: &Path,
    exclude_dirs: &'a HashSet<String>,
    predicate: impl Fn(&str) -> bool + 'a,
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(move |entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !exclude_dirs.contains(name))
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(move |path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| predicate(name))
        })
}

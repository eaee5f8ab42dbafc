//! Path normalization and content discovery.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

/// Extensions treated as markdown posts.
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, falls back to joining with the current
/// directory for paths that do not exist yet.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a user-supplied path: absolute as-is, cwd-relative if it exists,
/// otherwise relative to `fallback_dir`.
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if path.exists() {
        return normalize_path(path);
    }
    normalize_path(&fallback_dir.join(path))
}

/// Expand a leading `~` in a CLI-supplied path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Whether `path` has a markdown extension.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|m| ext.eq_ignore_ascii_case(m))
        })
}

/// Collect markdown files under `dir`, skipping hidden entries.
///
/// Sorted for deterministic output.
pub fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_markdown(p))
        .collect();
    files.sort();
    files
}

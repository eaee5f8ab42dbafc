//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::utils::path::{collect_markdown_files, is_markdown, resolve_path};

/// Collect markdown files based on CLI paths.
///
/// No paths means the whole content directory; a single `-` reads paths
/// from stdin. Result is sorted and deduplicated.
pub fn collect_content_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin(io::stdin().lock())?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        return Ok(collect_markdown_files(content_dir));
    }

    let mut all_files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if !is_markdown(&resolved) {
                bail!("Not a markdown file: {}", path.display());
            }
            all_files.push(resolved);
        } else if resolved.is_dir() {
            all_files.extend(collect_markdown_files(&resolved));
        } else {
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_dir.join(path).display()
            );
        }
    }

    all_files.sort();
    all_files.dedup();
    Ok(all_files)
}

/// Read file paths, one per line, skipping blank lines.
pub fn read_paths_from_stdin(reader: impl BufRead) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("posts")).unwrap();
        fs::write(root.join("index.md"), "# Home").unwrap();
        fs::write(root.join("posts/a.md"), "# A").unwrap();
        fs::write(root.join("posts/b.md"), "# B").unwrap();
        fs::write(root.join("posts/cover.png"), "").unwrap();
        dir
    }

    #[test]
    fn test_collect_all_when_no_paths() {
        let dir = setup();
        let files = collect_content_files(&[], dir.path()).unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_collect_relative_to_content_dir() {
        let dir = setup();
        let files = collect_content_files(
            &[PathBuf::from("posts"), PathBuf::from("posts/a.md")],
            dir.path(),
        )
        .unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.md", "b.md"]);
    }

    #[test]
    fn test_collect_rejects_non_markdown() {
        let dir = setup();
        let err = collect_content_files(&[PathBuf::from("posts/cover.png")], dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("Not a markdown file"));
    }

    #[test]
    fn test_collect_missing_path() {
        let dir = setup();
        let err =
            collect_content_files(&[PathBuf::from("nope.md")], dir.path()).unwrap_err();
        assert!(err.to_string().contains("Path not found"));
    }

    #[test]
    fn test_read_paths() {
        let input = "posts/a.md\n\n  posts/b.md  \n";
        let paths = read_paths_from_stdin(input.as_bytes()).unwrap();
        assert_eq!(paths, [PathBuf::from("posts/a.md"), PathBuf::from("posts/b.md")]);
    }
}

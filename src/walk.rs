//! Markdown file discovery.
//!
//! Expands a mix of file and directory paths into the sorted list of `*.md`
//! files to process, then drops anything whose POSIX-style path matches the
//! exclusion pattern.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::debug;
use regex::Regex;

use crate::error::Result;

/// Collect the Markdown files named by `paths`.
///
/// Files are taken as-is; directories are walked recursively for `*.md`
/// entries in sorted path order. The exclusion regex is applied to every
/// collected path (explicit files included), matched against the
/// forward-slash form of the path.
pub fn collect_markdown_files(paths: &[PathBuf], exclude: &Regex) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let walker = WalkBuilder::new(path)
                .standard_filters(false)
                .follow_links(false)
                .sort_by_file_path(|a, b| a.cmp(b))
                .build();

            for entry in walker {
                let entry = entry?;
                if entry.file_type().is_some_and(|t| t.is_file())
                    && entry.path().extension().is_some_and(|ext| ext == "md")
                {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    let kept: Vec<PathBuf> = files
        .into_iter()
        .filter(|path| {
            let keep = !exclude.is_match(&posix_path(path));
            if !keep {
                debug!("excluded: {}", path.display());
            }
            keep
        })
        .collect();

    Ok(kept)
}

/// Forward-slash rendition of a path, so exclusion patterns behave the same
/// on Windows and Unix.
fn posix_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

mod filter;

pub use filter::{FileFilter, LintFilter};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// Marker file that opts a directory (and everything below it) out of linting.
pub const NOLINT_FILE: &str = ".nolint";

/// Trait for expanding an input path into candidate files.
pub trait FileScanner {
    /// Scan a path and return all matching file paths in a stable order.
    ///
    /// # Errors
    /// Returns an error if the path cannot be scanned.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    recursive: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F, recursive: bool) -> Self {
        Self { filter, recursive }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        if root.is_file() {
            return if self.filter.should_include(root) {
                vec![root.to_path_buf()]
            } else {
                debug!(path = %root.display(), "skipping file of unknown category");
                Vec::new()
            };
        }
        if !root.is_dir() {
            warn!(path = %root.display(), "path does not exist or is not accessible");
            return Vec::new();
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .max_depth(if self.recursive { usize::MAX } else { 1 });

        walker
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    if entry.file_name() == ".git" {
        return true;
    }
    let nolint = entry.path().join(NOLINT_FILE).is_file();
    if nolint {
        debug!(path = %entry.path().display(), "directory opted out with .nolint");
    }
    nolint
}

/// Scan every input path in order and concatenate the results.
///
/// # Errors
/// Returns an error if any path cannot be scanned.
pub fn collect_files<S: FileScanner>(scanner: &S, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(scanner.scan(path)?);
    }
    Ok(files)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

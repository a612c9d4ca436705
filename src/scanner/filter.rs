use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::category::FileCategory;
use crate::error::{FlintError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps C-family files that match none of the exclude globs.
pub struct LintFilter {
    exclude_patterns: GlobSet,
}

impl LintFilter {
    /// Create a new filter with the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| FlintError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder.build().map_err(|e| FlintError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self { exclude_patterns })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for LintFilter {
    fn should_include(&self, path: &Path) -> bool {
        FileCategory::of(path).is_known() && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

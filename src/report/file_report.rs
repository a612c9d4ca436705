use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::output::RenderOptions;

use super::{Finding, Severity, SeverityCounts};

/// Findings for a single file, in the order they were reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    path: PathBuf,
    findings: Vec<Finding>,
    counts: SeverityCounts,
}

impl FileReport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            findings: Vec::new(),
            counts: SeverityCounts::default(),
        }
    }

    /// Append a finding. No deduplication and no line validation.
    pub fn add(&mut self, finding: Finding) {
        self.counts.record(finding.severity());
        self.findings.push(finding);
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings shown under `threshold`, in insertion order.
    pub fn visible(&self, threshold: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |f| threshold.permits(f.severity()))
    }

    #[must_use]
    pub const fn counts(&self) -> &SeverityCounts {
        &self.counts
    }

    #[must_use]
    pub const fn errors(&self) -> usize {
        self.counts.errors
    }

    #[must_use]
    pub const fn warnings(&self) -> usize {
        self.counts.warnings
    }

    #[must_use]
    pub const fn advice(&self) -> usize {
        self.counts.advice
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.counts.total()
    }

    /// Write this file's report to `out`.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn render<W: Write>(&self, out: &mut W, options: &RenderOptions) -> Result<()> {
        options.formatter().write_file(self, out)
    }
}

#[cfg(test)]
#[path = "file_report_tests.rs"]
mod tests;

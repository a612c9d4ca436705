use std::io::Write;

use crate::error::Result;
use crate::output::RenderOptions;

use super::{FileReport, SeverityCounts};

/// Every file report of one invocation, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    files: Vec<FileReport>,
    counts: SeverityCounts,
}

impl RunReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: FileReport) {
        self.counts.merge(file.counts());
        self.files.push(file);
    }

    #[must_use]
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
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

    /// Write the whole report to `out`.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn render<W: Write>(&self, out: &mut W, options: &RenderOptions) -> Result<()> {
        options.formatter().write_run(self, out)
    }

    /// Render the whole report into a string.
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    pub fn render_to_string(&self, options: &RenderOptions) -> Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf, options)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl FromIterator<FileReport> for RunReport {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        let mut report = Self::new();
        for file in iter {
            report.add(file);
        }
        report
    }
}

#[cfg(test)]
#[path = "run_report_tests.rs"]
mod tests;

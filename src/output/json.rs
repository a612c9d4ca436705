use std::borrow::Cow;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::report::{FileReport, Finding, RunReport, Severity};

use super::OutputFormatter;

/// Structured report. Counts are always the true totals; only the `reports`
/// arrays are filtered by the threshold.
pub struct JsonFormatter {
    threshold: Severity,
}

#[derive(Serialize)]
struct JsonRun<'a> {
    errors: usize,
    warnings: usize,
    advice: usize,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: Cow<'a, str>,
    errors: usize,
    warnings: usize,
    advice: usize,
    reports: Vec<JsonFinding<'a>>,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    level: &'static str,
    line: usize,
    title: &'a str,
    desc: &'a str,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    fn convert_file<'a>(&self, report: &'a FileReport) -> JsonFile<'a> {
        JsonFile {
            // Non-UTF-8 paths degrade to U+FFFD rather than failing the render.
            path: report.path().to_string_lossy(),
            errors: report.errors(),
            warnings: report.warnings(),
            advice: report.advice(),
            reports: report.visible(self.threshold).map(convert_finding).collect(),
        }
    }
}

fn convert_finding(finding: &Finding) -> JsonFinding<'_> {
    JsonFinding {
        level: finding.severity().name(),
        line: finding.line(),
        title: finding.title(),
        desc: finding.description(),
    }
}

impl OutputFormatter for JsonFormatter {
    fn write_file(&self, report: &FileReport, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.convert_file(report))?;
        writeln!(out)?;
        Ok(())
    }

    fn write_run(&self, report: &RunReport, out: &mut dyn Write) -> Result<()> {
        let output = JsonRun {
            errors: report.errors(),
            warnings: report.warnings(),
            advice: report.advice(),
            files: report
                .files()
                .iter()
                .map(|f| self.convert_file(f))
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

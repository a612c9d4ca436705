//! The lint pipeline: read, suppress, check, aggregate.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::ignored::suppress_ignored;
use crate::output::LintProgress;
use crate::report::{FileReport, RunReport};
use crate::rules::{RuleSet, SourceFile};

/// Settings shared by every file of a run.
#[derive(Debug)]
pub struct LintOptions {
    pub rules: RuleSet,
    /// Report paths as given instead of the bare file name.
    pub full_paths: bool,
    pub quiet: bool,
}

/// Result of [`lint_files`].
#[derive(Debug, Default)]
pub struct LintOutcome {
    pub report: RunReport,
    /// Estimated lines of code across every linted file.
    pub lines_of_code: usize,
}

/// Lint one file's text. `path` decides the file category, `display_path`
/// is what the report shows.
#[must_use]
pub fn lint_source(
    path: &Path,
    display_path: impl Into<PathBuf>,
    text: &str,
    rules: &RuleSet,
) -> FileReport {
    lint_text(path, display_path.into(), text, rules).0
}

fn lint_text(path: &Path, display_path: PathBuf, text: &str, rules: &RuleSet) -> (FileReport, usize) {
    let suppressed = suppress_ignored(text);
    if !suppressed.regions().is_empty() {
        debug!(
            path = %path.display(),
            regions = suppressed.regions().len(),
            "suppressed marker regions"
        );
    }

    let source = SourceFile::new(path, suppressed.as_str(), rules.cmode());
    let mut report = FileReport::new(display_path);
    rules.check(&source, &mut report);
    (report, source.code_line_count())
}

/// How a file's path appears in reports.
#[must_use]
pub fn display_path(path: &Path, full_paths: bool) -> PathBuf {
    if full_paths {
        return path.to_path_buf();
    }
    path.file_name()
        .map_or_else(|| path.to_path_buf(), PathBuf::from)
}

fn lint_file(path: &Path, options: &LintOptions) -> Option<(FileReport, usize)> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read file; skipping");
            return None;
        }
    };
    let text = String::from_utf8_lossy(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), "linting");
    Some(lint_text(
        path,
        display_path(path, options.full_paths),
        &text,
        &options.rules,
    ))
}

/// Lint `files` in parallel. Reports keep the order of `files`; unreadable
/// files are logged and left out.
#[must_use]
pub fn lint_files(files: &[PathBuf], options: &LintOptions) -> LintOutcome {
    let progress = LintProgress::new(files.len() as u64, options.quiet);
    let linted: Vec<_> = files
        .par_iter()
        .map(|path| {
            let result = lint_file(path, options);
            progress.inc();
            result
        })
        .collect();
    progress.finish();

    let mut outcome = LintOutcome::default();
    for (report, loc) in linted.into_iter().flatten() {
        outcome.lines_of_code += loc;
        outcome.report.add(report);
    }

    info!(
        files = outcome.report.file_count(),
        errors = outcome.report.errors(),
        warnings = outcome.report.warnings(),
        advice = outcome.report.advice(),
        lines_of_code = outcome.lines_of_code,
        "lint finished"
    );
    outcome
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;

use std::io::Write;

use tracing::info;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::lint::{LintOptions, lint_files};
use crate::report::{RunReport, Severity};
use crate::rules::RuleSet;
use crate::scanner::{DirectoryScanner, LintFilter, collect_files};
use crate::{EXIT_FINDINGS, EXIT_SUCCESS};

use super::Settings;

/// Load the config named on the command line, or the local one.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(cli: &Cli, loader: &impl ConfigLoader) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }
    match &cli.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Exit status for a finished run: findings fail the run when they are errors,
/// or warnings that `threshold` shows.
#[must_use]
pub fn exit_code(report: &RunReport, threshold: Severity) -> i32 {
    let failing_warnings = report.warnings() > 0 && threshold.permits(Severity::Warning);
    if report.errors() > 0 || failing_warnings {
        EXIT_FINDINGS
    } else {
        EXIT_SUCCESS
    }
}

/// Run a whole lint and write the report to `out`.
///
/// # Errors
/// Returns an error for invalid configuration or when writing fails.
pub fn run_lint(cli: &Cli, out: &mut impl Write) -> Result<i32> {
    let config = load_config(cli, &FileConfigLoader::new())?;
    let settings = Settings::resolve(cli, config);

    let filter = LintFilter::new(&settings.exclude)?;
    let scanner = DirectoryScanner::new(filter, settings.recursive);
    let files = collect_files(&scanner, &cli.paths)?;
    info!(files = files.len(), recursive = settings.recursive, "collected files");

    let options = LintOptions {
        rules: RuleSet::new(settings.cmode, &settings.disabled_rules)?,
        full_paths: settings.full_paths,
        quiet: settings.quiet,
    };
    let outcome = lint_files(&files, &options);

    outcome.report.render(out, &settings.render_options())?;
    out.flush()?;

    Ok(exit_code(&outcome.report, settings.threshold))
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;

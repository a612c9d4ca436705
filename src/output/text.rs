use std::io::Write;

use crate::error::Result;
use crate::report::{FileReport, RunReport, Severity};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    #[default]
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report: one `[Level] path:line: title` line per shown
/// finding, followed by a summary.
pub struct TextFormatter {
    threshold: Severity,
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(threshold: Severity, mode: ColorMode) -> Self {
        Self {
            threshold,
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn color_for(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Advice => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, severity: Severity) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{}{text}{}", Self::color_for(severity), ansi::RESET)
    }

    fn format_summary(&self, report: &RunReport) -> String {
        let files = report.file_count();
        let plural = if files == 1 { "" } else { "s" };
        let mut summary = format!(
            "Lint Summary: {files} file{plural}\nErrors: {}",
            self.colorize(&report.errors().to_string(), Severity::Error)
        );

        if self.threshold.permits(Severity::Warning) {
            summary.push_str(" Warnings: ");
            summary.push_str(&self.colorize(&report.warnings().to_string(), Severity::Warning));
        }
        if self.threshold.permits(Severity::Advice) {
            summary.push_str(" Advice: ");
            summary.push_str(&self.colorize(&report.advice().to_string(), Severity::Advice));
        }

        summary
    }
}

impl OutputFormatter for TextFormatter {
    fn write_file(&self, report: &FileReport, out: &mut dyn Write) -> Result<()> {
        if report.total() == 0 {
            return Ok(());
        }

        let path = report.path().to_string_lossy();
        for finding in report.visible(self.threshold) {
            writeln!(
                out,
                "{} {path}:{}: {}",
                self.colorize(finding.severity().tag(), finding.severity()),
                finding.line(),
                finding.title()
            )?;
        }
        Ok(())
    }

    fn write_run(&self, report: &RunReport, out: &mut dyn Write) -> Result<()> {
        for file in report.files().iter().filter(|f| f.total() > 0) {
            self.write_file(file, out)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", self.format_summary(report))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

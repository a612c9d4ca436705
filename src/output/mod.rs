mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::LintProgress;
pub use text::{ColorMode, TextFormatter};

use std::io::Write;

use serde::Deserialize;

use crate::error::Result;
use crate::report::{FileReport, RunReport, Severity};

/// Trait for writing reports in a particular output format.
pub trait OutputFormatter {
    /// Write a single file's report.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    fn write_file(&self, report: &FileReport, out: &mut dyn Write) -> Result<()>;

    /// Write the report of a whole run.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    fn write_run(&self, report: &RunReport, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "human" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Run-wide rendering settings, fixed before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub threshold: Severity,
    pub color: ColorMode,
}

impl RenderOptions {
    #[must_use]
    pub const fn new(format: OutputFormat, threshold: Severity) -> Self {
        Self {
            format,
            threshold,
            color: ColorMode::Never,
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(self.threshold, self.color)),
            OutputFormat::Json => Box::new(JsonFormatter::new(self.threshold)),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

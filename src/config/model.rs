use serde::Deserialize;

use crate::output::OutputFormat;
use crate::report::Severity;

/// Contents of a `.flint.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// 0 errors only, 1 adds warnings, 2 adds advice. Out-of-range values clamp.
    #[serde(default)]
    pub level: Option<i64>,

    #[serde(default)]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub recursive: bool,

    /// Treat every file as C: C++-only rules are skipped.
    #[serde(default)]
    pub cmode: bool,

    #[serde(default)]
    pub full_paths: bool,

    /// Glob patterns of files to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub rules: RulesConfig,
}

impl Config {
    /// Threshold from `level`, if one was set.
    #[must_use]
    pub fn threshold(&self) -> Option<Severity> {
        self.level.map(Severity::from_level)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Rule ids that never run.
    #[serde(default)]
    pub disabled: Vec<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

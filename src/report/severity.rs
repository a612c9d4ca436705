use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a finding, ordered from least to most verbose.
///
/// Used both for findings and as a display threshold: a threshold shows
/// every finding whose severity is at or below it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Severity {
    Error,
    Warning,
    #[default]
    Advice,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::Error, Self::Warning, Self::Advice];

    /// Map a numeric verbosity level to a severity, clamping out-of-range
    /// values to the nearest valid one.
    #[must_use]
    pub const fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=0 => Self::Error,
            1 => Self::Warning,
            _ => Self::Advice,
        }
    }

    /// Whether a finding of `severity` is shown under this threshold.
    #[must_use]
    pub fn permits(self, severity: Self) -> bool {
        severity <= self
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Advice => "Advice",
        }
    }

    /// Fixed-width tag used by the text report.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[Error  ]",
            Self::Warning => "[Warning]",
            Self::Advice => "[Advice ]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;

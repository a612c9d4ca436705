use super::Severity;

/// One reported style issue. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    severity: Severity,
    line: usize,
    title: String,
    description: String,
}

impl Finding {
    #[must_use]
    pub fn new(
        severity: Severity,
        line: usize,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            line,
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn error(line: usize, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, line, title, description)
    }

    #[must_use]
    pub fn warning(line: usize, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Warning, line, title, description)
    }

    #[must_use]
    pub fn advice(line: usize, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Advice, line, title, description)
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// 1-based line in the original file.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

use regex::Regex;

use crate::error::{FlintError, Result};
use crate::report::{FileReport, Finding};

use super::{Rule, SourceFile};

/// `using namespace` in a header leaks into every file that includes it.
pub struct UsingNamespaceRule {
    pattern: Regex,
}

impl UsingNamespaceRule {
    pub const ID: &'static str = "using-namespace";

    /// # Errors
    /// Returns an error if the directive pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\busing\s+namespace\b").map_err(|source| {
            FlintError::InvalidRule {
                rule: Self::ID,
                source,
            }
        })?;
        Ok(Self { pattern })
    }
}

impl Rule for UsingNamespaceRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn cpp_only(&self) -> bool {
        true
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        if !source.category().is_header() || !source.is_cpp() {
            return;
        }
        for (line, code) in source.code_lines() {
            if self.pattern.is_match(code) {
                report.add(Finding::warning(
                    line,
                    "Using directive in header file.",
                    "A 'using namespace' directive in a header applies to every file that includes it.",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "namespace_tests.rs"]
mod tests;

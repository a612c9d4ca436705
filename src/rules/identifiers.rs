use regex::Regex;

use crate::error::{FlintError, Result};
use crate::report::{FileReport, Finding};

use super::{Rule, SourceFile};

/// Flags identifiers with a safer replacement: `strtok` always, `NULL` in C++.
pub struct BannedIdentifierRule {
    pattern: Regex,
}

impl BannedIdentifierRule {
    pub const ID: &'static str = "banned-identifier";

    /// # Errors
    /// Returns an error if the identifier pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\b(strtok|NULL)\b").map_err(|source| FlintError::InvalidRule {
            rule: Self::ID,
            source,
        })?;
        Ok(Self { pattern })
    }
}

impl Rule for BannedIdentifierRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        let cpp = source.is_cpp();
        for (line, code) in source.code_lines() {
            for m in self.pattern.find_iter(code) {
                match m.as_str() {
                    "strtok" => report.add(Finding::error(
                        line,
                        "'strtok' is not thread safe. Consider 'strtok_r'.",
                        "",
                    )),
                    "NULL" if cpp => report.add(Finding::advice(
                        line,
                        "Prefer `nullptr' to `NULL' in new C++ code.",
                        "Unlike `NULL', `nullptr' can't accidentally be used in arithmetic or as an integer.",
                    )),
                    _ => {}
                }
            }
        }
    }
}

/// Warns about `volatile`, which is not a synchronization primitive.
/// `asm volatile` is allowed.
pub struct VolatileRule {
    pattern: Regex,
}

impl VolatileRule {
    pub const ID: &'static str = "volatile";

    /// # Errors
    /// Returns an error if the keyword pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\b(?:(asm|__asm|__asm__)\s+)?volatile\b").map_err(|source| {
            FlintError::InvalidRule {
                rule: Self::ID,
                source,
            }
        })?;
        Ok(Self { pattern })
    }
}

impl Rule for VolatileRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn cpp_only(&self) -> bool {
        true
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        if !source.is_cpp() {
            return;
        }
        for (line, code) in source.code_lines() {
            for caps in self.pattern.captures_iter(code) {
                if caps.get(1).is_some() {
                    continue;
                }
                report.add(Finding::warning(
                    line,
                    "'volatile' is not thread-safe.",
                    "If multiple threads are sharing data, use std::atomic or locks. \
                     'volatile' may also force the compiler to generate worse code.",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;

//! Line-oriented style rules.
//!
//! Every rule runs over the suppressed text of one file and appends findings
//! to that file's report. Rules are stateless between files so a single
//! [`RuleSet`] is shared by all rayon workers.

mod identifiers;
mod namespace;
mod preprocessor;
mod source;

pub use identifiers::{BannedIdentifierRule, VolatileRule};
pub use namespace::UsingNamespaceRule;
pub use preprocessor::{
    DeprecatedIncludeRule, IfEndifBalanceRule, IncludeAssociatedHeaderRule, IncludeGuardRule,
    InlHeaderInclusionRule,
};
pub use source::{Directive, Include, SourceFile};

use tracing::debug;

use crate::error::{FlintError, Result};
use crate::report::FileReport;

pub trait Rule: Send + Sync {
    /// Stable identifier used in configuration.
    fn id(&self) -> &'static str;

    /// Rules that only make sense for C++ are dropped in C mode.
    fn cpp_only(&self) -> bool {
        false
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport);
}

/// Identifiers of every built-in rule, in run order.
pub const RULE_IDS: &[&str] = &[
    BannedIdentifierRule::ID,
    IfEndifBalanceRule::ID,
    IncludeGuardRule::ID,
    IncludeAssociatedHeaderRule::ID,
    InlHeaderInclusionRule::ID,
    VolatileRule::ID,
    DeprecatedIncludeRule::ID,
    UsingNamespaceRule::ID,
];

/// The rules enabled for a run.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
    cmode: bool,
}

impl RuleSet {
    /// Build the rule set, dropping `disabled` ids and, in C mode, C++-only rules.
    ///
    /// # Errors
    /// Returns an error if a disabled id names no rule, or a rule pattern
    /// fails to compile.
    pub fn new(cmode: bool, disabled: &[String]) -> Result<Self> {
        if let Some(unknown) = disabled.iter().find(|id| !RULE_IDS.contains(&id.as_str())) {
            return Err(FlintError::Config(format!(
                "Unknown rule '{unknown}'. Known rules: {}",
                RULE_IDS.join(", ")
            )));
        }

        let all: Vec<Box<dyn Rule>> = vec![
            Box::new(BannedIdentifierRule::new()?),
            Box::new(IfEndifBalanceRule),
            Box::new(IncludeGuardRule),
            Box::new(IncludeAssociatedHeaderRule),
            Box::new(InlHeaderInclusionRule),
            Box::new(VolatileRule::new()?),
            Box::new(DeprecatedIncludeRule),
            Box::new(UsingNamespaceRule::new()?),
        ];

        let rules = all
            .into_iter()
            .filter(|rule| !disabled.iter().any(|id| id == rule.id()))
            .filter(|rule| !(cmode && rule.cpp_only()))
            .collect();

        Ok(Self { rules, cmode })
    }

    #[must_use]
    pub const fn cmode(&self) -> bool {
        self.cmode
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.id())
    }

    /// Run every enabled rule over `source`.
    pub fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        for rule in &self.rules {
            let before = report.total();
            rule.check(source, report);
            let found = report.total() - before;
            if found > 0 {
                debug!(rule = rule.id(), path = %source.path().display(), found, "rule reported");
            }
        }
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.ids().collect::<Vec<_>>())
            .field("cmode", &self.cmode)
            .finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

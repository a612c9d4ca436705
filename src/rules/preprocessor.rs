use std::path::Path;

use crate::category::{FileCategory, file_name_base};
use crate::report::{FileReport, Finding};

use super::{Directive, Rule, SourceFile};

/// Balances `#if`/`#ifdef`/`#ifndef` against `#endif`, and `#else`/`#elif`
/// against an open conditional.
pub struct IfEndifBalanceRule;

impl IfEndifBalanceRule {
    pub const ID: &'static str = "if-endif-balance";
}

impl Rule for IfEndifBalanceRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        let mut open = 0usize;
        for directive in source.directives() {
            match directive.name {
                _ if directive.opens_conditional() => open += 1,
                "endif" => {
                    if open == 0 {
                        report.add(Finding::error(directive.line, "Unmatched #endif.", ""));
                    } else {
                        open -= 1;
                    }
                }
                "else" | "elif" if open == 0 => {
                    report.add(Finding::error(directive.line, "Unmatched #else.", ""));
                }
                _ => {}
            }
        }
        if open != 0 {
            report.add(Finding::error(source.last_line(), "Unmatched #if/#endif.", ""));
        }
    }
}

/// Headers need `#pragma once` or an `#ifndef X` / `#define X` guard that
/// spans the whole file.
pub struct IncludeGuardRule;

impl IncludeGuardRule {
    pub const ID: &'static str = "include-guard";
}

impl Rule for IncludeGuardRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        if source.category() != FileCategory::Header {
            return;
        }

        let mut code = source.code_lines().filter(|(_, l)| !l.trim().is_empty());
        let Some((first_line, first)) = code.next() else {
            report.add(Finding::error(1, "Missing include guard.", ""));
            return;
        };

        let Some(guard) = Directive::parse(first_line, first) else {
            report.add(Finding::error(first_line, "Missing include guard.", ""));
            return;
        };
        if guard.name == "pragma" && guard.argument() == "once" {
            return;
        }
        if guard.name != "ifndef" || guard.argument().is_empty() {
            report.add(Finding::error(first_line, "Missing include guard.", ""));
            return;
        }

        let Some(define) = code
            .next()
            .and_then(|(line, text)| Directive::parse(line, text))
            .filter(|d| d.name == "define")
        else {
            report.add(Finding::error(first_line, "Missing include guard.", ""));
            return;
        };
        if define.argument() != guard.argument() {
            report.add(Finding::error(
                guard.line,
                format!(
                    "Include guard name mismatch; expected {}, saw {}",
                    guard.argument(),
                    define.argument()
                ),
                "",
            ));
        }

        if !guard_covers_file(source, guard.line) {
            report.add(Finding::error(
                source.last_line(),
                "Include guard doesn't cover the entire file.",
                "",
            ));
        }
    }
}

/// True when the conditional opened at `guard_line` closes on the last line
/// that holds code.
fn guard_covers_file(source: &SourceFile<'_>, guard_line: usize) -> bool {
    let mut open = 0usize;
    let mut closed_at = None;
    for directive in source.directives().filter(|d| d.line >= guard_line) {
        if directive.opens_conditional() {
            open += 1;
        } else if directive.name == "endif" {
            open = open.saturating_sub(1);
            if open == 0 {
                closed_at = Some(directive.line);
                break;
            }
        }
    }

    let Some(closed_at) = closed_at else {
        return false;
    };
    source
        .code_lines()
        .skip(closed_at)
        .all(|(_, l)| l.trim().is_empty())
}

/// Warns about includes of headers that are being phased out.
pub struct DeprecatedIncludeRule;

impl DeprecatedIncludeRule {
    pub const ID: &'static str = "deprecated-include";

    const DEPRECATED: &'static [&'static str] =
        &["common/base/Base.h", "common/base/StringUtil.h"];
}

impl Rule for DeprecatedIncludeRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        for include in source.includes().filter(|i| i.quoted) {
            if Self::DEPRECATED.contains(&include.path) {
                report.add(Finding::warning(
                    include.line,
                    format!("Including deprecated header '{}'", include.path),
                    "",
                ));
            }
        }
    }
}

/// A source file's own header (`foo.h` for `foo.cpp`) must be its first
/// include, so the header is proven to compile on its own.
pub struct IncludeAssociatedHeaderRule;

impl IncludeAssociatedHeaderRule {
    pub const ID: &'static str = "include-associated-header";
}

impl Rule for IncludeAssociatedHeaderRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        if !source.category().is_source() {
            return;
        }
        let name = own_file_name(source);
        let base = file_name_base(&name);

        for (index, include) in source.includes().enumerate() {
            if !include.quoted || include.has_directory() {
                continue;
            }
            if file_name_base(include.path) == base {
                if index > 0 {
                    report.add(Finding::error(
                        include.line,
                        "The associated header file of .cpp files should be included before any other includes.",
                        "This helps catch missing header file dependencies in the .h",
                    ));
                }
                return;
            }
        }
    }
}

/// `foo-inl.h` holds implementation details of `foo.h` and may only be
/// included by files sharing its base name.
pub struct InlHeaderInclusionRule;

impl InlHeaderInclusionRule {
    pub const ID: &'static str = "inl-header-inclusion";
}

impl Rule for InlHeaderInclusionRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, source: &SourceFile<'_>, report: &mut FileReport) {
        let name = own_file_name(source);
        let base = file_name_base(&name);

        for include in source.includes().filter(|i| i.quoted) {
            if FileCategory::of(Path::new(include.path)) != FileCategory::InlHeader {
                continue;
            }
            if file_name_base(include.file_name()) == base {
                continue;
            }
            report.add(Finding::error(
                include.line,
                format!(
                    "An -inl file ({}) was included even though this is not its associated header.",
                    include.path
                ),
                "Files like Foo-inl.h are implementation details and should not be included outside of Foo.h.",
            ));
        }
    }
}

fn own_file_name(source: &SourceFile<'_>) -> String {
    source
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "preprocessor_tests.rs"]
mod tests;

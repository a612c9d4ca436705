use std::path::Path;

use crate::category::FileCategory;

/// One file as the rules see it: suppressed text split into lines, plus a
/// code-only view of each line with comments and literal contents blanked.
#[derive(Debug, Clone)]
pub struct SourceFile<'a> {
    path: &'a Path,
    category: FileCategory,
    cmode: bool,
    lines: Vec<&'a str>,
    code: Vec<String>,
}

impl<'a> SourceFile<'a> {
    #[must_use]
    pub fn new(path: &'a Path, text: &'a str, cmode: bool) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let code = strip_comments_and_literals(&lines);
        Self {
            path,
            category: FileCategory::of(path),
            cmode,
            lines,
            code,
        }
    }

    #[must_use]
    pub const fn path(&self) -> &Path {
        self.path
    }

    #[must_use]
    pub const fn category(&self) -> FileCategory {
        self.category
    }

    /// True unless running in C mode or linting a `.c` file.
    #[must_use]
    pub fn is_cpp(&self) -> bool {
        !self.cmode && self.category != FileCategory::SourceC
    }

    /// Raw lines paired with their 1-based numbers.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().enumerate().map(|(i, l)| (i + 1, *l))
    }

    /// Code-only lines paired with their 1-based numbers.
    pub fn code_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.code.iter().enumerate().map(|(i, l)| (i + 1, l.as_str()))
    }

    /// Preprocessor directives in order: line number, directive name, rest.
    pub fn directives(&self) -> impl Iterator<Item = Directive<'_>> {
        self.code_lines()
            .filter_map(|(line, code)| Directive::parse(line, code))
    }

    /// `#include` lines in order. Paths come from the raw text since literal
    /// contents are blanked in the code view.
    pub fn includes(&self) -> impl Iterator<Item = Include<'_>> {
        self.directives()
            .filter(|d| d.name == "include")
            .filter_map(|d| Include::parse(d.line, self.lines[d.line - 1]))
    }

    /// Number of the last line, or 1 for an empty file.
    #[must_use]
    pub fn last_line(&self) -> usize {
        self.lines.len().max(1)
    }

    /// Number of lines that still hold code once comments are gone.
    #[must_use]
    pub fn code_line_count(&self) -> usize {
        self.code.iter().filter(|l| !l.trim().is_empty()).count()
    }
}

/// A `#name rest` preprocessor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub line: usize,
    pub name: &'a str,
    pub rest: &'a str,
}

impl<'a> Directive<'a> {
    /// Parse one code line; `None` unless it starts with `#name`.
    #[must_use]
    pub fn parse(line: usize, code: &'a str) -> Option<Self> {
        let after_hash = code.trim_start().strip_prefix('#')?.trim_start();
        let name_end = after_hash
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after_hash.len());
        let (name, rest) = after_hash.split_at(name_end);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            line,
            name,
            rest: rest.trim(),
        })
    }

    /// `#if`, `#ifdef` or `#ifndef`.
    #[must_use]
    pub fn opens_conditional(&self) -> bool {
        matches!(self.name, "if" | "ifdef" | "ifndef")
    }

    /// First identifier after the directive name.
    #[must_use]
    pub fn argument(&self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(self.rest.len());
        &self.rest[..end]
    }
}

/// One `#include "path"` or `#include <path>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Include<'a> {
    pub line: usize,
    pub path: &'a str,
    /// `"path"` rather than `<path>`.
    pub quoted: bool,
}

impl<'a> Include<'a> {
    fn parse(line: usize, raw: &'a str) -> Option<Self> {
        let rest = raw.trim_start().strip_prefix('#')?.trim_start();
        let rest = rest.strip_prefix("include")?.trim_start();
        let (close, quoted) = match rest.chars().next()? {
            '"' => ('"', true),
            '<' => ('>', false),
            _ => return None,
        };
        let body = &rest[1..];
        let end = body.find(close)?;
        Some(Self {
            line,
            path: &body[..end],
            quoted,
        })
    }

    /// The included file name without directories.
    #[must_use]
    pub fn file_name(&self) -> &'a str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(self.path)
    }

    #[must_use]
    pub fn has_directory(&self) -> bool {
        self.path.contains(['/', '\\'])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Lexical {
    Code,
    BlockComment,
    /// Inside a raw string; holds the closing `)delim"` sequence.
    RawString(String),
}

const RAW_STRING_PREFIXES: &[&str] = &["R", "LR", "uR", "UR", "u8R"];

/// Blank `//` and `/* */` comments and the contents of string, raw string and
/// character literals. Quotes are kept so literals remain visible as tokens.
fn strip_comments_and_literals(lines: &[&str]) -> Vec<String> {
    let mut state = Lexical::Code;
    lines
        .iter()
        .map(|line| strip_line(line, &mut state))
        .collect()
}

fn strip_line(line: &str, state: &mut Lexical) -> String {
    let mut out = String::with_capacity(line.len());
    // Identifier or number run ending just before `pos`.
    let mut token = String::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];

        match state {
            Lexical::BlockComment => {
                if let Some(end) = rest.find("*/") {
                    blank(&mut out, &rest[..end + 2]);
                    pos += end + 2;
                    *state = Lexical::Code;
                } else {
                    blank(&mut out, rest);
                    pos = line.len();
                }
                continue;
            }
            Lexical::RawString(close) => {
                if let Some(end) = rest.find(close.as_str()) {
                    blank(&mut out, &rest[..end + close.len() - 1]);
                    out.push('"');
                    pos += end + close.len();
                    *state = Lexical::Code;
                } else {
                    blank(&mut out, rest);
                    pos = line.len();
                }
                continue;
            }
            Lexical::Code => {}
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        if rest.starts_with("//") {
            break;
        }
        if rest.starts_with("/*") {
            out.push_str("  ");
            pos += 2;
            token.clear();
            *state = Lexical::BlockComment;
            continue;
        }

        match c {
            '"' if RAW_STRING_PREFIXES.contains(&token.as_str()) => {
                out.push('"');
                pos += 1;
                // Delimiters are at most 16 characters.
                if let Some(open) = line[pos..].find('(').filter(|&open| open <= 16) {
                    let delimiter = &line[pos..pos + open];
                    *state = Lexical::RawString(format!("){delimiter}\""));
                } else {
                    pos += skip_literal(&line[pos..], '"', &mut out);
                }
                token.clear();
            }
            // Inside a number a quote is a digit separator.
            '\'' if token.starts_with(|d: char| d.is_ascii_digit()) => {
                out.push(c);
                pos += 1;
            }
            '"' | '\'' => {
                out.push(c);
                pos += 1;
                pos += skip_literal(&line[pos..], c, &mut out);
                token.clear();
            }
            _ => {
                out.push(c);
                pos += c.len_utf8();
                if c.is_ascii_alphanumeric() || c == '_' {
                    token.push(c);
                } else {
                    token.clear();
                }
            }
        }
    }
    out
}

/// Blank a literal body up to and including its closing `quote`, which is
/// kept. Returns the bytes consumed. An unterminated literal ends the line.
fn skip_literal(body: &str, quote: char, out: &mut String) -> usize {
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if !escaped && c == quote {
            out.push(quote);
            return i + c.len_utf8();
        }
        escaped = !escaped && c == '\\';
        out.push(' ');
    }
    body.len()
}

fn blank(out: &mut String, text: &str) {
    out.extend(text.chars().map(|_| ' '));
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;

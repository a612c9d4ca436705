//! File classification by extension.

use std::path::Path;

const HEADER_EXTENSIONS: &[&str] = &[".h", ".hpp", ".hh"];
const C_EXTENSIONS: &[&str] = &[".c"];
const CPP_EXTENSIONS: &[&str] = &[".C", ".cc", ".cpp", ".CPP", ".c++", ".cp", ".cxx"];
const INL_SUFFIX: &str = "-inl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Header,
    /// Inline-definition header, e.g. `widget-inl.h`.
    InlHeader,
    SourceC,
    SourceCpp,
    Unknown,
}

impl FileCategory {
    #[must_use]
    pub fn of(path: &Path) -> Self {
        let name = path.to_string_lossy();

        for ext in HEADER_EXTENSIONS {
            if name.ends_with(&format!("{INL_SUFFIX}{ext}")) {
                return Self::InlHeader;
            }
            if name.ends_with(ext) {
                return Self::Header;
            }
        }
        if C_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            return Self::SourceC;
        }
        if CPP_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            return Self::SourceCpp;
        }
        Self::Unknown
    }

    #[must_use]
    pub const fn is_header(self) -> bool {
        matches!(self, Self::Header | Self::InlHeader)
    }

    #[must_use]
    pub const fn is_source(self) -> bool {
        matches!(self, Self::SourceC | Self::SourceCpp)
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// The path with its recognized extension (and `-inl` marker) removed.
#[must_use]
pub fn file_name_base(path: &str) -> &str {
    for ext in HEADER_EXTENSIONS {
        if let Some(base) = path.strip_suffix(&format!("{INL_SUFFIX}{ext}")) {
            return base;
        }
        if let Some(base) = path.strip_suffix(ext) {
            return base;
        }
    }
    C_EXTENSIONS
        .iter()
        .chain(CPP_EXTENSIONS)
        .find_map(|ext| path.strip_suffix(ext))
        .unwrap_or(path)
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;

/// Marker that starts a suppressed region.
pub const PAUSE_MARKER: &str = "// %flint: pause";
/// Marker that ends a suppressed region.
pub const RESUME_MARKER: &str = "// %flint: resume";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Pause,
    Resume,
}

/// A marker line found in source text.
///
/// `start..end` is the byte span of the whole line, leading whitespace
/// included and the line terminator (`\n` or `\r\n`) excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    /// 1-based line number.
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Finds pause/resume marker lines.
///
/// A line is a marker only when its trimmed content is exactly one of the
/// marker strings. Nothing else is lexed: a marker inside a string literal or
/// block comment is still a marker. Pairing is not validated here.
#[derive(Debug, Clone, Copy)]
pub struct MarkerScanner<'a> {
    text: &'a str,
}

impl<'a> MarkerScanner<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Lazily iterate markers in ascending line order.
    ///
    /// Each call starts a fresh pass over the text.
    #[must_use]
    pub fn markers(&self) -> Markers<'a> {
        Markers {
            text: self.text,
            lines: LineSpans::new(self.text),
        }
    }
}

impl<'a> IntoIterator for MarkerScanner<'a> {
    type Item = Marker;
    type IntoIter = Markers<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers()
    }
}

#[derive(Debug, Clone)]
pub struct Markers<'a> {
    text: &'a str,
    lines: LineSpans<'a>,
}

impl Iterator for Markers<'_> {
    type Item = Marker;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.by_ref().find_map(|span| {
            classify(&self.text[span.start..span.end]).map(|kind| Marker {
                kind,
                line: span.line,
                start: span.start,
                end: span.end,
            })
        })
    }
}

fn classify(line: &str) -> Option<MarkerKind> {
    match line.trim() {
        PAUSE_MARKER => Some(MarkerKind::Pause),
        RESUME_MARKER => Some(MarkerKind::Resume),
        _ => None,
    }
}

/// Byte span of one line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineSpan {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Splits text into lines the same way `str::lines` does, but yields byte
/// offsets instead of slices.
#[derive(Debug, Clone)]
pub(crate) struct LineSpans<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> LineSpans<'a> {
    pub(crate) const fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 0,
        }
    }
}

impl Iterator for LineSpans<'_> {
    type Item = LineSpan;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.pos..];
        let (content_len, consumed) = rest
            .find('\n')
            .map_or((rest.len(), rest.len()), |i| (i, i + 1));

        let start = self.pos;
        let mut end = start + content_len;
        if end > start && self.text.as_bytes()[end - 1] == b'\r' && consumed > content_len {
            end -= 1;
        }

        self.pos += consumed;
        self.line += 1;
        Some(LineSpan {
            line: self.line,
            start,
            end,
        })
    }
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;

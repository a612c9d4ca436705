use tracing::{debug, warn};

use super::marker::{Marker, MarkerKind, MarkerScanner};

/// A suppressed line range, both ends inclusive and 1-based.
///
/// `terminated` is false when the pause marker had no resume and the region
/// runs to the end of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuppressedRegion {
    pub start_line: usize,
    pub end_line: usize,
    pub terminated: bool,
    start: usize,
    end: usize,
}

/// File text with every suppressed region blanked.
///
/// Has the same byte length as the input and every `\n` at the same offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressedText {
    text: String,
    regions: Vec<SuppressedRegion>,
}

impl SuppressedText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn regions(&self) -> &[SuppressedRegion] {
        &self.regions
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Blanks pause/resume regions of one file's text.
///
/// Suppression is a single flag rather than a depth counter: a second pause
/// inside a region changes nothing, and the first resume ends the region.
/// A resume outside any region is left as-is. A pause without a resume
/// suppresses through end of file.
#[derive(Debug, Clone, Copy)]
pub struct RegionSuppressor<'a> {
    text: &'a str,
    scanner: MarkerScanner<'a>,
}

impl<'a> RegionSuppressor<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            scanner: MarkerScanner::new(text),
        }
    }

    /// Compute the suppressed regions in ascending order.
    #[must_use]
    pub fn regions(&self) -> Vec<SuppressedRegion> {
        let mut regions = Vec::new();
        let mut open: Option<Marker> = None;

        for marker in self.scanner.markers() {
            match (marker.kind, open) {
                (MarkerKind::Pause, None) => open = Some(marker),
                (MarkerKind::Pause, Some(_)) => {
                    debug!(line = marker.line, "redundant pause marker inside suppressed region");
                }
                (MarkerKind::Resume, Some(pause)) => {
                    regions.push(SuppressedRegion {
                        start_line: pause.line,
                        end_line: marker.line,
                        terminated: true,
                        start: pause.start,
                        end: marker.end,
                    });
                    open = None;
                }
                (MarkerKind::Resume, None) => {
                    debug!(line = marker.line, "resume marker without pause ignored");
                }
            }
        }

        if let Some(pause) = open {
            let last_line = self.text.lines().count().max(pause.line);
            warn!(
                line = pause.line,
                "pause marker has no matching resume; suppressing to end of file"
            );
            regions.push(SuppressedRegion {
                start_line: pause.line,
                end_line: last_line,
                terminated: false,
                start: pause.start,
                end: self.text.len(),
            });
        }

        regions
    }

    /// Produce the blanked text.
    #[must_use]
    pub fn suppress(&self) -> SuppressedText {
        let regions = self.regions();
        let mut text = String::with_capacity(self.text.len());
        let mut pos = 0;

        for region in &regions {
            text.push_str(&self.text[pos..region.start]);
            blank_into(&mut text, &self.text[region.start..region.end]);
            pos = region.end;
        }
        text.push_str(&self.text[pos..]);

        SuppressedText { text, regions }
    }
}

/// Suppress the pause/resume regions of `text`.
#[must_use]
pub fn suppress_ignored(text: &str) -> SuppressedText {
    RegionSuppressor::new(text).suppress()
}

/// Append `slice` with every byte replaced by a space, except `\n` and a `\r`
/// directly before it.
fn blank_into(out: &mut String, slice: &str) {
    let mut chars = slice.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => out.push('\n'),
            '\r' if chars.peek() == Some(&'\n') => out.push('\r'),
            _ => out.extend(std::iter::repeat_n(' ', c.len_utf8())),
        }
    }
}

#[cfg(test)]
#[path = "suppress_tests.rs"]
mod tests;

//! Pause/resume regions.
//!
//! Code placed between `// %flint: pause` and `// %flint: resume` is blanked
//! before any rule runs, so intentionally unconventional code is not reported.
//! Blanking keeps every line terminator at its original byte offset, which
//! keeps line numbers of surviving findings exact.

mod marker;
mod suppress;

pub use marker::{Marker, MarkerKind, MarkerScanner, Markers, PAUSE_MARKER, RESUME_MARKER};
pub use suppress::{RegionSuppressor, SuppressedRegion, SuppressedText, suppress_ignored};

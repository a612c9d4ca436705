//! Findings and their aggregation.
//!
//! `Finding` → `FileReport` → `RunReport`. Each level owns the one below it
//! and only ever appends, so per-severity counts stay equal to what was added
//! regardless of how a render later filters the output.

mod counts;
mod file_report;
mod finding;
mod run_report;
mod severity;

pub use counts::SeverityCounts;
pub use file_report::FileReport;
pub use finding::Finding;
pub use run_report::RunReport;
pub use severity::Severity;

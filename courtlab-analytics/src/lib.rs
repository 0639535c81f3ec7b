//! CourtLab Analytics — league-wide statistics over the loaded table.
//!
//! Everything here is a pure function of the league: per-column summaries,
//! Pearson correlation and least-squares regression between column pairs,
//! top-N leaderboards, and markdown/CSV report export. No I/O except the
//! explicit export functions.

pub mod leaders;
pub mod report;
pub mod stats;

pub use leaders::{leaders, LeaderEntry};
pub use report::{export_leaders_csv, markdown_report, write_report, ReportError, ReportOptions};
pub use stats::{correlation, ColumnSummary, CorrelationReport, LinearFit};

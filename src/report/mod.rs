//! Report builder.
//!
//! Turns ledger queries into spreadsheet files. A report that matches no
//! rows produces no file.

mod builder;
mod record;
mod request;

pub use builder::{ReportBuilder, ReportOutcome};
pub use record::{ReportCell, ReportRecord};
pub use request::{ReportKind, ReportRequest};

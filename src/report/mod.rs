//! Reporting over computed payroll.
//!
//! [`build_report`] produces the numeric dashboard view (rows, totals,
//! average). The export half turns the same breakdowns into labeled,
//! currency-formatted rows and CSV.

mod export;
mod summary;

pub use export::{
    EXPORT_HEADERS, PayrollRow, export_csv, export_rows, format_currency, write_csv,
};
pub use summary::{PayrollReport, ReportRow, build_report};

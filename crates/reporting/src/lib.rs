//! Reporting over the shipping ledger.
//!
//! Read-only aggregations: nothing here mutates a registry.

pub mod daily;

pub use daily::{DailyReport, generate_report, generate_report_for, summarize_by_day};

//! Output formatting for assembled reports.

pub mod json;
pub mod markdown;

pub use json::{compact_entry, report_json};
pub use markdown::{
    format_appraisal, format_appraisal_table, format_evidence_table, format_report, format_summary,
};

//! Compact JSON output formatting.

use serde_json::{Value, json};

use crate::engine::{Report, ReportEntry};

/// Create a compact entry representation for JSON output.
///
/// Keeps identifiers, the classification, and the appraisal numbers;
/// drops the abstract and the full answer audit trail.
#[must_use]
pub fn compact_entry(entry: &ReportEntry) -> Value {
    let citation = &entry.citation;
    let mut obj = json!({
        "identifier": citation.identifier,
        "title": citation.title_or_default(),
        "level": entry.level().rank(),
        "levelLabel": entry.level().label(),
        "origin": entry.classification.origin,
    });

    if let Some(year) = citation.year {
        obj["year"] = json!(year);
    }

    if !citation.authors.is_empty() {
        obj["authors"] = json!(citation.authors);
    }

    if let Some(journal) = &citation.journal {
        obj["journal"] = json!(journal);
    }

    if let Some(appraisal) = &entry.appraisal {
        obj["category"] = json!(appraisal.category);
        obj["totalScore"] = json!(appraisal.total_score);
        obj["qualityBand"] = json!(appraisal.quality_band);
        obj["criteriaMet"] = json!(appraisal.criteria_met);
        obj["criteriaTotal"] = json!(appraisal.criteria_total);
    }

    if let Some(err) = &entry.scoring_error {
        obj["scoringError"] = json!(err);
    }

    obj
}

/// Render the whole report as a compact JSON value.
#[must_use]
pub fn report_json(report: &Report) -> Value {
    json!({
        "total": report.total,
        "levelCounts": report.level_counts,
        "entries": report.entries.iter().map(compact_entry).collect::<Vec<_>>(),
    })
}

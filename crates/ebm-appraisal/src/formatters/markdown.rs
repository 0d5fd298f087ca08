//! Markdown output formatting.

use std::borrow::Cow;

use crate::config::render;
use crate::engine::{Report, ReportEntry, criteria_for};
use crate::models::{Answer, EvidenceLevel};

fn truncated(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() > max {
        Cow::Owned(format!("{}...", text.chars().take(max.saturating_sub(3)).collect::<String>()))
    } else {
        Cow::Borrowed(text)
    }
}

/// Format the evidence-pyramid summary: per-level counts plus a
/// top-evidence listing.
#[must_use]
pub fn format_summary(report: &Report) -> String {
    let mut output = String::from("# Evidence Pyramid Summary\n\n");

    for level in EvidenceLevel::ALL {
        let count = report.count_for(level);
        if count > 0 {
            output.push_str(&format!(
                "- Level {} - {}: {} citations\n",
                level.rank(),
                level.label(),
                count
            ));
        }
    }
    output.push_str(&format!("\n**Total citations**: {}\n\n", report.total));

    output.push_str("## Top Evidence (Levels 1-2)\n\n");
    let top = report.top_evidence(render::TOP_EVIDENCE_MAX);
    if top.is_empty() {
        output.push_str("No high-level evidence (meta-analyses or RCTs) found.\n");
    } else {
        for (i, entry) in top.iter().enumerate() {
            let citation = &entry.citation;
            output.push_str(&format!(
                "{}. [{}] {} et al. {}\n",
                i + 1,
                entry.level().label(),
                citation.first_author_or_default(),
                truncated(citation.title_or_default(), render::LISTING_TITLE_LEN),
            ));
            if let Some(appraisal) = &entry.appraisal {
                output.push_str(&format!(
                    "   Quality: {} ({}%)\n",
                    appraisal.quality_band, appraisal.total_score
                ));
            }
        }
    }

    output
}

/// Format the report as an evidence table, one row per citation in the
/// assembled order.
#[must_use]
pub fn format_evidence_table(report: &Report, show_abstracts: bool) -> String {
    let mut output = String::from(
        "| Level | Evidence Type | Authors | Year | Title |\n\
         |-------|---------------|---------|------|-------|\n",
    );

    for entry in &report.entries {
        let citation = &entry.citation;
        let year = citation.year.map_or_else(|| "Unknown".to_string(), |y| y.to_string());
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            entry.level().rank(),
            entry.level().label(),
            citation.first_author_or_default(),
            year,
            truncated(citation.title_or_default(), render::TABLE_TITLE_LEN),
        ));

        if show_abstracts {
            if let Some(abs) = &citation.abstract_text {
                output.push_str(&format!(
                    "| | | | | *Abstract*: {} |\n",
                    truncated(abs, render::TABLE_ABSTRACT_LEN)
                ));
            }
        }
    }

    output
}

/// Format one entry's appraisal as a checklist.
#[must_use]
pub fn format_appraisal(entry: &ReportEntry) -> String {
    let Some(appraisal) = &entry.appraisal else {
        return match &entry.scoring_error {
            Some(err) => format!("Appraisal failed: {err}\n"),
            None => "No appraisal available.\n".to_string(),
        };
    };

    let mut output = String::new();
    output.push_str(&format!("**Checklist**: {}\n", appraisal.category));
    output.push_str(&format!(
        "**Quality**: {} ({}%), {}/{} criteria met\n\n",
        appraisal.quality_band,
        appraisal.total_score,
        appraisal.criteria_met,
        appraisal.criteria_total,
    ));

    // Render in table order so the checklist reads top to bottom.
    for criterion in criteria_for(appraisal.category) {
        let answer = appraisal.answers.get(criterion.name).copied().unwrap_or(Answer::Unclear);
        output.push_str(&format!(
            "- {} {} ({} pts)\n",
            answer.mark(),
            criterion.question,
            criterion.weight
        ));
    }

    output
}

/// Format the quality summary table over all scored entries.
#[must_use]
pub fn format_appraisal_table(report: &Report) -> String {
    let mut output = String::from(
        "| Quality | Score | Criteria Met | Study | Authors | Year |\n\
         |---------|-------|--------------|-------|---------|------|\n",
    );

    for entry in &report.entries {
        let Some(appraisal) = &entry.appraisal else { continue };
        let citation = &entry.citation;
        let year = citation.year.map_or_else(|| "Unknown".to_string(), |y| y.to_string());
        output.push_str(&format!(
            "| {} | {}% | {}/{} | {} | {} | {} |\n",
            appraisal.quality_band,
            appraisal.total_score,
            appraisal.criteria_met,
            appraisal.criteria_total,
            truncated(citation.title_or_default(), render::TABLE_TITLE_LEN),
            citation.first_author_or_default(),
            year,
        ));
    }

    output
}

/// Render the whole report as a single markdown document.
#[must_use]
pub fn format_report(report: &Report) -> String {
    let mut output = format_summary(report);
    output.push_str("\n## Evidence Table\n\n");
    output.push_str(&format_evidence_table(report, false));
    output.push_str("\n## Critical Appraisal\n\n");
    output.push_str(&format_appraisal_table(report));

    let failed: Vec<&ReportEntry> =
        report.entries.iter().filter(|e| e.scoring_error.is_some()).collect();
    if !failed.is_empty() {
        output.push_str("\n## Not Scored\n\n");
        for entry in failed {
            output.push_str(&format!(
                "- {}: {}\n",
                entry.citation.identifier,
                entry.scoring_error.as_deref().unwrap_or("unknown"),
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{assemble, classify_citation, score};
    use crate::models::{Citation, StudyDesign};
    use std::collections::BTreeMap;

    fn sample_report() -> Report {
        let citation = Citation {
            identifier: "pmid:1".into(),
            publication_types: vec!["Meta-Analysis".into()],
            title: Some("Sample systematic review of things".into()),
            first_author: Some("Doe J".into()),
            year: Some(2023),
            ..Default::default()
        };
        let classification = classify_citation(&citation);
        let appraisal = score(StudyDesign::SystematicReview, &BTreeMap::new());
        let entry = crate::engine::ReportEntry {
            citation,
            classification,
            appraisal: Some(appraisal),
            scoring_error: None,
        };
        assemble(vec![entry])
    }

    #[test]
    fn test_summary_counts_and_top_evidence() {
        let report = sample_report();
        let summary = format_summary(&report);
        assert!(summary.contains("Level 1 - Systematic Review & Meta-Analysis: 1 citations"));
        assert!(summary.contains("Doe J et al."));
        assert!(summary.contains("**Total citations**: 1"));
    }

    #[test]
    fn test_evidence_table_has_row_per_entry() {
        let report = sample_report();
        let table = format_evidence_table(&report, false);
        assert!(table.contains("| 1 | Systematic Review & Meta-Analysis | Doe J | 2023 |"));
    }

    #[test]
    fn test_appraisal_checklist_marks() {
        let report = sample_report();
        let rendered = format_appraisal(&report.entries[0]);
        assert!(rendered.contains("**Quality**: Low (0%)"));
        assert!(rendered.contains("? Was the review question clearly defined? (10 pts)"));
    }

    #[test]
    fn test_truncation() {
        let long = "x".repeat(100);
        let t = truncated(&long, 60);
        assert!(t.ends_with("..."));
        assert!(t.chars().count() == 60);
    }
}

//! End-to-end tests: classify, score, assemble, render.


use ebm_appraisal::engine::{appraise_all, assemble};
use ebm_appraisal::formatters;
use ebm_appraisal::models::{
    Answer, AnswerSheetEntry, Citation, EvidenceLevel, QualityBand, StudyDesign,
};

fn citation(id: &str, pub_type: &str, title: &str) -> Citation {
    Citation {
        identifier: id.to_string(),
        publication_types: vec![pub_type.to_string()],
        title: Some(title.to_string()),
        first_author: Some(format!("Author-{id}")),
        year: Some(2020),
        ..Default::default()
    }
}

fn sheet_entry(id: &str, met: &[&str]) -> AnswerSheetEntry {
    AnswerSheetEntry {
        identifier: id.to_string(),
        category: None,
        answers: met.iter().map(|name| ((*name).to_string(), Answer::Met)).collect(),
    }
}

#[test]
fn report_orders_by_level_then_score_then_input() {
    let citations = vec![
        citation("case-report", "Case Reports", "A case"),
        citation("weak-rct", "Randomized Controlled Trial", "Weak trial"),
        citation("meta", "Meta-Analysis", "A meta-analysis"),
        citation("strong-rct", "Randomized Controlled Trial", "Strong trial"),
        citation("unscored-rct", "Randomized Controlled Trial", "Unscored trial"),
    ];

    // strong-rct: 95, weak-rct: 60, unscored-rct has no sheet entry.
    let sheet = vec![
        sheet_entry(
            "weak-rct",
            &["randomization", "blinding", "follow-up", "outcome-measurement"],
        ),
        sheet_entry(
            "strong-rct",
            &[
                "randomization",
                "blinding",
                "follow-up",
                "baseline",
                "equal-treatment",
                "outcome-measurement",
                "statistical-analysis",
            ],
        ),
        sheet_entry("meta", &["search-strategy"]),
    ];

    let report = assemble(appraise_all(citations, &sheet, false));

    let order: Vec<&str> = report.entries.iter().map(|e| e.citation.identifier.as_str()).collect();
    assert_eq!(order, vec!["meta", "strong-rct", "weak-rct", "unscored-rct", "case-report"]);

    assert_eq!(report.entries[1].score(), Some(95));
    assert_eq!(report.entries[2].score(), Some(60));
    assert_eq!(report.count_for(EvidenceLevel::RandomizedTrial), 3);
    assert_eq!(report.total, 5);
}

#[test]
fn failed_scoring_keeps_entry_in_counts() {
    let citations = vec![
        citation("ok", "Cohort Study", "Fine cohort"),
        citation("bad", "Cohort Study", "Bad category"),
    ];
    let mut bad_entry = sheet_entry("bad", &[]);
    bad_entry.category = Some("cross-sectional".to_string());
    let sheet = vec![sheet_entry("ok", &["follow-up"]), bad_entry];

    let report = assemble(appraise_all(citations, &sheet, false));

    assert_eq!(report.count_for(EvidenceLevel::Cohort), 2);
    let bad = report.entries.iter().find(|e| e.citation.identifier == "bad").unwrap();
    assert!(bad.appraisal.is_none());
    assert!(bad.scoring_error.as_deref().unwrap().contains("cross-sectional"));

    // The failed entry surfaces in the rendered report too.
    let rendered = formatters::format_report(&report);
    assert!(rendered.contains("## Not Scored"));
    assert!(rendered.contains("bad:"));
}

#[test]
fn explicit_sheet_category_overrides_level() {
    // A citation classified Level 5 can still be scored when the sheet
    // names a checklist for it.
    let citations = vec![citation("series", "Case Series", "A series")];
    let mut entry = sheet_entry("series", &[]);
    entry.category = Some("case-control".to_string());
    entry.answers.insert("case-definition".to_string(), Answer::Met);

    let report = assemble(appraise_all(citations, &[entry], false));
    let appraisal = report.entries[0].appraisal.as_ref().unwrap();
    assert_eq!(appraisal.category, StudyDesign::CaseControl);
    assert_eq!(appraisal.total_score, 15);
}

#[test]
fn auto_mode_scores_untagged_sheets() {
    let mut c = citation("auto", "Randomized Controlled Trial", "Auto trial");
    c.abstract_text = Some(
        "Participants were randomly assigned in this double-blind study; \
         groups were similar at baseline and analysis used a t-test. \
         Loss to follow-up: 5 percent. No conflict of interest."
            .to_string(),
    );

    let report = assemble(appraise_all(vec![c], &[], true));
    let appraisal = report.entries[0].appraisal.as_ref().unwrap();
    assert_eq!(appraisal.category, StudyDesign::Rct);
    // randomization + blinding + baseline + statistical-analysis +
    // follow-up + conflicts-of-interest = 15+15+10+15+15+5 = 75
    assert_eq!(appraisal.total_score, 75);
    assert_eq!(appraisal.quality_band, QualityBand::Moderate);
}

#[test]
fn json_report_round_trips_entries() {
    let citations = vec![citation("r1", "Meta-Analysis", "Round trip")];
    let report = assemble(appraise_all(citations, &[], false));

    let value = formatters::report_json(&report);
    assert_eq!(value["total"], 1);
    assert_eq!(value["entries"][0]["identifier"], "r1");
    assert_eq!(value["entries"][0]["level"], 1);

    // Full entries survive serde round-trips for file output.
    let json = serde_json::to_string(&report.entries).unwrap();
    let back: Vec<ebm_appraisal::ReportEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].citation.identifier, "r1");
    assert_eq!(back[0].level(), EvidenceLevel::SystematicReview);
}

#[test]
fn markdown_report_contains_all_sections() {
    let citations = vec![
        citation("m", "Meta-Analysis", "The meta"),
        citation("c", "Case Reports", "The case"),
    ];
    let report = assemble(appraise_all(citations, &[sheet_entry("m", &["search-strategy"])], false));

    let rendered = formatters::format_report(&report);
    assert!(rendered.contains("# Evidence Pyramid Summary"));
    assert!(rendered.contains("## Top Evidence (Levels 1-2)"));
    assert!(rendered.contains("## Evidence Table"));
    assert!(rendered.contains("## Critical Appraisal"));
    assert!(rendered.contains("| 5 | Case Series / Case Report |"));
}

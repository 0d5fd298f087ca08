//! The classification and appraisal engine.
//!
//! Three stateless, single-pass transforms: the evidence-level
//! classifier, the JBI scorer, and the report assembler. Each citation
//! is processed independently; a failure on one never aborts the batch.

pub mod assembler;
pub mod classifier;
pub mod criteria;
pub mod heuristics;
pub mod scorer;

pub use assembler::{Report, ReportEntry, assemble};
pub use classifier::{Classification, classify, classify_by_text, classify_citation};
pub use criteria::{Criterion, criteria_for};
pub use heuristics::derive_answers;
pub use scorer::{AppraisalResult, score, score_named};

use crate::error::EngineError;
use crate::models::{AnswerSheetEntry, Citation, StudyDesign};

/// Run the full pipeline over a batch: classify every citation, score
/// the ones that can be scored, and collect per-entry outcomes.
///
/// Answer sheets are matched by citation identifier. A sheet entry may
/// name its own category; otherwise the category implied by the
/// citation's evidence level is used, and level-5/6 citations without
/// an explicit category are left unscored. With `auto` set, citations
/// lacking sheet answers are scored from text-derived answers instead.
///
/// Scoring failures (an unknown category string in the sheet) are
/// recorded on the entry and never propagate to the rest of the batch.
#[must_use]
pub fn appraise_all(
    citations: Vec<Citation>,
    sheet: &[AnswerSheetEntry],
    auto: bool,
) -> Vec<ReportEntry> {
    citations
        .into_iter()
        .map(|citation| {
            let classification = classify_citation(&citation);

            let sheet_entry = sheet.iter().find(|e| e.identifier == citation.identifier);
            let implied = classification.level.study_design();

            let (appraisal, scoring_error) = match sheet_entry {
                Some(entry) => {
                    let category = match entry.category.as_deref() {
                        Some(name) => name.parse::<StudyDesign>().map(Some),
                        None => Ok(implied),
                    };
                    match category {
                        Ok(Some(design)) => (Some(score(design, &entry.answers)), None),
                        Ok(None) => {
                            // An answer sheet targeted a citation whose
                            // level has no checklist; say so rather than
                            // dropping the answers silently.
                            let err = EngineError::Unscoreable { level: classification.level };
                            (None, Some(err.to_string()))
                        }
                        Err(err) => {
                            tracing::warn!(
                                identifier = %citation.identifier,
                                error = %err,
                                "scoring failed, entry kept unscored"
                            );
                            (None, Some(err.to_string()))
                        }
                    }
                }
                None if auto => match implied {
                    Some(design) => {
                        let answers = derive_answers(design, &citation.combined_text());
                        (Some(score(design, &answers)), None)
                    }
                    None => (None, None),
                },
                None => (None, None),
            };

            ReportEntry { citation, classification, appraisal, scoring_error }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, EvidenceLevel};
    use std::collections::BTreeMap;

    fn rct_citation(id: &str) -> Citation {
        Citation {
            identifier: id.to_string(),
            publication_types: vec!["Randomized Controlled Trial".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_appraise_all_with_sheet() {
        let mut answers = BTreeMap::new();
        answers.insert("randomization".to_string(), Answer::Met);
        let sheet = vec![AnswerSheetEntry {
            identifier: "a".to_string(),
            category: None,
            answers,
        }];

        let entries = appraise_all(vec![rct_citation("a")], &sheet, false);
        let appraisal = entries[0].appraisal.as_ref().unwrap();
        assert_eq!(appraisal.category, StudyDesign::Rct);
        assert_eq!(appraisal.total_score, 15);
    }

    #[test]
    fn test_appraise_all_bad_category_marks_entry_only() {
        let sheet = vec![
            AnswerSheetEntry {
                identifier: "a".to_string(),
                category: Some("unknown-design".to_string()),
                answers: BTreeMap::new(),
            },
            AnswerSheetEntry {
                identifier: "b".to_string(),
                category: Some("rct".to_string()),
                answers: BTreeMap::new(),
            },
        ];

        let entries = appraise_all(vec![rct_citation("a"), rct_citation("b")], &sheet, false);
        assert!(entries[0].appraisal.is_none());
        assert!(entries[0].scoring_error.as_deref().unwrap().contains("unknown-design"));
        // The rest of the batch is unaffected.
        assert!(entries[1].appraisal.is_some());
        assert!(entries[1].scoring_error.is_none());
    }

    #[test]
    fn test_appraise_all_auto_derives_answers() {
        let citation = Citation {
            identifier: "c".to_string(),
            publication_types: vec!["Randomized Controlled Trial".to_string()],
            abstract_text: Some("A double-blind randomized study. P-value < 0.05.".to_string()),
            ..Default::default()
        };
        let entries = appraise_all(vec![citation], &[], true);
        let appraisal = entries[0].appraisal.as_ref().unwrap();
        assert!(appraisal.total_score > 0);
    }

    #[test]
    fn test_appraise_all_flags_sheet_for_unscoreable_level() {
        let citation = Citation {
            identifier: "e".to_string(),
            publication_types: vec!["Case Reports".to_string()],
            ..Default::default()
        };
        let sheet = vec![AnswerSheetEntry {
            identifier: "e".to_string(),
            category: None,
            answers: BTreeMap::new(),
        }];
        let entries = appraise_all(vec![citation], &sheet, false);
        assert!(entries[0].appraisal.is_none());
        assert!(entries[0].scoring_error.as_deref().unwrap().contains("no checklist"));
    }

    #[test]
    fn test_appraise_all_skips_unscoreable_levels() {
        let citation = Citation {
            identifier: "d".to_string(),
            publication_types: vec!["Case Reports".to_string()],
            ..Default::default()
        };
        let entries = appraise_all(vec![citation], &[], true);
        assert_eq!(entries[0].level(), EvidenceLevel::CaseSeries);
        assert!(entries[0].appraisal.is_none());
        assert!(entries[0].scoring_error.is_none());
    }
}

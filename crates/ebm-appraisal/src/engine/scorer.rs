//! JBI appraisal scorer.
//!
//! Pure snapshot of its inputs: a study-design category selects a fixed
//! criteria table, met criteria earn their weights, and the total maps
//! to a quality band through the shared thresholds. Missing answers are
//! recorded as "unclear" and contribute nothing; they never error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::criteria;
use crate::error::EngineResult;
use crate::models::{Answer, QualityBand, StudyDesign};

/// The outcome of appraising one citation against a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraisalResult {
    /// Checklist the citation was scored against.
    pub category: StudyDesign,

    /// Answer per criterion, in table order. Criteria absent from the
    /// caller's answers appear here as `Unclear` so the audit trail is
    /// complete.
    pub answers: BTreeMap<String, Answer>,

    /// Sum of weights for met criteria, 0-100.
    pub total_score: u8,

    /// Band derived from `total_score`.
    pub quality_band: QualityBand,

    /// Number of criteria answered `Met`.
    pub criteria_met: usize,

    /// Number of criteria in the checklist.
    pub criteria_total: usize,
}

/// Score a citation against the checklist for `category`.
///
/// Total over all answer maps: unknown answer keys are ignored, missing
/// criteria default to `Unclear`, and the result is identical for
/// identical inputs.
#[must_use]
pub fn score(category: StudyDesign, answers: &BTreeMap<String, Answer>) -> AppraisalResult {
    let table = criteria::criteria_for(category);

    let mut recorded = BTreeMap::new();
    let mut total_score: u8 = 0;
    let mut criteria_met = 0;

    for criterion in table {
        let answer = answers.get(criterion.name).copied().unwrap_or_default();
        if answer.is_met() {
            total_score += criterion.weight;
            criteria_met += 1;
        }
        recorded.insert(criterion.name.to_string(), answer);
    }

    AppraisalResult {
        category,
        answers: recorded,
        total_score,
        quality_band: QualityBand::from_score(total_score),
        criteria_met,
        criteria_total: table.len(),
    }
}

/// Score against a category named by a free string, as received from an
/// answer sheet or CLI argument.
///
/// # Errors
///
/// Returns [`EngineError::InvalidCategory`] when `category` names none
/// of the supported checklists. Unlike the classifier there is no
/// silent fallback here: an unknown category has no weight table to
/// score against.
pub fn score_named(
    category: &str,
    answers: &BTreeMap<String, Answer>,
) -> EngineResult<AppraisalResult> {
    let design: StudyDesign = category.parse()?;
    Ok(score(design, answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn answers(pairs: &[(&str, Answer)]) -> BTreeMap<String, Answer> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    fn all_met(category: StudyDesign) -> BTreeMap<String, Answer> {
        criteria::criteria_for(category)
            .iter()
            .map(|c| (c.name.to_string(), Answer::Met))
            .collect()
    }

    #[test]
    fn test_all_met_scores_100_high() {
        for category in StudyDesign::ALL {
            let result = score(category, &all_met(category));
            assert_eq!(result.total_score, 100);
            assert_eq!(result.quality_band, QualityBand::High);
            assert_eq!(result.criteria_met, result.criteria_total);
        }
    }

    #[test]
    fn test_empty_answers_scores_zero_low() {
        let result = score(StudyDesign::Rct, &BTreeMap::new());
        assert_eq!(result.total_score, 0);
        assert_eq!(result.quality_band, QualityBand::Low);
        assert_eq!(result.criteria_met, 0);
        // Every criterion is still recorded, as unclear.
        assert_eq!(result.answers.len(), result.criteria_total);
        assert!(result.answers.values().all(|a| *a == Answer::Unclear));
    }

    #[test]
    fn test_not_met_and_unclear_score_identically() {
        let not_met = score(
            StudyDesign::Rct,
            &answers(&[("randomization", Answer::Met), ("blinding", Answer::NotMet)]),
        );
        let unclear = score(
            StudyDesign::Rct,
            &answers(&[("randomization", Answer::Met), ("blinding", Answer::Unclear)]),
        );
        assert_eq!(not_met.total_score, unclear.total_score);
        // But the audit trail keeps them distinct.
        assert_eq!(not_met.answers["blinding"], Answer::NotMet);
        assert_eq!(unclear.answers["blinding"], Answer::Unclear);
    }

    #[test]
    fn test_unknown_answer_keys_ignored() {
        let result = score(
            StudyDesign::Cohort,
            &answers(&[("randomization", Answer::Met), ("follow-up", Answer::Met)]),
        );
        // "randomization" is not a cohort criterion; only follow-up counts.
        assert_eq!(result.total_score, 15);
        assert!(!result.answers.contains_key("randomization"));
    }

    #[test]
    fn test_score_idempotent() {
        let input = answers(&[("search-strategy", Answer::Met), ("data-extraction", Answer::Met)]);
        let a = score(StudyDesign::SystematicReview, &input);
        let b = score(StudyDesign::SystematicReview, &input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_named_invalid_category() {
        let err = score_named("unknown-design", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidCategory { .. }));
    }

    #[test]
    fn test_score_named_accepts_kebab_names() {
        let result = score_named("case-control", &BTreeMap::new()).unwrap();
        assert_eq!(result.category, StudyDesign::CaseControl);
    }
}

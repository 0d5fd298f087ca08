//! Best-effort criterion answers derived from title/abstract text.
//!
//! Abstracts rarely state checklist answers outright, so this module
//! scans for the reporting language that usually accompanies each
//! criterion. Absence of evidence is not evidence of absence: a missed
//! keyword yields `Unclear`, never `NotMet`. These derived answers feed
//! the same scorer as hand-filled answer sheets.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::criteria;
use crate::models::{Answer, StudyDesign};

/// Reported loss to follow-up below this percentage counts as adequate.
const FOLLOW_UP_LOSS_MAX: u32 = 20;

static FOLLOW_UP_LOSS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"loss to follow[- ]up[:\s]+(\d+)").expect("follow-up pattern is valid")
});

/// Terms indicating any recognizable statistical analysis.
const STATISTICAL_TERMS: &[&str] = &[
    "p value",
    "p-value",
    "statistically significant",
    "confidence interval",
    "odds ratio",
    "relative risk",
    "hazard ratio",
    "regression",
    "anova",
    "t-test",
];

/// Terms indicating a declared conflict-of-interest statement.
const CONFLICT_TERMS: &[&str] = &["conflict of interest", "no conflict", "disclosures"];

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Adequate follow-up: either an explicit loss figure under the cap, or
/// completeness language.
fn follow_up_adequate(text: &str) -> bool {
    if let Some(caps) = FOLLOW_UP_LOSS.captures(text) {
        if let Ok(loss) = caps[1].parse::<u32>() {
            if loss < FOLLOW_UP_LOSS_MAX {
                return true;
            }
        }
    }
    contains_any(text, &["complete follow-up", "followed up", "no loss to follow"])
}

/// Keyword evidence for one criterion of one checklist. Criterion names
/// here must stay in sync with the tables in [`criteria`].
fn criterion_present(design: StudyDesign, name: &str, text: &str) -> bool {
    match (design, name) {
        // Shared criteria.
        (_, "statistical-analysis") => contains_any(text, STATISTICAL_TERMS),
        (_, "conflicts-of-interest") => contains_any(text, CONFLICT_TERMS),
        (StudyDesign::Rct | StudyDesign::Cohort, "follow-up") => follow_up_adequate(text),

        // RCT checklist.
        (StudyDesign::Rct, "randomization") => contains_any(
            text,
            &["random", "randomized", "randomised", "randomly assigned", "random allocation"],
        ),
        (StudyDesign::Rct, "blinding") => contains_any(
            text,
            &["double-blind", "single-blind", "blinded", "blinding", "masked"],
        ),
        (StudyDesign::Rct, "baseline") => contains_any(
            text,
            &[
                "baseline characteristics",
                "similar at baseline",
                "no significant difference at baseline",
                "balanced",
            ],
        ),
        (StudyDesign::Rct, "equal-treatment") => {
            contains_any(text, &["co-intervention", "equal treatment", "except for intervention"])
        }
        (StudyDesign::Rct, "outcome-measurement") => {
            contains_any(text, &["validated", "reliable measure", "standardized measure"])
        }

        // Systematic-review checklist.
        (StudyDesign::SystematicReview, "question-definition") => contains_any(
            text,
            &["objective", "research question", "aim of this review", "purpose of this review"],
        ),
        (StudyDesign::SystematicReview, "inclusion-criteria") => contains_any(
            text,
            &["inclusion criteria", "eligibility criteria", "inclusion and exclusion"],
        ),
        (StudyDesign::SystematicReview, "search-strategy") => contains_any(
            text,
            &[
                "comprehensive search",
                "multiple databases",
                "medline",
                "pubmed",
                "embase",
                "cochrane",
                "systematic search",
            ],
        ),
        (StudyDesign::SystematicReview, "study-selection") => contains_any(
            text,
            &["independent selection", "two reviewers", "two independent reviewers"],
        ),
        (StudyDesign::SystematicReview, "quality-assessment") => contains_any(
            text,
            &["quality assessment", "risk of bias", "critical appraisal", "methodological quality"],
        ),
        (StudyDesign::SystematicReview, "data-extraction") => {
            contains_any(text, &["independent extraction", "two reviewers", "data extraction"])
        }
        (StudyDesign::SystematicReview, "synthesis-methods") => contains_any(
            text,
            &["meta-analysis", "pooled", "heterogeneity", "publication bias", "sensitivity analysis"],
        ),

        // Cohort checklist.
        (StudyDesign::Cohort, "representative-sample") => {
            contains_any(text, &["representative", "consecutive", "population-based"])
        }
        (StudyDesign::Cohort, "exposure-groups") => contains_any(
            text,
            &["exposure group", "exposed group", "unexposed", "comparison group"],
        ),
        (StudyDesign::Cohort, "confounding-identified") => contains_any(text, &["confound"]),
        (StudyDesign::Cohort, "confounding-controlled") => contains_any(
            text,
            &["adjusted", "multivariate", "regression", "propensity score", "matched", "stratified"],
        ),
        (StudyDesign::Cohort, "outcome-measurement") => {
            contains_any(text, &["objective outcome", "standardized", "validated"])
        }

        // Case-control checklist.
        (StudyDesign::CaseControl, "case-definition") => {
            contains_any(text, &["case definition", "cases defined", "inclusion criteria"])
        }
        (StudyDesign::CaseControl, "case-representativeness") => {
            contains_any(text, &["consecutive", "all cases", "population-based"])
        }
        (StudyDesign::CaseControl, "control-selection") => contains_any(
            text,
            &["matched", "control group", "comparison group", "same population"],
        ),
        (StudyDesign::CaseControl, "exposure-measurement") => {
            contains_any(text, &["standardized", "validated", "blinded assessment"])
        }
        (StudyDesign::CaseControl, "confounding-controlled") => contains_any(
            text,
            &["adjusted", "multivariate", "regression", "matched", "stratified"],
        ),

        _ => false,
    }
}

/// Derive criterion answers for `design` from lowercased article text.
///
/// Produces only `Met` or `Unclear`; a keyword miss is indistinct from
/// unreported, so it is never recorded as `NotMet`.
#[must_use]
pub fn derive_answers(design: StudyDesign, text: &str) -> BTreeMap<String, Answer> {
    criteria::criteria_for(design)
        .iter()
        .map(|criterion| {
            let answer = if criterion_present(design, criterion.name, text) {
                Answer::Met
            } else {
                Answer::Unclear
            };
            (criterion.name.to_string(), answer)
        })
        .collect()
}

//! Fixed JBI criteria tables, one per supported study-design category.
//!
//! Each table is a versioned, immutable lookup: criterion name, the
//! checklist question it encodes, and an integer point weight. Weights
//! within a table sum to exactly 100, so a raw sum of met-criterion
//! weights is already a percentage score.

use crate::models::StudyDesign;

/// One checklist item for a study-design category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    /// Stable kebab-case name used in answer sheets.
    pub name: &'static str,
    /// The appraisal question this criterion encodes.
    pub question: &'static str,
    /// Point weight; weights for one category sum to 100.
    pub weight: u8,
}

const fn criterion(name: &'static str, question: &'static str, weight: u8) -> Criterion {
    Criterion { name, question, weight }
}

/// Randomized controlled trial checklist.
pub const RCT: &[Criterion] = &[
    criterion("randomization", "Was true randomization used for group assignment?", 15),
    criterion("blinding", "Were participants, personnel, and assessors blinded?", 15),
    criterion("follow-up", "Was follow-up complete (loss under 20%)?", 15),
    criterion("baseline", "Were groups similar at baseline?", 10),
    criterion("equal-treatment", "Were groups treated identically apart from the intervention?", 10),
    criterion("outcome-measurement", "Were outcomes measured reliably and in the same way?", 15),
    criterion("statistical-analysis", "Was appropriate statistical analysis used?", 15),
    criterion("conflicts-of-interest", "Were conflicts of interest declared?", 5),
];

/// Systematic review / meta-analysis checklist.
pub const SYSTEMATIC_REVIEW: &[Criterion] = &[
    criterion("question-definition", "Was the review question clearly defined?", 10),
    criterion("inclusion-criteria", "Were appropriate inclusion criteria defined?", 10),
    criterion("search-strategy", "Was the search strategy comprehensive?", 20),
    criterion("study-selection", "Were studies selected by independent reviewers?", 10),
    criterion("quality-assessment", "Was the quality of included studies assessed?", 15),
    criterion("data-extraction", "Was data extracted independently?", 10),
    criterion("synthesis-methods", "Were appropriate synthesis methods used?", 15),
    criterion("conflicts-of-interest", "Were conflicts of interest declared?", 10),
];

/// Cohort study checklist.
pub const COHORT: &[Criterion] = &[
    criterion("representative-sample", "Was the sample representative of the population?", 10),
    criterion("exposure-groups", "Were exposure groups clearly defined?", 15),
    criterion("confounding-identified", "Were confounding factors identified?", 10),
    criterion("confounding-controlled", "Were strategies to deal with confounding used?", 10),
    criterion("outcome-measurement", "Were outcomes measured objectively?", 20),
    criterion("follow-up", "Was follow-up long enough and complete?", 15),
    criterion("statistical-analysis", "Was appropriate statistical analysis used?", 15),
    criterion("conflicts-of-interest", "Were conflicts of interest declared?", 5),
];

/// Case-control study checklist.
pub const CASE_CONTROL: &[Criterion] = &[
    criterion("case-definition", "Were cases clearly defined?", 15),
    criterion("case-representativeness", "Were cases representative?", 10),
    criterion("control-selection", "Were controls appropriately selected?", 20),
    criterion("exposure-measurement", "Was exposure assessed objectively?", 20),
    criterion("confounding-controlled", "Were confounding factors controlled for?", 15),
    criterion("statistical-analysis", "Was appropriate statistical analysis used?", 10),
    criterion("conflicts-of-interest", "Were conflicts of interest declared?", 10),
];

/// The criteria table for a study-design category.
#[must_use]
pub const fn criteria_for(design: StudyDesign) -> &'static [Criterion] {
    match design {
        StudyDesign::Rct => RCT,
        StudyDesign::SystematicReview => SYSTEMATIC_REVIEW,
        StudyDesign::Cohort => COHORT,
        StudyDesign::CaseControl => CASE_CONTROL,
    }
}

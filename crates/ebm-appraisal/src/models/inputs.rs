//! File-based input models for the CLI adapter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Answer;

/// One entry in an answer-sheet file: criterion answers for a single
/// citation, keyed by its identifier.
///
/// The `category` is a free string at this boundary; it is validated
/// against the supported checklists when the sheet is applied, so an
/// unknown category fails that one citation's scoring rather than the
/// whole file parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSheetEntry {
    /// Identifier of the citation these answers belong to.
    pub identifier: String,

    /// Study-design category naming the checklist to score against
    /// (e.g., "rct", "cohort"). When absent, the category implied by
    /// the citation's evidence level is used.
    #[serde(default)]
    pub category: Option<String>,

    /// Criterion name -> answer. Criteria not listed default to
    /// "unclear"; unknown names are ignored.
    #[serde(default)]
    pub answers: BTreeMap<String, Answer>,
}

/// A whole answer sheet: a list of per-citation entries.
pub type AnswerSheet = Vec<AnswerSheetEntry>;

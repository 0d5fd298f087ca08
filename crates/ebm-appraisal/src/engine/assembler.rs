//! Report assembly: merge classified and scored citations into an
//! ordered table with per-level counts.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::classifier::Classification;
use super::scorer::AppraisalResult;
use crate::models::{Citation, EvidenceLevel};

/// One citation with everything the pipeline produced for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// The record under evaluation.
    pub citation: Citation,

    /// Assigned evidence level and how it was determined.
    pub classification: Classification,

    /// Appraisal outcome, when criterion answers were available and the
    /// category was scoreable.
    #[serde(default)]
    pub appraisal: Option<AppraisalResult>,

    /// Why scoring failed, when it did. The entry still counts toward
    /// its level; it is never dropped silently.
    #[serde(default)]
    pub scoring_error: Option<String>,
}

impl ReportEntry {
    /// Evidence level shorthand.
    #[must_use]
    pub const fn level(&self) -> EvidenceLevel {
        self.classification.level
    }

    /// Quality score, when scored.
    #[must_use]
    pub fn score(&self) -> Option<u8> {
        self.appraisal.as_ref().map(|a| a.total_score)
    }
}

/// The assembled analysis: per-level counts plus the ordered entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Total citations, scored or not.
    pub total: usize,

    /// Citation count per evidence level rank (1-6); levels with no
    /// citations are omitted.
    pub level_counts: BTreeMap<u8, usize>,

    /// Entries ordered by the assembly contract.
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Count for one level (zero when absent).
    #[must_use]
    pub fn count_for(&self, level: EvidenceLevel) -> usize {
        self.level_counts.get(&level.rank()).copied().unwrap_or(0)
    }

    /// Top-of-pyramid entries (levels 1-2), at most `max`.
    #[must_use]
    pub fn top_evidence(&self, max: usize) -> Vec<&ReportEntry> {
        self.entries
            .iter()
            .filter(|e| e.level() <= EvidenceLevel::RandomizedTrial)
            .take(max)
            .collect()
    }

    /// Entries within an inclusive level-rank range.
    #[must_use]
    pub fn filter_by_level(&self, min_rank: u8, max_rank: u8) -> Vec<&ReportEntry> {
        self.entries
            .iter()
            .filter(|e| (min_rank..=max_rank).contains(&e.level().rank()))
            .collect()
    }
}

/// Assemble entries into an ordered report.
///
/// Ordering contract: grouped by evidence level ascending; within a
/// level, scored entries come first ranked by total score descending,
/// then unscored entries in their input order. The sort is stable, so
/// score ties and unscored runs both preserve input order.
#[must_use]
pub fn assemble(mut entries: Vec<ReportEntry>) -> Report {
    let mut level_counts: BTreeMap<u8, usize> = BTreeMap::new();
    for entry in &entries {
        *level_counts.entry(entry.level().rank()).or_default() += 1;
    }

    entries.sort_by_key(|entry| {
        let scored_rank = match entry.score() {
            Some(score) => (0u8, Reverse(score)),
            None => (1u8, Reverse(0)),
        };
        (entry.level().rank(), scored_rank)
    });

    Report { total: entries.len(), level_counts, entries }
}

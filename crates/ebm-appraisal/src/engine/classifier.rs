//! Evidence-pyramid classifier.
//!
//! The deterministic contract is [`classify`]: publication-type tags in,
//! evidence level out, fixed priority order, first match wins. The full
//! pipeline [`classify_citation`] adds the best-effort title/abstract
//! keyword fallback and the configured default level, and records which
//! path produced the answer.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{Citation, ClassificationOrigin, EvidenceLevel};

/// Publication-type needles per level, in priority order. Matching is
/// case-insensitive substring containment, so a tag like
/// "Meta-Analysis as Topic" still matches the "meta-analysis" needle.
const TYPE_NEEDLES: [(EvidenceLevel, &[&str]); 6] = [
    (EvidenceLevel::SystematicReview, &["meta-analysis", "systematic review"]),
    (
        EvidenceLevel::RandomizedTrial,
        &[
            "randomized controlled trial",
            "controlled clinical trial",
            "pragmatic clinical trial",
            "clinical trial",
        ],
    ),
    (
        EvidenceLevel::Cohort,
        &[
            "cohort study",
            "follow-up study",
            "longitudinal studies",
            "observational study",
            "prospective study",
        ],
    ),
    (
        EvidenceLevel::CaseControl,
        &["case-control studies", "case-control study", "retrospective studies"],
    ),
    (EvidenceLevel::CaseSeries, &["case reports", "case series"]),
    (
        EvidenceLevel::Preclinical,
        &["animal experiment", "animal model", "in vitro", "animals"],
    ),
];

/// Title/abstract keyword needles per level, for the fallback path.
/// A bare "clinical trial" mention is checked last of all so that the
/// more specific designs get first claim on the text.
const TEXT_NEEDLES: [(EvidenceLevel, &[&str]); 6] = [
    (
        EvidenceLevel::SystematicReview,
        &[
            "meta-analysis",
            "meta analysis",
            "systematic review",
            "systematic literature review",
            "pooled analysis",
        ],
    ),
    (
        EvidenceLevel::RandomizedTrial,
        &[
            "randomized",
            "randomised",
            "rct",
            "double-blind",
            "double blind",
            "single-blind",
            "single blind",
            "placebo-controlled",
        ],
    ),
    (
        EvidenceLevel::Cohort,
        &["cohort", "prospective study", "prospective follow-up", "longitudinal"],
    ),
    (EvidenceLevel::CaseControl, &["case-control", "case control", "retrospective cohort"]),
    (EvidenceLevel::CaseSeries, &["case report", "case series", "single case"]),
    (
        EvidenceLevel::Preclinical,
        &["animal", "mouse", "rat", "in vitro", "cell line", "experimental model"],
    ),
];

/// A citation's assigned evidence level plus how it was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Assigned pyramid level.
    pub level: EvidenceLevel,
    /// Which path assigned it.
    pub origin: ClassificationOrigin,
}

impl Classification {
    /// True when the level was inferred rather than matched from a
    /// publication-type tag (the advisory ambiguity signal).
    #[must_use]
    pub const fn is_inferred(self) -> bool {
        self.origin.is_inferred()
    }
}

/// Classify a set of publication-type tags.
///
/// Pure and total: comparison is case-insensitive, tag order is
/// irrelevant, and an empty or unrecognized set yields `None` rather
/// than an error. The priority order is the contract; a record tagged
/// both "meta-analysis" and "case reports" is Level 1.
#[must_use]
pub fn classify<S: AsRef<str>>(publication_types: &[S]) -> Option<EvidenceLevel> {
    let lowered: Vec<String> =
        publication_types.iter().map(|t| t.as_ref().to_lowercase()).collect();

    for (level, needles) in TYPE_NEEDLES {
        for needle in needles {
            if lowered.iter().any(|tag| tag.contains(needle)) {
                return Some(level);
            }
        }
    }
    None
}

/// Best-effort level from title/abstract keywords. Not part of the
/// deterministic contract; only consulted when the tag set matched
/// nothing.
#[must_use]
pub fn classify_by_text(text: &str) -> Option<EvidenceLevel> {
    for (level, needles) in TEXT_NEEDLES {
        if needles.iter().any(|needle| text.contains(needle)) {
            return Some(level);
        }
    }

    // Untagged trial reports often say only "clinical trial".
    if text.contains("clinical trial") {
        return Some(EvidenceLevel::RandomizedTrial);
    }
    None
}

/// Full classification pipeline for one citation: publication types,
/// then text keywords, then the configured default level.
#[must_use]
pub fn classify_citation(citation: &Citation) -> Classification {
    if let Some(level) = classify(&citation.publication_types) {
        return Classification { level, origin: ClassificationOrigin::PublicationType };
    }

    if let Some(level) = classify_by_text(&citation.combined_text()) {
        tracing::debug!(
            identifier = %citation.identifier,
            level = level.rank(),
            "level inferred from title/abstract keywords"
        );
        return Classification { level, origin: ClassificationOrigin::AbstractText };
    }

    tracing::debug!(
        identifier = %citation.identifier,
        level = config::DEFAULT_UNMATCHED_LEVEL.rank(),
        "no design signal found, applying default level"
    );
    Classification {
        level: config::DEFAULT_UNMATCHED_LEVEL,
        origin: ClassificationOrigin::Default,
    }
}

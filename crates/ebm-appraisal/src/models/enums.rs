//! Enumeration types shared by the engine and the CLI adapter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Ordinal rank on the evidence pyramid, 1 (strongest) to 6 (weakest).
///
/// Declaration order matches the pyramid, so the derived `Ord` sorts
/// stronger evidence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceLevel {
    /// Level 1: systematic review or meta-analysis.
    SystematicReview,
    /// Level 2: randomized controlled trial (any clinical-trial variant).
    RandomizedTrial,
    /// Level 3: cohort, follow-up, longitudinal, or observational study.
    Cohort,
    /// Level 4: case-control or retrospective study.
    CaseControl,
    /// Level 5: case report or case series.
    CaseSeries,
    /// Level 6: animal research or in-vitro work.
    Preclinical,
}

impl EvidenceLevel {
    /// All levels in pyramid order.
    pub const ALL: [Self; 6] = [
        Self::SystematicReview,
        Self::RandomizedTrial,
        Self::Cohort,
        Self::CaseControl,
        Self::CaseSeries,
        Self::Preclinical,
    ];

    /// Numeric rank, 1-6.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::SystematicReview => 1,
            Self::RandomizedTrial => 2,
            Self::Cohort => 3,
            Self::CaseControl => 4,
            Self::CaseSeries => 5,
            Self::Preclinical => 6,
        }
    }

    /// Level from its numeric rank.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::SystematicReview),
            2 => Some(Self::RandomizedTrial),
            3 => Some(Self::Cohort),
            4 => Some(Self::CaseControl),
            5 => Some(Self::CaseSeries),
            6 => Some(Self::Preclinical),
            _ => None,
        }
    }

    /// Human-readable pyramid label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SystematicReview => "Systematic Review & Meta-Analysis",
            Self::RandomizedTrial => "Randomized Controlled Trial",
            Self::Cohort => "Cohort Study",
            Self::CaseControl => "Case-Control Study",
            Self::CaseSeries => "Case Series / Case Report",
            Self::Preclinical => "Animal Research / In Vitro",
        }
    }

    /// The JBI checklist applicable to this level, if one exists.
    ///
    /// Levels 5 and 6 have no checklist and are never scored.
    #[must_use]
    pub const fn study_design(self) -> Option<StudyDesign> {
        match self {
            Self::SystematicReview => Some(StudyDesign::SystematicReview),
            Self::RandomizedTrial => Some(StudyDesign::Rct),
            Self::Cohort => Some(StudyDesign::Cohort),
            Self::CaseControl => Some(StudyDesign::CaseControl),
            Self::CaseSeries | Self::Preclinical => None,
        }
    }
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {} ({})", self.rank(), self.label())
    }
}

/// Study-design category with a supported JBI checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudyDesign {
    /// Randomized controlled trial checklist.
    Rct,
    /// Systematic review / meta-analysis checklist.
    SystematicReview,
    /// Cohort study checklist.
    Cohort,
    /// Case-control study checklist.
    CaseControl,
}

impl StudyDesign {
    /// All supported checklists.
    pub const ALL: [Self; 4] =
        [Self::Rct, Self::SystematicReview, Self::Cohort, Self::CaseControl];

    /// The kebab-case name used in answer sheets and CLI arguments.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rct => "rct",
            Self::SystematicReview => "systematic-review",
            Self::Cohort => "cohort",
            Self::CaseControl => "case-control",
        }
    }
}

impl fmt::Display for StudyDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StudyDesign {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rct" | "randomized-controlled-trial" => Ok(Self::Rct),
            "systematic-review" | "meta-analysis" => Ok(Self::SystematicReview),
            "cohort" => Ok(Self::Cohort),
            "case-control" => Ok(Self::CaseControl),
            other => Err(EngineError::invalid_category(other)),
        }
    }
}

/// Answer to a single appraisal criterion.
///
/// `NotMet` and `Unclear` both contribute zero points; the distinction
/// is preserved for display and audit only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Answer {
    /// Criterion satisfied; contributes its full weight.
    Met,
    /// Criterion explicitly not satisfied; zero points.
    NotMet,
    /// Cannot be determined from the record; zero points.
    #[default]
    Unclear,
}

impl Answer {
    /// Whether this answer earns the criterion's weight.
    #[must_use]
    pub const fn is_met(self) -> bool {
        matches!(self, Self::Met)
    }

    /// Single-character mark used in rendered checklists.
    #[must_use]
    pub const fn mark(self) -> &'static str {
        match self {
            Self::Met => "✓",
            Self::NotMet => "✗",
            Self::Unclear => "?",
        }
    }
}

/// Quality band derived from a JBI score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityBand {
    /// Score >= 80.
    High,
    /// 60 <= score < 80.
    Moderate,
    /// Score < 60.
    Low,
}

impl QualityBand {
    /// Band for a 0-100 score, using the fixed shared thresholds.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= crate::config::thresholds::HIGH {
            Self::High
        } else if score >= crate::config::thresholds::MODERATE {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a citation's evidence level was determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationOrigin {
    /// Matched a publication-type tag (deterministic contract).
    #[default]
    PublicationType,
    /// Inferred from title/abstract keywords (best-effort).
    AbstractText,
    /// Nothing matched; the configured default level was applied.
    Default,
}

impl ClassificationOrigin {
    /// True when the level was inferred rather than matched, the
    /// advisory "ambiguous classification" condition.
    #[must_use]
    pub const fn is_inferred(self) -> bool {
        !matches!(self, Self::PublicationType)
    }
}

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

impl ResponseFormat {
    /// Check if this is markdown format.
    #[must_use]
    pub const fn is_markdown(self) -> bool {
        matches!(self, Self::Markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_rank_round_trip() {
        for level in EvidenceLevel::ALL {
            assert_eq!(EvidenceLevel::from_rank(level.rank()), Some(level));
        }
        assert_eq!(EvidenceLevel::from_rank(0), None);
        assert_eq!(EvidenceLevel::from_rank(7), None);
    }

    #[test]
    fn test_level_ordering_matches_pyramid() {
        assert!(EvidenceLevel::SystematicReview < EvidenceLevel::RandomizedTrial);
        assert!(EvidenceLevel::CaseSeries < EvidenceLevel::Preclinical);
    }

    #[test]
    fn test_study_design_parse() {
        assert_eq!("rct".parse::<StudyDesign>().unwrap(), StudyDesign::Rct);
        assert_eq!("Case-Control".parse::<StudyDesign>().unwrap(), StudyDesign::CaseControl);
        assert!("cross-sectional".parse::<StudyDesign>().is_err());
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(QualityBand::from_score(80), QualityBand::High);
        assert_eq!(QualityBand::from_score(79), QualityBand::Moderate);
        assert_eq!(QualityBand::from_score(60), QualityBand::Moderate);
        assert_eq!(QualityBand::from_score(59), QualityBand::Low);
    }

    #[test]
    fn test_unscoreable_levels_have_no_design() {
        assert!(EvidenceLevel::CaseSeries.study_design().is_none());
        assert!(EvidenceLevel::Preclinical.study_design().is_none());
        assert_eq!(
            EvidenceLevel::RandomizedTrial.study_design(),
            Some(StudyDesign::Rct)
        );
    }
}

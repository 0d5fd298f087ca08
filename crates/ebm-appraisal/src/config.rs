//! Named constants for the classification and appraisal engine.

use crate::models::EvidenceLevel;

/// Quality-band thresholds, shared by every study-design category.
pub mod thresholds {
    /// Minimum score for the High band.
    pub const HIGH: u8 = 80;

    /// Minimum score for the Moderate band.
    pub const MODERATE: u8 = 60;
}

/// Level assigned when neither the publication types nor the
/// title/abstract keywords match anything.
///
/// The conservative choice is the lowest non-preclinical bucket: an
/// unrecognized human study should not land in the animal/in-vitro
/// tier. This is a policy constant, not inferred logic.
pub const DEFAULT_UNMATCHED_LEVEL: EvidenceLevel = EvidenceLevel::CaseSeries;

/// Rendering limits for markdown output.
pub mod render {
    /// Maximum title length in evidence tables before truncation.
    pub const TABLE_TITLE_LEN: usize = 60;

    /// Maximum title length in top-evidence listings.
    pub const LISTING_TITLE_LEN: usize = 80;

    /// Maximum abstract length when tables include abstracts.
    pub const TABLE_ABSTRACT_LEN: usize = 200;

    /// How many top-evidence entries the summary lists.
    pub const TOP_EVIDENCE_MAX: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_descriptive_bucket() {
        assert_eq!(DEFAULT_UNMATCHED_LEVEL.rank(), 5);
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(thresholds::HIGH > thresholds::MODERATE);
    }
}

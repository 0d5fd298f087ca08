//! Data models for citations, classifications, and appraisal inputs.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match the JSON exports of
//! the upstream search tooling.

mod citation;
mod enums;
mod inputs;

pub use citation::Citation;
pub use enums::{
    Answer, ClassificationOrigin, EvidenceLevel, QualityBand, ResponseFormat, StudyDesign,
};
pub use inputs::{AnswerSheet, AnswerSheetEntry};

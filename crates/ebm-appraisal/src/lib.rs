//! Evidence Classification & Appraisal Engine
//!
//! Classifies citation records onto the evidence pyramid, scores them
//! against fixed JBI critical-appraisal checklists, and assembles the
//! results into an ordered report.
//!
//! # Pipeline
//!
//! - **Classifier**: publication-type tags to one of six ordinal
//!   evidence levels, fixed priority order, with a best-effort
//!   title/abstract keyword fallback.
//! - **Scorer**: study-design category plus criterion answers to a
//!   0-100 quality score and High/Moderate/Low band.
//! - **Assembler**: classified and scored citations into per-level
//!   counts and a deterministically ordered table.
//!
//! Every component is a pure, stateless, single-pass transform; a
//! failure on one citation never aborts the batch.
//!
//! # Example
//!
//! ```
//! use ebm_appraisal::engine::{assemble, appraise_all};
//! use ebm_appraisal::models::Citation;
//!
//! let citations = vec![Citation {
//!     identifier: "pmid:1".into(),
//!     publication_types: vec!["Randomized Controlled Trial".into()],
//!     ..Default::default()
//! }];
//!
//! let report = assemble(appraise_all(citations, &[], false));
//! assert_eq!(report.total, 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod formatters;
pub mod models;

pub use engine::{AppraisalResult, Classification, Report, ReportEntry};
pub use error::{CliError, EngineError};
pub use models::{Answer, Citation, EvidenceLevel, QualityBand, StudyDesign};

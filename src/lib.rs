//! # Enquete
//!
//! Statistical analysis of Likert-scale survey responses: one-way and
//! two-way analysis of variance with Tukey HSD post-hoc comparison, plus
//! demographic summarization, over a fixed 10-question questionnaire.
//!
//! ## Overview
//!
//! A survey snapshot is a sequence of [`record::ResponseRecord`] values:
//! demographics plus answers on a 1..=5 Likert scale. This library answers
//! the reporting questions asked of such a snapshot:
//!
//! - **Do groups differ?** One-way ANOVA of any question grouped by
//!   gender, age bracket, income bracket or disability status, with
//!   significance judged against tabulated F critical values.
//! - **Which groups differ?** Tukey's HSD over every group pair once the
//!   omnibus test is significant.
//! - **Do two factors interact?** Two-way ANOVA with the full factor A /
//!   factor B / interaction / error decomposition.
//! - **Who answered?** Aggregate demographics and per-question means.
//!
//! All computation is pure, synchronous and allocation-local: engines read
//! an immutable snapshot, hold no shared state, and return plain values.
//! Insufficient data is always an expected outcome (an absent result or a
//! structured [`Error`]), never a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use enquete::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Two cohorts with clearly separated answers to every question.
//! let mut records = Vec::new();
//! for i in 0..6u32 {
//!     let wobble = (i % 2) as u8;
//!     records.push(ResponseRecord::new(
//!         24 + i, Gender::Female, 350, Disability::No, [4 + wobble; 10],
//!     )?);
//!     records.push(ResponseRecord::new(
//!         52 + i, Gender::Male, 650, Disability::No, [1 + wobble; 10],
//!     )?);
//! }
//!
//! let question: QuestionId = "q2".parse()?;
//! let anova = compute_one_way_anova(&records, GroupKey::Gender, question)
//!     .expect("two usable groups");
//!
//! assert!(anova.significance.is_significant());
//! for pair in anova.tukey_hsd() {
//!     println!("{} vs {}: diff {:.2}", pair.group_a, pair.group_b, pair.mean_difference);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or run the whole pipeline in one call with defaults matching the
//! report's initial view:
//!
//! ```rust
//! use enquete::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let mut records = Vec::new();
//! # for i in 0..6u32 {
//! #     let wobble = (i % 2) as u8;
//! #     records.push(ResponseRecord::new(22 + i, Gender::Female, 350, Disability::No, [4 + wobble; 10])?);
//! #     records.push(ResponseRecord::new(22 + i, Gender::Male, 650, Disability::No, [2 + wobble; 10])?);
//! #     records.push(ResponseRecord::new(31 + i, Gender::Female, 350, Disability::No, [3 + wobble; 10])?);
//! #     records.push(ResponseRecord::new(31 + i, Gender::Male, 650, Disability::No, [1 + wobble; 10])?);
//! # }
//! let analysis = analyze(&records, &AnalysisConfig::default());
//! if let Some(one_way) = &analysis.one_way {
//!     println!("F = {:.2} (p <= {})", one_way.f_value, one_way.significance.alpha());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`record`]: Response records, brackets, and the fixed vocabularies
//! - [`analysis`]: Grouping, the three engines, and orchestration
//! - [`summary`]: Aggregate demographics and question means
//! - [`error`]: The error type shared across the crate
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of records and results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod error;
pub mod record;
pub mod summary;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{
        analyze, compute_one_way_anova, compute_two_way_anova, group_values,
        pairwise_comparisons, AnalysisConfig, CellStats, ErrorTerm, FactorEffect, OneWayAnova,
        PairComparison, Significance, SurveyAnalysis, TotalTerm, TwoWayAnova,
    };
    pub use crate::error::{Error, Result};
    pub use crate::record::{
        AgeGroup, Disability, Gender, GroupKey, IncomeGroup, QuestionId, ResponseRecord,
    };
    pub use crate::summary::{summarize, SurveySummary};
}

// Re-export commonly used items at crate root
pub use analysis::{analyze, compute_one_way_anova, compute_two_way_anova, AnalysisConfig};
pub use error::{Error, Result};
pub use record::{GroupKey, QuestionId, ResponseRecord};
pub use summary::summarize;

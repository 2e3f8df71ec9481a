//! Statistical breakdown of survey responses.
//!
//! This module provides the full analysis pipeline run over a response
//! snapshot:
//! - Response grouping by a categorical key
//! - One-way ANOVA with table-based significance classification
//! - Tukey HSD post-hoc comparison of group pairs
//! - Two-way ANOVA with interaction effects
//!
//! ## Quick Start
//!
//! ```rust
//! use enquete::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut records = Vec::new();
//! for i in 0..6u32 {
//!     let wobble = (i % 2) as u8;
//!     records.push(ResponseRecord::new(
//!         22 + i, Gender::Female, 380, Disability::No, [4 + wobble; 10],
//!     )?);
//!     records.push(ResponseRecord::new(
//!         22 + i, Gender::Male, 420, Disability::No, [2 + wobble; 10],
//!     )?);
//!     records.push(ResponseRecord::new(
//!         31 + i, Gender::Female, 380, Disability::No, [3 + wobble; 10],
//!     )?);
//!     records.push(ResponseRecord::new(
//!         31 + i, Gender::Male, 420, Disability::No, [1 + wobble; 10],
//!     )?);
//! }
//!
//! // Defaults: question q2, grouped by gender, factors age_group x gender.
//! let analysis = analyze(&records, &AnalysisConfig::default());
//!
//! let one_way = analysis.one_way.expect("enough data for one-way");
//! assert!(one_way.significance.is_significant());
//! assert!(analysis.tukey.is_some());
//! assert!(analysis.two_way.is_ok());
//! # Ok(())
//! # }
//! ```
//!
//! ## Analysis Types
//!
//! ### One-way ANOVA
//!
//! Partitions the variability of one question's answers into between-group
//! and within-group components; the F ratio of the two mean squares is
//! classified against tabulated critical values at alpha 0.05 and 0.01.
//!
//! ### Tukey HSD
//!
//! When the omnibus test signals significance, every pair of groups is
//! compared against an honestly-significant-difference threshold derived
//! from the Studentized range.
//!
//! ### Two-way ANOVA
//!
//! Cross-tabulates answers by two factors and decomposes variability into
//! both main effects, their interaction, and residual error. Preconditions
//! (cell sizes, level counts, degrees of freedom) surface as structured
//! errors rather than results.

mod grouping;
mod one_way;
mod tables;
mod tukey;
mod two_way;
mod types;

pub use grouping::group_values;
pub use one_way::compute_one_way_anova;
pub use tables::{f_critical, q_critical, NEVER_SIGNIFICANT};
pub use tukey::pairwise_comparisons;
pub use two_way::compute_two_way_anova;
pub use types::{
    CellStats, ErrorTerm, FactorEffect, OneWayAnova, PairComparison, Significance, TotalTerm,
    TwoWayAnova,
};

use crate::error::{Error, Result};
use crate::record::{GroupKey, QuestionId, ResponseRecord};

/// Respondents required (exclusive) before one-way analysis runs.
pub const MIN_RESPONSES_ONE_WAY: usize = 10;

/// Respondents required (exclusive) before two-way analysis runs.
pub const MIN_RESPONSES_TWO_WAY: usize = 20;

/// Parameters selecting what to analyze.
///
/// The defaults mirror the report's initial view: question `q2` grouped by
/// gender, with age bracket and gender as the two-way factors.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Question whose answers are analyzed.
    pub question: QuestionId,
    /// Grouping key for the one-way breakdown.
    pub group_key: GroupKey,
    /// First two-way factor.
    pub factor_a: GroupKey,
    /// Second two-way factor; must differ from `factor_a`.
    pub factor_b: GroupKey,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            question: QuestionId::ALL[1],
            group_key: GroupKey::Gender,
            factor_a: GroupKey::AgeGroup,
            factor_b: GroupKey::Gender,
        }
    }
}

/// Packaged outcome of one analysis request.
///
/// Each field is an independent expected-or-absent outcome: the caller
/// branches on presence and renders the matching explanation. Absence is
/// never a fault.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurveyAnalysis {
    /// Respondents in the analyzed snapshot.
    pub respondent_count: usize,
    /// One-way ANOVA; `None` below the sample threshold or when the data
    /// cannot support the decomposition.
    pub one_way: Option<OneWayAnova>,
    /// Tukey HSD comparisons; present only when the one-way result is
    /// significant.
    pub tukey: Option<Vec<PairComparison>>,
    /// Two-way ANOVA, or the structured reason it was not computed.
    pub two_way: Result<TwoWayAnova>,
}

/// Run the full analysis pipeline over a record snapshot.
///
/// Sequences grouping, the one-way engine, the conditional Tukey pass and
/// the two-way engine, enforcing the sample-size thresholds and the
/// distinct-factor policy before the engines are reached.
///
/// The computation is pure and synchronous: identical snapshots and
/// configuration produce identical results.
#[must_use]
pub fn analyze(records: &[ResponseRecord], config: &AnalysisConfig) -> SurveyAnalysis {
    let respondent_count = records.len();

    let one_way = if respondent_count > MIN_RESPONSES_ONE_WAY {
        compute_one_way_anova(records, config.group_key, config.question)
    } else {
        None
    };

    let tukey = one_way
        .as_ref()
        .filter(|anova| anova.significance.is_significant())
        .map(OneWayAnova::tukey_hsd);

    let two_way = if respondent_count <= MIN_RESPONSES_TWO_WAY {
        Err(Error::not_enough_data(
            respondent_count,
            MIN_RESPONSES_TWO_WAY,
        ))
    } else if config.factor_a == config.factor_b {
        Err(Error::IdenticalFactors {
            key: config.factor_a,
        })
    } else {
        compute_two_way_anova(records, config.factor_a, config.factor_b, config.question)
    };

    SurveyAnalysis {
        respondent_count,
        one_way,
        tukey,
        two_way,
    }
}

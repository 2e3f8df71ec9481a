//! Error types for the enquete library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! specific variants for record validation, vocabulary parsing, and the
//! recoverable "cannot analyze" outcomes of the statistical engines.
//!
//! Every analysis failure here is an expected, recoverable outcome: callers
//! branch on the variant and render an explanatory message. Nothing in this
//! crate raises a fatal error for insufficient data.

use thiserror::Error;

use crate::record::{GroupKey, QuestionId};

/// The main error type for the enquete library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    // ============ Record Validation Errors ============
    /// A submitted answer is outside the Likert range.
    #[error("answer for {question} must be between 1 and 5, got {value}")]
    AnswerOutOfRange {
        /// The question the invalid answer belongs to.
        question: QuestionId,
        /// The rejected value.
        value: u8,
    },

    // ============ Vocabulary Errors ============
    /// A grouping key string is not one of the fixed vocabulary.
    #[error("unknown grouping key: {value:?} (expected gender, age_group, income_group or disability)")]
    UnknownGroupKey {
        /// The rejected key string.
        value: String,
    },

    /// A question id string is not one of q1..q10.
    #[error("unknown question id: {value:?} (expected q1..q10)")]
    UnknownQuestion {
        /// The rejected question string.
        value: String,
    },

    // ============ Analysis Errors ============
    /// Fewer than 2 usable groups remain after exclusion.
    #[error("need at least 2 groups with 2 or more responses each, found {found}")]
    InsufficientGroups {
        /// Number of usable groups found.
        found: usize,
    },

    /// A two-way cross-tabulation cell holds fewer than 2 observations.
    #[error(
        "every combination of factor levels needs at least 2 responses; \
         ({factor_a_level}, {factor_b_level}) has {count}"
    )]
    InsufficientCellSize {
        /// The deficient factor-A level.
        factor_a_level: String,
        /// The deficient factor-B level.
        factor_b_level: String,
        /// Observations found in the cell.
        count: usize,
    },

    /// A two-way factor has fewer than 2 levels in the data.
    #[error("each factor needs at least 2 levels, found {factor_a_levels} x {factor_b_levels}")]
    NotEnoughLevels {
        /// Distinct levels observed for factor A.
        factor_a_levels: usize,
        /// Distinct levels observed for factor B.
        factor_b_levels: usize,
    },

    /// A degrees-of-freedom term came out non-positive.
    #[error("degrees of freedom are invalid for this sample; more responses are required")]
    InvalidDegreesOfFreedom,

    /// The two-way factors resolve to the same grouping key.
    #[error("factor A and factor B must differ, both were {key}")]
    IdenticalFactors {
        /// The duplicated key.
        key: GroupKey,
    },

    /// The respondent count is below an analysis threshold.
    #[error("not enough responses: {available} available, more than {required} required")]
    NotEnoughData {
        /// Responses available in the snapshot.
        available: usize,
        /// Threshold that must be exceeded.
        required: usize,
    },
}

/// A specialized `Result` type for enquete operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create an `InsufficientCellSize` error for a deficient cell.
    #[must_use]
    pub fn insufficient_cell(
        factor_a_level: impl Into<String>,
        factor_b_level: impl Into<String>,
        count: usize,
    ) -> Self {
        Self::InsufficientCellSize {
            factor_a_level: factor_a_level.into(),
            factor_b_level: factor_b_level.into(),
            count,
        }
    }

    /// Create a `NotEnoughData` error for a missed sample-size threshold.
    #[must_use]
    pub fn not_enough_data(available: usize, required: usize) -> Self {
        Self::NotEnoughData {
            available,
            required,
        }
    }
}

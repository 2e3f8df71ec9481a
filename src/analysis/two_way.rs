//! Two-way ANOVA with interaction over a factor cross-tabulation.
//!
//! Decomposes total variability into factor A, factor B, their interaction
//! and residual error, from a cross-tabulation of the record snapshot by
//! two categorical keys. Preconditions are reported as structured errors
//! identifying exactly what the sample is missing.

use std::collections::BTreeMap;

use ndarray::Array2;

use super::types::{CellStats, ErrorTerm, FactorEffect, Significance, TotalTerm, TwoWayAnova};
use crate::error::{Error, Result};
use crate::record::{GroupKey, QuestionId, ResponseRecord};

/// Observations a cross-tabulation cell must hold.
const MIN_CELL_SIZE: usize = 2;

/// Run a two-way ANOVA of `question` cross-tabulated by `factor_a` and
/// `factor_b`.
///
/// The caller is responsible for passing two distinct factor keys; the
/// orchestration layer reports identical keys as a configuration error
/// before this engine is reached.
///
/// # Algorithm
/// 1. Cross-tabulate values by (A level, B level); levels sort ascending
/// 2. Every (a, b) combination needs at least 2 values, both factors at
///    least 2 levels
/// 3. `SS_total = sum v^2 - T^2/N`
/// 4. `SS_A = sum_a rowtotal_a^2 / row_n_a - T^2/N`, symmetric for B
/// 5. `SS_cells = sum_ab cellsum^2 / cell_n - T^2/N`;
///    `SS_AxB = SS_cells - SS_A - SS_B`; `SS_error = SS_total - SS_cells`
/// 6. F ratios against the error mean square, classified per block with
///    the tabulated critical values at that block's df and the error df
///
/// # Errors
/// * [`Error::InsufficientCellSize`] naming the first deficient (a, b)
///   combination in level order and its observation count
/// * [`Error::NotEnoughLevels`] when either factor has fewer than 2 levels
/// * [`Error::InvalidDegreesOfFreedom`] when a df term is not positive
pub fn compute_two_way_anova(
    records: &[ResponseRecord],
    factor_a: GroupKey,
    factor_b: GroupKey,
    question: QuestionId,
) -> Result<TwoWayAnova> {
    let mut cells: BTreeMap<&'static str, BTreeMap<&'static str, Vec<f64>>> = BTreeMap::new();
    let mut all_values = Vec::new();

    for record in records {
        let Some(value) = record.answer(question) else {
            continue;
        };
        cells
            .entry(record.group_label(factor_a))
            .or_default()
            .entry(record.group_label(factor_b))
            .or_default()
            .push(value);
        all_values.push(value);
    }

    // BTreeMap keys are already ascending; B levels are the union across rows.
    let a_levels: Vec<&'static str> = cells.keys().copied().collect();
    let mut b_levels: Vec<&'static str> = cells
        .values()
        .flat_map(|row| row.keys().copied())
        .collect();
    b_levels.sort_unstable();
    b_levels.dedup();

    let mut cell_stats = Array2::from_elem((a_levels.len(), b_levels.len()), CellStats::default());
    for (i, a_level) in a_levels.iter().enumerate() {
        for (j, b_level) in b_levels.iter().enumerate() {
            let values = cells
                .get(a_level)
                .and_then(|row| row.get(b_level))
                .map_or(&[] as &[f64], Vec::as_slice);
            if values.len() < MIN_CELL_SIZE {
                return Err(Error::insufficient_cell(*a_level, *b_level, values.len()));
            }

            let n = values.len();
            let sum: f64 = values.iter().sum();
            cell_stats[[i, j]] = CellStats {
                mean: sum / n as f64,
                n,
                sum,
            };
        }
    }

    let a_count = a_levels.len();
    let b_count = b_levels.len();
    if a_count < 2 || b_count < 2 {
        return Err(Error::NotEnoughLevels {
            factor_a_levels: a_count,
            factor_b_levels: b_count,
        });
    }

    let n_total = all_values.len();
    let grand_total: f64 = all_values.iter().sum();
    let correction = grand_total.powi(2) / n_total as f64;

    let ss_total = all_values.iter().map(|v| v.powi(2)).sum::<f64>() - correction;

    let mut ss_a = -correction;
    for i in 0..a_count {
        let row_total: f64 = (0..b_count).map(|j| cell_stats[[i, j]].sum).sum();
        let row_n: usize = (0..b_count).map(|j| cell_stats[[i, j]].n).sum();
        ss_a += row_total.powi(2) / row_n as f64;
    }

    let mut ss_b = -correction;
    for j in 0..b_count {
        let col_total: f64 = (0..a_count).map(|i| cell_stats[[i, j]].sum).sum();
        let col_n: usize = (0..a_count).map(|i| cell_stats[[i, j]].n).sum();
        ss_b += col_total.powi(2) / col_n as f64;
    }

    let ss_cells = cell_stats
        .iter()
        .map(|cell| cell.sum.powi(2) / cell.n as f64)
        .sum::<f64>()
        - correction;
    let ss_interaction = ss_cells - ss_a - ss_b;
    let ss_error = ss_total - ss_cells;

    let df_a = a_count - 1;
    let df_b = b_count - 1;
    let df_interaction = df_a * df_b;
    let df_error = n_total
        .checked_sub(a_count * b_count)
        .filter(|&df| df > 0)
        .ok_or(Error::InvalidDegreesOfFreedom)?;
    let df_total = n_total - 1;

    let ms_error = ss_error / df_error as f64;
    let effect = |ss: f64, df: usize| {
        let ms = if df > 0 { ss / df as f64 } else { 0.0 };
        let f_value = if ms_error > 0.0 { ms / ms_error } else { 0.0 };
        FactorEffect {
            ss,
            df,
            ms,
            f_value,
            significance: Significance::classify_f(f_value, df, df_error),
        }
    };

    Ok(TwoWayAnova {
        factor_a: effect(ss_a, df_a),
        factor_b: effect(ss_b, df_b),
        interaction: effect(ss_interaction, df_interaction),
        error: ErrorTerm {
            ss: ss_error,
            df: df_error,
            ms: ms_error,
        },
        total: TotalTerm {
            ss: ss_total,
            df: df_total,
        },
        cells: cell_stats,
        a_levels: a_levels.iter().map(ToString::to_string).collect(),
        b_levels: b_levels.iter().map(ToString::to_string).collect(),
    })
}

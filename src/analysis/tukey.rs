//! Tukey HSD post-hoc pairwise comparison.
//!
//! After an omnibus one-way ANOVA signals overall significance, this pass
//! determines which specific pairs of groups differ. The caller decides
//! when to invoke it (the orchestration only runs it on a significant
//! ANOVA); the engine itself just compares every unordered pair.

use std::collections::BTreeMap;

use super::tables::q_critical;
use super::types::{OneWayAnova, PairComparison};

/// Compare every unordered pair of groups with Tukey's HSD.
///
/// # Arguments
/// * `groups` - Retained groups keyed by label; pairs are emitted in the
///   order induced by the label ordering
/// * `ms_within` - Within-group mean square from the one-way ANOVA
/// * `df_within` - Within-group degrees of freedom from the same ANOVA
///
/// # Returns
/// * All C(k, 2) comparisons, each holding the absolute mean difference,
///   the HSD threshold `q * sqrt(ms_within * (1/n_i + 1/n_j) / 2)`, and
///   whether the difference exceeds it. Empty when fewer than 2 groups are
///   present or `ms_within` is not positive.
#[must_use]
pub fn pairwise_comparisons(
    groups: &BTreeMap<String, Vec<f64>>,
    ms_within: f64,
    df_within: usize,
) -> Vec<PairComparison> {
    let k = groups.len();
    if k < 2 || ms_within <= 0.0 {
        return Vec::new();
    }

    let q = q_critical(k, df_within, 0.05);

    let stats: Vec<(&String, f64, usize)> = groups
        .iter()
        .map(|(name, values)| {
            let n = values.len();
            let mean = values.iter().sum::<f64>() / n as f64;
            (name, mean, n)
        })
        .collect();

    let mut comparisons = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            let (name_a, mean_a, n_a) = &stats[i];
            let (name_b, mean_b, n_b) = &stats[j];

            let hsd =
                q * (ms_within * (1.0 / *n_a as f64 + 1.0 / *n_b as f64) / 2.0).sqrt();
            let diff = (mean_a - mean_b).abs();

            comparisons.push(PairComparison {
                group_a: (*name_a).clone(),
                group_b: (*name_b).clone(),
                mean_difference: diff,
                hsd,
                significant: diff > hsd,
            });
        }
    }
    comparisons
}

impl OneWayAnova {
    /// Tukey HSD comparisons over this ANOVA's retained groups.
    ///
    /// Meant to be called when [`significance`](Self::significance) reports
    /// a significant omnibus result; the computation itself does not check.
    #[must_use]
    pub fn tukey_hsd(&self) -> Vec<PairComparison> {
        pairwise_comparisons(&self.groups, self.ms_within, self.df_within)
    }
}

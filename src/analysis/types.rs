//! Analysis result types.
//!
//! Core types produced by the one-way, Tukey HSD and two-way engines.
//! All of them are plain immutable values, produced fresh per request;
//! nothing here is cached across invocations.

use std::collections::BTreeMap;

use ndarray::Array2;

use super::tables::f_critical;

/// Outcome of the two-tier significance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Significance {
    /// The statistic exceeded neither critical value.
    NotSignificant,
    /// The statistic exceeded the alpha = 0.05 critical value only.
    P05,
    /// The statistic exceeded the alpha = 0.01 critical value.
    P01,
}

impl Significance {
    /// Classify an F statistic against both critical values for
    /// (`df1`, `df2`), reporting the tighter bound it exceeds.
    #[must_use]
    pub fn classify_f(f_value: f64, df1: usize, df2: usize) -> Self {
        if f_value > f_critical(df1, df2, 0.01) {
            Self::P01
        } else if f_value > f_critical(df1, df2, 0.05) {
            Self::P05
        } else {
            Self::NotSignificant
        }
    }

    /// The alpha level this outcome corresponds to (0.0 when not significant).
    #[must_use]
    pub fn alpha(self) -> f64 {
        match self {
            Self::NotSignificant => 0.0,
            Self::P05 => 0.05,
            Self::P01 => 0.01,
        }
    }

    /// Whether either significance threshold was crossed.
    #[must_use]
    pub fn is_significant(self) -> bool {
        self != Self::NotSignificant
    }
}

/// One-way ANOVA result over a set of retained groups.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneWayAnova {
    /// Between-group degrees of freedom (k - 1).
    pub df_between: usize,
    /// Between-group sum of squares.
    pub ss_between: f64,
    /// Between-group mean square.
    pub ms_between: f64,
    /// Within-group degrees of freedom (N - k).
    pub df_within: usize,
    /// Within-group sum of squares.
    pub ss_within: f64,
    /// Within-group mean square.
    pub ms_within: f64,
    /// F statistic (0 when the within mean square is 0).
    pub f_value: f64,
    /// Tabulated critical value at alpha = 0.05 for these df.
    pub critical_value_05: f64,
    /// Tabulated critical value at alpha = 0.01 for these df.
    pub critical_value_01: f64,
    /// Two-tier significance classification of `f_value`.
    pub significance: Significance,
    /// The retained groups and their values, keyed by group label.
    pub groups: BTreeMap<String, Vec<f64>>,
}

impl OneWayAnova {
    /// Per-group mean scores in label order, for presentation.
    #[must_use]
    pub fn group_means(&self) -> Vec<(String, f64)> {
        self.groups
            .iter()
            .map(|(name, values)| {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                (name.clone(), mean)
            })
            .collect()
    }
}

/// One pairwise Tukey HSD comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairComparison {
    /// First group label (earlier in label order).
    pub group_a: String,
    /// Second group label.
    pub group_b: String,
    /// Absolute difference of the two group means.
    pub mean_difference: f64,
    /// HSD threshold for this pair.
    pub hsd: f64,
    /// Whether `mean_difference > hsd`.
    pub significant: bool,
}

/// Summary statistics for one two-way cross-tabulation cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStats {
    /// Mean value in the cell.
    pub mean: f64,
    /// Number of observations in the cell.
    pub n: usize,
    /// Sum of values in the cell.
    pub sum: f64,
}

/// Sum-of-squares block for a factor or the interaction term.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorEffect {
    /// Sum of squares.
    pub ss: f64,
    /// Degrees of freedom.
    pub df: usize,
    /// Mean square (0 when df is 0).
    pub ms: f64,
    /// F ratio against the error mean square (0 when that is 0).
    pub f_value: f64,
    /// Two-tier significance classification of `f_value`.
    pub significance: Significance,
}

/// Residual (error) block of a two-way decomposition.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorTerm {
    /// Error sum of squares.
    pub ss: f64,
    /// Error degrees of freedom.
    pub df: usize,
    /// Error mean square.
    pub ms: f64,
}

/// Total block of a two-way decomposition.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TotalTerm {
    /// Total sum of squares.
    pub ss: f64,
    /// Total degrees of freedom (N - 1).
    pub df: usize,
}

/// Two-way ANOVA result: the full two-factor decomposition.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoWayAnova {
    /// Factor A main effect.
    pub factor_a: FactorEffect,
    /// Factor B main effect.
    pub factor_b: FactorEffect,
    /// A x B interaction effect.
    pub interaction: FactorEffect,
    /// Residual block.
    pub error: ErrorTerm,
    /// Total block.
    pub total: TotalTerm,
    /// Cell statistics, indexed `[a_level_index, b_level_index]`.
    pub cells: Array2<CellStats>,
    /// Factor A levels, sorted ascending; row index into `cells`.
    pub a_levels: Vec<String>,
    /// Factor B levels, sorted ascending; column index into `cells`.
    pub b_levels: Vec<String>,
}

impl TwoWayAnova {
    /// Cell means arranged for an interaction plot: one series per
    /// factor-B level, each holding the cell means across factor-A levels.
    #[must_use]
    pub fn interaction_series(&self) -> Vec<(String, Vec<f64>)> {
        self.b_levels
            .iter()
            .enumerate()
            .map(|(j, b_level)| {
                let means = (0..self.a_levels.len())
                    .map(|i| self.cells[[i, j]].mean)
                    .collect();
                (b_level.clone(), means)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_f_two_tier() {
        // F(1, 4): 7.71 at 0.05, 21.20 at 0.01.
        assert_eq!(Significance::classify_f(5.0, 1, 4), Significance::NotSignificant);
        assert_eq!(Significance::classify_f(12.25, 1, 4), Significance::P05);
        assert_eq!(Significance::classify_f(25.0, 1, 4), Significance::P01);
    }

    #[test]
    fn test_alpha_values() {
        assert_eq!(Significance::NotSignificant.alpha(), 0.0);
        assert_eq!(Significance::P05.alpha(), 0.05);
        assert_eq!(Significance::P01.alpha(), 0.01);
        assert!(!Significance::NotSignificant.is_significant());
        assert!(Significance::P05.is_significant());
    }

    #[test]
    fn test_group_means_in_label_order() {
        let mut groups = BTreeMap::new();
        groups.insert("male".to_string(), vec![3.0, 4.0, 5.0]);
        groups.insert("female".to_string(), vec![1.0, 2.0, 2.0]);

        let anova = OneWayAnova {
            df_between: 1,
            ss_between: 0.0,
            ms_between: 0.0,
            df_within: 4,
            ss_within: 0.0,
            ms_within: 0.0,
            f_value: 0.0,
            critical_value_05: 0.0,
            critical_value_01: 0.0,
            significance: Significance::NotSignificant,
            groups,
        };

        let means = anova.group_means();
        assert_eq!(means[0].0, "female");
        assert!((means[0].1 - 5.0 / 3.0).abs() < 1e-10);
        assert_eq!(means[1].0, "male");
        assert!((means[1].1 - 4.0).abs() < 1e-10);
    }
}

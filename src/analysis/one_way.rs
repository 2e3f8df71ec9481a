//! One-way ANOVA over grouped survey responses.
//!
//! Decomposes the variability of one question's answers into between-group
//! and within-group components and classifies the F statistic against the
//! tabulated critical values.

use std::collections::BTreeMap;

use super::grouping::group_values;
use super::tables::f_critical;
use super::types::{OneWayAnova, Significance};
use crate::record::{GroupKey, QuestionId, ResponseRecord};

/// Run a one-way ANOVA of `question` grouped by `key`.
///
/// # Arguments
/// * `records` - The full response snapshot
/// * `key` - Categorical attribute to group by
/// * `question` - Question whose answers are analyzed
///
/// # Returns
/// * `Some(OneWayAnova)` on success
/// * `None` when fewer than 2 usable groups remain or a degrees-of-freedom
///   term is not positive; "cannot analyze", not a fault
#[must_use]
pub fn compute_one_way_anova(
    records: &[ResponseRecord],
    key: GroupKey,
    question: QuestionId,
) -> Option<OneWayAnova> {
    OneWayAnova::from_groups(group_values(records, key, question))
}

impl OneWayAnova {
    /// Run a one-way ANOVA over already-grouped values.
    ///
    /// Groups are expected to have passed the minimum-size exclusion (see
    /// [`group_values`](super::group_values)); values are summed in group
    /// label order, so identical input always reproduces the same result
    /// bit for bit.
    ///
    /// # Algorithm
    /// 1. Grand mean over the union of all retained groups' values
    /// 2. `ss_between = sum n_g * (mean_g - grand_mean)^2`,
    ///    `ss_within = sum (v - mean_g)^2`
    /// 3. `df_between = k - 1`, `df_within = N - k`, both required positive
    /// 4. `f = ms_between / ms_within` (0 when `ms_within` is 0)
    /// 5. Two-tier significance against the tabulated critical values
    #[must_use]
    pub fn from_groups(groups: BTreeMap<String, Vec<f64>>) -> Option<Self> {
        let k = groups.len();
        if k < 2 {
            return None;
        }

        let n_total: usize = groups.values().map(Vec::len).sum();
        let df_between = k - 1;
        let df_within = n_total.checked_sub(k).filter(|&df| df > 0)?;

        let grand_sum: f64 = groups.values().flatten().sum();
        let grand_mean = grand_sum / n_total as f64;

        let mut ss_between = 0.0;
        let mut ss_within = 0.0;
        for values in groups.values() {
            let n_group = values.len() as f64;
            let group_mean = values.iter().sum::<f64>() / n_group;
            ss_between += n_group * (group_mean - grand_mean).powi(2);
            ss_within += values.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
        }

        let ms_between = ss_between / df_between as f64;
        let ms_within = ss_within / df_within as f64;
        let f_value = if ms_within > 0.0 {
            ms_between / ms_within
        } else {
            0.0
        };

        Some(Self {
            df_between,
            ss_between,
            ms_between,
            df_within,
            ss_within,
            ms_within,
            f_value,
            critical_value_05: f_critical(df_between, df_within, 0.05),
            critical_value_01: f_critical(df_between, df_within, 0.01),
            significance: Significance::classify_f(f_value, df_between, df_within),
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Disability, Gender};

    fn groups_of(entries: &[(&str, &[f64])]) -> BTreeMap<String, Vec<f64>> {
        entries
            .iter()
            .map(|(name, values)| ((*name).to_string(), values.to_vec()))
            .collect()
    }

    #[test]
    fn test_known_two_group_decomposition() {
        // male [3,4,5], female [1,2,2]: grand mean 17/6.
        let groups = groups_of(&[("male", &[3.0, 4.0, 5.0]), ("female", &[1.0, 2.0, 2.0])]);
        let anova = OneWayAnova::from_groups(groups).unwrap();

        assert_eq!(anova.df_between, 1);
        assert_eq!(anova.df_within, 4);
        assert!((anova.ss_between - 49.0 / 6.0).abs() < 1e-10);
        assert!((anova.ss_within - 8.0 / 3.0).abs() < 1e-10);
        assert!((anova.f_value - 12.25).abs() < 1e-10);

        // F(1, 4): 7.71 at 0.05, 21.20 at 0.01 -> significant at 0.05 only.
        assert_eq!(anova.critical_value_05, 7.71);
        assert_eq!(anova.critical_value_01, 21.20);
        assert_eq!(anova.significance, Significance::P05);
    }

    #[test]
    fn test_ss_partition_adds_up_to_total() {
        let groups = groups_of(&[
            ("a", &[1.0, 2.0, 3.0, 4.0]),
            ("b", &[2.0, 4.0, 4.0]),
            ("c", &[5.0, 5.0, 3.0, 2.0, 1.0]),
        ]);
        let all: Vec<f64> = groups.values().flatten().copied().collect();
        let anova = OneWayAnova::from_groups(groups).unwrap();

        let grand_mean = all.iter().sum::<f64>() / all.len() as f64;
        let ss_total: f64 = all.iter().map(|v| (v - grand_mean).powi(2)).sum();
        assert!((anova.ss_between + anova.ss_within - ss_total).abs() < 1e-9);
        assert_eq!(anova.df_between + anova.df_within, all.len() - 1);
    }

    #[test]
    fn test_equal_means_not_significant() {
        let groups = groups_of(&[("a", &[3.0, 3.0, 4.0, 4.0]), ("b", &[4.0, 3.0, 4.0, 3.0])]);
        let anova = OneWayAnova::from_groups(groups).unwrap();

        assert!(anova.f_value.abs() < 1e-10);
        assert_eq!(anova.significance, Significance::NotSignificant);
    }

    #[test]
    fn test_zero_within_variance_reports_f_zero() {
        let groups = groups_of(&[("a", &[2.0, 2.0]), ("b", &[5.0, 5.0])]);
        let anova = OneWayAnova::from_groups(groups).unwrap();

        assert_eq!(anova.ms_within, 0.0);
        assert_eq!(anova.f_value, 0.0);
        assert_eq!(anova.significance, Significance::NotSignificant);
    }

    #[test]
    fn test_fewer_than_two_groups_is_no_result() {
        assert!(OneWayAnova::from_groups(BTreeMap::new()).is_none());

        let one = groups_of(&[("only", &[1.0, 2.0, 3.0])]);
        assert!(OneWayAnova::from_groups(one).is_none());
    }

    #[test]
    fn test_order_invariance() {
        let forward = groups_of(&[("a", &[1.0, 2.0, 5.0]), ("b", &[4.0, 4.0, 2.0])]);
        let mut backward = BTreeMap::new();
        backward.insert("b".to_string(), vec![2.0, 4.0, 4.0]);
        backward.insert("a".to_string(), vec![5.0, 2.0, 1.0]);

        let lhs = OneWayAnova::from_groups(forward).unwrap();
        let rhs = OneWayAnova::from_groups(backward).unwrap();
        assert!((lhs.f_value - rhs.f_value).abs() < 1e-12);
        assert!((lhs.ss_between - rhs.ss_between).abs() < 1e-12);
        assert!((lhs.ss_within - rhs.ss_within).abs() < 1e-12);
    }

    #[test]
    fn test_singleton_group_dropped_leaves_insufficient_data() {
        // One lone male answer next to a 3-strong female group: the
        // singleton is excluded first, a single group remains, no result.
        let records = vec![
            ResponseRecord::new(30, Gender::Male, 500, Disability::No, [5; 10]).unwrap(),
            ResponseRecord::new(31, Gender::Female, 500, Disability::No, [1; 10]).unwrap(),
            ResponseRecord::new(32, Gender::Female, 500, Disability::No, [2; 10]).unwrap(),
            ResponseRecord::new(33, Gender::Female, 500, Disability::No, [3; 10]).unwrap(),
        ];

        let result =
            compute_one_way_anova(&records, GroupKey::Gender, QuestionId::new(1).unwrap());
        assert!(result.is_none());
    }

    #[test]
    fn test_grand_mean_over_retained_values_only() {
        // The dropped singleton's extreme value must not leak into the
        // grand mean of the retained groups.
        let records = vec![
            ResponseRecord::new(30, Gender::Other, 500, Disability::No, [5; 10]).unwrap(),
            ResponseRecord::new(25, Gender::Female, 500, Disability::No, [1; 10]).unwrap(),
            ResponseRecord::new(26, Gender::Female, 500, Disability::No, [2; 10]).unwrap(),
            ResponseRecord::new(55, Gender::Male, 500, Disability::No, [2; 10]).unwrap(),
            ResponseRecord::new(56, Gender::Male, 500, Disability::No, [3; 10]).unwrap(),
        ];

        let anova = compute_one_way_anova(&records, GroupKey::Gender, QuestionId::new(1).unwrap())
            .unwrap();

        // Retained: female [1,2], male [2,3]; grand mean 2, not (5+1+2+2+3)/5.
        assert_eq!(anova.df_within, 2);
        assert!((anova.ss_between - 1.0).abs() < 1e-10);
        assert!((anova.ss_within - 1.0).abs() < 1e-10);
    }
}

//! Partitioning of response records into named groups.
//!
//! Splits a flat record snapshot into groups by one categorical key,
//! extracting one numeric answer per record. The returned map is keyed by
//! group label in ascending lexicographic order, which fixes both the
//! summation order of every downstream engine and the presentation order.

use std::collections::BTreeMap;

use crate::record::{GroupKey, QuestionId, ResponseRecord};

/// Smallest group admitted into an ANOVA. A singleton group cannot
/// contribute to within-group variance estimation.
pub(crate) const MIN_GROUP_SIZE: usize = 2;

/// Partition `records` by `key`, collecting each record's answer to
/// `question`.
///
/// Records without a usable answer are skipped, and groups that end up
/// with fewer than 2 values are dropped before the map is returned.
///
/// # Examples
///
/// ```
/// use enquete::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let records = vec![
///     ResponseRecord::new(24, Gender::Female, 380, Disability::No, [4; 10])?,
///     ResponseRecord::new(27, Gender::Female, 350, Disability::No, [5; 10])?,
///     ResponseRecord::new(55, Gender::Male, 700, Disability::No, [2; 10])?,
///     ResponseRecord::new(58, Gender::Male, 650, Disability::No, [3; 10])?,
/// ];
///
/// let q1 = "q1".parse()?;
/// let groups = group_values(&records, GroupKey::Gender, q1);
/// assert_eq!(groups["female"], vec![4.0, 5.0]);
/// assert_eq!(groups["male"], vec![2.0, 3.0]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn group_values(
    records: &[ResponseRecord],
    key: GroupKey,
    question: QuestionId,
) -> BTreeMap<String, Vec<f64>> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for record in records {
        let Some(value) = record.answer(question) else {
            continue;
        };
        groups
            .entry(record.group_label(key).to_string())
            .or_default()
            .push(value);
    }

    groups.retain(|_, values| values.len() >= MIN_GROUP_SIZE);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Disability, Gender};

    fn record(gender: Gender, score: u8) -> ResponseRecord {
        ResponseRecord::new(30, gender, 500, Disability::No, [score; 10]).unwrap()
    }

    #[test]
    fn test_groups_by_label_in_sorted_order() {
        let records = vec![
            record(Gender::Other, 3),
            record(Gender::Male, 4),
            record(Gender::Female, 5),
            record(Gender::Other, 2),
            record(Gender::Male, 4),
            record(Gender::Female, 1),
        ];

        let groups = group_values(&records, GroupKey::Gender, QuestionId::new(3).unwrap());
        let names: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(names, ["female", "male", "other"]);
        assert_eq!(groups["male"], vec![4.0, 4.0]);
    }

    #[test]
    fn test_singleton_groups_are_dropped() {
        let records = vec![
            record(Gender::Male, 5),
            record(Gender::Female, 1),
            record(Gender::Female, 2),
            record(Gender::Female, 3),
        ];

        let groups = group_values(&records, GroupKey::Gender, QuestionId::new(1).unwrap());
        assert_eq!(groups.len(), 1);
        assert!(groups.contains_key("female"));
        assert!(!groups.contains_key("male"));
    }

    #[test]
    fn test_records_without_answer_are_skipped() {
        let mut answers = [Some(4u8); 10];
        answers[0] = None;
        let unanswered = ResponseRecord::with_partial_answers(
            30,
            Gender::Female,
            500,
            Disability::No,
            answers,
        );

        let records = vec![unanswered, record(Gender::Female, 2), record(Gender::Female, 3)];

        let q1 = QuestionId::new(1).unwrap();
        let groups = group_values(&records, GroupKey::Gender, q1);
        assert_eq!(groups["female"], vec![2.0, 3.0]);

        // The same record does contribute to questions it answered.
        let q2 = QuestionId::new(2).unwrap();
        let groups = group_values(&records, GroupKey::Gender, q2);
        assert_eq!(groups["female"], vec![4.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let groups = group_values(&[], GroupKey::Disability, QuestionId::new(1).unwrap());
        assert!(groups.is_empty());
    }
}

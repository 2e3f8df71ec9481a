//! Aggregate demographics and per-question score summary.
//!
//! The report's overview blocks: respondent counts per gender, age bracket
//! and income bracket, plus the mean score of every question. Unlike the
//! breakdown engines this has no minimum-sample requirements; it summarizes
//! whatever snapshot it is given.

use std::collections::BTreeMap;

use crate::record::{QuestionId, ResponseRecord, QUESTION_COUNT};

/// Aggregate view of a response snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurveySummary {
    /// Respondents in the snapshot.
    pub respondent_count: usize,
    /// Respondents per gender label.
    pub gender: BTreeMap<String, usize>,
    /// Respondents per age bracket label.
    pub age_groups: BTreeMap<String, usize>,
    /// Respondents per income bracket label.
    pub income_groups: BTreeMap<String, usize>,
    /// Mean score per question, `None` where no usable answers exist.
    pub question_means: [Option<f64>; QUESTION_COUNT],
}

impl SurveySummary {
    /// Mean score for one question, if anyone answered it.
    #[must_use]
    pub fn mean_for(&self, question: QuestionId) -> Option<f64> {
        self.question_means[question.index()]
    }
}

/// Summarize a response snapshot.
///
/// Counts are keyed by the same stable labels the grouping module uses, in
/// ascending label order. Question means skip unset or out-of-range
/// answers record by record, matching the exclusion rule of the analysis
/// engines.
#[must_use]
pub fn summarize(records: &[ResponseRecord]) -> SurveySummary {
    let mut gender: BTreeMap<String, usize> = BTreeMap::new();
    let mut age_groups: BTreeMap<String, usize> = BTreeMap::new();
    let mut income_groups: BTreeMap<String, usize> = BTreeMap::new();
    let mut sums = [0.0_f64; QUESTION_COUNT];
    let mut counts = [0_usize; QUESTION_COUNT];

    for record in records {
        *gender.entry(record.gender.label().to_string()).or_default() += 1;
        *age_groups
            .entry(record.age_group().label().to_string())
            .or_default() += 1;
        *income_groups
            .entry(record.income_group().label().to_string())
            .or_default() += 1;

        for question in QuestionId::ALL {
            if let Some(value) = record.answer(question) {
                sums[question.index()] += value;
                counts[question.index()] += 1;
            }
        }
    }

    let mut question_means = [None; QUESTION_COUNT];
    for i in 0..QUESTION_COUNT {
        if counts[i] > 0 {
            question_means[i] = Some(sums[i] / counts[i] as f64);
        }
    }

    SurveySummary {
        respondent_count: records.len(),
        gender,
        age_groups,
        income_groups,
        question_means,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Disability, Gender};

    #[test]
    fn test_counts_and_means() {
        let records = vec![
            ResponseRecord::new(24, Gender::Female, 380, Disability::No, [5; 10]).unwrap(),
            ResponseRecord::new(35, Gender::Female, 650, Disability::Yes, [3; 10]).unwrap(),
            ResponseRecord::new(67, Gender::Male, 820, Disability::No, [1; 10]).unwrap(),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.respondent_count, 3);
        assert_eq!(summary.gender["female"], 2);
        assert_eq!(summary.gender["male"], 1);
        assert_eq!(summary.age_groups["under-30"], 1);
        assert_eq!(summary.age_groups["30s"], 1);
        assert_eq!(summary.age_groups["60-plus"], 1);
        assert_eq!(summary.income_groups["under-400"], 1);
        assert_eq!(summary.income_groups["400-799"], 1);
        assert_eq!(summary.income_groups["800-plus"], 1);

        for question in QuestionId::ALL {
            assert_eq!(summary.mean_for(question), Some(3.0));
        }
    }

    #[test]
    fn test_unanswered_questions_are_skipped() {
        let mut answers = [Some(4u8); 10];
        answers[0] = None;
        let partial = ResponseRecord::with_partial_answers(
            30,
            Gender::Male,
            500,
            Disability::No,
            answers,
        );
        let full = ResponseRecord::new(31, Gender::Male, 500, Disability::No, [2; 10]).unwrap();

        let summary = summarize(&[partial, full]);
        let q1 = QuestionId::new(1).unwrap();
        let q2 = QuestionId::new(2).unwrap();
        assert_eq!(summary.mean_for(q1), Some(2.0));
        assert_eq!(summary.mean_for(q2), Some(3.0));
    }

    #[test]
    fn test_empty_snapshot() {
        let summary = summarize(&[]);
        assert_eq!(summary.respondent_count, 0);
        assert!(summary.gender.is_empty());
        assert_eq!(summary.question_means, [None; QUESTION_COUNT]);
    }
}

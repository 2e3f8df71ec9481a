//! Survey response records and the fixed grouping vocabularies.
//!
//! A [`ResponseRecord`] is one respondent's submission: demographic fields
//! plus Likert answers for the 10 fixed questions. Records are immutable
//! once constructed; the analysis engines only read snapshots of them.
//!
//! The grouping vocabularies are fixed: 4 grouping keys ([`GroupKey`]),
//! 5 age brackets ([`AgeGroup`]), 3 income brackets ([`IncomeGroup`]), and
//! the enumerated [`Gender`] and [`Disability`] attributes. Bracket
//! membership is a deterministic function of the raw age/income fields.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of questions in the fixed questionnaire.
pub const QUESTION_COUNT: usize = 10;

/// Smallest valid Likert answer.
pub const LIKERT_MIN: u8 = 1;

/// Largest valid Likert answer.
pub const LIKERT_MAX: u8 = 5;

/// Respondent gender, one of the fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    /// Female respondent.
    Female,
    /// Male respondent.
    Male,
    /// Any other stated gender.
    Other,
}

impl Gender {
    /// Stable label used as a group name in analysis output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Binary disability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Disability {
    /// Respondent reported a disability.
    Yes,
    /// Respondent reported no disability.
    No,
}

impl Disability {
    /// Stable label used as a group name in analysis output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for Disability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age bracket derived from the raw age field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AgeGroup {
    /// Younger than 30.
    Under30,
    /// 30 through 39.
    Thirties,
    /// 40 through 49.
    Forties,
    /// 50 through 59.
    Fifties,
    /// 60 and older.
    SixtyPlus,
}

impl AgeGroup {
    /// Bracket an age in years.
    #[must_use]
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=29 => Self::Under30,
            30..=39 => Self::Thirties,
            40..=49 => Self::Forties,
            50..=59 => Self::Fifties,
            _ => Self::SixtyPlus,
        }
    }

    /// Stable label used as a group name in analysis output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Under30 => "under-30",
            Self::Thirties => "30s",
            Self::Forties => "40s",
            Self::Fifties => "50s",
            Self::SixtyPlus => "60-plus",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Income bracket derived from the raw income field (thousands).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IncomeGroup {
    /// Income below 400.
    Under400,
    /// Income 400 through 799.
    Mid400To799,
    /// Income 800 and above.
    Above800,
}

impl IncomeGroup {
    /// Bracket an income in currency-units-of-thousands.
    #[must_use]
    pub fn from_income(income: u32) -> Self {
        match income {
            0..=399 => Self::Under400,
            400..=799 => Self::Mid400To799,
            _ => Self::Above800,
        }
    }

    /// Stable label used as a group name in analysis output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Under400 => "under-400",
            Self::Mid400To799 => "400-799",
            Self::Above800 => "800-plus",
        }
    }
}

impl fmt::Display for IncomeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the 10 fixed question ids, `q1` through `q10`.
///
/// # Examples
///
/// ```
/// use enquete::record::QuestionId;
///
/// let q: QuestionId = "q2".parse().unwrap();
/// assert_eq!(q.number(), 2);
/// assert_eq!(q.to_string(), "q2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuestionId(u8);

impl QuestionId {
    /// All 10 question ids in order.
    pub const ALL: [Self; QUESTION_COUNT] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
    ];

    /// Create a question id from its 1-based number.
    ///
    /// Returns `None` when `number` is not in `1..=10`.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=QUESTION_COUNT as u8).contains(&number).then_some(Self(number))
    }

    /// The 1-based question number.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// The 0-based index into per-question arrays.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || Error::UnknownQuestion {
            value: s.to_string(),
        };
        let digits = s.strip_prefix('q').ok_or_else(unknown)?;
        let number: u8 = digits.parse().map_err(|_| unknown())?;
        Self::new(number).ok_or_else(unknown)
    }
}

/// One of the 4 fixed grouping keys a breakdown can be run over.
///
/// `Gender` and `Disability` resolve against a record's direct attributes;
/// `AgeGroup` and `IncomeGroup` resolve against the derived brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKey {
    /// Group by gender.
    Gender,
    /// Group by derived age bracket.
    AgeGroup,
    /// Group by derived income bracket.
    IncomeGroup,
    /// Group by disability status.
    Disability,
}

impl GroupKey {
    /// All 4 grouping keys.
    pub const ALL: [Self; 4] = [
        Self::Gender,
        Self::AgeGroup,
        Self::IncomeGroup,
        Self::Disability,
    ];

    /// Stable keyword used in caller-facing parameter vocabularies.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::AgeGroup => "age_group",
            Self::IncomeGroup => "income_group",
            Self::Disability => "disability",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for GroupKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gender" => Ok(Self::Gender),
            "age_group" => Ok(Self::AgeGroup),
            "income_group" => Ok(Self::IncomeGroup),
            "disability" => Ok(Self::Disability),
            _ => Err(Error::UnknownGroupKey {
                value: s.to_string(),
            }),
        }
    }
}

/// One respondent's submission.
///
/// Demographic fields are public and immutable by convention; answers are
/// kept private so the Likert invariant stays behind [`ResponseRecord::new`].
/// An unset or out-of-range answer never errors at read time: the record is
/// simply excluded from computations over that question.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResponseRecord {
    /// Respondent age in years.
    pub age: u32,
    /// Respondent gender.
    pub gender: Gender,
    /// Respondent income, in currency-units-of-thousands.
    pub income: u32,
    /// Respondent disability status.
    pub disability: Disability,
    answers: [Option<u8>; QUESTION_COUNT],
}

impl ResponseRecord {
    /// Create a fully-answered record, validating every Likert value.
    ///
    /// `answers[i]` is the answer to question `q{i+1}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnswerOutOfRange`] naming the first question whose
    /// value is outside `1..=5`.
    pub fn new(
        age: u32,
        gender: Gender,
        income: u32,
        disability: Disability,
        answers: [u8; QUESTION_COUNT],
    ) -> Result<Self> {
        for (i, &value) in answers.iter().enumerate() {
            if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
                return Err(Error::AnswerOutOfRange {
                    question: QuestionId::ALL[i],
                    value,
                });
            }
        }

        Ok(Self {
            age,
            gender,
            income,
            disability,
            answers: answers.map(Some),
        })
    }

    /// Create a record whose answers may be missing or unvetted.
    ///
    /// No range validation is applied; the analysis engines skip any answer
    /// outside `1..=5` when reading via [`ResponseRecord::answer`].
    #[must_use]
    pub fn with_partial_answers(
        age: u32,
        gender: Gender,
        income: u32,
        disability: Disability,
        answers: [Option<u8>; QUESTION_COUNT],
    ) -> Self {
        Self {
            age,
            gender,
            income,
            disability,
            answers,
        }
    }

    /// The derived age bracket for this record.
    #[must_use]
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }

    /// The derived income bracket for this record.
    #[must_use]
    pub fn income_group(&self) -> IncomeGroup {
        IncomeGroup::from_income(self.income)
    }

    /// The answer to `question` as a real number, if present and in range.
    #[must_use]
    pub fn answer(&self, question: QuestionId) -> Option<f64> {
        self.answers[question.index()]
            .filter(|v| (LIKERT_MIN..=LIKERT_MAX).contains(v))
            .map(f64::from)
    }

    /// The group label this record falls under for `key`.
    #[must_use]
    pub fn group_label(&self, key: GroupKey) -> &'static str {
        match key {
            GroupKey::Gender => self.gender.label(),
            GroupKey::AgeGroup => self.age_group().label(),
            GroupKey::IncomeGroup => self.income_group().label(),
            GroupKey::Disability => self.disability.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(age: u32, income: u32) -> ResponseRecord {
        ResponseRecord::new(age, Gender::Female, income, Disability::No, [3; 10]).unwrap()
    }

    #[test]
    fn test_age_bracket_boundaries() {
        assert_eq!(AgeGroup::from_age(0), AgeGroup::Under30);
        assert_eq!(AgeGroup::from_age(29), AgeGroup::Under30);
        assert_eq!(AgeGroup::from_age(30), AgeGroup::Thirties);
        assert_eq!(AgeGroup::from_age(39), AgeGroup::Thirties);
        assert_eq!(AgeGroup::from_age(40), AgeGroup::Forties);
        assert_eq!(AgeGroup::from_age(59), AgeGroup::Fifties);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::SixtyPlus);
        assert_eq!(AgeGroup::from_age(97), AgeGroup::SixtyPlus);
    }

    #[test]
    fn test_income_bracket_boundaries() {
        assert_eq!(IncomeGroup::from_income(0), IncomeGroup::Under400);
        assert_eq!(IncomeGroup::from_income(399), IncomeGroup::Under400);
        assert_eq!(IncomeGroup::from_income(400), IncomeGroup::Mid400To799);
        assert_eq!(IncomeGroup::from_income(799), IncomeGroup::Mid400To799);
        assert_eq!(IncomeGroup::from_income(800), IncomeGroup::Above800);
    }

    #[test]
    fn test_new_validates_likert_range() {
        let mut answers = [3u8; 10];
        answers[4] = 6;
        let err = ResponseRecord::new(30, Gender::Male, 500, Disability::No, answers).unwrap_err();
        assert_eq!(
            err,
            crate::Error::AnswerOutOfRange {
                question: QuestionId::new(5).unwrap(),
                value: 6,
            }
        );

        answers[4] = 0;
        assert!(ResponseRecord::new(30, Gender::Male, 500, Disability::No, answers).is_err());
    }

    #[test]
    fn test_partial_answers_are_skipped_not_rejected() {
        let mut answers = [Some(4u8); 10];
        answers[0] = None;
        answers[1] = Some(9); // out of range, must read as absent
        let rec =
            ResponseRecord::with_partial_answers(45, Gender::Other, 820, Disability::Yes, answers);

        assert_eq!(rec.answer(QuestionId::new(1).unwrap()), None);
        assert_eq!(rec.answer(QuestionId::new(2).unwrap()), None);
        assert_eq!(rec.answer(QuestionId::new(3).unwrap()), Some(4.0));
    }

    #[test]
    fn test_group_label_resolution() {
        let rec = record(34, 950);
        assert_eq!(rec.group_label(GroupKey::Gender), "female");
        assert_eq!(rec.group_label(GroupKey::AgeGroup), "30s");
        assert_eq!(rec.group_label(GroupKey::IncomeGroup), "800-plus");
        assert_eq!(rec.group_label(GroupKey::Disability), "no");
    }

    #[test]
    fn test_question_id_vocabulary() {
        assert_eq!("q1".parse::<QuestionId>().unwrap().number(), 1);
        assert_eq!("q10".parse::<QuestionId>().unwrap().number(), 10);
        assert!("q0".parse::<QuestionId>().is_err());
        assert!("q11".parse::<QuestionId>().is_err());
        assert!("2".parse::<QuestionId>().is_err());
        assert!("qx".parse::<QuestionId>().is_err());
    }

    #[test]
    fn test_group_key_vocabulary() {
        for key in GroupKey::ALL {
            assert_eq!(key.keyword().parse::<GroupKey>().unwrap(), key);
        }
        assert!("height".parse::<GroupKey>().is_err());
    }
}

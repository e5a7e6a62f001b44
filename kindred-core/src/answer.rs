//! Answer records, raw and normalised.
//!
//! A [`RawAnswer`] is what the application hands the engine: a selected
//! label, or an ordered list of labels for ranked questions. An
//! [`AnswerSet`] collects one user's raw answers keyed by question id and
//! may cover any subset of the catalogue. Normalisation resolves raw
//! answers into index form ([`NormalisedAnswer`]) and keeps the rejects
//! alongside the survivors in [`NormalisedAnswers`].

use std::collections::BTreeMap;

use thiserror::Error;

/// A respondent's raw answer to a single question.
///
/// The serialised form is untagged: a bare string is a selection, an array
/// of strings is a ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawAnswer {
    /// Selected label for a categorical or ordinal question.
    Choice(String),
    /// Complete ordering for a ranked-list question, most preferred first.
    Ranking(Vec<String>),
}

/// One user's raw answers keyed by question id.
///
/// Sets may cover any subset of the catalogue: users skip questions, and
/// the catalogue changes over time. The `BTreeMap` keeps iteration in id
/// order so the scorer accumulates weights in one deterministic sequence.
///
/// # Examples
/// ```
/// use kindred_core::AnswerSet;
///
/// let answers = AnswerSet::new()
///     .with_choice("pets", "dogs")
///     .with_ranking("priorities", ["family", "career", "travel", "friends"]);
/// assert_eq!(answers.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AnswerSet {
    answers: BTreeMap<String, RawAnswer>,
}

impl AnswerSet {
    /// Construct an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer to a question.
    pub fn insert(&mut self, question_id: impl Into<String>, answer: RawAnswer) {
        self.answers.insert(question_id.into(), answer);
    }

    /// Add a label selection while returning `self` for chaining.
    #[must_use]
    pub fn with_choice(mut self, question_id: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(question_id, RawAnswer::Choice(label.into()));
        self
    }

    /// Add a ranking while returning `self` for chaining.
    #[must_use]
    pub fn with_ranking<I, L>(mut self, question_id: impl Into<String>, ranking: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let ranking = ranking.into_iter().map(Into::into).collect();
        self.insert(question_id, RawAnswer::Ranking(ranking));
        self
    }

    /// Return the raw answer for a question, if present.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&RawAnswer> {
        self.answers.get(question_id)
    }

    /// Iterate the answers in question id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawAnswer)> {
        self.answers.iter().map(|(id, answer)| (id.as_str(), answer))
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the set contains no answers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// An answer resolved against the catalogue's label sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalisedAnswer {
    /// Option index within a categorical or ordinal label set.
    Index(usize),
    /// Rank position per catalogue item for a ranked-list question.
    ///
    /// `ranks[i]` is the position the respondent gave the catalogue's
    /// `i`-th item, with `0` the most preferred.
    Ranks(Vec<usize>),
}

/// Reasons an individual answer fails normalisation.
///
/// These are recoverable, per-question conditions: the offending answer is
/// skipped and the rest of the set is still scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// The answer references a question the catalogue does not define.
    #[error("question {id} is not in the catalogue")]
    UnknownQuestion {
        /// Identifier supplied with the answer.
        id: String,
    },
    /// The answer's shape does not match the question's format.
    #[error("question {id} expects a {expected} answer")]
    KindMismatch {
        /// Identifier of the question.
        id: String,
        /// Format the catalogue defines for the question.
        expected: &'static str,
    },
    /// A selection names a label outside the question's label set.
    #[error("question {id} has no option named {label:?}")]
    UnknownLabel {
        /// Identifier of the question.
        id: String,
        /// Label as supplied by the respondent.
        label: String,
    },
    /// A ranking names the same item twice.
    #[error("ranking for {id} repeats the item {item:?}")]
    DuplicateItem {
        /// Identifier of the question.
        id: String,
        /// Item that appears more than once.
        item: String,
    },
    /// A ranking omits one of the question's items.
    #[error("ranking for {id} omits the item {item:?}")]
    MissingItem {
        /// Identifier of the question.
        id: String,
        /// Item the ranking failed to place.
        item: String,
    },
    /// A ranking names an item outside the question's item set.
    #[error("ranking for {id} contains the unknown item {item:?}")]
    UnknownItem {
        /// Identifier of the question.
        id: String,
        /// Item as supplied by the respondent.
        item: String,
    },
}

/// One user's answers after validation against the catalogue.
///
/// Holds the successfully normalised answers plus the issues for every
/// answer that was rejected, so callers can surface data quality without
/// re-running normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalisedAnswers {
    answers: BTreeMap<String, NormalisedAnswer>,
    issues: Vec<AnswerError>,
}

impl NormalisedAnswers {
    pub(crate) fn from_parts(
        answers: BTreeMap<String, NormalisedAnswer>,
        issues: Vec<AnswerError>,
    ) -> Self {
        Self { answers, issues }
    }

    /// Return the normalised answer for a question, if it survived.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&NormalisedAnswer> {
        self.answers.get(question_id)
    }

    /// Iterate the surviving answers in question id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NormalisedAnswer)> {
        self.answers.iter().map(|(id, answer)| (id.as_str(), answer))
    }

    /// Issues collected for answers that failed normalisation.
    #[must_use]
    pub fn issues(&self) -> &[AnswerError] {
        &self.issues
    }

    /// Number of surviving answers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether no answer survived normalisation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

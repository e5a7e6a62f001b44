//! Score compatibility between two users' answers.
//!
//! The `PairScorer` trait assigns a [`PairScore`] to a pair of
//! [`NormalisedAnswers`](crate::NormalisedAnswers), comparing only the
//! questions both users answered.

use crate::NormalisedAnswers;

/// Outcome of comparing two answer sets.
///
/// `Unscored` is a result state, not an error: two users who share no
/// answered questions have no defined compatibility, which is different
/// from a compatibility of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairScore {
    /// Compatibility percentage over the questions both users answered.
    Scored(u8),
    /// The users share no answered questions.
    Unscored,
}

impl PairScore {
    /// Return the percentage when the pair was scorable.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Scored(score) => Some(score),
            Self::Unscored => None,
        }
    }

    /// Whether the pair produced a score.
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Scored(_))
    }
}

/// Calculate a compatibility score for a pair of answer sets.
///
/// Scores are integers in `0..=100`; higher means more compatible.
/// Implementations must be thread-safe (`Send` + `Sync`) so embedders can
/// partition candidate pools across threads, and must be symmetric: the
/// score must not depend on which set is passed first.
///
/// Use [`PairScorer::sanitise`] to guard raw per-question similarities.
///
/// # Examples
///
/// ```rust
/// use kindred_core::{AnswerSet, PairScore, PairScorer, normalise_set};
/// use kindred_core::test_support::sample_catalog;
///
/// struct AlwaysCompatible;
///
/// impl PairScorer for AlwaysCompatible {
///     fn score_pair(
///         &self,
///         _left: &kindred_core::NormalisedAnswers,
///         _right: &kindred_core::NormalisedAnswers,
///     ) -> PairScore {
///         PairScore::Scored(100)
///     }
/// }
///
/// let catalog = sample_catalog();
/// let answers = normalise_set(&catalog, &AnswerSet::new().with_choice("pets", "dogs"));
/// let scorer = AlwaysCompatible;
/// assert_eq!(scorer.score_pair(&answers, &answers), PairScore::Scored(100));
/// ```
pub trait PairScorer: Send + Sync {
    /// Score the overlap between `left` and `right`.
    fn score_pair(&self, left: &NormalisedAnswers, right: &NormalisedAnswers) -> PairScore;

    /// Clamp and validate a raw per-question similarity.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(similarity: f32) -> f32 {
        if !similarity.is_finite() {
            return 0.0;
        }
        similarity.clamp(0.0, 1.0)
    }
}

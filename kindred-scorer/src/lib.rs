//! Weighted compatibility scoring between pairs of answer sets.
//!
//! [`CompatibilityScorer`] implements [`PairScorer`] over a shared
//! [`QuestionCatalog`]. It compares the questions both users answered,
//! applies the similarity function each question's format calls for, and
//! folds the results into a weighted percentage. Questions only one side
//! answered carry no weight, so partial quizzes are compared on common
//! ground rather than penalised for gaps. A pair with no common ground at
//! all is [`PairScore::Unscored`].
//!
//! [`CompatibilityScorer::breakdown`] exposes the per-question contributions
//! behind a score for diagnostics and support tooling.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kindred_core::test_support::sample_catalog;
//! use kindred_core::{AnswerSet, PairScore, PairScorer, normalise_set};
//! use kindred_scorer::CompatibilityScorer;
//!
//! let catalog = Arc::new(sample_catalog());
//! let left = normalise_set(
//!     &catalog,
//!     &AnswerSet::new()
//!         .with_choice("pets", "dogs")
//!         .with_choice("morning-person", "agree"),
//! );
//! let right = normalise_set(
//!     &catalog,
//!     &AnswerSet::new()
//!         .with_choice("pets", "dogs")
//!         .with_choice("weekend-style", "quiet night in"),
//! );
//!
//! let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
//! // Only the shared question, pets, is compared.
//! assert_eq!(scorer.score_pair(&left, &right), PairScore::Scored(100));
//! ```
#![forbid(unsafe_code)]

use std::sync::Arc;

use kindred_core::{NormalisedAnswers, PairScore, PairScorer, QuestionCatalog};

pub mod similarity;
mod types;

pub use types::{PairBreakdown, QuestionContribution};

/// Weighted compatibility scorer over a shared question catalogue.
///
/// The catalogue sits behind an [`Arc`] so request handlers and rankers can
/// share one scorer across threads.
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    catalog: Arc<QuestionCatalog>,
}

impl CompatibilityScorer {
    /// Creates a scorer that compares answers against `catalog`.
    #[must_use]
    pub const fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    /// Borrows the catalogue the scorer compares answers against.
    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Scores a pair and reports each shared question's contribution.
    ///
    /// The outcome field always agrees with [`PairScorer::score_pair`] on
    /// the same inputs because both fold the same contributions.
    #[must_use]
    pub fn breakdown(
        &self,
        left: &NormalisedAnswers,
        right: &NormalisedAnswers,
    ) -> PairBreakdown {
        let contributions: Vec<QuestionContribution> = self
            .shared(left, right)
            .map(|(question_id, weight, similarity)| QuestionContribution {
                question_id: question_id.to_owned(),
                weight,
                similarity,
            })
            .collect();
        let outcome = aggregate(
            contributions
                .iter()
                .map(|contribution| (contribution.weight, contribution.similarity)),
        );
        PairBreakdown {
            contributions,
            outcome,
        }
    }

    /// Walks the questions both sides answered, in question id order.
    ///
    /// Yields the question id, its weight, and the sanitised similarity of
    /// the two answers. Skips questions the catalogue no longer defines and
    /// answers whose shape does not match the question format.
    fn shared<'a>(
        &'a self,
        left: &'a NormalisedAnswers,
        right: &'a NormalisedAnswers,
    ) -> impl Iterator<Item = (&'a str, f32, f32)> + 'a {
        left.iter().filter_map(move |(question_id, left_answer)| {
            let right_answer = right.get(question_id)?;
            let definition = self.catalog.get(question_id)?;
            let similarity = similarity::for_answers(definition, left_answer, right_answer)?;
            Some((question_id, definition.weight, Self::sanitise(similarity)))
        })
    }
}

impl PairScorer for CompatibilityScorer {
    fn score_pair(&self, left: &NormalisedAnswers, right: &NormalisedAnswers) -> PairScore {
        aggregate(
            self.shared(left, right)
                .map(|(_, weight, similarity)| (weight, similarity)),
        )
    }
}

/// Folds `(weight, similarity)` pairs into a percentage outcome.
///
/// Accumulation follows the iterator's order, which [`CompatibilityScorer`]
/// fixes to question id order, so swapping the two users cannot change the
/// sum.
#[expect(
    clippy::float_arithmetic,
    reason = "the aggregate is a weighted mean of similarities"
)]
fn aggregate<I>(shared: I) -> PairScore
where
    I: Iterator<Item = (f32, f32)>,
{
    let mut weighted = 0.0_f32;
    let mut total_weight = 0.0_f32;
    for (weight, similarity) in shared {
        weighted += weight * similarity;
        total_weight += weight;
    }
    if total_weight <= 0.0 {
        return PairScore::Unscored;
    }
    PairScore::Scored(percentage(weighted, total_weight))
}

/// Converts a weighted similarity sum into a score out of one hundred.
///
/// Rounds half away from zero and clamps before narrowing, so the result
/// always fits `0..=100`.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the ratio is rounded and clamped to 0..=100 before narrowing"
)]
fn percentage(weighted: f32, total_weight: f32) -> u8 {
    let scaled = (weighted / total_weight * 100.0).round().clamp(0.0, 100.0);
    scaled as u8
}

#[cfg(test)]
mod tests;

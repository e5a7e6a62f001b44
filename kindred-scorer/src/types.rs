//! Observability types for per-question score breakdowns.
#![forbid(unsafe_code)]

use kindred_core::PairScore;

/// One shared question's contribution to a pair's score.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionContribution {
    /// Identifier of the question both users answered.
    pub question_id: String,
    /// Weight the catalogue assigns the question.
    pub weight: f32,
    /// Similarity of the two answers, in `0.0..=1.0`.
    pub similarity: f32,
}

/// A pair's aggregate outcome alongside the questions that produced it.
///
/// The contributions list follows question id order, matching the order the
/// aggregate walks, so a reader can recompute the weighted mean by hand when
/// chasing a surprising score.
#[derive(Debug, Clone, PartialEq)]
pub struct PairBreakdown {
    /// Per-question contributions in question id order.
    pub contributions: Vec<QuestionContribution>,
    /// The outcome the pair scores to, identical to [`score_pair`].
    ///
    /// [`score_pair`]: kindred_core::PairScorer::score_pair
    pub outcome: PairScore,
}

impl PairBreakdown {
    /// Sum of the weights of the contributing questions.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weight totals mirror the aggregate's accumulation"
    )]
    pub fn total_weight(&self) -> f32 {
        self.contributions
            .iter()
            .map(|contribution| contribution.weight)
            .sum()
    }
}

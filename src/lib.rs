//! Facade crate for the Kindred compatibility engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! scorer and ranker implementations behind feature flags.

#![forbid(unsafe_code)]

pub use kindred_core::{
    AnswerError, AnswerFormat, AnswerSet, AnswerStore, Candidate, CatalogError, DroppedCandidate,
    MatchResult, NormalisedAnswer, NormalisedAnswers, PairScore, PairScorer, QuestionCatalog,
    QuestionDefinition, RankDiagnostics, RankError, RankRequest, RankResponse, Ranker, RawAnswer,
    StoreError, normalise_answer, normalise_set,
};

#[cfg(feature = "scorer-compat")]
pub use kindred_scorer::{CompatibilityScorer, PairBreakdown, QuestionContribution};

#[cfg(feature = "ranker-match")]
pub use kindred_ranker::MatchRanker;

/// Build the default ranking stack over a shared catalogue.
///
/// Wires a [`CompatibilityScorer`] into a [`MatchRanker`], both borrowing
/// the same catalogue, which is how deployments are expected to assemble
/// the engine unless they swap in their own scorer.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use kindred_core::test_support::{sample_catalog, uniform_answers};
/// use kindred_engine::{Candidate, RankRequest, Ranker};
///
/// let catalog = Arc::new(sample_catalog());
/// let ranker = kindred_engine::default_ranker(Arc::clone(&catalog));
/// let response = ranker
///     .rank(&RankRequest {
///         current: uniform_answers(&catalog),
///         candidates: vec![Candidate::new("brendan", uniform_answers(&catalog))],
///         limit: None,
///     })
///     .expect("ranking succeeds");
/// assert_eq!(response.matches.len(), 1);
/// ```
#[cfg(all(feature = "scorer-compat", feature = "ranker-match"))]
#[must_use]
pub fn default_ranker(
    catalog: std::sync::Arc<QuestionCatalog>,
) -> MatchRanker<CompatibilityScorer> {
    let scorer = CompatibilityScorer::new(std::sync::Arc::clone(&catalog));
    MatchRanker::new(catalog, scorer)
}

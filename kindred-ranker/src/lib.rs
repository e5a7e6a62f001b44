//! Candidate ranking over pairwise compatibility scores.
//!
//! This crate provides [`MatchRanker`], the default implementation of the
//! [`Ranker`](kindred_core::Ranker) trait. It normalises the requesting
//! user's answers once, scores every candidate against them through a
//! [`PairScorer`](kindred_core::PairScorer), and returns the matches in
//! descending score order with candidate id as the tie-break.
//!
//! Ranking is tolerant of dirty data at the edges: candidates whose answer
//! sets normalise to nothing are dropped and reported in the diagnostics,
//! and candidates sharing no answered questions with the requesting user
//! are listed as unscored rather than given a misleading zero. Only a
//! baseline with no usable answers at all fails the call.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kindred_core::test_support::{sample_catalog, uniform_answers};
//! use kindred_core::{Candidate, RankRequest, Ranker};
//! use kindred_ranker::MatchRanker;
//! use kindred_scorer::CompatibilityScorer;
//!
//! # fn main() -> Result<(), kindred_core::RankError> {
//! let catalog = Arc::new(sample_catalog());
//! let ranker = MatchRanker::new(
//!     Arc::clone(&catalog),
//!     CompatibilityScorer::new(Arc::clone(&catalog)),
//! );
//!
//! let request = RankRequest {
//!     current: uniform_answers(&catalog),
//!     candidates: vec![
//!         Candidate::new("brendan", uniform_answers(&catalog)),
//!         Candidate::new(
//!             "carol",
//!             uniform_answers(&catalog).with_choice("pets", "cats"),
//!         ),
//!     ],
//!     limit: None,
//! };
//!
//! let response = ranker.rank(&request)?;
//! assert_eq!(response.matches[0].candidate_id, "brendan");
//! assert_eq!(response.matches[0].score, 100);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use kindred_core::{
    DroppedCandidate, MatchResult, PairScore, PairScorer, QuestionCatalog, RankDiagnostics,
    RankError, RankRequest, RankResponse, Ranker, normalise_set,
};

/// Ranker that orders candidates by pairwise compatibility.
///
/// Generic over the scoring seam so deployments can swap the weighted
/// compatibility scorer for an experimental one without touching the
/// ranking behaviour.
#[derive(Debug, Clone)]
pub struct MatchRanker<S>
where
    S: PairScorer,
{
    catalog: Arc<QuestionCatalog>,
    scorer: S,
}

impl<S> MatchRanker<S>
where
    S: PairScorer,
{
    /// Construct a ranker that normalises answers against `catalog` and
    /// scores pairs with `scorer`.
    #[must_use]
    pub const fn new(catalog: Arc<QuestionCatalog>, scorer: S) -> Self {
        Self { catalog, scorer }
    }
}

impl<S> Ranker for MatchRanker<S>
where
    S: PairScorer,
{
    fn rank(&self, request: &RankRequest) -> Result<RankResponse, RankError> {
        let started_at = Instant::now();

        let baseline = normalise_set(&self.catalog, &request.current);
        if baseline.is_empty() {
            return Err(RankError::BaselineInvalid {
                issues: baseline.issues().to_vec(),
            });
        }
        for issue in baseline.issues() {
            log::warn!("Baseline answer skipped: {issue}");
        }

        let mut diagnostics = RankDiagnostics {
            baseline_issues: baseline.issues().to_vec(),
            ..RankDiagnostics::default()
        };
        let mut best: BTreeMap<&str, u8> = BTreeMap::new();
        let mut unscored: Vec<&str> = Vec::new();

        for candidate in &request.candidates {
            let candidate_id = candidate.id.as_str();
            let answers = normalise_set(&self.catalog, &candidate.answers);
            if answers.is_empty() {
                log::warn!("Candidate {candidate_id} has no usable answers; dropping from ranking");
                diagnostics.dropped.push(DroppedCandidate {
                    candidate_id: candidate.id.clone(),
                    issues: answers.issues().to_vec(),
                });
                continue;
            }
            for issue in answers.issues() {
                log::debug!("Candidate {candidate_id} answer skipped: {issue}");
            }
            diagnostics.candidates_evaluated += 1;
            match self.scorer.score_pair(&baseline, &answers) {
                PairScore::Scored(score) => {
                    best.entry(candidate_id)
                        .and_modify(|current| *current = (*current).max(score))
                        .or_insert(score);
                }
                PairScore::Unscored => unscored.push(candidate_id),
            }
        }

        unscored.retain(|candidate_id| !best.contains_key(candidate_id));
        unscored.sort_unstable();
        unscored.dedup();
        diagnostics.unscored = unscored
            .into_iter()
            .map(|candidate_id| candidate_id.to_owned())
            .collect();

        let mut matches: Vec<MatchResult> = best
            .into_iter()
            .map(|(candidate_id, score)| MatchResult {
                candidate_id: candidate_id.to_owned(),
                score,
            })
            .collect();
        matches.sort_unstable_by(|lhs, rhs| {
            rhs.score
                .cmp(&lhs.score)
                .then_with(|| lhs.candidate_id.cmp(&rhs.candidate_id))
        });
        if let Some(limit) = request.limit {
            matches.truncate(limit.get());
        }

        diagnostics.rank_time = started_at.elapsed();
        Ok(RankResponse {
            matches,
            diagnostics,
        })
    }
}

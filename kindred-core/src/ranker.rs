//! Rank a candidate pool by compatibility with one user.
//!
//! The request carries the requesting user's raw answers and the candidate
//! pool; the response carries the ordered matches plus diagnostics about
//! everything the ranking had to skip. Implementations normalise and score
//! internally so callers only ever handle raw [`AnswerSet`]s.

use std::num::NonZeroUsize;
use std::time::Duration;

use thiserror::Error;

use crate::answer::{AnswerError, AnswerSet};

/// One entrant in the candidate pool.
///
/// # Examples
/// ```rust
/// use kindred_core::{AnswerSet, Candidate};
///
/// let candidate = Candidate::new("user-17", AnswerSet::new().with_choice("pets", "dogs"));
/// assert_eq!(candidate.id, "user-17");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Stable identifier of the candidate user.
    pub id: String,
    /// The candidate's raw quiz answers.
    pub answers: AnswerSet,
}

impl Candidate {
    /// Construct a candidate from an id and raw answers.
    #[must_use]
    pub fn new(id: impl Into<String>, answers: AnswerSet) -> Self {
        Self {
            id: id.into(),
            answers,
        }
    }
}

/// Parameters for a ranking request.
///
/// # Examples
/// ```rust
/// use kindred_core::{AnswerSet, RankRequest};
///
/// let request = RankRequest {
///     current: AnswerSet::new().with_choice("pets", "dogs"),
///     candidates: Vec::new(),
///     limit: None,
/// };
/// assert!(request.candidates.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankRequest {
    /// Raw answers of the user requesting matches.
    pub current: AnswerSet,
    /// Candidate pool to rank.
    pub candidates: Vec<Candidate>,
    /// Optional cap on the number of matches returned.
    pub limit: Option<NonZeroUsize>,
}

/// A single ranked match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Identifier of the matched candidate.
    pub candidate_id: String,
    /// Compatibility percentage in `0..=100`.
    pub score: u8,
}

/// A candidate excluded because none of its answers could be normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedCandidate {
    /// Identifier of the dropped candidate.
    pub candidate_id: String,
    /// Why each of the candidate's answers was rejected.
    pub issues: Vec<AnswerError>,
}

/// Observability data collected while ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankDiagnostics {
    /// Wall-clock time spent ranking.
    pub rank_time: Duration,
    /// Number of candidates that reached scoring.
    pub candidates_evaluated: u64,
    /// Candidates excluded for having no usable answers.
    pub dropped: Vec<DroppedCandidate>,
    /// Candidates evaluated but sharing no answered questions with the
    /// requesting user. These never appear in the matches list.
    pub unscored: Vec<String>,
    /// Requesting user's answers that failed normalisation while at least
    /// one other succeeded.
    pub baseline_issues: Vec<AnswerError>,
}

/// Response from a successful ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankResponse {
    /// Matches ordered by descending score, then ascending candidate id.
    pub matches: Vec<MatchResult>,
    /// What the ranking skipped and how much work it did.
    pub diagnostics: RankDiagnostics,
}

/// Errors returned by [`Ranker::rank`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// None of the requesting user's answers could be normalised, so there
    /// is no baseline to compare candidates against.
    #[error("requesting user has no usable answers")]
    BaselineInvalid {
        /// Why each baseline answer was rejected.
        issues: Vec<AnswerError>,
    },
}

/// Alias for the ranker error type.
pub type Error = RankError;

/// Rank a candidate pool against one user's answers.
///
/// Implementations must produce a deterministic order for identical inputs
/// and must isolate per-candidate failures: one malformed candidate must
/// never abort the batch. Rankers must be `Send + Sync` to operate safely
/// across threads.
pub trait Ranker: Send + Sync {
    /// Rank the request's candidates, producing ordered matches or an error.
    fn rank(&self, request: &RankRequest) -> Result<RankResponse, Error>;
}

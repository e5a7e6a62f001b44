//! Core domain types for the Kindred matching engine.
//!
//! The engine turns quiz answers into ranked matches in three stages, and
//! this crate defines the vocabulary and seams for all of them:
//!
//! - a validated [`QuestionCatalog`] describes every scorable question,
//!   its answer format, and its aggregation weight;
//! - [`normalise_set`] resolves each user's raw [`AnswerSet`] into index
//!   form, preserving per-answer failures as recoverable issues;
//! - the [`PairScorer`] and [`Ranker`] traits mark where the scoring maths
//!   and the pool ranking plug in, and [`AnswerStore`] is the seam through
//!   which the embedding application supplies answers and persists scores.
//!
//! Catalogue problems are fatal and surface at construction; answer
//! problems are per-question and never abort a batch. Everything here is
//! deterministic: iteration follows question id order, so repeated runs
//! over identical inputs produce identical results.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod answer;
mod catalog;
mod normalise;
mod question;
mod ranker;
mod scorer;
mod store;

pub mod test_support;

pub use answer::{AnswerError, AnswerSet, NormalisedAnswer, NormalisedAnswers, RawAnswer};
pub use catalog::{CatalogError, QuestionCatalog};
pub use normalise::{normalise_answer, normalise_set};
pub use question::{AnswerFormat, QuestionDefinition};
pub use ranker::{
    Candidate, DroppedCandidate, Error, MatchResult, RankDiagnostics, RankError, RankRequest,
    RankResponse, Ranker,
};
pub use scorer::{PairScore, PairScorer};
pub use store::{AnswerStore, StoreError};

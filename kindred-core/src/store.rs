//! Persistence seam for answers and computed scores.
//!
//! The `AnswerStore` trait is how the embedding application supplies quiz
//! answers and receives scores back. The engine itself never reads or
//! writes storage: the calling workflow loads answer sets, runs the
//! ranker, and persists each match's score through the same trait.

use thiserror::Error;

use crate::answer::AnswerSet;

/// Errors raised by an [`AnswerStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No answers are recorded for the requested user.
    #[error("no answers recorded for user {id}")]
    NotFound {
        /// Identifier of the user whose answers were requested.
        id: String,
    },
    /// The underlying storage failed.
    #[error("storage backend error")]
    Backend {
        /// Source error raised by the backing store.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Access to each user's saved answers and pair scores.
///
/// `save_score` must make the score observable from both sides of the
/// pairing: the engine's scores are symmetric, so whichever user triggered
/// the computation, both connection views read the same value.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use std::sync::Mutex;
/// use kindred_core::{AnswerSet, AnswerStore, StoreError};
///
/// struct SingleUserStore {
///     answers: AnswerSet,
///     scores: Mutex<BTreeMap<(String, String), u8>>,
/// }
///
/// impl AnswerStore for SingleUserStore {
///     fn load_answers(&self, user_id: &str) -> Result<AnswerSet, StoreError> {
///         if user_id == "me" {
///             Ok(self.answers.clone())
///         } else {
///             Err(StoreError::NotFound { id: user_id.to_owned() })
///         }
///     }
///
///     fn save_score(&self, user_id: &str, peer_id: &str, score: u8) -> Result<(), StoreError> {
///         let key = if user_id <= peer_id {
///             (user_id.to_owned(), peer_id.to_owned())
///         } else {
///             (peer_id.to_owned(), user_id.to_owned())
///         };
///         let mut scores = self.scores.lock().map_err(|_| StoreError::Backend {
///             source: "score ledger poisoned".into(),
///         })?;
///         scores.insert(key, score);
///         Ok(())
///     }
/// }
///
/// let store = SingleUserStore {
///     answers: AnswerSet::new().with_choice("pets", "dogs"),
///     scores: Mutex::new(BTreeMap::new()),
/// };
/// assert!(store.load_answers("me").is_ok());
/// assert!(store.save_score("me", "them", 80).is_ok());
/// ```
pub trait AnswerStore {
    /// Load a user's raw answers.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when the user has no answer record,
    /// or [`StoreError::Backend`] when the store itself fails.
    fn load_answers(&self, user_id: &str) -> Result<AnswerSet, StoreError>;

    /// Record `score` against the connection between two users.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] when the store fails to persist the
    /// score.
    fn save_score(&self, user_id: &str, peer_id: &str, score: u8) -> Result<(), StoreError>;
}

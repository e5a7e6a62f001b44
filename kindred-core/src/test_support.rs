//! Test-only catalogue, answer, and store helpers used by unit and
//! behaviour tests.

use crate::answer::{AnswerSet, RawAnswer};
use crate::catalog::QuestionCatalog;
use crate::question::{AnswerFormat, QuestionDefinition};

/// A small but representative quiz covering all three answer formats and
/// non-uniform weights.
///
/// Questions, in id order: `morning-person` (five-point ordinal, weight
/// 1.0), `pets` (categorical, weight 0.5), `priorities` (four-item ranked
/// list, weight 2.0), and `weekend-style` (categorical, weight 1.0).
#[must_use]
pub fn sample_catalog() -> QuestionCatalog {
    let definitions = vec![
        QuestionDefinition::new(
            "weekend-style",
            1.0,
            AnswerFormat::Categorical {
                options: vec![
                    "out on the town".into(),
                    "quiet night in".into(),
                    "something outdoors".into(),
                ],
            },
        )
        .expect("valid weekend-style question"),
        QuestionDefinition::new(
            "morning-person",
            1.0,
            AnswerFormat::Ordinal {
                scale: vec![
                    "strongly disagree".into(),
                    "disagree".into(),
                    "neutral".into(),
                    "agree".into(),
                    "strongly agree".into(),
                ],
            },
        )
        .expect("valid morning-person question"),
        QuestionDefinition::new(
            "priorities",
            2.0,
            AnswerFormat::RankedList {
                items: vec![
                    "career".into(),
                    "family".into(),
                    "travel".into(),
                    "friends".into(),
                ],
            },
        )
        .expect("valid priorities question"),
        QuestionDefinition::new(
            "pets",
            0.5,
            AnswerFormat::Categorical {
                options: vec!["dogs".into(), "cats".into(), "neither".into()],
            },
        )
        .expect("valid pets question"),
    ];
    QuestionCatalog::new(definitions).expect("valid sample catalogue")
}

/// A complete answer set selecting each question's first label and keeping
/// rankings in catalogue order.
///
/// Two users built from this helper agree on every question, so their
/// compatibility is exactly 100.
#[must_use]
pub fn uniform_answers(catalog: &QuestionCatalog) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for question in catalog.iter() {
        let answer = match &question.format {
            AnswerFormat::Categorical { options } => RawAnswer::Choice(options[0].clone()),
            AnswerFormat::Ordinal { scale } => RawAnswer::Choice(scale[0].clone()),
            AnswerFormat::RankedList { items } => RawAnswer::Ranking(items.clone()),
        };
        answers.insert(question.id.clone(), answer);
    }
    answers
}

/// In-memory `AnswerStore` used in tests.
///
/// Answers are fixed at construction; scores are kept under an
/// order-independent pair key so a saved score reads back identically from
/// either side of the connection.
#[cfg(any(test, feature = "test-support"))]
#[derive(Default, Debug)]
pub struct MemoryAnswerStore {
    answers: std::collections::BTreeMap<String, AnswerSet>,
    scores: std::sync::Mutex<std::collections::BTreeMap<(String, String), u8>>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemoryAnswerStore {
    /// Create a store holding the given users' answers.
    pub fn with_answers<I, K>(answers: I) -> Self
    where
        I: IntoIterator<Item = (K, AnswerSet)>,
        K: Into<String>,
    {
        Self {
            answers: answers
                .into_iter()
                .map(|(id, set)| (id.into(), set))
                .collect(),
            scores: std::sync::Mutex::new(std::collections::BTreeMap::new()),
        }
    }

    /// Read back the saved score for a pair, from either direction.
    #[must_use]
    pub fn score_between(&self, user_id: &str, peer_id: &str) -> Option<u8> {
        let scores = self.scores.lock().ok()?;
        scores.get(&pair_key(user_id, peer_id)).copied()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl crate::store::AnswerStore for MemoryAnswerStore {
    fn load_answers(&self, user_id: &str) -> Result<AnswerSet, crate::store::StoreError> {
        self.answers
            .get(user_id)
            .cloned()
            .ok_or_else(|| crate::store::StoreError::NotFound {
                id: user_id.to_owned(),
            })
    }

    fn save_score(
        &self,
        user_id: &str,
        peer_id: &str,
        score: u8,
    ) -> Result<(), crate::store::StoreError> {
        let mut scores = self
            .scores
            .lock()
            .map_err(|_| crate::store::StoreError::Backend {
                source: "score ledger mutex poisoned".into(),
            })?;
        scores.insert(pair_key(user_id, peer_id), score);
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
fn pair_key(user_id: &str, peer_id: &str) -> (String, String) {
    if user_id <= peer_id {
        (user_id.to_owned(), peer_id.to_owned())
    } else {
        (peer_id.to_owned(), user_id.to_owned())
    }
}

//! Resolve raw answers against the catalogue.
//!
//! Normalisation turns labels into indices and rankings into per-item rank
//! vectors, so similarity functions work on positions rather than strings.
//! [`normalise_answer`] handles one answer; [`normalise_set`] is total over
//! a whole set, collecting failures instead of aborting. Both are pure;
//! reporting skipped answers is the caller's concern.

use std::collections::BTreeMap;

use crate::answer::{AnswerError, AnswerSet, NormalisedAnswer, NormalisedAnswers, RawAnswer};
use crate::catalog::QuestionCatalog;
use crate::question::{AnswerFormat, QuestionDefinition};

/// Resolve one raw answer against its question definition.
///
/// Selections resolve to the label's index within the question's label set.
/// Rankings must be a permutation of the question's items and resolve to a
/// vector of rank positions indexed by catalogue item.
///
/// # Examples
/// ```
/// use kindred_core::{
///     AnswerFormat, NormalisedAnswer, QuestionDefinition, RawAnswer, normalise_answer,
/// };
///
/// let question = QuestionDefinition::new(
///     "pets",
///     1.0,
///     AnswerFormat::Categorical {
///         options: vec!["dogs".into(), "cats".into(), "neither".into()],
///     },
/// )?;
/// let answer = normalise_answer(&question, &RawAnswer::Choice("cats".into()))
///     .expect("label is defined");
/// assert_eq!(answer, NormalisedAnswer::Index(1));
/// # Ok::<(), kindred_core::CatalogError>(())
/// ```
///
/// # Errors
/// Returns an [`AnswerError`] describing the first problem found: a shape
/// mismatch, an unknown label, or a ranking that repeats, omits, or invents
/// an item.
pub fn normalise_answer(
    definition: &QuestionDefinition,
    answer: &RawAnswer,
) -> Result<NormalisedAnswer, AnswerError> {
    match (&definition.format, answer) {
        (
            AnswerFormat::Categorical { .. } | AnswerFormat::Ordinal { .. },
            RawAnswer::Choice(label),
        ) => resolve_label(definition, label),
        (AnswerFormat::RankedList { items }, RawAnswer::Ranking(ranking)) => {
            resolve_ranking(&definition.id, items, ranking)
        }
        (format, _) => Err(AnswerError::KindMismatch {
            id: definition.id.clone(),
            expected: format.kind(),
        }),
    }
}

fn resolve_label(
    definition: &QuestionDefinition,
    label: &str,
) -> Result<NormalisedAnswer, AnswerError> {
    definition
        .format
        .labels()
        .iter()
        .position(|candidate| candidate == label)
        .map(NormalisedAnswer::Index)
        .ok_or_else(|| AnswerError::UnknownLabel {
            id: definition.id.clone(),
            label: label.to_owned(),
        })
}

fn resolve_ranking(
    question_id: &str,
    items: &[String],
    ranking: &[String],
) -> Result<NormalisedAnswer, AnswerError> {
    let mut ranks: Vec<Option<usize>> = vec![None; items.len()];

    for (position, item) in ranking.iter().enumerate() {
        let Some(index) = items.iter().position(|candidate| candidate == item) else {
            return Err(AnswerError::UnknownItem {
                id: question_id.to_owned(),
                item: item.clone(),
            });
        };
        if ranks[index].is_some() {
            return Err(AnswerError::DuplicateItem {
                id: question_id.to_owned(),
                item: item.clone(),
            });
        }
        ranks[index] = Some(position);
    }

    let mut resolved = Vec::with_capacity(ranks.len());
    for (index, slot) in ranks.iter().enumerate() {
        match slot {
            Some(position) => resolved.push(*position),
            None => {
                return Err(AnswerError::MissingItem {
                    id: question_id.to_owned(),
                    item: items[index].clone(),
                });
            }
        }
    }
    Ok(NormalisedAnswer::Ranks(resolved))
}

/// Normalise a whole answer set against the catalogue.
///
/// Answers for undefined questions, and answers that fail per-question
/// validation, are recorded as issues and excluded; the rest of the set is
/// still normalised. The function never fails: a set where nothing survives
/// simply yields an empty [`NormalisedAnswers`] whose issues explain why.
///
/// # Examples
/// ```
/// use kindred_core::{AnswerSet, normalise_set, test_support::sample_catalog};
///
/// let catalog = sample_catalog();
/// let answers = AnswerSet::new()
///     .with_choice("pets", "dogs")
///     .with_choice("pets-and-plants", "ferns");
///
/// let normalised = normalise_set(&catalog, &answers);
/// assert_eq!(normalised.len(), 1);
/// assert_eq!(normalised.issues().len(), 1);
/// ```
#[must_use]
pub fn normalise_set(catalog: &QuestionCatalog, answers: &AnswerSet) -> NormalisedAnswers {
    let mut normalised = BTreeMap::new();
    let mut issues = Vec::new();

    for (question_id, answer) in answers.iter() {
        let Some(definition) = catalog.get(question_id) else {
            issues.push(AnswerError::UnknownQuestion {
                id: question_id.to_owned(),
            });
            continue;
        };
        match normalise_answer(definition, answer) {
            Ok(resolved) => {
                normalised.insert(question_id.to_owned(), resolved);
            }
            Err(issue) => issues.push(issue),
        }
    }

    NormalisedAnswers::from_parts(normalised, issues)
}

//! Per-question similarity functions.
//!
//! Each function maps a pair of normalised answers onto `0.0..=1.0`, where
//! `1.0` is perfect agreement. [`for_answers`] dispatches on the question
//! format and yields `None` when the answers do not fit it, so callers can
//! skip a question rather than abort the pair.
#![forbid(unsafe_code)]

use kindred_core::{AnswerFormat, NormalisedAnswer, QuestionDefinition};

/// Similarity of two single-choice answers.
///
/// Choices either agree or they do not; there is no notion of near misses
/// between unordered options.
///
/// # Examples
///
/// ```rust
/// use kindred_scorer::similarity::categorical;
///
/// assert_eq!(categorical(2, 2), 1.0);
/// assert_eq!(categorical(0, 2), 0.0);
/// ```
#[must_use]
pub const fn categorical(left: usize, right: usize) -> f32 {
    if left == right { 1.0 } else { 0.0 }
}

/// Similarity of two positions on an ordered scale of `scale_len` points.
///
/// Decreases linearly with the distance between the positions: adjacent
/// points on a five-point scale score `0.75`, opposite ends score `0.0`.
///
/// # Examples
///
/// ```rust
/// use kindred_scorer::similarity::ordinal;
///
/// assert_eq!(ordinal(1, 3, 5), 0.5);
/// assert_eq!(ordinal(4, 4, 5), 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "scale distances are small integers and exact in f32"
)]
pub fn ordinal(left: usize, right: usize, scale_len: usize) -> f32 {
    let span = scale_len.saturating_sub(1).max(1);
    let distance = left.abs_diff(right).min(span);
    1.0 - distance as f32 / span as f32
}

/// Similarity of two rankings expressed as per-item positions.
///
/// `left[i]` and `right[i]` are the positions each user gave the same item,
/// so the summed displacement is the Spearman footrule distance. The sum is
/// scaled by its ceiling, the floor of `k * k / 2` for `k` ranked items,
/// which a full reversal attains.
///
/// # Examples
///
/// ```rust
/// use kindred_scorer::similarity::ranked;
///
/// // Reversing a three-item ranking is maximally distant.
/// assert_eq!(ranked(&[0, 1, 2], &[2, 1, 0]), 0.0);
/// // Swapping the top two items displaces each by one place.
/// assert_eq!(ranked(&[0, 1, 2, 3], &[1, 0, 2, 3]), 0.75);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::integer_division,
    reason = "the footrule ceiling is an integer floor and exact in f32 for quiz-sized rankings"
)]
pub fn ranked(left: &[usize], right: &[usize]) -> f32 {
    let len = left.len().min(right.len());
    let ceiling = (len * len) / 2;
    if ceiling == 0 {
        return 1.0;
    }
    let displacement: usize = left
        .iter()
        .zip(right)
        .map(|(first, second)| first.abs_diff(*second))
        .sum();
    1.0 - displacement.min(ceiling) as f32 / ceiling as f32
}

/// Applies the similarity function a question's format calls for.
///
/// Returns `None` when either answer does not match the format, which only
/// arises when answers were normalised against a different catalogue.
pub(crate) fn for_answers(
    definition: &QuestionDefinition,
    left: &NormalisedAnswer,
    right: &NormalisedAnswer,
) -> Option<f32> {
    match (&definition.format, left, right) {
        (
            AnswerFormat::Categorical { .. },
            NormalisedAnswer::Index(left_index),
            NormalisedAnswer::Index(right_index),
        ) => Some(categorical(*left_index, *right_index)),
        (
            AnswerFormat::Ordinal { scale },
            NormalisedAnswer::Index(left_index),
            NormalisedAnswer::Index(right_index),
        ) => Some(ordinal(*left_index, *right_index, scale.len())),
        (
            AnswerFormat::RankedList { .. },
            NormalisedAnswer::Ranks(left_ranks),
            NormalisedAnswer::Ranks(right_ranks),
        ) => Some(ranked(left_ranks, right_ranks)),
        _ => None,
    }
}

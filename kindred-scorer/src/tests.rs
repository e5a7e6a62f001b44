//! Unit coverage for compatibility scoring.
#![forbid(unsafe_code)]

use std::sync::Arc;

use kindred_core::test_support::{sample_catalog, uniform_answers};
use kindred_core::{
    AnswerFormat, AnswerSet, NormalisedAnswer, PairScore, PairScorer, QuestionCatalog,
    QuestionDefinition, normalise_set,
};
use rstest::rstest;

use crate::{CompatibilityScorer, similarity};

fn yes_no_catalog(weights: &[(&str, f32)]) -> QuestionCatalog {
    let questions = weights
        .iter()
        .map(|(id, weight)| {
            QuestionDefinition::new(
                *id,
                *weight,
                AnswerFormat::Categorical {
                    options: vec!["yes".into(), "no".into()],
                },
            )
            .expect("valid question")
        })
        .collect();
    QuestionCatalog::new(questions).expect("valid catalogue")
}

fn choices(pairs: &[(&str, &str)]) -> AnswerSet {
    pairs
        .iter()
        .fold(AnswerSet::new(), |answers, (question_id, label)| {
            answers.with_choice(*question_id, *label)
        })
}

#[rstest]
#[case::agreement(3, 3, 1.0)]
#[case::disagreement(0, 2, 0.0)]
fn categorical_choices_either_match_or_do_not(
    #[case] left: usize,
    #[case] right: usize,
    #[case] expected: f32,
) {
    assert_eq!(similarity::categorical(left, right), expected);
}

#[rstest]
#[case::same_point(2, 2, 5, 1.0)]
#[case::adjacent(3, 4, 5, 0.75)]
#[case::mid_scale(1, 3, 5, 0.5)]
#[case::opposite_ends(0, 4, 5, 0.0)]
#[case::two_point_scale(0, 1, 2, 0.0)]
fn ordinal_similarity_falls_linearly_with_distance(
    #[case] left: usize,
    #[case] right: usize,
    #[case] scale_len: usize,
    #[case] expected: f32,
) {
    assert_eq!(similarity::ordinal(left, right, scale_len), expected);
}

#[rstest]
#[case::identical(&[0, 1, 2, 3], &[0, 1, 2, 3], 1.0)]
#[case::top_two_swapped(&[0, 1, 2, 3], &[1, 0, 2, 3], 0.75)]
#[case::full_reversal(&[0, 1, 2, 3], &[3, 2, 1, 0], 0.0)]
#[case::odd_reversal(&[0, 1, 2], &[2, 1, 0], 0.0)]
#[case::pair_swap(&[0, 1], &[1, 0], 0.0)]
#[case::single_item(&[0], &[0], 1.0)]
#[case::empty(&[], &[], 1.0)]
fn ranked_similarity_scales_by_footrule_displacement(
    #[case] left: &[usize],
    #[case] right: &[usize],
    #[case] expected: f32,
) {
    assert_eq!(similarity::ranked(left, right), expected);
}

#[rstest]
fn mismatched_answer_shapes_yield_no_similarity() {
    let question = QuestionDefinition::new(
        "morning-person",
        1.0,
        AnswerFormat::Ordinal {
            scale: vec!["disagree".into(), "agree".into()],
        },
    )
    .expect("valid question");

    let mismatch = similarity::for_answers(
        &question,
        &NormalisedAnswer::Ranks(vec![0, 1]),
        &NormalisedAnswer::Index(1),
    );

    assert_eq!(mismatch, None);
}

#[rstest]
fn identical_answer_sets_score_full_marks() {
    let catalog = Arc::new(sample_catalog());
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let answers = normalise_set(&catalog, &uniform_answers(&catalog));

    assert_eq!(scorer.score_pair(&answers, &answers), PairScore::Scored(100));
}

#[rstest]
fn swapping_the_users_leaves_the_score_unchanged() {
    let catalog = Arc::new(sample_catalog());
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(
        &catalog,
        &uniform_answers(&catalog).with_choice("morning-person", "agree"),
    );
    let right = normalise_set(
        &catalog,
        &AnswerSet::new()
            .with_choice("morning-person", "disagree")
            .with_choice("pets", "cats")
            .with_ranking("priorities", ["friends", "career", "family", "travel"]),
    );

    let forwards = scorer.score_pair(&left, &right);
    let backwards = scorer.score_pair(&right, &left);

    assert_eq!(forwards, backwards);
    assert!(forwards.is_scored());
}

#[rstest]
fn disjoint_answer_sets_are_unscored() {
    let catalog = Arc::new(sample_catalog());
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(
        &catalog,
        &AnswerSet::new().with_choice("weekend-style", "quiet night in"),
    );
    let right = normalise_set(&catalog, &AnswerSet::new().with_choice("pets", "dogs"));

    assert_eq!(scorer.score_pair(&left, &right), PairScore::Unscored);
}

#[rstest]
fn opposite_scale_ends_score_zero() {
    let catalog = Arc::new(sample_catalog());
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(
        &catalog,
        &AnswerSet::new().with_choice("morning-person", "strongly disagree"),
    );
    let right = normalise_set(
        &catalog,
        &AnswerSet::new().with_choice("morning-person", "strongly agree"),
    );

    assert_eq!(scorer.score_pair(&left, &right), PairScore::Scored(0));
}

#[rstest]
fn disagreement_on_heavy_questions_drags_the_score() {
    let catalog = Arc::new(yes_no_catalog(&[("hiking", 1.0), ("smoking", 3.0)]));
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(
        &catalog,
        &choices(&[("hiking", "yes"), ("smoking", "yes")]),
    );
    let right = normalise_set(&catalog, &choices(&[("hiking", "yes"), ("smoking", "no")]));

    assert_eq!(scorer.score_pair(&left, &right), PairScore::Scored(25));
}

#[rstest]
fn only_shared_questions_enter_the_weighting() {
    let catalog = Arc::new(yes_no_catalog(&[("hiking", 1.0), ("smoking", 3.0)]));
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(
        &catalog,
        &choices(&[("hiking", "yes"), ("smoking", "yes")]),
    );
    let right = normalise_set(&catalog, &choices(&[("hiking", "yes")]));

    assert_eq!(scorer.score_pair(&left, &right), PairScore::Scored(100));
}

#[rstest]
#[case::half_rounds_up(&[("light", "yes"), ("heavy", "no")], 13)]
#[case::half_rounds_away_high(&[("light", "no"), ("heavy", "yes")], 88)]
fn rounding_is_half_away_from_zero(#[case] right: &[(&str, &str)], #[case] expected: u8) {
    let catalog = Arc::new(yes_no_catalog(&[("heavy", 7.0), ("light", 1.0)]));
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(&catalog, &choices(&[("light", "yes"), ("heavy", "yes")]));
    let right = normalise_set(&catalog, &choices(right));

    assert_eq!(scorer.score_pair(&left, &right), PairScore::Scored(expected));
}

#[rstest]
fn ranked_answers_score_by_displacement() {
    let catalog = Arc::new(sample_catalog());
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(
        &catalog,
        &AnswerSet::new().with_ranking("priorities", ["career", "family", "travel", "friends"]),
    );
    let right = normalise_set(
        &catalog,
        &AnswerSet::new().with_ranking("priorities", ["family", "career", "travel", "friends"]),
    );

    assert_eq!(scorer.score_pair(&left, &right), PairScore::Scored(75));
}

#[rstest]
fn questions_missing_from_the_catalogue_are_skipped() {
    let full = Arc::new(sample_catalog());
    let pets_only = Arc::new(
        QuestionCatalog::new(vec![
            QuestionDefinition::new(
                "pets",
                0.5,
                AnswerFormat::Categorical {
                    options: vec!["dogs".into(), "cats".into(), "neither".into()],
                },
            )
            .expect("valid question"),
        ])
        .expect("valid catalogue"),
    );
    let scorer = CompatibilityScorer::new(Arc::clone(&pets_only));
    let left = normalise_set(&full, &uniform_answers(&full));
    let right = normalise_set(&full, &uniform_answers(&full).with_choice("pets", "cats"));

    assert_eq!(scorer.score_pair(&left, &right), PairScore::Scored(0));
}

#[rstest]
fn breakdown_lists_contributions_in_question_id_order() {
    let catalog = Arc::new(sample_catalog());
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(
        &catalog,
        &AnswerSet::new()
            .with_choice("morning-person", "agree")
            .with_choice("pets", "dogs")
            .with_choice("weekend-style", "quiet night in")
            .with_ranking("priorities", ["career", "family", "travel", "friends"]),
    );
    let right = normalise_set(
        &catalog,
        &AnswerSet::new()
            .with_choice("morning-person", "agree")
            .with_choice("pets", "cats")
            .with_choice("weekend-style", "quiet night in"),
    );

    let breakdown = scorer.breakdown(&left, &right);

    let ids: Vec<&str> = breakdown
        .contributions
        .iter()
        .map(|contribution| contribution.question_id.as_str())
        .collect();
    assert_eq!(ids, ["morning-person", "pets", "weekend-style"]);
    let pets = &breakdown.contributions[1];
    assert_eq!(pets.weight, 0.5);
    assert_eq!(pets.similarity, 0.0);
    assert_eq!(breakdown.total_weight(), 2.5);
    assert_eq!(breakdown.outcome, PairScore::Scored(80));
    assert_eq!(breakdown.outcome, scorer.score_pair(&left, &right));
}

#[rstest]
fn breakdown_of_disjoint_sets_is_empty_and_unscored() {
    let catalog = Arc::new(sample_catalog());
    let scorer = CompatibilityScorer::new(Arc::clone(&catalog));
    let left = normalise_set(&catalog, &AnswerSet::new().with_choice("pets", "dogs"));
    let right = normalise_set(
        &catalog,
        &AnswerSet::new().with_choice("weekend-style", "something outdoors"),
    );

    let breakdown = scorer.breakdown(&left, &right);

    assert!(breakdown.contributions.is_empty());
    assert_eq!(breakdown.outcome, PairScore::Unscored);
}

use std::cell::RefCell;
use std::sync::Arc;

use kindred_core::test_support::sample_catalog;
use kindred_core::{
    AnswerError, AnswerSet, NormalisedAnswer, NormalisedAnswers, QuestionCatalog, normalise_set,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn catalog() -> Arc<QuestionCatalog> {
    Arc::new(sample_catalog())
}

#[fixture]
fn answers() -> RefCell<AnswerSet> {
    RefCell::new(AnswerSet::new())
}

#[fixture]
fn outcome() -> RefCell<Option<NormalisedAnswers>> {
    RefCell::new(None)
}

#[given("the user answered the morning question with {string}")]
fn given_morning_choice(label: String, #[from(answers)] answers: &RefCell<AnswerSet>) {
    *answers.borrow_mut() = AnswerSet::new().with_choice("morning-person", label);
}

#[given("the user ranked their priorities as {string}")]
fn given_priorities(ranking: String, #[from(answers)] answers: &RefCell<AnswerSet>) {
    let items: Vec<&str> = ranking.split(", ").collect();
    *answers.borrow_mut() = AnswerSet::new().with_ranking("priorities", items);
}

#[when("the answers are normalised against the catalogue")]
fn when_normalised(
    #[from(catalog)] catalog: &Arc<QuestionCatalog>,
    #[from(answers)] answers: &RefCell<AnswerSet>,
    #[from(outcome)] outcome: &RefCell<Option<NormalisedAnswers>>,
) {
    *outcome.borrow_mut() = Some(normalise_set(catalog, &answers.borrow()));
}

#[then("the morning answer resolves to option index {int}")]
fn then_index(expected: usize, #[from(outcome)] outcome: &RefCell<Option<NormalisedAnswers>>) {
    let outcome = outcome.borrow();
    let normalised = outcome.as_ref().expect("normalisation ran");
    assert_eq!(
        normalised.get("morning-person"),
        Some(&NormalisedAnswer::Index(expected))
    );
    assert!(normalised.issues().is_empty());
}

#[then("the set reports an unknown label for the morning question")]
fn then_unknown_label(#[from(outcome)] outcome: &RefCell<Option<NormalisedAnswers>>) {
    let outcome = outcome.borrow();
    let normalised = outcome.as_ref().expect("normalisation ran");
    assert!(normalised.get("morning-person").is_none());
    assert!(normalised.issues().iter().any(|issue| matches!(
        issue,
        AnswerError::UnknownLabel { id, .. } if id == "morning-person"
    )));
}

#[then("the priorities resolve to the positions {string}")]
fn then_positions(expected: String, #[from(outcome)] outcome: &RefCell<Option<NormalisedAnswers>>) {
    let positions: Vec<usize> = expected
        .split(", ")
        .map(|position| position.parse().expect("numeric position"))
        .collect();
    let outcome = outcome.borrow();
    let normalised = outcome.as_ref().expect("normalisation ran");
    assert_eq!(
        normalised.get("priorities"),
        Some(&NormalisedAnswer::Ranks(positions))
    );
}

#[then("the set reports a missing item for the priorities question")]
fn then_missing_item(#[from(outcome)] outcome: &RefCell<Option<NormalisedAnswers>>) {
    let outcome = outcome.borrow();
    let normalised = outcome.as_ref().expect("normalisation ran");
    assert!(normalised.get("priorities").is_none());
    assert!(normalised.issues().iter().any(|issue| matches!(
        issue,
        AnswerError::MissingItem { id, .. } if id == "priorities"
    )));
}

#[scenario(path = "tests/features/normalisation.feature", index = 0)]
fn label_resolves_to_index(
    catalog: Arc<QuestionCatalog>,
    answers: RefCell<AnswerSet>,
    outcome: RefCell<Option<NormalisedAnswers>>,
) {
    let _ = (catalog, answers, outcome);
}

#[scenario(path = "tests/features/normalisation.feature", index = 1)]
fn unknown_label_is_reported(
    catalog: Arc<QuestionCatalog>,
    answers: RefCell<AnswerSet>,
    outcome: RefCell<Option<NormalisedAnswers>>,
) {
    let _ = (catalog, answers, outcome);
}

#[scenario(path = "tests/features/normalisation.feature", index = 2)]
fn ranking_resolves_to_positions(
    catalog: Arc<QuestionCatalog>,
    answers: RefCell<AnswerSet>,
    outcome: RefCell<Option<NormalisedAnswers>>,
) {
    let _ = (catalog, answers, outcome);
}

#[scenario(path = "tests/features/normalisation.feature", index = 3)]
fn incomplete_ranking_is_rejected(
    catalog: Arc<QuestionCatalog>,
    answers: RefCell<AnswerSet>,
    outcome: RefCell<Option<NormalisedAnswers>>,
) {
    let _ = (catalog, answers, outcome);
}

//! The question catalogue: every scorable question, validated at startup.
//!
//! The catalogue is built once when the engine is wired up and shared
//! read-only (typically behind an `Arc`) for the rest of the process. All
//! configuration mistakes surface here as [`CatalogError`] before any pair
//! is scored; per-answer problems are a separate, recoverable concern
//! handled by [`normalise_set`](crate::normalise_set).

use std::collections::BTreeMap;

use thiserror::Error;

use crate::question::QuestionDefinition;

/// Errors raised while building or querying a question catalogue.
///
/// Every variant is fatal: an invalid catalogue means the deployment is
/// misconfigured, so construction fails rather than letting a bad question
/// skew scores at request time.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalogue contained no questions.
    #[error("question catalogue is empty")]
    Empty,
    /// Two definitions share the same question id.
    #[error("duplicate question id {id}")]
    DuplicateQuestion {
        /// Identifier declared more than once.
        id: String,
    },
    /// A lookup named a question the catalogue does not define.
    #[error("question {id} is not defined in the catalogue")]
    UnknownQuestion {
        /// Identifier that failed to resolve.
        id: String,
    },
    /// A question's weight was not a positive, finite number.
    #[error("question {question} has invalid weight {weight}")]
    InvalidWeight {
        /// Identifier of the offending question.
        question: String,
        /// Weight as configured.
        weight: f32,
    },
    /// A question's label set was empty.
    #[error("question {question} has no options")]
    NoOptions {
        /// Identifier of the offending question.
        question: String,
    },
    /// A label appears twice within one question.
    #[error("question {question} repeats the label {label:?}")]
    DuplicateOption {
        /// Identifier of the offending question.
        question: String,
        /// Label declared more than once.
        label: String,
    },
    /// An ordinal scale needs at least two points to define a distance.
    #[error("question {question} has an ordinal scale of {len} points; at least 2 are required")]
    ScaleTooNarrow {
        /// Identifier of the offending question.
        question: String,
        /// Number of scale points configured.
        len: usize,
    },
    /// A ranked list needs at least two items to define an ordering.
    #[error("question {question} has a ranked list of {len} items; at least 2 are required")]
    RankingTooNarrow {
        /// Identifier of the offending question.
        question: String,
        /// Number of items configured.
        len: usize,
    },
    /// The catalogue configuration document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse catalogue configuration")]
    Parse {
        /// Decoder error from `serde_json`.
        #[from]
        source: serde_json::Error,
    },
}

/// Immutable, validated set of questions keyed by id.
///
/// Iteration order follows the id ordering of the underlying `BTreeMap`,
/// which keeps every weight accumulation downstream deterministic.
///
/// # Examples
/// ```
/// use kindred_core::{AnswerFormat, QuestionCatalog, QuestionDefinition};
///
/// let catalog = QuestionCatalog::new(vec![QuestionDefinition::new(
///     "pets",
///     1.0,
///     AnswerFormat::Categorical {
///         options: vec!["dogs".into(), "cats".into(), "neither".into()],
///     },
/// )?])?;
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("pets").is_some());
/// # Ok::<(), kindred_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCatalog {
    questions: BTreeMap<String, QuestionDefinition>,
}

impl QuestionCatalog {
    /// Validate the definitions and build a catalogue.
    ///
    /// Each definition is re-checked here so a catalogue assembled from
    /// hand-built structs gets the same guarantees as one loaded from
    /// configuration.
    ///
    /// # Errors
    /// Returns [`CatalogError::Empty`] for an empty definition list,
    /// [`CatalogError::DuplicateQuestion`] when two definitions share an id,
    /// and any per-question validation failure from
    /// [`QuestionDefinition::validate`].
    pub fn new(definitions: Vec<QuestionDefinition>) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut questions = BTreeMap::new();
        for definition in definitions {
            definition.validate()?;
            let id = definition.id.clone();
            if questions.insert(id.clone(), definition).is_some() {
                return Err(CatalogError::DuplicateQuestion { id });
            }
        }
        Ok(Self { questions })
    }

    /// Parse a catalogue from its JSON configuration document.
    ///
    /// The document is an array of question objects; the answer format is
    /// flattened alongside the id and weight.
    ///
    /// # Examples
    /// ```
    /// use kindred_core::QuestionCatalog;
    ///
    /// let catalog = QuestionCatalog::from_json(
    ///     r#"[{"id": "pets", "weight": 1.0, "type": "categorical",
    ///          "options": ["dogs", "cats", "neither"]}]"#,
    /// )?;
    /// assert!(catalog.get("pets").is_some());
    /// # Ok::<(), kindred_core::CatalogError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the document is not valid JSON
    /// for a definition list, and any validation failure from
    /// [`QuestionCatalog::new`] afterwards.
    #[cfg(feature = "serde")]
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<QuestionDefinition> = serde_json::from_str(document)?;
        Self::new(definitions)
    }

    /// Look up a question definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.get(id)
    }

    /// Look up a question definition, failing when it is absent.
    ///
    /// Intended for startup wiring where a dangling question reference is a
    /// configuration error rather than a recoverable condition.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownQuestion`] when the id is not defined.
    pub fn require(&self, id: &str) -> Result<&QuestionDefinition, CatalogError> {
        self.questions
            .get(id)
            .ok_or_else(|| CatalogError::UnknownQuestion { id: id.to_owned() })
    }

    /// Iterate the definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.values()
    }

    /// Number of questions in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalogue holds no questions.
    ///
    /// Always false for a constructed catalogue; provided for API
    /// completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

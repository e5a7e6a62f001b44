//! Quiz questions and the formats their answers take.
//!
//! A [`QuestionDefinition`] pairs a stable identifier with an aggregation
//! weight and an [`AnswerFormat`] describing how answers are expressed and
//! compared. Definitions are immutable once constructed; `new` validates the
//! weight and label set up front so invalid questions never reach scoring.

use crate::catalog::CatalogError;

/// How a question's answers are expressed and compared.
///
/// # Examples
/// ```
/// use kindred_core::AnswerFormat;
///
/// let format = AnswerFormat::Ordinal {
///     scale: vec!["never".into(), "sometimes".into(), "often".into()],
/// };
/// assert_eq!(format.labels().len(), 3);
/// assert_eq!(format.kind(), "ordinal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum AnswerFormat {
    /// A single selection from an unordered option set.
    Categorical {
        /// Distinct option labels in presentation order.
        options: Vec<String>,
    },
    /// A single selection from an ordered scale.
    Ordinal {
        /// Scale labels from one extreme to the other.
        scale: Vec<String>,
    },
    /// A complete ordering of a fixed item set.
    RankedList {
        /// Items the respondent ranks, in catalogue order.
        items: Vec<String>,
    },
}

impl AnswerFormat {
    /// Return the format's label set.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        match self {
            Self::Categorical { options } => options,
            Self::Ordinal { scale } => scale,
            Self::RankedList { items } => items,
        }
    }

    /// Short name of the format, as used in configuration and errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Categorical { .. } => "categorical",
            Self::Ordinal { .. } => "ordinal",
            Self::RankedList { .. } => "ranked-list",
        }
    }
}

/// A single quiz question with its aggregation weight.
///
/// # Examples
/// ```
/// use kindred_core::{AnswerFormat, QuestionDefinition};
///
/// let question = QuestionDefinition::new(
///     "pets",
///     1.0,
///     AnswerFormat::Categorical {
///         options: vec!["dogs".into(), "cats".into(), "neither".into()],
///     },
/// )?;
/// assert_eq!(question.id, "pets");
/// # Ok::<(), kindred_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionDefinition {
    /// Stable question identifier.
    pub id: String,
    /// Relative importance of the question during aggregation.
    pub weight: f32,
    /// Answer format and its labels.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub format: AnswerFormat,
}

impl QuestionDefinition {
    /// Validate and construct a question definition.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the weight is not positive and finite,
    /// when the label set is empty or repeats a label, or when an ordinal
    /// scale or ranked list has fewer than two entries.
    pub fn new(
        id: impl Into<String>,
        weight: f32,
        format: AnswerFormat,
    ) -> Result<Self, CatalogError> {
        let question = Self {
            id: id.into(),
            weight,
            format,
        };
        question.validate()?;
        Ok(question)
    }

    /// Check the definition against the catalogue rules.
    ///
    /// # Errors
    /// See [`QuestionDefinition::new`].
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                question: self.id.clone(),
                weight: self.weight,
            });
        }

        let labels = self.format.labels();
        if labels.is_empty() {
            return Err(CatalogError::NoOptions {
                question: self.id.clone(),
            });
        }
        for (index, label) in labels.iter().enumerate() {
            if labels.iter().take(index).any(|earlier| earlier == label) {
                return Err(CatalogError::DuplicateOption {
                    question: self.id.clone(),
                    label: label.clone(),
                });
            }
        }

        match &self.format {
            AnswerFormat::Categorical { .. } => Ok(()),
            AnswerFormat::Ordinal { scale } if scale.len() < 2 => {
                Err(CatalogError::ScaleTooNarrow {
                    question: self.id.clone(),
                    len: scale.len(),
                })
            }
            AnswerFormat::RankedList { items } if items.len() < 2 => {
                Err(CatalogError::RankingTooNarrow {
                    question: self.id.clone(),
                    len: items.len(),
                })
            }
            AnswerFormat::Ordinal { .. } | AnswerFormat::RankedList { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scale() -> Vec<String> {
        vec!["low".into(), "medium".into(), "high".into()]
    }

    #[rstest]
    fn accepts_valid_definition() {
        let question =
            QuestionDefinition::new("energy", 2.0, AnswerFormat::Ordinal { scale: scale() });
        assert!(question.is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    fn rejects_bad_weight(#[case] weight: f32) {
        let result =
            QuestionDefinition::new("energy", weight, AnswerFormat::Ordinal { scale: scale() });
        assert!(matches!(
            result,
            Err(CatalogError::InvalidWeight { question, .. }) if question == "energy"
        ));
    }

    #[rstest]
    fn rejects_empty_label_set() {
        let result = QuestionDefinition::new(
            "pets",
            1.0,
            AnswerFormat::Categorical {
                options: Vec::new(),
            },
        );
        assert!(matches!(result, Err(CatalogError::NoOptions { .. })));
    }

    #[rstest]
    fn rejects_repeated_label() {
        let result = QuestionDefinition::new(
            "pets",
            1.0,
            AnswerFormat::Categorical {
                options: vec!["dogs".into(), "cats".into(), "dogs".into()],
            },
        );
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateOption { label, .. }) if label == "dogs"
        ));
    }

    #[rstest]
    fn rejects_single_point_scale() {
        let result = QuestionDefinition::new(
            "energy",
            1.0,
            AnswerFormat::Ordinal {
                scale: vec!["only".into()],
            },
        );
        assert!(matches!(
            result,
            Err(CatalogError::ScaleTooNarrow { len: 1, .. })
        ));
    }

    #[rstest]
    fn rejects_single_item_ranking() {
        let result = QuestionDefinition::new(
            "priorities",
            1.0,
            AnswerFormat::RankedList {
                items: vec!["career".into()],
            },
        );
        assert!(matches!(
            result,
            Err(CatalogError::RankingTooNarrow { len: 1, .. })
        ));
    }

    #[rstest]
    fn single_option_categorical_is_legal() {
        let result = QuestionDefinition::new(
            "agreement",
            1.0,
            AnswerFormat::Categorical {
                options: vec!["yes".into()],
            },
        );
        assert!(result.is_ok());
    }

    #[rstest]
    fn kind_names_match_configuration_vocabulary() {
        let ranked = AnswerFormat::RankedList {
            items: vec!["a".into(), "b".into()],
        };
        assert_eq!(ranked.kind(), "ranked-list");
        let categorical = AnswerFormat::Categorical {
            options: vec!["a".into()],
        };
        assert_eq!(categorical.kind(), "categorical");
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::card::Card;
use crate::model::question::QuestionKind;

/// Minimum set size for multiple-choice questions to be offered.
pub const MIN_MULTIPLE_CHOICE_CARDS: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LearnSettingsError {
    #[error("at least one question type must be enabled")]
    NoQuestionTypes,

    #[error("multiple choice needs at least {required} cards, set has {available}")]
    MultipleChoiceNeedsCards { required: usize, available: usize },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Which side of the card the learner has to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerWith {
    /// Definition is shown, term is expected.
    Term,
    /// Term is shown, definition is expected.
    #[default]
    Definition,
}

impl AnswerWith {
    /// Split a card into `(prompt, expected answer)`.
    #[must_use]
    pub fn split<'a>(&self, card: &'a Card) -> (&'a str, &'a str) {
        match self {
            Self::Term => (card.definition(), card.term()),
            Self::Definition => (card.term(), card.definition()),
        }
    }

    /// The side used as the answer for this direction.
    #[must_use]
    pub fn answer_side<'a>(&self, card: &'a Card) -> &'a str {
        self.split(card).1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionTypes {
    #[serde(default = "default_true")]
    pub multiple_choice: bool,
    #[serde(default = "default_true")]
    pub written: bool,
}

fn default_true() -> bool {
    true
}

impl Default for QuestionTypes {
    fn default() -> Self {
        Self {
            multiple_choice: true,
            written: true,
        }
    }
}

/// Learn mode configuration, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnSettings {
    #[serde(default)]
    pub question_types: QuestionTypes,
    #[serde(default)]
    pub answer_with: AnswerWith,
}

impl LearnSettings {
    #[must_use]
    pub fn new(question_types: QuestionTypes, answer_with: AnswerWith) -> Self {
        Self {
            question_types,
            answer_with,
        }
    }

    /// Written questions only.
    #[must_use]
    pub fn written_only(answer_with: AnswerWith) -> Self {
        Self::new(
            QuestionTypes {
                multiple_choice: false,
                written: true,
            },
            answer_with,
        )
    }

    /// Multiple-choice questions only.
    #[must_use]
    pub fn multiple_choice_only(answer_with: AnswerWith) -> Self {
        Self::new(
            QuestionTypes {
                multiple_choice: true,
                written: false,
            },
            answer_with,
        )
    }

    /// Question kinds usable for a set of `card_count` cards.
    ///
    /// Multiple choice is dropped silently when the set is too small and
    /// written questions are also enabled.
    ///
    /// # Errors
    ///
    /// Returns `LearnSettingsError::NoQuestionTypes` if nothing is enabled, and
    /// `LearnSettingsError::MultipleChoiceNeedsCards` if multiple choice is the only
    /// enabled kind but the set is smaller than `MIN_MULTIPLE_CHOICE_CARDS`.
    pub fn eligible_kinds(&self, card_count: usize) -> Result<Vec<QuestionKind>, LearnSettingsError> {
        let QuestionTypes {
            multiple_choice,
            written,
        } = self.question_types;

        if !multiple_choice && !written {
            return Err(LearnSettingsError::NoQuestionTypes);
        }

        let mut kinds = Vec::with_capacity(2);
        if multiple_choice && card_count >= MIN_MULTIPLE_CHOICE_CARDS {
            kinds.push(QuestionKind::MultipleChoice);
        }
        if written {
            kinds.push(QuestionKind::Written);
        }

        if kinds.is_empty() {
            return Err(LearnSettingsError::MultipleChoiceNeedsCards {
                required: MIN_MULTIPLE_CHOICE_CARDS,
                available: card_count,
            });
        }
        Ok(kinds)
    }
}

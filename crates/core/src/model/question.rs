use serde::{Deserialize, Serialize};

use crate::model::ids::CardIndex;

/// Number of options shown for a multiple-choice question.
pub const CHOICES_PER_QUESTION: usize = 4;

/// Format a question is asked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    Written,
}

/// One selectable option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    /// Card the option text was taken from.
    pub card: CardIndex,
    pub text: String,
    pub is_correct: bool,
}

/// What the presentation layer should show for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub card: CardIndex,
    pub prompt: String,
    pub expected: String,
    /// Empty for written questions.
    pub options: Vec<AnswerOption>,
}

impl Question {
    #[must_use]
    pub fn written(card: CardIndex, prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            card,
            prompt: prompt.into(),
            expected: expected.into(),
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn multiple_choice(
        card: CardIndex,
        prompt: impl Into<String>,
        expected: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            card,
            prompt: prompt.into(),
            expected: expected.into(),
            options,
        }
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        if self.options.is_empty() {
            QuestionKind::Written
        } else {
            QuestionKind::MultipleChoice
        }
    }

    /// Position of the correct option, if this is a multiple-choice question.
    #[must_use]
    pub fn correct_option(&self) -> Option<usize> {
        self.options.iter().position(|option| option.is_correct)
    }
}

/// A user's response to a `Question`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index into `Question::options`.
    Choice(usize),
    /// Free text for a written question.
    Written(String),
}

/// Feedback for one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub card: CardIndex,
    pub correct: bool,
    pub expected: String,
    /// Raw user input for written answers, selected text for choices.
    pub response: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(card: usize, text: &str, is_correct: bool) -> AnswerOption {
        AnswerOption {
            card: CardIndex::new(card),
            text: text.to_string(),
            is_correct,
        }
    }

    #[test]
    fn kind_follows_options() {
        let written = Question::written(CardIndex::new(0), "cat", "gato");
        assert_eq!(written.kind(), QuestionKind::Written);
        assert_eq!(written.correct_option(), None);

        let mc = Question::multiple_choice(
            CardIndex::new(1),
            "dog",
            "perro",
            vec![option(3, "gato", false), option(1, "perro", true)],
        );
        assert_eq!(mc.kind(), QuestionKind::MultipleChoice);
        assert_eq!(mc.correct_option(), Some(1));
    }
}

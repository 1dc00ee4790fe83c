use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

use study_core::model::{
    AnswerOption, CHOICES_PER_QUESTION, CardIndex, CardSet, Outcome, Question, QuizResult,
};
use study_core::random::{sample_distractors, shuffle};

use crate::error::SessionError;

/// Smallest set a quiz can be built from.
pub const MIN_QUIZ_CARDS: usize = CHOICES_PER_QUESTION;

/// Recorded answer for one quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResponse {
    pub card: CardIndex,
    pub selected: String,
    pub correct: bool,
}

/// Single pass multiple-choice quiz over every card.
///
/// Each card appears in exactly one question; the term is shown and the
/// definition is the answer. Answers are final.
pub struct QuizRunner<R = StdRng> {
    cards: CardSet,
    questions: Vec<Question>,
    responses: Vec<QuizResponse>,
    score: usize,
    rng: R,
}

impl QuizRunner<StdRng> {
    /// Build a quiz with an OS-seeded generator.
    ///
    /// # Errors
    ///
    /// See [`QuizRunner::with_rng`].
    pub fn new(cards: CardSet) -> Result<Self, SessionError> {
        Self::with_rng(cards, StdRng::from_os_rng())
    }
}

impl<R: Rng> QuizRunner<R> {
    /// Build a quiz drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InsufficientCards` for fewer than `MIN_QUIZ_CARDS` cards.
    pub fn with_rng(cards: CardSet, rng: R) -> Result<Self, SessionError> {
        SessionError::require_cards(MIN_QUIZ_CARDS, cards.len())?;

        let mut quiz = Self {
            cards,
            questions: Vec::new(),
            responses: Vec::new(),
            score: 0,
            rng,
        };
        quiz.generate()?;
        Ok(quiz)
    }

    fn generate(&mut self) -> Result<(), SessionError> {
        let mut order: Vec<CardIndex> = self.cards.indices().collect();
        shuffle(&mut order, &mut self.rng);

        let mut questions = Vec::with_capacity(order.len());
        for (position, &index) in order.iter().enumerate() {
            let Some(card) = self.cards.get(index) else {
                continue;
            };
            // Distractors are drawn by position in the shuffled order.
            let picked = sample_distractors(
                CardIndex::new(position),
                order.len(),
                CHOICES_PER_QUESTION - 1,
                &mut self.rng,
            )?;
            let options = picked
                .into_iter()
                .filter_map(|slot| {
                    let choice = *order.get(slot.value())?;
                    let other = self.cards.get(choice)?;
                    Some(AnswerOption {
                        card: choice,
                        text: other.definition().to_string(),
                        is_correct: choice == index,
                    })
                })
                .collect();
            questions.push(Question::multiple_choice(
                index,
                card.term(),
                card.definition(),
                options,
            ));
        }

        self.questions = questions;
        self.responses.clear();
        self.score = 0;
        tracing::debug!(questions = self.questions.len(), "quiz generated");
        Ok(())
    }

    /// Regenerate order and options, resetting the score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Distractor` if option sampling fails.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.generate()
    }

    #[must_use]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn responses(&self) -> &[QuizResponse] {
        &self.responses
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_index() == self.questions.len()
    }

    /// The question awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once every question is answered.
    pub fn current(&self) -> Result<&Question, SessionError> {
        self.questions
            .get(self.current_index())
            .ok_or(SessionError::Completed)
    }

    /// Submit the text of the chosen option and move to the next question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the quiz is over.
    pub fn answer(&mut self, selected: &str) -> Result<Outcome, SessionError> {
        let question = self.current()?;
        let card = question.card;
        let expected = question.expected.clone();
        let correct = selected == expected;

        if correct {
            self.score += 1;
        }
        self.responses.push(QuizResponse {
            card,
            selected: selected.to_string(),
            correct,
        });
        tracing::debug!(
            index = %card,
            correct,
            answered = self.responses.len(),
            "quiz answer recorded"
        );
        if self.is_complete() {
            tracing::debug!(score = self.score, total = self.total(), "quiz complete");
        }

        Ok(Outcome {
            card,
            correct,
            expected,
            response: Some(selected.to_string()),
        })
    }

    /// Submit the option at `choice` in the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOption` for an out-of-range choice and
    /// `SessionError::Completed` if the quiz is over.
    pub fn choose(&mut self, choice: usize) -> Result<Outcome, SessionError> {
        let question = self.current()?;
        let text = question
            .options
            .get(choice)
            .map(|option| option.text.clone())
            .ok_or(SessionError::InvalidOption {
                index: choice,
                len: question.options.len(),
            })?;
        self.answer(&text)
    }

    /// Score against the full question count.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Summary` if the quiz has no questions.
    pub fn result(&self) -> Result<QuizResult, SessionError> {
        Ok(QuizResult::new(self.score, self.total())?)
    }
}

impl<R> fmt::Debug for QuizRunner<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizRunner")
            .field("cards_len", &self.cards.len())
            .field("questions_len", &self.questions.len())
            .field("answered", &self.responses.len())
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

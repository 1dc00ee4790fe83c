use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::fmt;

use study_core::model::{
    Answer, AnswerOption, CHOICES_PER_QUESTION, CardIndex, CardProgress, CardSet, LearnSettings,
    LearnSummary, Outcome, Question, QuestionKind, Stage, StageCounts,
};
use study_core::random::{sample_distractors, shuffle};
use study_core::text::answers_match;

use crate::error::SessionError;

/// Cap on how many `Learning` cards are queued a second time per rebuild.
pub const LEARNING_REPEAT_LIMIT: usize = 3;

/// A missed card is reinserted within this many slots of the queue front.
pub const REQUEUE_WINDOW: usize = 3;

/// What to show after asking for the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnStep {
    Question(Question),
    Complete(LearnSummary),
}

//
// ─── SCHEDULER ─────────────────────────────────────────────────────────────────
//

/// Adaptive mastery session.
///
/// Every card moves through `New -> Learning -> Mastered`. The queue is rebuilt
/// from the non-mastered cards whenever it runs dry, with a few `Learning`
/// cards doubled up, and missed cards are pushed back near the front.
///
/// Turns are explicit: `next_question` presents a card, `answer` grades it and
/// returns feedback, and nothing advances until `next_question` is called again.
pub struct LearnScheduler<R = StdRng> {
    cards: CardSet,
    settings: LearnSettings,
    kinds: Vec<QuestionKind>,
    progress: Vec<CardProgress>,
    queue: VecDeque<CardIndex>,
    pending: Option<Question>,
    last_outcome: Option<Outcome>,
    rng: R,
}

impl LearnScheduler<StdRng> {
    /// Start a session with an OS-seeded generator.
    ///
    /// # Errors
    ///
    /// See [`LearnScheduler::with_rng`].
    pub fn new(cards: CardSet, settings: LearnSettings) -> Result<Self, SessionError> {
        Self::with_rng(cards, settings, StdRng::from_os_rng())
    }
}

impl<R: Rng> LearnScheduler<R> {
    /// Start a session drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InsufficientCards` for an empty set and
    /// `SessionError::Configuration` when no question kind is usable.
    pub fn with_rng(cards: CardSet, settings: LearnSettings, rng: R) -> Result<Self, SessionError> {
        SessionError::require_cards(1, cards.len())?;
        let kinds = settings.eligible_kinds(cards.len())?;

        let mut session = Self {
            cards,
            settings,
            kinds,
            progress: Vec::new(),
            queue: VecDeque::new(),
            pending: None,
            last_outcome: None,
            rng,
        };
        session.reset();
        Ok(session)
    }

    fn reset(&mut self) {
        self.progress = vec![CardProgress::new(); self.cards.len()];
        self.queue.clear();
        self.pending = None;
        self.last_outcome = None;
        tracing::debug!(
            cards = self.cards.len(),
            kinds = ?self.kinds,
            answer_with = ?self.settings.answer_with,
            "learn session started"
        );
    }

    /// Discard all progress and start again with the same cards and settings.
    pub fn restart(&mut self) {
        self.reset();
    }

    #[must_use]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    #[must_use]
    pub fn settings(&self) -> &LearnSettings {
        &self.settings
    }

    /// Progress of every card, indexed by `CardIndex`.
    #[must_use]
    pub fn progress(&self) -> &[CardProgress] {
        &self.progress
    }

    #[must_use]
    pub fn card_progress(&self, index: CardIndex) -> Option<&CardProgress> {
        self.progress.get(index.value())
    }

    #[must_use]
    pub fn stage_counts(&self) -> StageCounts {
        StageCounts::tally(&self.progress)
    }

    /// Upcoming cards, front first. Does not include the pending question.
    pub fn queue(&self) -> impl Iterator<Item = CardIndex> + '_ {
        self.queue.iter().copied()
    }

    /// Question presented but not yet answered.
    #[must_use]
    pub fn pending(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    /// Feedback for the most recent answer, until the next question is drawn.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.iter().all(CardProgress::is_mastered)
    }

    #[must_use]
    pub fn summary(&self) -> LearnSummary {
        LearnSummary {
            mastered: self.stage_counts().mastered,
            total: self.cards.len(),
        }
    }

    /// Present the next card, or report completion.
    ///
    /// An unanswered question is returned again rather than skipped.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Distractor` if option sampling fails.
    pub fn next_question(&mut self) -> Result<LearnStep, SessionError> {
        if let Some(question) = &self.pending {
            return Ok(LearnStep::Question(question.clone()));
        }

        if self.is_complete() {
            self.queue.clear();
            let summary = self.summary();
            tracing::debug!(mastered = summary.mastered, "learn session complete");
            return Ok(LearnStep::Complete(summary));
        }

        if self.queue.is_empty() {
            self.rebuild_queue();
        }
        let index = self.queue.pop_front().ok_or(SessionError::EmptyQueue)?;

        let question = self.present(index)?;
        self.pending = Some(question.clone());
        self.last_outcome = None;
        Ok(LearnStep::Question(question))
    }

    /// Grade the pending question and update that card's stage.
    ///
    /// # Errors
    ///
    /// - `SessionError::NoActiveQuestion` if nothing is waiting for an answer
    /// - `SessionError::AnswerMismatch` if the answer kind does not fit the question
    /// - `SessionError::InvalidOption` for an out-of-range choice
    pub fn answer(&mut self, answer: Answer) -> Result<Outcome, SessionError> {
        let question = self.pending.as_ref().ok_or(SessionError::NoActiveQuestion)?;

        let (correct, response) = match (question.kind(), answer) {
            (QuestionKind::MultipleChoice, Answer::Choice(choice)) => {
                let option = question.options.get(choice).ok_or(SessionError::InvalidOption {
                    index: choice,
                    len: question.options.len(),
                })?;
                (option.is_correct, option.text.clone())
            }
            (QuestionKind::Written, Answer::Written(text)) => {
                (answers_match(&text, &question.expected), text)
            }
            _ => return Err(SessionError::AnswerMismatch),
        };

        let index = question.card;
        let expected = question.expected.clone();
        self.pending = None;

        let progress = self
            .progress
            .get_mut(index.value())
            .ok_or(SessionError::NoActiveQuestion)?;
        let before = progress.stage();
        let after = progress.record_answer(correct);
        if before != after {
            tracing::debug!(%index, from = before.name(), to = after.name(), "stage changed");
        }

        if !correct {
            self.requeue(index);
        }
        tracing::debug!(%index, correct, stage = after.name(), "learn answer recorded");

        let outcome = Outcome {
            card: index,
            correct,
            expected,
            response: Some(response),
        };
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    fn rebuild_queue(&mut self) {
        let mut queue: Vec<CardIndex> = self
            .cards
            .indices()
            .filter(|index| !self.progress[index.value()].is_mastered())
            .collect();

        let mut learning: Vec<CardIndex> = queue
            .iter()
            .copied()
            .filter(|index| self.progress[index.value()].stage() == Stage::Learning)
            .collect();
        shuffle(&mut learning, &mut self.rng);
        let repeats = learning.len().min(LEARNING_REPEAT_LIMIT);
        queue.extend_from_slice(&learning[..repeats]);

        shuffle(&mut queue, &mut self.rng);
        tracing::debug!(len = queue.len(), repeats, "learn queue rebuilt");
        self.queue = queue.into();
    }

    fn requeue(&mut self, index: CardIndex) {
        let window = self.queue.len().min(REQUEUE_WINDOW);
        let position = if window == 0 {
            0
        } else {
            self.rng.random_range(0..window)
        };
        self.queue.insert(position, index);
    }

    fn present(&mut self, index: CardIndex) -> Result<Question, SessionError> {
        let kind = self.kinds[self.rng.random_range(0..self.kinds.len())];
        let answer_with = self.settings.answer_with;
        let card = self.cards.get(index).ok_or(SessionError::EmptyQueue)?;
        let (prompt, expected) = answer_with.split(card);

        let question = match kind {
            QuestionKind::Written => Question::written(index, prompt, expected),
            QuestionKind::MultipleChoice => {
                let picked = sample_distractors(
                    index,
                    self.cards.len(),
                    CHOICES_PER_QUESTION - 1,
                    &mut self.rng,
                )?;
                let options = picked
                    .into_iter()
                    .filter_map(|choice| {
                        self.cards.get(choice).map(|card| AnswerOption {
                            card: choice,
                            text: answer_with.answer_side(card).to_string(),
                            is_correct: choice == index,
                        })
                    })
                    .collect();
                Question::multiple_choice(index, prompt, expected, options)
            }
        };
        Ok(question)
    }
}

impl<R> fmt::Debug for LearnScheduler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LearnScheduler")
            .field("cards_len", &self.cards.len())
            .field("settings", &self.settings)
            .field("kinds", &self.kinds)
            .field("queue", &self.queue)
            .field("pending", &self.pending.as_ref().map(|q| q.card))
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashSet, VecDeque};
use std::fmt;

use study_core::model::{Card, CardIndex, CardSet, StudySummary};
use study_core::random::shuffle;

use super::progress::StudyProgress;
use crate::error::SessionError;

//
// ─── FACE ──────────────────────────────────────────────────────────────────────
//

/// Which side of the front card is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Term,
    Definition,
}

impl Face {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Term => Self::Definition,
            Self::Definition => Self::Term,
        }
    }
}

//
// ─── STUDY QUEUE ───────────────────────────────────────────────────────────────
//

/// Binary "I know / I don't know" review loop.
///
/// Cards marked unknown go to the back of the queue and come around again;
/// cards marked known leave it. The session ends when the queue is empty.
pub struct StudyQueue<R = StdRng> {
    cards: CardSet,
    queue: VecDeque<CardIndex>,
    known: HashSet<CardIndex>,
    unknown: HashSet<CardIndex>,
    face: Face,
    rng: R,
}

impl StudyQueue<StdRng> {
    /// Start a session with an OS-seeded generator.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InsufficientCards` if the set is empty.
    pub fn new(cards: CardSet) -> Result<Self, SessionError> {
        Self::with_rng(cards, StdRng::from_os_rng())
    }
}

impl<R: Rng> StudyQueue<R> {
    /// Start a session drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InsufficientCards` if the set is empty.
    pub fn with_rng(cards: CardSet, rng: R) -> Result<Self, SessionError> {
        SessionError::require_cards(1, cards.len())?;

        let mut session = Self {
            cards,
            queue: VecDeque::new(),
            known: HashSet::new(),
            unknown: HashSet::new(),
            face: Face::default(),
            rng,
        };
        session.reset();
        Ok(session)
    }

    fn reset(&mut self) {
        self.known.clear();
        self.unknown.clear();
        self.face = Face::default();

        let mut order: Vec<CardIndex> = self.cards.indices().collect();
        shuffle(&mut order, &mut self.rng);
        self.queue = order.into();

        tracing::debug!(cards = self.cards.len(), "study session started");
    }

    /// Start over with a fresh shuffle.
    pub fn restart(&mut self) {
        self.reset();
    }

    #[must_use]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// Card at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQueue` once every card is known.
    pub fn current(&self) -> Result<(CardIndex, &Card), SessionError> {
        let index = *self.queue.front().ok_or(SessionError::EmptyQueue)?;
        let card = self.cards.get(index).ok_or(SessionError::EmptyQueue)?;
        Ok((index, card))
    }

    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Turn the front card over.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQueue` if the session is complete.
    pub fn flip(&mut self) -> Result<Face, SessionError> {
        self.current()?;
        self.face = self.face.flipped();
        Ok(self.face)
    }

    /// Text on the visible side of the front card.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQueue` if the session is complete.
    pub fn visible_text(&self) -> Result<&str, SessionError> {
        let (_, card) = self.current()?;
        Ok(match self.face {
            Face::Term => card.term(),
            Face::Definition => card.definition(),
        })
    }

    /// Mark the front card as known and drop it from the queue.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQueue` if the session is complete.
    pub fn mark_known(&mut self) -> Result<StudyProgress, SessionError> {
        let index = self.queue.pop_front().ok_or(SessionError::EmptyQueue)?;
        self.known.insert(index);
        self.unknown.remove(&index);
        self.face = Face::default();

        tracing::debug!(%index, remaining = self.queue.len(), "card marked known");
        if self.queue.is_empty() {
            tracing::debug!(known = self.known.len(), "study session complete");
        }
        Ok(self.progress())
    }

    /// Mark the front card as unknown and move it to the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQueue` if the session is complete.
    pub fn mark_unknown(&mut self) -> Result<StudyProgress, SessionError> {
        let index = self.queue.pop_front().ok_or(SessionError::EmptyQueue)?;
        self.unknown.insert(index);
        self.known.remove(&index);
        self.queue.push_back(index);
        self.face = Face::default();

        tracing::debug!(%index, "card marked unknown");
        Ok(self.progress())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn is_known(&self, index: CardIndex) -> bool {
        self.known.contains(&index)
    }

    /// Remaining presentation order, front first.
    pub fn queue(&self) -> impl Iterator<Item = CardIndex> + '_ {
        self.queue.iter().copied()
    }

    #[must_use]
    pub fn progress(&self) -> StudyProgress {
        let total = self.cards.len();
        let known = self.known.len();
        let unknown = self.unknown.len();
        StudyProgress {
            total,
            known,
            unknown,
            remaining: self.queue.len(),
            position: (known + unknown + 1).min(total),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> StudySummary {
        StudySummary {
            known: self.known.len(),
            total: self.cards.len(),
        }
    }
}

impl<R> fmt::Debug for StudyQueue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudyQueue")
            .field("cards_len", &self.cards.len())
            .field("queue", &self.queue)
            .field("known_len", &self.known.len())
            .field("unknown_len", &self.unknown.len())
            .field("face", &self.face)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_set(len: usize) -> CardSet {
        CardSet::from_pairs(
            "Test",
            (0..len).map(|i| (format!("T{i}"), format!("D{i}"))),
        )
    }

    fn build_session(len: usize) -> StudyQueue {
        StudyQueue::with_rng(build_set(len), StdRng::seed_from_u64(9)).unwrap()
    }

    #[test]
    fn empty_set_returns_error() {
        let err = StudyQueue::with_rng(build_set(0), StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(
            err,
            SessionError::InsufficientCards {
                required: 1,
                available: 0
            }
        );
    }

    #[test]
    fn queue_starts_as_permutation() {
        let session = build_session(6);
        let mut order: Vec<_> = session.queue().map(|i| i.value()).collect();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(session.progress().position, 1);
        assert!(!session.is_complete());
    }

    #[test]
    fn marking_everything_known_completes() {
        let mut session = build_session(3);
        for expected_known in 1..=3 {
            let progress = session.mark_known().unwrap();
            assert_eq!(progress.known, expected_known);
        }
        assert!(session.is_complete());
        assert_eq!(session.summary(), StudySummary { known: 3, total: 3 });
        assert_eq!(session.current().unwrap_err(), SessionError::EmptyQueue);
        assert_eq!(session.mark_known().unwrap_err(), SessionError::EmptyQueue);
    }

    #[test]
    fn unknown_card_moves_to_back() {
        let mut session = build_session(3);
        let first = session.current().unwrap().0;
        session.mark_unknown().unwrap();

        let order: Vec<_> = session.queue().collect();
        assert_eq!(order.len(), 3);
        assert_eq!(*order.last().unwrap(), first);
        assert_ne!(session.current().unwrap().0, first);
        assert_eq!(session.progress().unknown, 1);
    }

    #[test]
    fn known_after_unknown_moves_between_sets() {
        let mut session = build_session(1);
        session.mark_unknown().unwrap();
        session.mark_unknown().unwrap();
        let progress = session.progress();
        assert_eq!((progress.known, progress.unknown), (0, 1));
        assert_eq!(progress.remaining, 1);

        let progress = session.mark_known().unwrap();
        assert_eq!((progress.known, progress.unknown), (1, 0));
        assert!(progress.is_complete);
        assert!((progress.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flip_toggles_and_resets_on_move() {
        let mut session = build_session(2);
        let (_, card) = session.current().unwrap();
        let term = card.term().to_string();
        let definition = card.definition().to_string();

        assert_eq!(session.visible_text().unwrap(), term);
        assert_eq!(session.flip().unwrap(), Face::Definition);
        assert_eq!(session.visible_text().unwrap(), definition);

        session.mark_unknown().unwrap();
        assert_eq!(session.face(), Face::Term);
    }

    #[test]
    fn restart_clears_progress() {
        let mut session = build_session(4);
        session.mark_known().unwrap();
        session.mark_unknown().unwrap();
        session.restart();

        let progress = session.progress();
        assert_eq!(progress.known, 0);
        assert_eq!(progress.unknown, 0);
        assert_eq!(progress.remaining, 4);
    }
}

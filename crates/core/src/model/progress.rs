use serde::{Deserialize, Serialize};

/// Consecutive correct answers in `Learning` needed to reach `Mastered`.
pub const MASTERY_STREAK: u32 = 2;

/// Mastery stage of a card in Learn mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Never answered correctly.
    #[default]
    New,
    /// Answered correctly at least once, streak not yet long enough.
    Learning,
    /// Streak reached; excluded from queue rebuilds.
    Mastered,
}

impl Stage {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Learning => "Learning",
            Self::Mastered => "Mastered",
        }
    }
}

/// Per-card progress for one Learn session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardProgress {
    stage: Stage,
    correct_in_a_row: u32,
    last_answer_correct: bool,
}

impl CardProgress {
    /// Fresh progress: `New`, empty streak.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild progress from explicit parts.
    #[must_use]
    pub fn from_parts(stage: Stage, correct_in_a_row: u32, last_answer_correct: bool) -> Self {
        Self {
            stage,
            correct_in_a_row,
            last_answer_correct,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn correct_in_a_row(&self) -> u32 {
        self.correct_in_a_row
    }

    #[must_use]
    pub fn last_answer_correct(&self) -> bool {
        self.last_answer_correct
    }

    #[must_use]
    pub fn is_mastered(&self) -> bool {
        self.stage == Stage::Mastered
    }

    /// Apply one answer and return the resulting stage.
    ///
    /// - correct on `New` moves to `Learning`
    /// - correct on `Learning` with a streak of at least `MASTERY_STREAK` moves to `Mastered`
    /// - incorrect resets the streak; `Mastered` is demoted to `Learning`
    pub fn record_answer(&mut self, correct: bool) -> Stage {
        self.last_answer_correct = correct;
        if correct {
            self.correct_in_a_row = self.correct_in_a_row.saturating_add(1);
            match self.stage {
                Stage::New => self.stage = Stage::Learning,
                Stage::Learning if self.correct_in_a_row >= MASTERY_STREAK => {
                    self.stage = Stage::Mastered;
                }
                Stage::Learning | Stage::Mastered => {}
            }
        } else {
            self.correct_in_a_row = 0;
            if self.stage == Stage::Mastered {
                self.stage = Stage::Learning;
            }
        }
        self.stage
    }
}

/// Count of cards per stage, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StageCounts {
    pub new: usize,
    pub learning: usize,
    pub mastered: usize,
}

impl StageCounts {
    #[must_use]
    pub fn tally<'a>(progress: impl IntoIterator<Item = &'a CardProgress>) -> Self {
        let mut counts = Self::default();
        for entry in progress {
            match entry.stage() {
                Stage::New => counts.new += 1,
                Stage::Learning => counts.learning += 1,
                Stage::Mastered => counts.mastered += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.new + self.learning + self.mastered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_correct_answers_master_a_new_card() {
        let mut progress = CardProgress::new();
        assert_eq!(progress.record_answer(true), Stage::Learning);
        assert_eq!(progress.correct_in_a_row(), 1);
        assert_eq!(progress.record_answer(true), Stage::Mastered);
        assert_eq!(progress.correct_in_a_row(), 2);
        assert!(progress.last_answer_correct());
    }

    #[test]
    fn incorrect_answer_keeps_stage_but_resets_streak() {
        let mut progress = CardProgress::new();
        assert_eq!(progress.record_answer(false), Stage::New);
        progress.record_answer(true);
        assert_eq!(progress.record_answer(false), Stage::Learning);
        assert_eq!(progress.correct_in_a_row(), 0);
        assert!(!progress.last_answer_correct());

        // streak restarts: one correct is not enough after a miss
        assert_eq!(progress.record_answer(true), Stage::Learning);
        assert_eq!(progress.record_answer(true), Stage::Mastered);
    }

    #[test]
    fn mastered_card_is_demoted_on_miss() {
        let mut progress = CardProgress::from_parts(Stage::Mastered, 4, true);
        assert_eq!(progress.record_answer(false), Stage::Learning);
        assert_eq!(progress.correct_in_a_row(), 0);
    }

    #[test]
    fn mastered_card_stays_mastered_on_hit() {
        let mut progress = CardProgress::from_parts(Stage::Mastered, 2, true);
        assert_eq!(progress.record_answer(true), Stage::Mastered);
        assert_eq!(progress.correct_in_a_row(), 3);
    }

    #[test]
    fn stage_counts_tally() {
        let progress = [
            CardProgress::new(),
            CardProgress::from_parts(Stage::Learning, 1, true),
            CardProgress::from_parts(Stage::Mastered, 2, true),
            CardProgress::from_parts(Stage::Mastered, 3, true),
        ];
        let counts = StageCounts::tally(&progress);
        assert_eq!(counts.new, 1);
        assert_eq!(counts.learning, 1);
        assert_eq!(counts.mastered, 2);
        assert_eq!(counts.total(), 4);
    }
}

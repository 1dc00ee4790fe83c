use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("score ({score}) exceeds question count ({total})")]
    ScoreOutOfRange { score: usize, total: usize },

    #[error("a quiz result needs at least one question")]
    NoQuestions,
}

/// End-of-session summary for Study mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudySummary {
    pub known: usize,
    pub total: usize,
}

/// End-of-session summary for Learn mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearnSummary {
    pub mastered: usize,
    pub total: usize,
}

/// Final score of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    score: usize,
    total: usize,
    percent: u32,
}

impl QuizResult {
    /// Build a result, rounding the percentage half up.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::NoQuestions` for an empty quiz and
    /// `SummaryError::ScoreOutOfRange` if `score > total`.
    pub fn new(score: usize, total: usize) -> Result<Self, SummaryError> {
        if total == 0 {
            return Err(SummaryError::NoQuestions);
        }
        if score > total {
            return Err(SummaryError::ScoreOutOfRange { score, total });
        }
        let rounded = (200 * score + total) / (2 * total);
        let percent = u32::try_from(rounded).unwrap_or(100);
        Ok(Self {
            score,
            total,
            percent,
        })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        self.percent
    }
}

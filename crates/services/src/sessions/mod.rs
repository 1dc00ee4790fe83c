mod learn;
mod progress;
mod quiz;
mod study;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use learn::{LEARNING_REPEAT_LIMIT, LearnScheduler, LearnStep, REQUEUE_WINDOW};
pub use progress::StudyProgress;
pub use quiz::{MIN_QUIZ_CARDS, QuizResponse, QuizRunner};
pub use study::{Face, StudyQueue};

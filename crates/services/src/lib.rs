#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use sessions as session;

pub use error::SessionError;

pub use sessions::{
    Face, LearnScheduler, LearnStep, MIN_QUIZ_CARDS, QuizResponse, QuizRunner, StudyProgress,
    StudyQueue,
};

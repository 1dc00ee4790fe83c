mod card;
mod ids;
mod progress;
mod question;
mod settings;
mod summary;

pub use ids::CardIndex;

pub use card::{Card, CardError, CardSet};
pub use progress::{CardProgress, MASTERY_STREAK, Stage, StageCounts};
pub use question::{Answer, AnswerOption, CHOICES_PER_QUESTION, Outcome, Question, QuestionKind};
pub use settings::{
    AnswerWith, LearnSettings, LearnSettingsError, MIN_MULTIPLE_CHOICE_CARDS, QuestionTypes,
};
pub use summary::{LearnSummary, QuizResult, StudySummary, SummaryError};

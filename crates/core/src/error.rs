use thiserror::Error;

use crate::model::{CardError, LearnSettingsError, SummaryError};
use crate::random::DistractorError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Settings(#[from] LearnSettingsError),
    #[error(transparent)]
    Distractor(#[from] DistractorError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, LearnSettings, QuestionTypes};

    fn build(term: &str, definition: &str) -> Result<Card, Error> {
        Ok(Card::new(term, definition)?)
    }

    #[test]
    fn errors_convert_into_core_error() {
        let err = build("", "x").unwrap_err();
        assert!(matches!(err, Error::Card(CardError::EmptyTerm)));

        let settings = LearnSettings {
            question_types: QuestionTypes {
                multiple_choice: false,
                written: false,
            },
            ..LearnSettings::default()
        };
        let err: Error = settings.eligible_kinds(5).unwrap_err().into();
        assert_eq!(err.to_string(), "at least one question type must be enabled");
    }
}

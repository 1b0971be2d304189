use thiserror::Error;

use crate::model::{
    MediaValidationError, PermutationError, QuestionError, QuizSettingsError, ScoreError,
    SubjectError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Subject(#[from] SubjectError),
    #[error(transparent)]
    Permutation(#[from] PermutationError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error(transparent)]
    Media(#[from] MediaValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, Subject, SubjectId};

    fn build() -> Result<Subject, Error> {
        let question = Question::new("Empty?", Vec::<String>::new(), 0)?;
        Ok(Subject::new(SubjectId::new("s").unwrap(), "S", "", "", vec![question])?)
    }

    #[test]
    fn model_errors_convert() {
        assert!(matches!(build(), Err(Error::Question(_))));
    }
}

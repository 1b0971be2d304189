//! Mapping between the deck JSON format and domain subjects.

use quiz_core::model::{
    ParseIdError, Question, QuestionDraft, QuestionError, Subject, SubjectError, SubjectId,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckFileError {
    #[error("invalid deck JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    Subject(#[from] SubjectError),

    #[error(transparent)]
    Id(#[from] ParseIdError),
}

/// On-disk shape of a deck. Deck-level fields are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl QuestionRecord {
    fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            text: self.question,
            options: self.options,
            correct_option: self.correct_answer,
            explanation: self.explanation,
            image: self.image,
        }
    }
}

impl DeckFile {
    /// # Errors
    ///
    /// Returns `DeckFileError::Parse` for malformed JSON or a missing `questions` list.
    pub fn parse(raw: &str) -> Result<Self, DeckFileError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Convert into a `Subject`, filling missing metadata from `stem`.
    ///
    /// # Errors
    ///
    /// Returns `DeckFileError` if the stem is not a usable id or any question
    /// fails validation.
    pub fn into_subject(self, stem: &str) -> Result<Subject, DeckFileError> {
        let id = SubjectId::new(stem)?;
        let name = non_blank(self.name).unwrap_or_else(|| name_from_stem(stem));
        let description =
            non_blank(self.description).unwrap_or_else(|| format!("Practice test for {name}"));
        let icon = self.icon.unwrap_or_default();

        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_draft()
                    .validate()
                    .map_err(|source| DeckFileError::Question { index, source })
            })
            .collect::<Result<Vec<Question>, _>>()?;

        Ok(Subject::new(id, name, description, icon, questions)?)
    }
}

/// A deck bundled with the binary, which carries its own id.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EmbeddedDeck {
    pub id: String,
    #[serde(flatten)]
    pub deck: DeckFile,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// `bmc_u2-exam` → `Bmc u2 exam`
#[must_use]
pub fn name_from_stem(stem: &str) -> String {
    let spaced: String = stem
        .trim()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

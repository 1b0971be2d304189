use thiserror::Error;

use crate::model::media::{MediaUri, MediaValidationError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct answer {index} is outside 0..{len}")]
    CorrectOptionOutOfRange { index: i64, len: usize },

    #[error("invalid image: {0}")]
    Image(#[source] MediaValidationError),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as authored in a deck file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
    pub explanation: Option<String>,
    pub image: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// Blank explanations and images are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is blank, there are fewer than two
    /// options, an option is blank, or the correct index is out of range.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let len = self.options.len();
        if len < 2 {
            return Err(QuestionError::TooFewOptions { len });
        }
        if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }

        let correct_option = usize::try_from(self.correct_option)
            .ok()
            .filter(|i| *i < len)
            .ok_or(QuestionError::CorrectOptionOutOfRange {
                index: self.correct_option,
                len,
            })?;

        let explanation = self
            .explanation
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty());

        let image = match self.image.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(MediaUri::parse(raw).map_err(QuestionError::Image)?),
        };

        Ok(Question {
            text: text.to_owned(),
            options: self.options,
            correct_option,
            explanation,
            image,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question. Options are kept in authored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: Option<String>,
    image: Option<MediaUri>,
}

impl Question {
    /// Convenience constructor for text-only questions.
    ///
    /// # Errors
    ///
    /// Same as [`QuestionDraft::validate`].
    pub fn new<S: Into<String>>(
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_option: usize,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option: i64::try_from(correct_option).unwrap_or(i64::MAX),
            explanation: None,
            image: None,
        }
        .validate()
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        let explanation = explanation.into();
        self.explanation = Some(explanation.trim().to_owned()).filter(|e| !e.is_empty());
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Index of the correct option in authored order.
    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaUri> {
        self.image.as_ref()
    }
}

use thiserror::Error;

use crate::model::ids::SubjectId;
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubjectError {
    #[error("subject name cannot be empty")]
    EmptyName,
}

/// Icon shown for subjects whose deck file does not carry one.
pub const DEFAULT_SUBJECT_ICON: &str = "📚";

/// A named deck of questions.
///
/// Subjects are immutable once built; sessions copy the questions they use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    id: SubjectId,
    name: String,
    description: String,
    icon: String,
    questions: Vec<Question>,
}

impl Subject {
    /// Creates a new Subject.
    ///
    /// A blank icon falls back to [`DEFAULT_SUBJECT_ICON`].
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::EmptyName` if name is empty or whitespace-only.
    pub fn new(
        id: SubjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, SubjectError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SubjectError::EmptyName);
        }
        let icon = icon.into();
        let icon = if icon.trim().is_empty() {
            DEFAULT_SUBJECT_ICON.to_owned()
        } else {
            icon.trim().to_owned()
        };

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            description: description.into().trim().to_owned(),
            icon,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

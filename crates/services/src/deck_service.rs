use std::sync::Arc;

use quiz_core::model::{Subject, SubjectId};
use storage::repository::{InMemoryRepository, SubjectRepository};

use crate::error::DeckServiceError;

/// Read access to the loaded subjects.
#[derive(Clone)]
pub struct DeckService {
    subjects: Arc<dyn SubjectRepository>,
}

impl DeckService {
    #[must_use]
    pub fn new(subjects: Arc<dyn SubjectRepository>) -> Self {
        Self { subjects }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }

    /// Subjects in load order.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Storage` if repository access fails.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, DeckServiceError> {
        Ok(self.subjects.list_subjects().await?)
    }

    /// # Errors
    ///
    /// Returns `DeckServiceError::UnknownSubject` when no subject has this id,
    /// or `DeckServiceError::Storage` if repository access fails.
    pub async fn get_subject(&self, id: &SubjectId) -> Result<Subject, DeckServiceError> {
        self.subjects
            .get_subject(id)
            .await?
            .ok_or_else(|| DeckServiceError::UnknownSubject(id.clone()))
    }

    /// Swap the whole store for `subjects`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Storage` if repository access fails.
    pub async fn replace_all(&self, subjects: &[Subject]) -> Result<(), DeckServiceError> {
        self.subjects.clear().await?;
        for subject in subjects {
            self.subjects.upsert_subject(subject).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;

    fn build_subject(id: &str) -> Subject {
        Subject::new(
            SubjectId::new(id).unwrap(),
            id.to_uppercase(),
            "",
            "",
            vec![Question::new("Q", ["a", "b"], 1).unwrap()],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn replace_all_keeps_order() {
        let service = DeckService::in_memory();
        service
            .replace_all(&[build_subject("b"), build_subject("a")])
            .await
            .unwrap();
        service.replace_all(&[build_subject("c"), build_subject("a")]).await.unwrap();

        let names: Vec<_> = service
            .list_subjects()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_owned())
            .collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[tokio::test]
    async fn unknown_subject_is_an_error() {
        let service = DeckService::in_memory();
        let err = service
            .get_subject(&SubjectId::new("missing").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DeckServiceError::UnknownSubject(_)));
    }
}

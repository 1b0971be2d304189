use async_trait::async_trait;
use quiz_core::model::{Subject, SubjectId};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository contract for the Deck Store.
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// Insert a subject or replace the one with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the subject cannot be stored.
    async fn upsert_subject(&self, subject: &Subject) -> Result<(), StorageError>;

    /// Fetch a subject by id.
    ///
    /// Returns `Ok(None)` when the subject does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn get_subject(&self, id: &SubjectId) -> Result<Option<Subject>, StorageError>;

    /// All subjects in load order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError>;

    /// Drop every stored subject.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory Deck Store. Subjects keep the order they were first inserted in.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    subjects: Arc<Mutex<Vec<Subject>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            subjects: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl SubjectRepository for InMemoryRepository {
    async fn upsert_subject(&self, subject: &Subject) -> Result<(), StorageError> {
        let mut guard = self
            .subjects
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.iter_mut().find(|s| s.id() == subject.id()) {
            Some(existing) => *existing = subject.clone(),
            None => guard.push(subject.clone()),
        }
        Ok(())
    }

    async fn get_subject(&self, id: &SubjectId) -> Result<Option<Subject>, StorageError> {
        let guard = self
            .subjects
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.iter().find(|s| s.id() == id).cloned())
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError> {
        let guard = self
            .subjects
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .subjects
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clear();
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub subjects: Arc<dyn SubjectRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let subjects: Arc<dyn SubjectRepository> = Arc::new(InMemoryRepository::new());
        Self { subjects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;

    fn build_subject(id: &str, name: &str) -> Subject {
        Subject::new(
            SubjectId::new(id).unwrap(),
            name,
            "",
            "",
            vec![Question::new("Q", ["a", "b"], 0).unwrap()],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn upsert_replaces_in_place() {
        let repo = InMemoryRepository::new();
        repo.upsert_subject(&build_subject("a", "First")).await.unwrap();
        repo.upsert_subject(&build_subject("b", "Second")).await.unwrap();
        repo.upsert_subject(&build_subject("a", "First again"))
            .await
            .unwrap();

        let all = repo.list_subjects().await.unwrap();
        let names: Vec<_> = all.iter().map(Subject::name).collect();
        assert_eq!(names, vec!["First again", "Second"]);
    }

    #[tokio::test]
    async fn get_missing_subject_is_none() {
        let repo = InMemoryRepository::new();
        let id = SubjectId::new("nope").unwrap();
        assert!(repo.get_subject(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_empties_store() {
        let storage = Storage::in_memory();
        storage
            .subjects
            .upsert_subject(&build_subject("a", "A"))
            .await
            .unwrap();
        storage.subjects.clear().await.unwrap();
        assert!(storage.subjects.list_subjects().await.unwrap().is_empty());
    }
}

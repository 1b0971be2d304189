use std::sync::Arc;

use quiz_core::model::{QuizSettings, Subject};
use storage::{DeckLoader, DeckOrigin, Storage};
use tracing::info;

use crate::deck_service::DeckService;
use crate::error::AppServicesError;
use crate::sessions::{QuizLoopService, Shuffler};
use crate::Clock;

/// Assembles app-facing services over an in-memory Deck Store.
#[derive(Clone)]
pub struct AppServices {
    origin: DeckOrigin,
    deck_service: Arc<DeckService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Load decks through `loader`, falling back to the sample set.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the sample set is unusable or the store
    /// rejects a subject.
    pub async fn load(
        loader: &DeckLoader,
        clock: Clock,
        shuffler: Shuffler,
        settings: QuizSettings,
    ) -> Result<Self, AppServicesError> {
        let loaded = loader.load_or_sample().await?;
        Self::from_subjects(&loaded.subjects, loaded.origin, clock, shuffler, settings).await
    }

    /// Build services over an already loaded set of subjects.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the store rejects a subject.
    pub async fn from_subjects(
        subjects: &[Subject],
        origin: DeckOrigin,
        clock: Clock,
        shuffler: Shuffler,
        settings: QuizSettings,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::in_memory();
        for subject in subjects {
            storage.subjects.upsert_subject(subject).await?;
        }
        info!(subjects = subjects.len(), ?origin, "deck store ready");

        let deck_service = Arc::new(DeckService::new(Arc::clone(&storage.subjects)));
        let quiz_loop = Arc::new(
            QuizLoopService::new(clock, Arc::clone(&deck_service), shuffler).with_settings(settings),
        );

        Ok(Self {
            origin,
            deck_service,
            quiz_loop,
        })
    }

    #[must_use]
    pub fn origin(&self) -> DeckOrigin {
        self.origin
    }

    #[must_use]
    pub fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        self.quiz_loop.settings()
    }
}

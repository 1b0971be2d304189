use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::QuizSettings;
use services::{DeckOrigin, DeckService, QuizLoopService, QuizRun};

pub trait UiApp: Send + Sync {
    fn deck_origin(&self) -> DeckOrigin;

    fn deck_service(&self) -> Arc<DeckService>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    deck_origin: DeckOrigin,
    deck_service: Arc<DeckService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck_origin: app.deck_origin(),
            deck_service: app.deck_service(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn deck_origin(&self) -> DeckOrigin {
        self.deck_origin
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
    pub fn settings(&self) -> QuizSettings {
        self.quiz_loop.settings().clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The run in progress (or just finished), shared by the test and results screens.
///
/// Provided once by `App`; restart, quit and the subjects screen clear it.
#[derive(Clone, Copy)]
pub struct ActiveRun(pub Signal<Option<QuizRun>>);

impl ActiveRun {
    pub fn replace(mut self, run: QuizRun) {
        self.0.set(Some(run));
    }

    /// Drop the run, abandoning it first if it never completed.
    pub fn clear(mut self) {
        if let Some(mut run) = self.0.take() {
            if !run.is_finished() {
                run.abandon();
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.peek().is_none()
    }
}

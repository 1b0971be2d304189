#![forbid(unsafe_code)]

pub mod app_services;
pub mod deck_service;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;
pub use storage::DeckOrigin;
pub use sessions as session;

pub use app_services::AppServices;
pub use deck_service::DeckService;
pub use error::{AppServicesError, BuildError, DeckServiceError, SessionError};
pub use sessions::{
    NavIntent, NavOutcome, NavigationPresenter, NavigationView, QuestionSession, QuestionView,
    QuizLoopService, QuizRun, ResultView, RunSummary, SessionBuilder, SessionPlan, Shuffler,
};

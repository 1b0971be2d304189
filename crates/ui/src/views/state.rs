use dioxus::prelude::*;
use services::{BuildError, DeckServiceError, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    SubjectNotFound,
    EmptySubject,
    InvalidRange,
    InvalidCount,
    NoActiveRun,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::SubjectNotFound => "That subject is no longer available.",
            ViewError::EmptySubject => "This subject has no questions yet.",
            ViewError::InvalidRange => "Choose a valid range of questions.",
            ViewError::InvalidCount => "Choose at least one question.",
            ViewError::NoActiveRun => "There is no test in progress.",
        }
    }

    #[must_use]
    pub fn from_session(err: &SessionError) -> Self {
        match err {
            SessionError::Build(BuildError::Range { .. }) => ViewError::InvalidRange,
            SessionError::Build(BuildError::InvalidCount) => ViewError::InvalidCount,
            SessionError::Build(BuildError::EmptyDeck) | SessionError::Empty => {
                ViewError::EmptySubject
            }
            SessionError::Deck(DeckServiceError::UnknownSubject(_)) => ViewError::SubjectNotFound,
            SessionError::NotActive => ViewError::NoActiveRun,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

mod navigation;
mod plan;
mod service;
mod shuffle;
mod timer;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{BuildError, SessionError};
pub use navigation::{
    NAV_SLOTS, NavIntent, NavOutcome, NavSlot, NavigationPresenter, NavigationView, NextAction,
    SlotStatus,
};
pub use plan::{SessionBuilder, SessionPlan};
pub use service::{Advance, CurrentQuestion, QuestionSession, SessionState};
pub use shuffle::Shuffler;
pub use timer::{SessionTimer, TimerState};
pub use view::{
    NO_EXPLANATION, OptionFeedback, OptionView, ProgressView, QuestionView, ResultView,
    option_letter,
};
pub use workflow::{QuizLoopService, QuizRun, RunSummary};

use std::sync::{Arc, Mutex, PoisonError};

use quiz_core::model::{QuizSettings, ScoreSummary, SubjectId, TestMode};
use tracing::{debug, info};

use super::navigation::{NavIntent, NavOutcome, NavigationPresenter, NavigationView};
use super::plan::{SessionBuilder, SessionPlan};
use super::service::QuestionSession;
use super::shuffle::Shuffler;
use super::timer::SessionTimer;
use super::view::{QuestionView, ResultView};
use crate::deck_service::DeckService;
use crate::error::SessionError;
use crate::Clock;

/// Score and duration of a finished (or abandoned) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub subject_id: SubjectId,
    pub subject_name: String,
    pub mode: TestMode,
    pub score: ScoreSummary,
    pub duration_ms: u64,
}

impl RunSummary {
    #[must_use]
    pub fn result_view(&self) -> ResultView {
        ResultView::new(&self.score, self.duration_ms)
    }
}

/// One learner run: the session plus the on-screen timer and where it came from.
#[derive(Debug)]
pub struct QuizRun {
    subject_id: SubjectId,
    subject_name: String,
    mode: TestMode,
    session: QuestionSession,
    timer: SessionTimer,
}

impl QuizRun {
    /// Start a run from a built plan.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for an empty plan.
    pub fn start(plan: SessionPlan, clock: Clock, shuffler: Shuffler) -> Result<Self, SessionError> {
        let mut session = QuestionSession::new(clock, shuffler);
        session.start(plan.questions)?;
        session.current()?;
        let mut timer = SessionTimer::new(clock);
        timer.start();

        Ok(Self {
            subject_id: plan.subject_id,
            subject_name: plan.subject_name,
            mode: plan.mode,
            session,
            timer,
        })
    }

    #[must_use]
    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    #[must_use]
    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    #[must_use]
    pub fn mode(&self) -> TestMode {
        self.mode
    }

    #[must_use]
    pub fn session(&self) -> &QuestionSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuestionSession {
        &mut self.session
    }

    #[must_use]
    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut SessionTimer {
        &mut self.timer
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_completed()
    }

    /// Replace the clock of both the session and the timer.
    pub fn set_clock(&mut self, clock: Clock) {
        self.session.set_clock(clock);
        self.timer.set_clock(clock);
    }

    /// The question on screen; `None` once the run is over.
    #[must_use]
    pub fn question_view(&self) -> Option<QuestionView> {
        let current = self.session.shown()?;
        Some(QuestionView::new(&current, self.session.len()))
    }

    #[must_use]
    pub fn navigation(&self) -> Option<NavigationView> {
        NavigationPresenter::project(&self.session)
    }

    /// # Errors
    ///
    /// See [`QuestionSession::select_answer`].
    pub fn select_answer(&mut self, display_index: usize) -> Result<bool, SessionError> {
        let correct = self.session.select_answer(display_index)?;
        debug!(display_index, correct, "answer selected");
        Ok(correct)
    }

    /// Apply a navigation intent and show the question it lands on. Stops the
    /// timer when the run completes.
    ///
    /// # Errors
    ///
    /// See [`NavigationPresenter::dispatch`].
    pub fn navigate(&mut self, intent: NavIntent) -> Result<NavOutcome, SessionError> {
        let outcome = NavigationPresenter::dispatch(&mut self.session, intent)?;
        match outcome {
            NavOutcome::Moved(_) => {
                self.session.current()?;
            }
            NavOutcome::Completed => {
                self.timer.stop();
            }
        }
        Ok(outcome)
    }

    /// Leave the run before it completes. The timer stops; nothing is scored.
    pub fn abandon(&mut self) {
        let elapsed_ms = self.timer.stop();
        info!(
            subject = %self.subject_id,
            mode = %self.mode.kind(),
            elapsed_ms,
            "run abandoned"
        );
    }

    /// On-screen elapsed time, `mm:ss`.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        self.timer.display()
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotActive` if the session was reset.
    pub fn summary(&self) -> Result<RunSummary, SessionError> {
        Ok(RunSummary {
            subject_id: self.subject_id.clone(),
            subject_name: self.subject_name.clone(),
            mode: self.mode,
            score: self.session.score()?,
            duration_ms: self.session.elapsed()?,
        })
    }
}

/// Orchestrates run start and completion on top of the Deck Store.
pub struct QuizLoopService {
    clock: Clock,
    decks: Arc<DeckService>,
    settings: QuizSettings,
    shuffler: Mutex<Shuffler>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, decks: Arc<DeckService>, shuffler: Shuffler) -> Self {
        Self {
            clock,
            decks,
            settings: QuizSettings::default(),
            shuffler: Mutex::new(shuffler),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Build a plan for `subject_id` and start a run over it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Deck` for an unknown subject and
    /// `SessionError::Build` when the mode does not fit the subject.
    pub async fn start_run(
        &self,
        subject_id: &SubjectId,
        mode: TestMode,
    ) -> Result<QuizRun, SessionError> {
        let subject = self.decks.get_subject(subject_id).await?;
        let mut shuffler = self.next_shuffler();
        let plan = SessionBuilder::new(&subject)
            .with_settings(&self.settings)
            .build(&mode, &mut shuffler)?;

        info!(
            subject = %subject_id,
            mode = %mode.kind(),
            questions = plan.total(),
            "run started"
        );
        QuizRun::start(plan, self.clock, shuffler)
    }

    /// Summarize a completed run.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` unless the run is completed.
    pub fn finish(&self, run: &QuizRun) -> Result<RunSummary, SessionError> {
        if !run.is_finished() {
            return Err(SessionError::NotActive);
        }
        let summary = run.summary()?;
        info!(
            subject = %summary.subject_id,
            correct = summary.score.correct(),
            total = summary.score.total(),
            percentage = summary.score.percentage(),
            duration_ms = summary.duration_ms,
            "run finished"
        );
        Ok(summary)
    }

    fn next_shuffler(&self) -> Shuffler {
        self.shuffler
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fork()
    }
}

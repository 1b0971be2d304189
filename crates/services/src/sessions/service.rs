use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;

use quiz_core::model::{Permutation, Question, ScoreSummary};

use super::shuffle::Shuffler;
use crate::error::SessionError;
use crate::Clock;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a question session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress { current: usize },
    Completed,
}

/// Outcome of `QuestionSession::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    Completed,
}

/// The question at the cursor, with its fixed display order.
#[derive(Debug, Clone, Copy)]
pub struct CurrentQuestion<'a> {
    pub position: usize,
    pub question: &'a Question,
    pub display_order: &'a Permutation,
    pub answer: Option<usize>,
}

impl CurrentQuestion<'_> {
    /// Display index of the correct option.
    #[must_use]
    pub fn correct_display_index(&self) -> Option<usize> {
        self.display_order
            .display_index_of(self.question.correct_option())
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> Vec<&str> {
        self.display_order
            .apply(self.question.options())
            .into_iter()
            .map(String::as_str)
            .collect()
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Single-run quiz state machine.
///
/// Owns the cursor, per-position answers (display indices), the visited set and
/// the lazily computed option order of every question. Each operation either
/// applies completely or returns an error and leaves the session untouched.
pub struct QuestionSession {
    clock: Clock,
    shuffler: Shuffler,
    questions: Vec<Question>,
    state: SessionState,
    answers: Vec<Option<usize>>,
    visited: BTreeSet<usize>,
    display_orders: Vec<Option<Permutation>>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuestionSession {
    #[must_use]
    pub fn new(clock: Clock, shuffler: Shuffler) -> Self {
        Self {
            clock,
            shuffler,
            questions: Vec::new(),
            state: SessionState::NotStarted,
            answers: Vec::new(),
            visited: BTreeSet::new(),
            display_orders: Vec::new(),
            started_at: None,
            completed_at: None,
        }
    }

    /// Replace the clock, e.g. to move a fixed clock forward in tests.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    /// Begin a run over `questions`. Valid from any state; all previous run
    /// state is discarded.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn start(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        let len = questions.len();
        self.questions = questions;
        self.state = SessionState::InProgress { current: 0 };
        self.answers = vec![None; len];
        self.visited.clear();
        self.display_orders = vec![None; len];
        self.started_at = Some(self.clock.now());
        self.completed_at = None;
        Ok(())
    }

    /// Back to `NotStarted` with every piece of run state cleared.
    pub fn reset(&mut self) {
        self.questions.clear();
        self.state = SessionState::NotStarted;
        self.answers.clear();
        self.visited.clear();
        self.display_orders.clear();
        self.started_at = None;
        self.completed_at = None;
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.state, SessionState::InProgress { .. })
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    #[must_use]
    pub fn current_position(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { current } => Some(current),
            _ => None,
        }
    }

    /// Total number of questions in this run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn is_last(&self, position: usize) -> bool {
        position + 1 == self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, position: usize) -> Option<usize> {
        self.answers.get(position).copied().flatten()
    }

    #[must_use]
    pub fn visited(&self) -> &BTreeSet<usize> {
        &self.visited
    }

    #[must_use]
    pub fn is_visited(&self, position: usize) -> bool {
        self.visited.contains(&position)
    }

    /// The stored option order for `position`, if it has been shown.
    #[must_use]
    pub fn display_order(&self, position: usize) -> Option<&Permutation> {
        self.display_orders.get(position).and_then(Option::as_ref)
    }

    /// Display index of the correct option at `position`, once its order exists.
    #[must_use]
    pub fn correct_display_index(&self, position: usize) -> Option<usize> {
        let question = self.questions.get(position)?;
        self.display_order(position)?
            .display_index_of(question.correct_option())
    }

    /// `Some(true|false)` for answered positions, `None` otherwise.
    #[must_use]
    pub fn is_correct(&self, position: usize) -> Option<bool> {
        let answer = self.answer(position)?;
        Some(self.correct_display_index(position) == Some(answer))
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The question at the cursor. Computes its option order on first display
    /// and marks the position visited.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` unless the run is in progress.
    pub fn current(&mut self) -> Result<CurrentQuestion<'_>, SessionError> {
        let position = self.active_position()?;
        self.visited.insert(position);
        self.ensure_display_order(position);

        let question = self.questions.get(position);
        let display_order = self.display_order(position);
        match (question, display_order) {
            (Some(question), Some(display_order)) => Ok(CurrentQuestion {
                position,
                question,
                display_order,
                answer: self.answer(position),
            }),
            _ => Err(SessionError::NotActive),
        }
    }

    /// Read-only counterpart of [`current`](Self::current): `None` until the
    /// question at the cursor has been shown once.
    #[must_use]
    pub fn shown(&self) -> Option<CurrentQuestion<'_>> {
        let position = self.current_position()?;
        Some(CurrentQuestion {
            position,
            question: self.questions.get(position)?,
            display_order: self.display_order(position)?,
            answer: self.answer(position),
        })
    }

    /// Record `display_index` as the answer to the current question,
    /// overwriting any earlier answer. The cursor does not move.
    ///
    /// Returns whether the answer is correct.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside a run and
    /// `SessionError::InvalidAnswer` for an index past the option count.
    pub fn select_answer(&mut self, display_index: usize) -> Result<bool, SessionError> {
        let position = self.active_position()?;
        let len = self
            .questions
            .get(position)
            .map_or(0, Question::option_count);
        if display_index >= len {
            return Err(SessionError::InvalidAnswer {
                index: display_index,
                len,
            });
        }

        self.visited.insert(position);
        self.ensure_display_order(position);
        if let Some(slot) = self.answers.get_mut(position) {
            *slot = Some(display_index);
        }
        Ok(self.is_correct(position) == Some(true))
    }

    /// Move forward, or complete the run from the last position.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside a run and
    /// `SessionError::AnswerRequired` if the current question is unanswered.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        let position = self.active_position()?;
        if self.answer(position).is_none() {
            return Err(SessionError::AnswerRequired);
        }

        if self.is_last(position) {
            self.state = SessionState::Completed;
            self.completed_at = Some(self.clock.now());
            return Ok(Advance::Completed);
        }

        let next = position + 1;
        self.move_to(next);
        Ok(Advance::Moved(next))
    }

    /// Move back one position. Needs no answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside a run and
    /// `SessionError::AtFirstQuestion` at position 0.
    pub fn retreat(&mut self) -> Result<usize, SessionError> {
        let position = self.active_position()?;
        if position == 0 {
            return Err(SessionError::AtFirstQuestion);
        }
        let previous = position - 1;
        self.move_to(previous);
        Ok(previous)
    }

    /// Move the cursor to any position of the run.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside a run and
    /// `SessionError::InvalidPosition` for a position past the end.
    pub fn jump_to(&mut self, position: usize) -> Result<(), SessionError> {
        self.active_position()?;
        let len = self.questions.len();
        if position >= len {
            return Err(SessionError::InvalidPosition { position, len });
        }
        self.move_to(position);
        Ok(())
    }

    /// Score of the run so far; unanswered questions count as incorrect.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` before a run has started.
    pub fn score(&self) -> Result<ScoreSummary, SessionError> {
        if self.state == SessionState::NotStarted {
            return Err(SessionError::NotActive);
        }

        let correct = (0..self.questions.len())
            .filter(|&p| self.is_correct(p) == Some(true))
            .count();
        Ok(ScoreSummary::from_counts(
            to_u32(self.questions.len()),
            to_u32(correct),
            to_u32(self.answered_count()),
        )?)
    }

    /// Milliseconds since `start`, measured up to completion once the run is over.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` before a run has started.
    pub fn elapsed(&self) -> Result<u64, SessionError> {
        let started_at = self.started_at.ok_or(SessionError::NotActive)?;
        let end = self.completed_at.unwrap_or_else(|| self.clock.now());
        Ok(u64::try_from((end - started_at).num_milliseconds()).unwrap_or(0))
    }

    fn active_position(&self) -> Result<usize, SessionError> {
        self.current_position().ok_or(SessionError::NotActive)
    }

    fn move_to(&mut self, position: usize) {
        self.state = SessionState::InProgress { current: position };
        self.visited.insert(position);
    }

    fn ensure_display_order(&mut self, position: usize) {
        let Some(len) = self.questions.get(position).map(Question::option_count) else {
            return;
        };
        let shuffler = &mut self.shuffler;
        if let Some(slot) = self.display_orders.get_mut(position) {
            slot.get_or_insert_with(|| shuffler.permutation(len));
        }
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl fmt::Debug for QuestionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionSession")
            .field("state", &self.state)
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answered_count())
            .field("visited", &self.visited)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

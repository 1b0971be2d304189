//! Three-slot navigation window around the current question.

use super::service::{Advance, QuestionSession};
use crate::error::SessionError;

/// Number of slots in the navigation window: previous, current, next.
pub const NAV_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Current,
    AnsweredCorrect,
    AnsweredIncorrect,
    Visited,
    Empty,
}

impl SlotStatus {
    /// Stable token for styling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SlotStatus::Current => "current",
            SlotStatus::AnsweredCorrect => "answered-correct",
            SlotStatus::AnsweredIncorrect => "answered-incorrect",
            SlotStatus::Visited => "visited",
            SlotStatus::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSlot {
    pub position: Option<usize>,
    pub status: SlotStatus,
}

impl NavSlot {
    /// Slots without a position are rendered disabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.position.is_some()
    }

    /// 1-based label, empty for disabled slots.
    #[must_use]
    pub fn label(&self) -> String {
        self.position
            .map(|p| (p + 1).to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Next,
    Finish,
}

/// Pure projection of a session onto the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub slots: [NavSlot; NAV_SLOTS],
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub next_action: NextAction,
}

/// User intent coming from the navigation bar. `Jump` carries a slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Previous,
    Next,
    Jump(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Moved(usize),
    Completed,
}

pub struct NavigationPresenter;

impl NavigationPresenter {
    /// Returns `None` unless the session is in progress.
    #[must_use]
    pub fn project(session: &QuestionSession) -> Option<NavigationView> {
        let current = session.current_position()?;
        let len = session.len();

        let slots = std::array::from_fn(|slot| {
            let position = (current + slot)
                .checked_sub(1)
                .filter(|&p| p < len);
            NavSlot {
                position,
                status: position.map_or(SlotStatus::Empty, |p| {
                    slot_status(session, current, p)
                }),
            }
        });

        let answered = session.answer(current).is_some();
        let next_action = if answered && session.is_last(current) {
            NextAction::Finish
        } else {
            NextAction::Next
        };

        Some(NavigationView {
            slots,
            previous_enabled: current > 0,
            next_enabled: answered,
            next_action,
        })
    }

    /// Apply an intent to the session.
    ///
    /// # Errors
    ///
    /// Propagates the session's rejection, or `SessionError::EmptySlot` for a
    /// jump to a disabled slot.
    pub fn dispatch(
        session: &mut QuestionSession,
        intent: NavIntent,
    ) -> Result<NavOutcome, SessionError> {
        match intent {
            NavIntent::Previous => session.retreat().map(NavOutcome::Moved),
            NavIntent::Next => Ok(match session.advance()? {
                Advance::Moved(position) => NavOutcome::Moved(position),
                Advance::Completed => NavOutcome::Completed,
            }),
            NavIntent::Jump(slot) => {
                let view = Self::project(session).ok_or(SessionError::NotActive)?;
                let position = view
                    .slots
                    .get(slot)
                    .and_then(|s| s.position)
                    .ok_or(SessionError::EmptySlot { slot })?;
                session.jump_to(position)?;
                Ok(NavOutcome::Moved(position))
            }
        }
    }
}

fn slot_status(session: &QuestionSession, current: usize, position: usize) -> SlotStatus {
    if position == current {
        return SlotStatus::Current;
    }
    match session.is_correct(position) {
        Some(true) => SlotStatus::AnsweredCorrect,
        Some(false) => SlotStatus::AnsweredIncorrect,
        None if session.is_visited(position) => SlotStatus::Visited,
        None => SlotStatus::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::Shuffler;
    use crate::Clock;
    use quiz_core::model::Question;
    use quiz_core::time::fixed_now;

    fn started(len: usize) -> QuestionSession {
        let questions = (0..len)
            .map(|i| Question::new(format!("Q{i}"), ["a", "b"], 0).unwrap())
            .collect();
        let mut session = QuestionSession::new(Clock::fixed(fixed_now()), Shuffler::identity());
        session.start(questions).unwrap();
        session
    }

    fn statuses(view: &NavigationView) -> Vec<SlotStatus> {
        view.slots.iter().map(|s| s.status).collect()
    }

    #[test]
    fn first_position_disables_previous_slot() {
        let mut session = started(3);
        session.current().unwrap();
        let view = NavigationPresenter::project(&session).unwrap();

        assert_eq!(view.slots[0].position, None);
        assert!(!view.slots[0].is_enabled());
        assert_eq!(view.slots[1].label(), "1");
        assert_eq!(
            statuses(&view),
            vec![SlotStatus::Empty, SlotStatus::Current, SlotStatus::Empty]
        );
        assert!(!view.previous_enabled);
        assert!(!view.next_enabled);
        assert_eq!(view.next_action, NextAction::Next);
    }

    #[test]
    fn neighbours_show_answer_state() {
        let mut session = started(4);
        session.select_answer(0).unwrap();
        session.advance().unwrap();
        session.select_answer(1).unwrap();
        session.advance().unwrap();
        session.retreat().unwrap();

        let view = NavigationPresenter::project(&session).unwrap();
        assert_eq!(
            statuses(&view),
            vec![
                SlotStatus::AnsweredCorrect,
                SlotStatus::Current,
                SlotStatus::Visited
            ]
        );
        assert!(view.previous_enabled);
        assert!(view.next_enabled);
    }

    #[test]
    fn incorrect_neighbour_is_flagged() {
        let mut session = started(2);
        session.select_answer(1).unwrap();
        session.advance().unwrap();
        let view = NavigationPresenter::project(&session).unwrap();
        assert_eq!(view.slots[0].status, SlotStatus::AnsweredIncorrect);
        assert_eq!(view.slots[2].position, None);
    }

    #[test]
    fn last_answered_question_offers_finish() {
        let mut session = started(2);
        session.jump_to(1).unwrap();
        assert_eq!(
            NavigationPresenter::project(&session).unwrap().next_action,
            NextAction::Next
        );

        session.select_answer(0).unwrap();
        let view = NavigationPresenter::project(&session).unwrap();
        assert_eq!(view.next_action, NextAction::Finish);

        let outcome = NavigationPresenter::dispatch(&mut session, NavIntent::Next).unwrap();
        assert_eq!(outcome, NavOutcome::Completed);
        assert!(NavigationPresenter::project(&session).is_none());
    }

    #[test]
    fn jump_intent_resolves_slots() {
        let mut session = started(3);
        session.jump_to(1).unwrap();
        assert_eq!(
            NavigationPresenter::dispatch(&mut session, NavIntent::Jump(2)).unwrap(),
            NavOutcome::Moved(2)
        );
        assert!(matches!(
            NavigationPresenter::dispatch(&mut session, NavIntent::Jump(2)),
            Err(SessionError::EmptySlot { slot: 2 })
        ));
        assert_eq!(session.current_position(), Some(2));
    }

    #[test]
    fn previous_intent_at_start_is_rejected() {
        let mut session = started(2);
        assert!(matches!(
            NavigationPresenter::dispatch(&mut session, NavIntent::Previous),
            Err(SessionError::AtFirstQuestion)
        ));
    }
}

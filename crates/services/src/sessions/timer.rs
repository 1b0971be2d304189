use chrono::{DateTime, Utc};

use quiz_core::time::format_mm_ss;

use crate::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Stopwatch for the on-screen elapsed time.
///
/// Presentation only: pausing it has no effect on `QuestionSession::elapsed`.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    clock: Clock,
    state: TimerState,
    accumulated_ms: u64,
    running_since: Option<DateTime<Utc>>,
}

impl SessionTimer {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            state: TimerState::Idle,
            accumulated_ms: 0,
            running_since: None,
        }
    }

    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Start from zero, whatever the previous state.
    pub fn start(&mut self) {
        self.accumulated_ms = 0;
        self.running_since = Some(self.clock.now());
        self.state = TimerState::Running;
    }

    /// Returns false if the timer was not running.
    pub fn pause(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.bank_running_time();
        self.state = TimerState::Paused;
        true
    }

    /// Returns false if the timer was not paused.
    pub fn resume(&mut self) -> bool {
        if self.state != TimerState::Paused {
            return false;
        }
        self.running_since = Some(self.clock.now());
        self.state = TimerState::Running;
        true
    }

    /// Freeze the reading. Returns the final elapsed milliseconds.
    pub fn stop(&mut self) -> u64 {
        if self.state == TimerState::Running {
            self.bank_running_time();
        }
        if self.state != TimerState::Idle {
            self.state = TimerState::Stopped;
        }
        self.accumulated_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
        self.running_since = None;
        self.state = TimerState::Idle;
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        let running = self
            .running_since
            .map_or(0, |since| self.clock.millis_since(since));
        self.accumulated_ms.saturating_add(running)
    }

    /// Current reading as `mm:ss`.
    #[must_use]
    pub fn display(&self) -> String {
        format_mm_ss(self.elapsed_ms())
    }

    fn bank_running_time(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated_ms = self
                .accumulated_ms
                .saturating_add(self.clock.millis_since(since));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::time::fixed_now;

    fn at(seconds: i64) -> Clock {
        Clock::fixed(fixed_now() + Duration::seconds(seconds))
    }

    #[test]
    fn pause_excludes_paused_time() {
        let mut timer = SessionTimer::new(at(0));
        timer.start();
        timer.set_clock(at(30));
        assert!(timer.pause());

        timer.set_clock(at(90));
        assert_eq!(timer.elapsed_ms(), 30_000);
        assert!(timer.resume());

        timer.set_clock(at(100));
        assert_eq!(timer.display(), "00:40");
    }

    #[test]
    fn stop_freezes_and_reset_clears() {
        let mut timer = SessionTimer::new(at(0));
        timer.start();
        timer.set_clock(at(65));
        assert_eq!(timer.stop(), 65_000);
        assert_eq!(timer.state(), TimerState::Stopped);

        timer.set_clock(at(600));
        assert_eq!(timer.display(), "01:05");

        timer.reset();
        assert_eq!(timer.elapsed_ms(), 0);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn invalid_transitions_are_ignored() {
        let mut timer = SessionTimer::new(at(0));
        assert!(!timer.pause());
        assert!(!timer.resume());
        assert_eq!(timer.stop(), 0);
        assert_eq!(timer.state(), TimerState::Idle);
    }
}

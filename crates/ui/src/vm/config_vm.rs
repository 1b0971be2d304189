use quiz_core::model::{QuizSettings, TestMode, TestModeKind};
use quiz_core::time::format_budget;

use crate::views::ViewError;

/// Question count picked for a random test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomChoice {
    Preset(usize),
    All,
    Custom,
}

/// Editable state of the configuration screen for one subject and mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigForm {
    pub kind: TestModeKind,
    pub deck_len: usize,
    pub start: usize,
    pub end: usize,
    pub random: RandomChoice,
    pub custom_count: String,
    pub timed_count: Option<usize>,
    pub seconds_per_question: u32,
}

impl ConfigForm {
    #[must_use]
    pub fn new(kind: TestModeKind, deck_len: usize, settings: &QuizSettings) -> Self {
        let (start, end) = settings.sequential_defaults(deck_len);
        let default_count = settings.default_random_count();
        let random = if default_count <= deck_len {
            RandomChoice::Preset(default_count)
        } else {
            RandomChoice::All
        };
        Self {
            kind,
            deck_len,
            start,
            end,
            random,
            custom_count: String::new(),
            timed_count: settings.default_timed_count_for(deck_len),
            seconds_per_question: settings.default_seconds_per_question(),
        }
    }

    /// Number of questions a sequential range selects, 0 when the range is invalid.
    #[must_use]
    pub fn sequential_selected(&self) -> usize {
        if self.sequential_error().is_some() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    #[must_use]
    pub fn sequential_error(&self) -> Option<&'static str> {
        if self.start == 0 || self.end == 0 {
            Some("Question numbers start at 1.")
        } else if self.start > self.end {
            Some("The start must not be after the end.")
        } else if self.end > self.deck_len {
            Some("The end is past the last question.")
        } else {
            None
        }
    }

    /// Total time hint for a timed test, `m:ss`.
    #[must_use]
    pub fn timed_budget(&self) -> Option<String> {
        let count = u64::try_from(self.timed_count?).ok()?;
        Some(format_budget(
            count.saturating_mul(u64::from(self.seconds_per_question)),
        ))
    }

    pub fn set_start(&mut self, raw: &str) {
        self.start = raw.trim().parse().unwrap_or(0);
    }

    pub fn set_end(&mut self, raw: &str) {
        self.end = raw.trim().parse().unwrap_or(0);
    }

    /// Turn the form into a mode the session builder accepts.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidRange` or `ViewError::InvalidCount` for
    /// input the builder would reject anyway.
    pub fn to_mode(&self) -> Result<TestMode, ViewError> {
        match self.kind {
            TestModeKind::Sequential => {
                if self.sequential_error().is_some() {
                    return Err(ViewError::InvalidRange);
                }
                Ok(TestMode::Sequential {
                    start: self.start,
                    end: self.end,
                })
            }
            TestModeKind::Random => {
                let count = match self.random {
                    RandomChoice::Preset(n) => n,
                    RandomChoice::All => self.deck_len,
                    RandomChoice::Custom => self
                        .custom_count
                        .trim()
                        .parse()
                        .map_err(|_| ViewError::InvalidCount)?,
                };
                if count == 0 {
                    return Err(ViewError::InvalidCount);
                }
                Ok(TestMode::Random { count: Some(count) })
            }
            TestModeKind::Errors => Ok(TestMode::Errors),
            TestModeKind::Timed => Ok(TestMode::Timed {
                count: self.timed_count.ok_or(ViewError::InvalidCount)?,
                seconds_per_question: self.seconds_per_question,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: TestModeKind, deck_len: usize) -> ConfigForm {
        ConfigForm::new(kind, deck_len, &QuizSettings::default())
    }

    #[test]
    fn defaults_follow_settings() {
        let small = form(TestModeKind::Random, 5);
        assert_eq!(small.random, RandomChoice::All);
        assert_eq!((small.start, small.end), (1, 5));

        let large = form(TestModeKind::Random, 40);
        assert_eq!(large.random, RandomChoice::Preset(15));
        assert_eq!(large.to_mode(), Ok(TestMode::Random { count: Some(15) }));
    }

    #[test]
    fn sequential_preview_and_validation() {
        let mut form = form(TestModeKind::Sequential, 20);
        form.set_start("3");
        form.set_end("7");
        assert_eq!(form.sequential_selected(), 5);
        assert_eq!(
            form.to_mode(),
            Ok(TestMode::Sequential { start: 3, end: 7 })
        );

        form.set_end("2");
        assert_eq!(form.sequential_selected(), 0);
        assert!(form.sequential_error().is_some());
        assert_eq!(form.to_mode(), Err(ViewError::InvalidRange));

        form.set_start("abc");
        assert_eq!(form.start, 0);
    }

    #[test]
    fn custom_random_count_must_parse() {
        let mut form = form(TestModeKind::Random, 30);
        form.random = RandomChoice::Custom;
        form.custom_count = "x".into();
        assert_eq!(form.to_mode(), Err(ViewError::InvalidCount));
        form.custom_count = " 7 ".into();
        assert_eq!(form.to_mode(), Ok(TestMode::Random { count: Some(7) }));
    }

    #[test]
    fn timed_budget_multiplies_count_and_seconds() {
        let mut form = form(TestModeKind::Timed, 12);
        assert_eq!(form.timed_count, Some(10));
        assert_eq!(form.timed_budget().as_deref(), Some("10:00"));
        form.seconds_per_question = 45;
        form.timed_count = Some(5);
        assert_eq!(form.timed_budget().as_deref(), Some("3:45"));
        assert_eq!(
            form.to_mode(),
            Ok(TestMode::Timed {
                count: 5,
                seconds_per_question: 45
            })
        );
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four ways of drawing a working list from a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestModeKind {
    Sequential,
    Random,
    Errors,
    Timed,
}

impl TestModeKind {
    pub const ALL: [TestModeKind; 4] = [
        TestModeKind::Sequential,
        TestModeKind::Random,
        TestModeKind::Errors,
        TestModeKind::Timed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TestModeKind::Sequential => "sequential",
            TestModeKind::Random => "random",
            TestModeKind::Errors => "errors",
            TestModeKind::Timed => "timed",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            TestModeKind::Sequential => "Sequential test",
            TestModeKind::Random => "Random test",
            TestModeKind::Errors => "Error review",
            TestModeKind::Timed => "Timed test",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            TestModeKind::Sequential => "Pick the range of questions to study",
            TestModeKind::Random => "Choose how many questions to practice",
            TestModeKind::Errors => "Go over the questions you have missed",
            TestModeKind::Timed => "Set the number of questions and time per question",
        }
    }
}

impl fmt::Display for TestModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown test mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for TestModeKind {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(TestModeKind::Sequential),
            "random" => Ok(TestModeKind::Random),
            "errors" => Ok(TestModeKind::Errors),
            "timed" => Ok(TestModeKind::Timed),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

/// A confirmed test configuration.
///
/// Ranges are 1-based and inclusive, as entered by the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TestMode {
    Sequential { start: usize, end: usize },
    Random { count: Option<usize> },
    Errors,
    Timed { count: usize, seconds_per_question: u32 },
}

impl TestMode {
    #[must_use]
    pub fn kind(&self) -> TestModeKind {
        match self {
            TestMode::Sequential { .. } => TestModeKind::Sequential,
            TestMode::Random { .. } => TestModeKind::Random,
            TestMode::Errors => TestModeKind::Errors,
            TestMode::Timed { .. } => TestModeKind::Timed,
        }
    }

    /// Display-only hint for timed runs.
    #[must_use]
    pub fn seconds_per_question(&self) -> Option<u32> {
        match self {
            TestMode::Timed {
                seconds_per_question,
                ..
            } => Some(*seconds_per_question),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Timed".parse::<TestModeKind>(), Ok(TestModeKind::Timed));
        assert!("weekly".parse::<TestModeKind>().is_err());
        for kind in TestModeKind::ALL {
            assert_eq!(kind.to_string().parse::<TestModeKind>(), Ok(kind));
        }
    }

    #[test]
    fn only_timed_carries_a_per_question_hint() {
        assert_eq!(TestMode::Errors.seconds_per_question(), None);
        assert_eq!(
            TestMode::Timed {
                count: 5,
                seconds_per_question: 30
            }
            .seconds_per_question(),
            Some(30)
        );
    }
}

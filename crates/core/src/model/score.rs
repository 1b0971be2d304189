use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("cannot score a session without questions")]
    NoQuestions,

    #[error("correct ({correct}) exceeds answered ({answered})")]
    CorrectExceedsAnswered { correct: u32, answered: u32 },

    #[error("answered ({answered}) exceeds total ({total})")]
    AnsweredExceedsTotal { answered: u32, total: u32 },
}

/// Score of a run, complete or partial.
///
/// Unanswered questions count as incorrect, so `correct + incorrect == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    total: u32,
    correct: u32,
    incorrect: u32,
    answered: u32,
    percentage: u32,
}

impl ScoreSummary {
    /// # Errors
    ///
    /// Returns `ScoreError` when `total` is zero or the counts are inconsistent.
    pub fn from_counts(total: u32, correct: u32, answered: u32) -> Result<Self, ScoreError> {
        if total == 0 {
            return Err(ScoreError::NoQuestions);
        }
        if answered > total {
            return Err(ScoreError::AnsweredExceedsTotal { answered, total });
        }
        if correct > answered {
            return Err(ScoreError::CorrectExceedsAnswered { correct, answered });
        }

        // round-half-up of 100 * correct / total, in integers
        let percentage = (200 * u64::from(correct) + u64::from(total)) / (2 * u64::from(total));

        Ok(Self {
            total,
            correct,
            incorrect: total - correct,
            answered,
            percentage: u32::try_from(percentage).unwrap_or(100),
        })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_percentage(self.percentage)
    }
}

/// Headline shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    WellDone,
    GoodTry,
    KeepPracticing,
}

impl ScoreTier {
    #[must_use]
    pub fn for_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => ScoreTier::Excellent,
            60..=79 => ScoreTier::WellDone,
            50..=59 => ScoreTier::GoodTry,
            _ => ScoreTier::KeepPracticing,
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent work!",
            ScoreTier::WellDone => "Well done!",
            ScoreTier::GoodTry => "Good try!",
            ScoreTier::KeepPracticing => "Keep practicing!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(ScoreSummary::from_counts(3, 2, 3).unwrap().percentage(), 67);
        assert_eq!(ScoreSummary::from_counts(3, 1, 3).unwrap().percentage(), 33);
        assert_eq!(ScoreSummary::from_counts(8, 1, 8).unwrap().percentage(), 13);
        assert_eq!(ScoreSummary::from_counts(2, 1, 1).unwrap().percentage(), 50);
    }

    #[test]
    fn unanswered_count_as_incorrect() {
        let score = ScoreSummary::from_counts(5, 2, 3).unwrap();
        assert_eq!(score.incorrect(), 3);
        assert_eq!(score.answered(), 3);
    }

    #[test]
    fn rejects_inconsistent_counts() {
        assert_eq!(
            ScoreSummary::from_counts(0, 0, 0).unwrap_err(),
            ScoreError::NoQuestions
        );
        assert!(ScoreSummary::from_counts(2, 3, 3).is_err());
        assert!(ScoreSummary::from_counts(2, 1, 0).is_err());
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(ScoreTier::for_percentage(100), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_percentage(80), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_percentage(79), ScoreTier::WellDone);
        assert_eq!(ScoreTier::for_percentage(50), ScoreTier::GoodTry);
        assert_eq!(ScoreTier::for_percentage(49), ScoreTier::KeepPracticing);
    }
}

use quiz_core::model::{Question, QuizSettings, Subject, SubjectId, TestMode};

use super::shuffle::Shuffler;
use crate::error::BuildError;

/// Working list of questions for one run, fixed once the run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub subject_id: SubjectId,
    pub subject_name: String,
    pub mode: TestMode,
    pub questions: Vec<Question>,
}

impl SessionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Whole-run time budget in seconds for timed plans.
    #[must_use]
    pub fn time_budget_secs(&self) -> Option<u64> {
        self.mode
            .seconds_per_question()
            .map(|secs| u64::from(secs) * self.total() as u64)
    }
}

/// Turns a subject plus a confirmed test mode into a `SessionPlan`.
pub struct SessionBuilder<'a> {
    subject: &'a Subject,
    default_random_count: usize,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(subject: &'a Subject) -> Self {
        Self {
            subject,
            default_random_count: QuizSettings::default().default_random_count(),
        }
    }

    /// Use the random-mode default from `settings` when no count is given.
    #[must_use]
    pub fn with_settings(mut self, settings: &QuizSettings) -> Self {
        self.default_random_count = settings.default_random_count();
        self
    }

    /// Build the working list.
    ///
    /// - `Sequential` takes the 1-based inclusive range in authored order.
    /// - `Random` and `Timed` shuffle the whole deck and keep `min(count, len)`.
    /// - `Errors` shuffles the whole deck.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::EmptyDeck` for a subject without questions,
    /// `BuildError::Range` for an invalid sequential range, and
    /// `BuildError::InvalidCount` for a zero count.
    pub fn build(
        self,
        mode: &TestMode,
        shuffler: &mut Shuffler,
    ) -> Result<SessionPlan, BuildError> {
        let all = self.subject.questions();
        let len = all.len();
        if len == 0 {
            return Err(BuildError::EmptyDeck);
        }

        let questions = match *mode {
            TestMode::Sequential { start, end } => {
                if start == 0 || start > end || end > len {
                    return Err(BuildError::Range { start, end, len });
                }
                all[start - 1..end].to_vec()
            }
            TestMode::Random { count } => {
                let count = count.unwrap_or(self.default_random_count);
                shuffled_prefix(all, count, shuffler)?
            }
            TestMode::Timed { count, .. } => shuffled_prefix(all, count, shuffler)?,
            TestMode::Errors => shuffled_prefix(all, len, shuffler)?,
        };

        Ok(SessionPlan {
            subject_id: self.subject.id().clone(),
            subject_name: self.subject.name().to_owned(),
            mode: *mode,
            questions,
        })
    }
}

fn shuffled_prefix(
    all: &[Question],
    count: usize,
    shuffler: &mut Shuffler,
) -> Result<Vec<Question>, BuildError> {
    if count == 0 {
        return Err(BuildError::InvalidCount);
    }
    let mut questions = all.to_vec();
    shuffler.shuffle(&mut questions);
    questions.truncate(count);
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_subject(len: usize) -> Subject {
        let questions = (0..len)
            .map(|i| Question::new(format!("Q{i}"), ["a", "b", "c"], i % 3).unwrap())
            .collect();
        Subject::new(SubjectId::new("deck").unwrap(), "Deck", "", "", questions).unwrap()
    }

    fn texts(plan: &SessionPlan) -> Vec<&str> {
        plan.questions.iter().map(Question::text).collect()
    }

    #[test]
    fn sequential_takes_inclusive_range_in_order() {
        let subject = build_subject(6);
        let plan = SessionBuilder::new(&subject)
            .build(
                &TestMode::Sequential { start: 2, end: 4 },
                &mut Shuffler::seeded(1),
            )
            .unwrap();
        assert_eq!(texts(&plan), vec!["Q1", "Q2", "Q3"]);
        assert_eq!(plan.subject_name, "Deck");
    }

    #[test]
    fn sequential_rejects_bad_ranges() {
        let subject = build_subject(5);
        for (start, end) in [(5, 3), (0, 2), (2, 6)] {
            let err = SessionBuilder::new(&subject)
                .build(
                    &TestMode::Sequential { start, end },
                    &mut Shuffler::identity(),
                )
                .unwrap_err();
            assert_eq!(err, BuildError::Range { start, end, len: 5 });
        }
    }

    #[test]
    fn random_caps_count_at_deck_size_without_duplicates() {
        let subject = build_subject(5);
        let plan = SessionBuilder::new(&subject)
            .build(&TestMode::Random { count: Some(50) }, &mut Shuffler::seeded(3))
            .unwrap();
        let mut seen = texts(&plan);
        seen.sort_unstable();
        assert_eq!(seen, vec!["Q0", "Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn random_without_count_uses_configured_default() {
        let subject = build_subject(30);
        let plan = SessionBuilder::new(&subject)
            .build(&TestMode::Random { count: None }, &mut Shuffler::identity())
            .unwrap();
        assert_eq!(plan.total(), 15);
    }

    #[test]
    fn zero_counts_are_rejected() {
        let subject = build_subject(5);
        let err = SessionBuilder::new(&subject)
            .build(&TestMode::Random { count: Some(0) }, &mut Shuffler::identity())
            .unwrap_err();
        assert_eq!(err, BuildError::InvalidCount);

        let err = SessionBuilder::new(&subject)
            .build(
                &TestMode::Timed {
                    count: 0,
                    seconds_per_question: 30,
                },
                &mut Shuffler::identity(),
            )
            .unwrap_err();
        assert_eq!(err, BuildError::InvalidCount);
    }

    #[test]
    fn errors_mode_uses_the_whole_deck() {
        let subject = build_subject(7);
        let plan = SessionBuilder::new(&subject)
            .build(&TestMode::Errors, &mut Shuffler::seeded(11))
            .unwrap();
        assert_eq!(plan.total(), 7);
        let mut seen = texts(&plan);
        seen.sort_unstable();
        assert_eq!(seen, vec!["Q0", "Q1", "Q2", "Q3", "Q4", "Q5", "Q6"]);
    }

    #[test]
    fn timed_plan_reports_budget() {
        let subject = build_subject(12);
        let plan = SessionBuilder::new(&subject)
            .build(
                &TestMode::Timed {
                    count: 10,
                    seconds_per_question: 45,
                },
                &mut Shuffler::identity(),
            )
            .unwrap();
        assert_eq!(plan.total(), 10);
        assert_eq!(plan.time_budget_secs(), Some(450));
    }

    #[test]
    fn timed_count_is_capped_at_deck_size() {
        let subject = build_subject(5);
        let plan = SessionBuilder::new(&subject)
            .build(
                &TestMode::Timed {
                    count: 50,
                    seconds_per_question: 30,
                },
                &mut Shuffler::seeded(5),
            )
            .unwrap();
        let mut seen = texts(&plan);
        seen.sort_unstable();
        assert_eq!(seen, vec!["Q0", "Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(plan.time_budget_secs(), Some(150));
    }

    #[test]
    fn empty_subject_cannot_build() {
        let subject = build_subject(0);
        let err = SessionBuilder::new(&subject)
            .build(&TestMode::Errors, &mut Shuffler::identity())
            .unwrap_err();
        assert_eq!(err, BuildError::EmptyDeck);
    }
}

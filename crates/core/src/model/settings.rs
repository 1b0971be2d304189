use thiserror::Error;

/// Defaults and choices offered on the test configuration screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    default_random_count: usize,
    random_presets: Vec<usize>,
    sequential_span: usize,
    timed_counts: Vec<usize>,
    default_timed_count: usize,
    seconds_per_question: Vec<u32>,
    default_seconds_per_question: u32,
}

#[derive(Clone, Debug, Default)]
pub struct QuizSettingsDraft {
    pub default_random_count: Option<usize>,
    pub random_presets: Option<Vec<usize>>,
    pub sequential_span: Option<usize>,
    pub timed_counts: Option<Vec<usize>>,
    pub default_timed_count: Option<usize>,
    pub seconds_per_question: Option<Vec<u32>>,
    pub default_seconds_per_question: Option<u32>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("{field} must be > 0")]
    Zero { field: &'static str },
    #[error("{field} needs at least one choice")]
    NoChoices { field: &'static str },
    #[error("default {field} {value} is not one of the offered choices")]
    DefaultNotOffered { field: &'static str, value: u64 },
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft, filling gaps with the stock defaults.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError` for zero counts, empty choice lists, or a
    /// default that is not among its choices.
    pub fn validate(self) -> Result<QuizSettings, QuizSettingsError> {
        let stock = QuizSettings::default();

        let default_random_count = self
            .default_random_count
            .unwrap_or(stock.default_random_count);
        let random_presets = normalize_choices(self.random_presets, stock.random_presets);
        let sequential_span = self.sequential_span.unwrap_or(stock.sequential_span);
        let timed_counts = normalize_choices(self.timed_counts, stock.timed_counts);
        let default_timed_count = self
            .default_timed_count
            .unwrap_or(stock.default_timed_count);
        let seconds_per_question =
            normalize_choices(self.seconds_per_question, stock.seconds_per_question);
        let default_seconds_per_question = self
            .default_seconds_per_question
            .unwrap_or(stock.default_seconds_per_question);

        if default_random_count == 0 {
            return Err(QuizSettingsError::Zero {
                field: "default random count",
            });
        }
        if sequential_span == 0 {
            return Err(QuizSettingsError::Zero {
                field: "sequential span",
            });
        }
        if random_presets.contains(&0) || timed_counts.contains(&0) {
            return Err(QuizSettingsError::Zero {
                field: "question count",
            });
        }
        if seconds_per_question.contains(&0) {
            return Err(QuizSettingsError::Zero {
                field: "seconds per question",
            });
        }
        if timed_counts.is_empty() {
            return Err(QuizSettingsError::NoChoices {
                field: "timed counts",
            });
        }
        if seconds_per_question.is_empty() {
            return Err(QuizSettingsError::NoChoices {
                field: "seconds per question",
            });
        }
        if !timed_counts.contains(&default_timed_count) {
            return Err(QuizSettingsError::DefaultNotOffered {
                field: "timed count",
                value: default_timed_count as u64,
            });
        }
        if !seconds_per_question.contains(&default_seconds_per_question) {
            return Err(QuizSettingsError::DefaultNotOffered {
                field: "seconds per question",
                value: u64::from(default_seconds_per_question),
            });
        }

        Ok(QuizSettings {
            default_random_count,
            random_presets,
            sequential_span,
            timed_counts,
            default_timed_count,
            seconds_per_question,
            default_seconds_per_question,
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn default_random_count(&self) -> usize {
        self.default_random_count
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> &[u32] {
        &self.seconds_per_question
    }

    #[must_use]
    pub fn default_seconds_per_question(&self) -> u32 {
        self.default_seconds_per_question
    }

    /// Initial 1-based inclusive range for a sequential test.
    #[must_use]
    pub fn sequential_defaults(&self, deck_len: usize) -> (usize, usize) {
        (1, self.sequential_span.min(deck_len).max(1))
    }

    /// Random presets paired with whether the deck is large enough for them.
    #[must_use]
    pub fn random_presets_for(&self, deck_len: usize) -> Vec<(usize, bool)> {
        self.random_presets
            .iter()
            .map(|&n| (n, n <= deck_len))
            .collect()
    }

    /// Timed counts the deck can satisfy; a deck smaller than every preset
    /// offers its own size.
    #[must_use]
    pub fn timed_counts_for(&self, deck_len: usize) -> Vec<usize> {
        let fitting: Vec<usize> = self
            .timed_counts
            .iter()
            .copied()
            .filter(|&n| n <= deck_len)
            .collect();
        if fitting.is_empty() && deck_len > 0 {
            vec![deck_len]
        } else {
            fitting
        }
    }

    /// Default timed count, falling back to the largest count the deck allows.
    #[must_use]
    pub fn default_timed_count_for(&self, deck_len: usize) -> Option<usize> {
        let counts = self.timed_counts_for(deck_len);
        if counts.contains(&self.default_timed_count) {
            Some(self.default_timed_count)
        } else {
            counts.last().copied()
        }
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            default_random_count: 15,
            random_presets: vec![5, 10, 15, 20],
            sequential_span: 10,
            timed_counts: vec![5, 10, 15, 20],
            default_timed_count: 10,
            seconds_per_question: vec![30, 45, 60, 90, 120],
            default_seconds_per_question: 60,
        }
    }
}

fn normalize_choices<T: Ord + Copy>(value: Option<Vec<T>>, fallback: Vec<T>) -> Vec<T> {
    let mut choices = value.unwrap_or(fallback);
    choices.sort_unstable();
    choices.dedup();
    choices
}

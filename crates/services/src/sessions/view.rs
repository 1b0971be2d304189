use quiz_core::model::{MediaUri, ScoreSummary, ScoreTier};
use quiz_core::time::format_mm_ss;

use super::service::CurrentQuestion;

/// Shown when an answered question has no explanation.
pub const NO_EXPLANATION: &str = "No explanation available.";

/// `0 → 'A'`, `1 → 'B'`, … Indices past `Z` read `?`.
#[must_use]
pub fn option_letter(display_index: usize) -> char {
    u8::try_from(display_index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    None,
    Correct,
    Incorrect,
}

impl OptionFeedback {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionFeedback::None => "",
            OptionFeedback::Correct => "correct",
            OptionFeedback::Incorrect => "incorrect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub display_index: usize,
    pub letter: char,
    pub text: String,
    pub selected: bool,
    pub feedback: OptionFeedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressView {
    /// 1-based.
    pub position: usize,
    pub total: usize,
    pub percent: u32,
}

impl ProgressView {
    #[must_use]
    pub fn new(position: usize, total: usize) -> Self {
        let shown = position + 1;
        let percent = if total == 0 {
            0
        } else {
            u32::try_from((shown * 100 + total / 2) / total).unwrap_or(100)
        };
        Self {
            position: shown,
            total,
            percent,
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

/// Everything the test screen needs to draw the current question.
///
/// Once the question is answered the correct option and a wrong selection are
/// marked, and the explanation becomes available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub text: String,
    pub options: Vec<OptionView>,
    pub answered: bool,
    pub is_correct: Option<bool>,
    pub explanation: Option<String>,
    pub image: Option<MediaUri>,
    pub progress: ProgressView,
}

impl QuestionView {
    #[must_use]
    pub fn new(current: &CurrentQuestion<'_>, total: usize) -> Self {
        let answer = current.answer;
        let correct = current.correct_display_index();
        let answered = answer.is_some();

        let options = current
            .options()
            .into_iter()
            .enumerate()
            .map(|(display_index, text)| {
                let selected = answer == Some(display_index);
                let feedback = if !answered {
                    OptionFeedback::None
                } else if correct == Some(display_index) {
                    OptionFeedback::Correct
                } else if selected {
                    OptionFeedback::Incorrect
                } else {
                    OptionFeedback::None
                };
                OptionView {
                    display_index,
                    letter: option_letter(display_index),
                    text: text.to_owned(),
                    selected,
                    feedback,
                }
            })
            .collect();

        let explanation = answered.then(|| {
            current
                .question
                .explanation()
                .unwrap_or(NO_EXPLANATION)
                .to_owned()
        });

        Self {
            text: current.question.text().to_owned(),
            options,
            answered,
            is_correct: answer.map(|a| correct == Some(a)),
            explanation,
            image: current.question.image().cloned(),
            progress: ProgressView::new(current.position, total),
        }
    }
}

/// Final figures for the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub percentage: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
    pub duration: String,
    pub tier: ScoreTier,
}

impl ResultView {
    #[must_use]
    pub fn new(score: &ScoreSummary, elapsed_ms: u64) -> Self {
        Self {
            percentage: score.percentage(),
            correct: score.correct(),
            incorrect: score.incorrect(),
            total: score.total(),
            duration: format_mm_ss(elapsed_ms),
            tier: score.tier(),
        }
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        self.tier.headline()
    }

    #[must_use]
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

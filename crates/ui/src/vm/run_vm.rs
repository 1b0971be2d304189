use services::session::{NavigationView, QuestionView, ResultView, TimerState};
use services::QuizRun;

/// Snapshot of the test screen, rebuilt after every action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestScreenVm {
    pub subject_name: String,
    pub question: QuestionView,
    pub navigation: NavigationView,
    pub elapsed: String,
    pub paused: bool,
    pub seconds_per_question: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub subject_name: String,
    pub result: ResultView,
}

/// `None` once the run is over.
#[must_use]
pub fn map_test_screen(run: &QuizRun) -> Option<TestScreenVm> {
    Some(TestScreenVm {
        subject_name: run.subject_name().to_string(),
        question: run.question_view()?,
        navigation: run.navigation()?,
        elapsed: run.elapsed_display(),
        paused: run.timer().state() == TimerState::Paused,
        seconds_per_question: run.mode().seconds_per_question(),
    })
}

/// `None` until the run is completed.
#[must_use]
pub fn map_results(run: &QuizRun) -> Option<ResultsVm> {
    if !run.is_finished() {
        return None;
    }
    let summary = run.summary().ok()?;
    Some(ResultsVm {
        subject_name: summary.subject_name.clone(),
        result: summary.result_view(),
    })
}

use quiz_core::model::{SubjectId, TestModeKind};
use services::DeckOrigin;
use services::session::NavIntent;

use super::TestIntent;
use super::test_harness::{
    ViewKind, build_services, chemistry_id, complete_run, setup_view_harness,
    setup_view_harness_with_run, start_run,
};

#[tokio::test(flavor = "current_thread")]
async fn subjects_view_smoke_lists_cards() {
    let mut harness = setup_view_harness(ViewKind::Subjects, DeckOrigin::Files).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Chemistry"), "missing subject in {html}");
    assert!(html.contains("2 questions"), "missing count in {html}");
    assert!(!html.contains("sample subjects"), "unexpected note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subjects_view_smoke_notes_sample_origin() {
    let mut harness = setup_view_harness(ViewKind::Subjects, DeckOrigin::Sample).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("sample subjects"), "missing note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_type_view_smoke_offers_all_modes() {
    let mut harness =
        setup_view_harness(ViewKind::TestType(chemistry_id()), DeckOrigin::Files).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    for kind in TestModeKind::ALL {
        assert!(html.contains(kind.title()), "missing {} in {html}", kind.title());
    }
}

#[tokio::test(flavor = "current_thread")]
async fn test_type_view_smoke_reports_unknown_subject() {
    let unknown = SubjectId::new("astronomy").unwrap();
    let mut harness = setup_view_harness(ViewKind::TestType(unknown), DeckOrigin::Files).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("no longer available"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn config_view_smoke_previews_selection() {
    let mut harness = setup_view_harness(
        ViewKind::Config(chemistry_id(), TestModeKind::Sequential),
        DeckOrigin::Files,
    )
    .await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Selected questions: 2"), "missing preview in {html}");
    assert!(html.contains("Start test"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn config_view_smoke_shows_timed_budget() {
    let mut harness = setup_view_harness(
        ViewKind::Config(chemistry_id(), TestModeKind::Timed),
        DeckOrigin::Files,
    )
    .await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Total time: 2:00"), "missing budget in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_answers_and_moves_on() {
    let services = build_services(DeckOrigin::Files).await;
    let run = start_run(&services).await;
    let mut harness = setup_view_harness_with_run(ViewKind::Test, services, Some(run));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("What is H2O?"), "missing question in {html}");
    assert!(html.contains("1 / 2"), "missing progress in {html}");
    assert!(!html.contains("Correct!"), "feedback before answering in {html}");

    harness.dispatch(TestIntent::Select(0));
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("option--correct"), "missing marker in {html}");

    harness.dispatch(TestIntent::ToggleExplanation);
    let html = harness.render();
    assert!(html.contains("Two hydrogen atoms"), "missing explanation in {html}");

    harness.dispatch(TestIntent::Navigate(NavIntent::Next));
    let html = harness.render();
    assert!(html.contains("What is NaCl?"), "missing second question in {html}");
    assert!(html.contains("2 / 2"), "missing progress in {html}");
    assert!(!html.contains("Two hydrogen atoms"), "explanation leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_flags_wrong_answer() {
    let services = build_services(DeckOrigin::Files).await;
    let run = start_run(&services).await;
    let mut harness = setup_view_harness_with_run(ViewKind::Test, services, Some(run));
    harness.rebuild();

    harness.dispatch(TestIntent::Select(2));
    let html = harness.render();
    assert!(html.contains("Incorrect."), "missing feedback in {html}");
    assert!(html.contains("option--incorrect"), "missing marker in {html}");

    harness.dispatch(TestIntent::ToggleExplanation);
    harness.dispatch(TestIntent::Navigate(NavIntent::Next));
    harness.dispatch(TestIntent::Select(1));
    harness.dispatch(TestIntent::ToggleExplanation);
    let html = harness.render();
    assert!(
        html.contains("No explanation available."),
        "missing fallback in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_without_run() {
    let mut harness = setup_view_harness(ViewKind::Test, DeckOrigin::Files).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("no test in progress"), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score() {
    let services = build_services(DeckOrigin::Files).await;
    let mut run = start_run(&services).await;
    complete_run(&mut run);
    let mut harness = setup_view_harness_with_run(ViewKind::Results, services, Some(run));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Excellent work!"), "missing headline in {html}");
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains("2/2"), "missing fraction in {html}");
    assert!(html.contains("00:00"), "missing duration in {html}");
    assert!(html.contains("Restart"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_quit_discards_the_run() {
    let services = build_services(DeckOrigin::Files).await;
    let run = start_run(&services).await;
    let mut harness = setup_view_harness_with_run(ViewKind::Test, services, Some(run));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quit"), "missing quit in {html}");

    harness.dispatch(TestIntent::Select(0));
    harness.dispatch(TestIntent::Quit);
    assert!(!harness.has_active_run());
    let html = harness.render();
    assert!(html.contains("no test in progress"), "run survived quit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subjects_view_smoke_discards_a_leftover_run() {
    let services = build_services(DeckOrigin::Files).await;
    let run = start_run(&services).await;
    let mut harness = setup_view_harness_with_run(ViewKind::Subjects, services, Some(run));
    harness.rebuild();
    harness.drive_async().await;
    assert!(!harness.has_active_run());
    let html = harness.render();
    assert!(html.contains("Chemistry"), "missing subject in {html}");
}

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Question, QuizSettings, Subject, SubjectId, TestMode, TestModeKind};
use quiz_core::time::fixed_now;
use services::session::NavIntent;
use services::{AppServices, Clock, DeckOrigin, DeckService, QuizLoopService, QuizRun, Shuffler};

use crate::context::{ActiveRun, UiApp, build_app_context};
use crate::views::run::TestViewHandles;
use crate::views::{ConfigView, ResultsView, SubjectsView, TestIntent, TestTypeView, TestView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn deck_origin(&self) -> DeckOrigin {
        self.services.origin()
    }

    fn deck_service(&self) -> Arc<DeckService> {
        self.services.deck_service()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Subjects,
    TestType(SubjectId),
    Config(SubjectId, TestModeKind),
    Test,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed_run: Rc<RefCell<Option<QuizRun>>>,
    active: Rc<RefCell<Option<ActiveRun>>>,
    handles: TestViewHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.clone());
    let seed_run = Rc::clone(&props.seed_run);
    let active =
        use_context_provider(move || ActiveRun(Signal::new(seed_run.borrow_mut().take())));
    props.active.borrow_mut().replace(active);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Subjects => rsx! { SubjectsView {} },
        ViewKind::TestType(subject_id) => rsx! { TestTypeView { subject_id } },
        ViewKind::Config(subject_id, mode) => rsx! { ConfigView { subject_id, mode } },
        ViewKind::Test => rsx! { TestView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: TestViewHandles,
    active: Rc<RefCell<Option<ActiveRun>>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn dispatch(&mut self, intent: TestIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Whether the shared run signal still holds a run.
    pub fn has_active_run(&self) -> bool {
        let active = (*self.active.borrow()).expect("harness rendered");
        self.dom.in_runtime(|| !active.is_empty())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn chemistry_id() -> SubjectId {
    SubjectId::new("chemistry").expect("subject id")
}

fn chemistry() -> Subject {
    Subject::new(
        chemistry_id(),
        "Chemistry",
        "Everyday compounds",
        "⚗️",
        vec![
            Question::new("What is H2O?", ["Water", "Salt", "Sugar"], 0)
                .expect("question")
                .with_explanation("Two hydrogen atoms and one oxygen atom."),
            Question::new("What is NaCl?", ["Water", "Salt", "Sugar"], 1).expect("question"),
        ],
    )
    .expect("subject")
}

pub async fn build_services(origin: DeckOrigin) -> AppServices {
    AppServices::from_subjects(
        &[chemistry()],
        origin,
        Clock::fixed(fixed_now()),
        Shuffler::identity(),
        QuizSettings::default(),
    )
    .await
    .expect("services")
}

/// Start a sequential run over the whole chemistry deck, options unshuffled.
pub async fn start_run(services: &AppServices) -> QuizRun {
    services
        .quiz_loop()
        .start_run(&chemistry_id(), TestMode::Sequential { start: 1, end: 2 })
        .await
        .expect("start run")
}

/// Answer everything with the correct option and finish.
pub fn complete_run(run: &mut QuizRun) {
    run.select_answer(0).expect("answer");
    run.navigate(NavIntent::Next).expect("next");
    run.select_answer(1).expect("answer");
    run.navigate(NavIntent::Next).expect("finish");
}

pub async fn setup_view_harness(view: ViewKind, origin: DeckOrigin) -> ViewHarness {
    let services = build_services(origin).await;
    setup_view_harness_with_run(view, services, None)
}

pub fn setup_view_harness_with_run(
    view: ViewKind,
    services: AppServices,
    run: Option<QuizRun>,
) -> ViewHarness {
    let handles = TestViewHandles::default();
    let active = Rc::new(RefCell::new(None));
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            seed_run: Rc::new(RefCell::new(run)),
            active: Rc::clone(&active),
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        handles,
        active,
    }
}

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{SubjectId, TestModeKind};

use crate::context::{ActiveRun, AppContext};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ConfigForm, RandomChoice, SubjectCardVm, map_subject_card};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StartState {
    Idle,
    Starting,
    Error(ViewError),
}

#[component]
pub fn ConfigView(subject_id: SubjectId, mode: TestModeKind) -> Element {
    let ctx = use_context::<AppContext>();
    let deck_service = ctx.deck_service();

    let id_for_resource = subject_id.clone();
    let resource = use_resource(move || {
        let deck_service = deck_service.clone();
        let subject_id = id_for_resource.clone();
        async move {
            let subject = deck_service
                .get_subject(&subject_id)
                .await
                .map_err(|_| ViewError::SubjectNotFound)?;
            Ok(map_subject_card(&subject))
        }
    });

    let state: ViewState<SubjectCardVm> = view_state_from_resource(&resource);

    rsx! {
        div { class: "page config",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(card) => rsx! {
                    h2 { "{mode.title()}" }
                    p { class: "config__subject", "{card.icon} {card.name}" }
                    ConfigPanel {
                        key: "{card.id}-{mode}",
                        subject_id: card.id.clone(),
                        kind: mode,
                        deck_len: card.question_count,
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
            Link { class: "back-link", to: Route::TestType { subject_id: subject_id.clone() }, "Back" }
        }
    }
}

#[component]
fn ConfigPanel(subject_id: SubjectId, kind: TestModeKind, deck_len: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveRun>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let settings = ctx.settings();

    let mut form = use_signal(|| ConfigForm::new(kind, deck_len, &settings));
    let mut start_state = use_signal(|| StartState::Idle);

    let start = use_callback(move |()| {
        let mode = match form.read().to_mode() {
            Ok(mode) => mode,
            Err(err) => {
                start_state.set(StartState::Error(err));
                return;
            }
        };
        let quiz_loop = quiz_loop.clone();
        let subject_id = subject_id.clone();
        start_state.set(StartState::Starting);
        spawn(async move {
            match quiz_loop.start_run(&subject_id, mode).await {
                Ok(run) => {
                    start_state.set(StartState::Idle);
                    active.replace(run);
                    navigator.push(Route::Test {});
                }
                Err(err) => {
                    start_state.set(StartState::Error(ViewError::from_session(&err)));
                }
            }
        });
    });

    let snapshot = form.read().clone();
    let starting = *start_state.read() == StartState::Starting;

    rsx! {
        div { class: "config__panel",
            match kind {
                TestModeKind::Sequential => rsx! {
                    div { class: "config__range",
                        label { "From"
                            input {
                                r#type: "number",
                                min: "1",
                                max: "{deck_len}",
                                value: "{snapshot.start}",
                                oninput: move |evt| form.write().set_start(&evt.value()),
                            }
                        }
                        label { "To"
                            input {
                                r#type: "number",
                                min: "1",
                                max: "{deck_len}",
                                value: "{snapshot.end}",
                                oninput: move |evt| form.write().set_end(&evt.value()),
                            }
                        }
                    }
                    p { class: "config__preview", "Selected questions: {snapshot.sequential_selected()}" }
                    if let Some(message) = snapshot.sequential_error() {
                        p { class: "config__error", "{message}" }
                    }
                },
                TestModeKind::Random => rsx! {
                    div { class: "config__choices",
                        for (count, fits) in settings.random_presets_for(deck_len) {
                            button {
                                key: "{count}",
                                class: if snapshot.random == RandomChoice::Preset(count) { "chip chip--active" } else { "chip" },
                                r#type: "button",
                                disabled: !fits,
                                onclick: move |_| form.write().random = RandomChoice::Preset(count),
                                "{count}"
                            }
                        }
                        button {
                            class: if snapshot.random == RandomChoice::All { "chip chip--active" } else { "chip" },
                            r#type: "button",
                            onclick: move |_| form.write().random = RandomChoice::All,
                            "All ({deck_len})"
                        }
                        button {
                            class: if snapshot.random == RandomChoice::Custom { "chip chip--active" } else { "chip" },
                            r#type: "button",
                            onclick: move |_| form.write().random = RandomChoice::Custom,
                            "Custom"
                        }
                    }
                    if snapshot.random == RandomChoice::Custom {
                        input {
                            class: "config__custom",
                            r#type: "number",
                            min: "1",
                            placeholder: "Number of questions",
                            value: "{snapshot.custom_count}",
                            oninput: move |evt| form.write().custom_count = evt.value(),
                        }
                    }
                },
                TestModeKind::Errors => rsx! {
                    p { class: "config__preview", "All {deck_len} questions, in random order." }
                },
                TestModeKind::Timed => rsx! {
                    p { "Number of questions" }
                    div { class: "config__choices",
                        for count in settings.timed_counts_for(deck_len) {
                            button {
                                key: "{count}",
                                class: if snapshot.timed_count == Some(count) { "chip chip--active" } else { "chip" },
                                r#type: "button",
                                onclick: move |_| form.write().timed_count = Some(count),
                                "{count}"
                            }
                        }
                    }
                    p { "Seconds per question" }
                    div { class: "config__choices",
                        for seconds in settings.seconds_per_question().to_vec() {
                            button {
                                key: "{seconds}",
                                class: if snapshot.seconds_per_question == seconds { "chip chip--active" } else { "chip" },
                                r#type: "button",
                                onclick: move |_| form.write().seconds_per_question = seconds,
                                "{seconds}s"
                            }
                        }
                    }
                    if let Some(budget) = snapshot.timed_budget() {
                        p { class: "config__preview", "Total time: {budget}" }
                    }
                },
            }

            if let StartState::Error(err) = *start_state.read() {
                p { class: "config__error", "{err.message()}" }
            }

            button {
                class: "btn btn--primary",
                id: "config-start",
                r#type: "button",
                disabled: starting,
                onclick: move |_| start.call(()),
                "Start test"
            }
        }
    }
}

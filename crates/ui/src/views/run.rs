use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::session::{NavIntent, NavOutcome, NavSlot, NextAction, OptionView};

use crate::context::{ActiveRun, AppContext};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::map_test_screen;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// What the learner can do on the test screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestIntent {
    Select(usize),
    Navigate(NavIntent),
    TogglePause,
    ToggleExplanation,
    Quit,
}

#[component]
pub fn TestView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveRun>();
    let quiz_loop = ctx.quiz_loop();
    let navigator = use_navigator();
    let mut run = active.0;
    let mut error = use_signal(|| None::<ViewError>);
    let mut show_explanation = use_signal(|| false);
    let mut tick = use_signal(|| 0_u64);

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            tick += 1;
        }
    });

    let dispatch_intent = use_callback(move |intent: TestIntent| {
        if intent == TestIntent::Quit {
            active.clear();
            navigator.push(Route::Subjects {});
            return;
        }
        let mut finished = false;
        {
            let mut guard = run.write();
            let Some(current) = guard.as_mut() else {
                error.set(Some(ViewError::NoActiveRun));
                return;
            };
            let result = match intent {
                TestIntent::Select(display_index) => current.select_answer(display_index).map(|_| ()),
                TestIntent::Navigate(nav) => current.navigate(nav).map(|outcome| {
                    show_explanation.set(false);
                    finished = outcome == NavOutcome::Completed;
                }),
                TestIntent::TogglePause => {
                    let timer = current.timer_mut();
                    if !timer.pause() {
                        timer.resume();
                    }
                    Ok(())
                }
                TestIntent::ToggleExplanation => {
                    show_explanation.toggle();
                    Ok(())
                }
                TestIntent::Quit => Ok(()),
            };
            let result = if finished {
                result.and_then(|()| quiz_loop.finish(current).map(|_| ()))
            } else {
                result
            };
            error.set(result.err().map(|err| ViewError::from_session(&err)));
        }
        if finished {
            navigator.push(Route::Results {});
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TestViewHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let _ = tick();
    let guard = run.read();
    let Some(current) = guard.as_ref() else {
        return rsx! {
            div { class: "page test",
                p { "{ViewError::NoActiveRun.message()}" }
                Link { class: "back-link", to: Route::Subjects {}, "Back to subjects" }
            }
        };
    };
    let Some(vm) = map_test_screen(current) else {
        return rsx! {
            div { class: "page test",
                p { "This test is finished." }
                Link { class: "btn btn--primary", to: Route::Results {}, "See results" }
            }
        };
    };
    drop(guard);

    let question = vm.question;
    let navigation = vm.navigation;
    let explanation_open = show_explanation();
    let pause_label = if vm.paused { "Resume" } else { "Pause" };
    let explanation_label = if explanation_open { "Hide explanation" } else { "Show explanation" };
    let next_label = match navigation.next_action {
        NextAction::Next => "Next",
        NextAction::Finish => "Finish",
    };

    rsx! {
        div { class: "page test",
            div { class: "test__header",
                span { class: "test__subject", "{vm.subject_name}" }
                span { class: "test__progress", "{question.progress.label()}" }
                span { class: "test__timer", "{vm.elapsed}" }
                if let Some(seconds) = vm.seconds_per_question {
                    span { class: "test__hint", "{seconds}s per question" }
                }
                button {
                    class: "btn btn--ghost",
                    id: "test-pause",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(TestIntent::TogglePause),
                    "{pause_label}"
                }
                button {
                    class: "btn btn--ghost",
                    id: "test-quit",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(TestIntent::Quit),
                    "Quit"
                }
            }
            div { class: "progress-bar",
                div { class: "progress-bar__fill", style: "width: {question.progress.percent}%" }
            }

            h2 { class: "test__question", "{question.text}" }
            if let Some(image) = question.image.as_ref() {
                img { class: "test__image", src: "{image}", alt: "Question illustration" }
            }

            ul { class: "test__options",
                for option in question.options.clone() {
                    OptionButton {
                        key: "{option.display_index}",
                        option,
                        on_select: move |index| dispatch_intent.call(TestIntent::Select(index)),
                    }
                }
            }

            if question.answered {
                div { class: "test__feedback",
                    if question.is_correct == Some(true) {
                        p { class: "feedback feedback--correct", "Correct!" }
                    } else {
                        p { class: "feedback feedback--incorrect", "Incorrect." }
                    }
                    button {
                        class: "btn btn--secondary",
                        id: "test-explanation",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(TestIntent::ToggleExplanation),
                        "{explanation_label}"
                    }
                    if explanation_open {
                        if let Some(text) = question.explanation.as_ref() {
                            p { class: "test__explanation", "{text}" }
                        }
                    }
                }
            }

            if let Some(err) = error() {
                p { class: "test__error", "{err.message()}" }
            }

            nav { class: "test__nav",
                button {
                    class: "btn btn--secondary",
                    id: "test-previous",
                    r#type: "button",
                    disabled: !navigation.previous_enabled,
                    onclick: move |_| dispatch_intent.call(TestIntent::Navigate(NavIntent::Previous)),
                    "Previous"
                }
                div { class: "nav-slots",
                    for (slot, item) in navigation.slots.into_iter().enumerate() {
                        SlotButton {
                            key: "{slot}",
                            slot,
                            item,
                            on_jump: move |slot| dispatch_intent.call(TestIntent::Navigate(NavIntent::Jump(slot))),
                        }
                    }
                }
                button {
                    class: "btn btn--primary",
                    id: "test-next",
                    r#type: "button",
                    disabled: !navigation.next_enabled,
                    onclick: move |_| dispatch_intent.call(TestIntent::Navigate(NavIntent::Next)),
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionView, on_select: EventHandler<usize>) -> Element {
    let index = option.display_index;
    let mut class = String::from("option");
    if option.selected {
        class.push_str(" option--selected");
    }
    let feedback = option.feedback.as_str();
    if !feedback.is_empty() {
        class.push_str(" option--");
        class.push_str(feedback);
    }
    rsx! {
        li {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |_| on_select.call(index),
                span { class: "option__letter", "{option.letter}" }
                span { class: "option__text", "{option.text}" }
            }
        }
    }
}

#[component]
fn SlotButton(slot: usize, item: NavSlot, on_jump: EventHandler<usize>) -> Element {
    let label = item.label();
    rsx! {
        button {
            class: "nav-slot nav-slot--{item.status.as_str()}",
            r#type: "button",
            disabled: !item.is_enabled(),
            onclick: move |_| on_jump.call(slot),
            "{label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TestViewHandles {
    dispatch: Rc<RefCell<Option<Callback<TestIntent>>>>,
}

#[cfg(test)]
impl TestViewHandles {
    pub(crate) fn register(&self, dispatch: Callback<TestIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<TestIntent> {
        (*self.dispatch.borrow()).expect("test dispatch registered")
    }
}

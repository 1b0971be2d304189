use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::ActiveRun;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::map_results;

#[component]
pub fn ResultsView() -> Element {
    let active = use_context::<ActiveRun>();
    let navigator = use_navigator();

    let (vm, restart_route) = {
        let guard = active.0.read();
        let restart_route = guard.as_ref().map(|run| Route::Config {
            subject_id: run.subject_id().clone(),
            mode: run.mode().kind(),
        });
        (guard.as_ref().and_then(map_results), restart_route)
    };

    let Some(vm) = vm else {
        return rsx! {
            div { class: "page results",
                p { "{ViewError::NoActiveRun.message()}" }
                Link { class: "back-link", to: Route::Subjects {}, "Back to subjects" }
            }
        };
    };
    let result = vm.result;
    let fraction = result.fraction();

    rsx! {
        div { class: "page results",
            h2 { class: "results__headline", "{result.headline()}" }
            p { class: "results__subject", "{vm.subject_name}" }
            div { class: "results__score",
                span { class: "results__percentage", "{result.percentage}%" }
                span { class: "results__fraction", "{fraction}" }
            }
            dl { class: "results__stats",
                dt { "Correct" }
                dd { "{result.correct}" }
                dt { "Incorrect" }
                dd { "{result.incorrect}" }
                dt { "Time" }
                dd { "{result.duration}" }
            }
            div { class: "results__actions",
                button {
                    class: "btn btn--primary",
                    id: "results-restart",
                    r#type: "button",
                    onclick: move |_| {
                        active.clear();
                        if let Some(route) = restart_route.clone() {
                            navigator.push(route);
                        }
                    },
                    "Restart"
                }
                button {
                    class: "btn btn--secondary",
                    id: "results-subjects",
                    r#type: "button",
                    onclick: move |_| {
                        active.clear();
                        navigator.push(Route::Subjects {});
                    },
                    "Back to subjects"
                }
            }
        }
    }
}

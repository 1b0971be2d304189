use dioxus::prelude::*;
use dioxus_router::Link;
use services::DeckOrigin;

use crate::context::{ActiveRun, AppContext};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SubjectCardVm, map_subject_cards};

#[component]
pub fn SubjectsView() -> Element {
    let ctx = use_context::<AppContext>();
    let deck_service = ctx.deck_service();
    let origin = ctx.deck_origin();
    let active = use_context::<ActiveRun>();

    // Picking a subject starts over; any run still held is abandoned.
    use_effect(move || {
        if !active.is_empty() {
            active.clear();
        }
    });

    let mut resource = use_resource(move || {
        let deck_service = deck_service.clone();
        async move {
            let subjects = deck_service
                .list_subjects()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(map_subject_cards(&subjects))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page subjects",
            h2 { "Choose a subject" }
            if origin == DeckOrigin::Sample {
                p { class: "subjects__note", "No question files were found, showing the sample subjects." }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No subjects available." }
                    } else {
                        ul { class: "subjects__grid",
                            for card in cards {
                                SubjectCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn--secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn SubjectCard(card: SubjectCardVm) -> Element {
    let count = card.count_label();
    rsx! {
        li { class: "subject-card",
            Link { class: "subject-card__link", to: Route::TestType { subject_id: card.id.clone() },
                span { class: "subject-card__icon", "{card.icon}" }
                span { class: "subject-card__name", "{card.name}" }
                if !card.description.is_empty() {
                    span { class: "subject-card__description", "{card.description}" }
                }
                span { class: "subject-card__count", "{count}" }
            }
        }
    }
}

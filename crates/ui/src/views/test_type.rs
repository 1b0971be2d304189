use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::{SubjectId, TestModeKind};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SubjectCardVm, map_subject_card};

#[component]
pub fn TestTypeView(subject_id: SubjectId) -> Element {
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
        div { class: "page test-type",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(card) => rsx! {
                    h2 { "{card.icon} {card.name}" }
                    p { class: "test-type__hint", "Select a test type" }
                    ul { class: "test-type__modes",
                        for kind in TestModeKind::ALL {
                            li { key: "{kind}",
                                Link {
                                    class: "mode-card",
                                    to: Route::Config { subject_id: subject_id.clone(), mode: kind },
                                    span { class: "mode-card__title", "{kind.title()}" }
                                    span { class: "mode-card__blurb", "{kind.blurb()}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
            Link { class: "back-link", to: Route::Subjects {}, "Back to subjects" }
        }
    }
}

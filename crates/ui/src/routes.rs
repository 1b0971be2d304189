use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use quiz_core::model::{SubjectId, TestModeKind};

use crate::views::{ConfigView, ResultsView, SubjectsView, TestTypeView, TestView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SubjectsView)] Subjects {},
        #[route("/subjects/:subject_id", TestTypeView)] TestType { subject_id: SubjectId },
        #[route("/subjects/:subject_id/:mode", ConfigView)] Config { subject_id: SubjectId, mode: TestModeKind },
        #[route("/test", TestView)] Test {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { to: Route::Subjects {}, h1 { "Quiz Lab" } }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

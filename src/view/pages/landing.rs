use dioxus::prelude::*;

use crate::{hooks::auth::use_auth, view::components::user_status::StatusView};

#[component]
pub fn Page() -> Element {
    let auth = use_auth();

    let greeting = match StatusView::from_state(&auth.session()) {
        StatusView::SignedIn { display_name } => format!("Welcome back, {display_name}."),
        StatusView::Prompt => "Welcome. Sign in to see the secret page.".to_owned(),
    };

    rsx! {
        h2 { class: "subtitle", "Home" }
        p { "{greeting}" }
    }
}

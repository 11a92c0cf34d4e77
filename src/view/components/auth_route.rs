use dioxus::prelude::*;

use crate::{
    guard::{decide, GuardDecision, ACCESS_DENIED_MESSAGE},
    hooks::auth::use_auth,
    view::app::Routes,
};

/// Layout that only lets signed-in users through to the nested routes.
#[component]
pub fn AuthRoute() -> Element {
    let auth = use_auth();

    match decide(auth.is_authenticated()) {
        GuardDecision::Allow => rsx! { Outlet::<Routes> {} },
        GuardDecision::Deny => rsx! {
            p {
                class: "notification is-warning",
                "{ACCESS_DENIED_MESSAGE}"
            }
        },
    }
}

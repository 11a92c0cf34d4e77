use dioxus::prelude::*;

use crate::hooks::auth::use_auth;

/// Only reachable through the auth guard layout.
#[component]
pub fn Page() -> Element {
    let auth = use_auth();
    let session = auth.session();
    let Some(principal) = session.principal() else {
        return rsx! {};
    };

    let metadata = &principal.user_metadata;
    let age = metadata
        .age
        .map(|age| age.to_string())
        .unwrap_or_else(|| "unknown".to_owned());

    rsx! {
        h2 { class: "subtitle", "The secret" }
        p { "Only signed-in users can read this." }
        dl {
            dt { "Name" }
            dd { "{principal.display_name()}" }
            dt { "E-mail" }
            dd { { principal.email.clone().unwrap_or_default() } }
            dt { "Age" }
            dd { "{age}" }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    hooks::{auth::use_auth, toasts::use_toasts},
    session::SessionState,
    view::{
        app::Routes,
        components::form::{Button, ButtonFlavor},
    },
};

#[derive(Clone, Debug, PartialEq)]
pub enum StatusView {
    SignedIn { display_name: String },
    Prompt,
}

impl StatusView {
    pub fn from_state(state: &SessionState) -> Self {
        match state.principal() {
            Some(principal) => StatusView::SignedIn {
                display_name: principal.display_name(),
            },
            None => StatusView::Prompt,
        }
    }
}

#[component]
pub fn UserStatus() -> Element {
    let auth = use_auth();
    let mut toaster = use_toasts();
    let nav = use_navigator();
    let mut signing_out = use_signal(|| false);

    match StatusView::from_state(&auth.session()) {
        StatusView::SignedIn { display_name } => rsx! {
            div {
                class: "user-status",
                p { "Signed in: {display_name}" }
                Button {
                    flavor: ButtonFlavor::Danger,
                    disabled: signing_out(),
                    onclick: move |_| {
                        let facade = auth.facade();
                        signing_out.set(true);
                        spawn(async move {
                            let result = facade.logout().await;
                            signing_out.set(false);
                            if let Err(e) = result {
                                toaster.write().new_error(e.to_string());
                            }
                        });
                    },
                    "Sign out"
                }
            }
        },
        StatusView::Prompt => rsx! {
            div {
                class: "user-status",
                p { "Not signed in" }
                Button {
                    onclick: move |_| {
                        nav.push(Routes::LoginPage);
                    },
                    "Sign in"
                }
            }
        },
    }
}

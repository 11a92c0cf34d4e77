use crate::{
    hooks::{auth::use_auth, toasts::use_toasts},
    view::{
        app::Routes,
        components::form::{Button, ButtonFlavor, Field, LoginForm, TextInput, TextInputType},
    },
};
use dioxus::prelude::*;

#[component]
pub fn Page() -> Element {
    let auth = use_auth();
    let mut login_form = use_signal(LoginForm::default);
    let mut pending = use_signal(|| false);
    let mut toaster = use_toasts();
    let nav = use_navigator();

    rsx! {
        h2 { class: "subtitle", "Sign in" }
        form {
            Field {
                label: "E-mail",
                TextInput {
                    oninput: move |e: FormEvent| {
                        login_form.write().email = e.value();
                    },
                    value: TextInputType::Email(login_form.read().email.clone()),
                }
            }
            Field {
                label: "Password",
                TextInput {
                    oninput: move |e: FormEvent| {
                        login_form.write().password = e.value();
                    },
                    value: TextInputType::Password(login_form.read().password.clone()),
                }
            }
            Button {
                flavor: ButtonFlavor::Success,
                disabled: pending(),
                onclick: move |_| {
                    let credentials = match login_form.read().credentials() {
                        Ok(credentials) => credentials,
                        Err(e) => {
                            toaster.write().new_error(e.to_string());
                            return;
                        }
                    };

                    let facade = auth.facade();
                    pending.set(true);
                    spawn(async move {
                        let result = facade.login(&credentials.email, &credentials.password).await;
                        pending.set(false);

                        // The session itself arrives as a SIGNED_IN event.
                        match result {
                            Ok(_) => {
                                nav.push(Routes::LandingPage);
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "sign in failed");
                                toaster.write().new_error(e.to_string());
                            }
                        }
                    });
                },
                "Sign in"
            }
            p {
                "No account yet? "
                Link { to: Routes::RegisterPage, "Register." }
            }
        }
    }
}

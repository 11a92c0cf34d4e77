use crate::{
    hooks::{auth::use_auth, toasts::use_toasts},
    view::{
        app::Routes,
        components::form::{
            Button, ButtonFlavor, Field, RegistrationForm, TextInput, TextInputType,
        },
    },
};
use dioxus::prelude::*;

pub const CONFIRM_EMAIL_NOTICE: &str =
    "Account created. Confirm your e-mail address, then sign in.";

#[component]
pub fn Page() -> Element {
    let auth = use_auth();
    let mut form = use_signal(RegistrationForm::default);
    let mut pending = use_signal(|| false);
    let mut toaster = use_toasts();
    let nav = use_navigator();

    rsx! {
        h2 { class: "subtitle", "Register" }
        form {
            Field {
                label: "E-mail",
                TextInput {
                    oninput: move |e: FormEvent| form.write().email = e.value(),
                    value: TextInputType::Email(form.read().email.clone()),
                }
            }
            Field {
                label: "Password",
                TextInput {
                    oninput: move |e: FormEvent| form.write().password = e.value(),
                    value: TextInputType::Password(form.read().password.clone()),
                }
            }
            Field {
                label: "First name",
                TextInput {
                    oninput: move |e: FormEvent| form.write().first_name = e.value(),
                    value: TextInputType::Text(form.read().first_name.clone()),
                }
            }
            Field {
                label: "Last name",
                TextInput {
                    oninput: move |e: FormEvent| form.write().last_name = e.value(),
                    value: TextInputType::Text(form.read().last_name.clone()),
                }
            }
            Field {
                label: "Age",
                TextInput {
                    oninput: move |e: FormEvent| form.write().age = e.value(),
                    value: TextInputType::Number(form.read().age.clone()),
                }
            }
            Button {
                flavor: ButtonFlavor::Info,
                disabled: pending(),
                onclick: move |_| {
                    let registration = match form.read().registration() {
                        Ok(registration) => registration,
                        Err(e) => {
                            toaster.write().new_error(e.to_string());
                            return;
                        }
                    };

                    let facade = auth.facade();
                    pending.set(true);
                    spawn(async move {
                        let result = facade
                            .register(
                                &registration.credentials.email,
                                &registration.credentials.password,
                                &registration.first_name,
                                &registration.last_name,
                                registration.age,
                            )
                            .await;
                        pending.set(false);

                        match result {
                            Ok(outcome) if outcome.session.is_some() => {
                                nav.push(Routes::LandingPage);
                            }
                            Ok(_) => {
                                form.set(RegistrationForm::default());
                                toaster.write().new_notice(CONFIRM_EMAIL_NOTICE.to_owned());
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "registration failed");
                                toaster.write().new_error(e.to_string());
                            }
                        }
                    });
                },
                "Create account"
            }
            p {
                "Already registered? "
                Link { to: Routes::LoginPage, "Sign in." }
            }
        }
    }
}

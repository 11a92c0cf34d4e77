use dioxus::prelude::*;

use crate::{
    config::ClientConfig,
    hooks::auth::use_auth_provider,
    view::{
        components::{auth_route::AuthRoute, shell::Shell, with_toasts::WithToasts},
        pages::{
            about::Page as AboutPage, landing::Page as LandingPage, login::Page as LoginPage,
            not_found::Page as NotFound, register::Page as RegisterPage,
            secret::Page as SecretPage,
        },
    },
};

#[component]
pub fn App() -> Element {
    match ClientConfig::from_build_env() {
        Ok(config) => rsx! {
            AuthProvider {
                config: config,
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "auth client is not configured");
            rsx! {
                WithToasts {
                    initial_errors: vec![e.to_string()],
                    p { "The app is missing its identity service settings." }
                }
            }
        }
    }
}

#[component]
fn AuthProvider(config: ClientConfig) -> Element {
    use_auth_provider(config);

    rsx! { Router::<Routes>{} }
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Routes {
    #[layout(Shell)]
        #[route("/")]
        LandingPage,

        #[route("/about")]
        AboutPage,

        #[route("/login")]
        LoginPage,

        #[route("/register")]
        RegisterPage,

        #[layout(AuthRoute)]
            #[route("/secret")]
            SecretPage,
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

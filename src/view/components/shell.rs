use dioxus::prelude::*;

use crate::{
    hooks::auth::use_auth,
    view::{
        app::Routes,
        components::{user_status::UserStatus, with_toasts::WithToasts},
    },
};

pub const APP_TITLE: &str = "Supabase + Auth + Router";

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: Routes,
}

/// Navigation entries; the secret page is only offered to signed-in users.
pub fn nav_links(is_authenticated: bool) -> Vec<NavLink> {
    let mut links = vec![
        NavLink {
            label: "Home",
            to: Routes::LandingPage,
        },
        NavLink {
            label: "About",
            to: Routes::AboutPage,
        },
    ];

    if is_authenticated {
        links.push(NavLink {
            label: "Secret",
            to: Routes::SecretPage,
        });
    }

    links.extend([
        NavLink {
            label: "Sign in",
            to: Routes::LoginPage,
        },
        NavLink {
            label: "Register",
            to: Routes::RegisterPage,
        },
    ]);

    links
}

/// Layout wrapping every page: title, navigation, status badge and toasts.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let links = nav_links(auth.is_authenticated());

    rsx! {
        WithToasts {
            initial_errors: Vec::new(),
            section {
                class: "section",
                div {
                    class: "container",
                    h1 {
                        class: "title",
                        "{APP_TITLE}"
                    }
                    header {
                        class: "level",
                        nav {
                            class: "level-left tabs",
                            ul {
                                { links.into_iter().map(|link| rsx! {
                                    li {
                                        key: "{link.label}",
                                        Link {
                                            to: link.to,
                                            active_class: "is-active",
                                            "{link.label}"
                                        }
                                    }
                                }) }
                            }
                        }
                        div {
                            class: "level-right",
                            UserStatus {}
                        }
                    }
                    main {
                        class: "content",
                        Outlet::<Routes> {}
                    }
                }
            }
        }
    }
}

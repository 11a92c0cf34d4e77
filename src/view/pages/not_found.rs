use dioxus::prelude::*;

use crate::view::app::Routes;

#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        h2 { class: "subtitle", "Not found" }
        p { "There is nothing at /{path}." }
        Link { to: Routes::LandingPage, "Back home" }
    }
}

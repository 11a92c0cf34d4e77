use dioxus::prelude::*;

#[component]
pub fn Page() -> Element {
    rsx! {
        h2 { class: "subtitle", "About" }
        p {
            "A small single-page app showing how a hosted identity service, "
            "client-side routing and a guarded route fit together."
        }
    }
}

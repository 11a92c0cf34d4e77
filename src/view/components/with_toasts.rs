use crate::hooks::toasts::{use_toasts_provider, ToastManager};
use dioxus::prelude::*;

/// Provides a toast stack to `children` and renders it on top of them.
#[component]
pub fn WithToasts(initial_errors: Vec<String>, children: Element) -> Element {
    let mut toaster = use_signal(|| ToastManager::with_errors(initial_errors));
    use_toasts_provider(toaster);

    rsx! {
        { children }
        div {
            class: "toasts",
            style: "position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 1000; display: flex; flex-direction: column-reverse; gap: 0.75rem;",
            { toaster.read().toasts().map(|toast| {
                let id = toast.id;
                rsx! {
                    div {
                        key: "{id}",
                        class: toast.kind.class(),
                        role: "alert",
                        button {
                            class: "delete",
                            onclick: move |_| toaster.write().dismiss(id),
                        }
                        strong { "{toast.title}" }
                        p { "{toast.body}" }
                    }
                }
            }) }
        }
    }
}

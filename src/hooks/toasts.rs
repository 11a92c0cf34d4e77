use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Notice,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Error => "notification is-warning",
            ToastKind::Notice => "notification is-info",
        }
    }
}

pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: &'static str,
    pub body: String,
}

/// Messages stacked in the corner of the page until dismissed.
#[derive(Default)]
pub struct ToastManager {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn with_errors(error_messages: Vec<String>) -> Self {
        let mut manager = ToastManager::default();
        for error_message in error_messages {
            manager.new_error(error_message);
        }
        manager
    }

    pub fn new_error(&mut self, error_message: String) {
        log::error!("Error occurred: {}", error_message);
        self.push(ToastKind::Error, "Something went wrong", error_message);
    }

    pub fn new_notice(&mut self, message: String) {
        log::info!("{}", message);
        self.push(ToastKind::Notice, "Heads up", message);
    }

    fn push(&mut self, kind: ToastKind, title: &'static str, body: String) {
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            title,
            body,
        });
        self.next_id += 1;
    }

    pub fn toasts(&self) -> std::slice::Iter<'_, Toast> {
        self.toasts.iter()
    }

    /// Removes a toast by id. Ids stay valid while other toasts come and go.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts_provider(toaster: Signal<ToastManager>) {
    use_context_provider(|| toaster);
}

pub fn use_toasts() -> Signal<ToastManager> {
    use_context::<Signal<ToastManager>>()
}

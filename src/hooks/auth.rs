//! Dioxus side of the session: the provider that owns the session store for
//! the lifetime of the app, and the hook views use to read it.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    config::ClientConfig,
    facade::AuthFacade,
    remote::supabase::SupabaseAuthClient,
    session::{SessionCell, SessionState, SessionStore},
};

impl SessionCell for Signal<SessionState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.write())
    }

    fn snapshot(&self) -> SessionState {
        self.peek().clone()
    }
}

#[derive(Clone)]
pub struct AuthContext {
    session: Signal<SessionState>,
    facade: AuthFacade<SupabaseAuthClient>,
}

impl AuthContext {
    /// Current session. Reading it subscribes the calling component.
    pub fn session(&self) -> SessionState {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn facade(&self) -> AuthFacade<SupabaseAuthClient> {
        self.facade.clone()
    }
}

/// Creates the auth client and starts mirroring its events into a signal.
///
/// The store lives in a task owned by the calling component, so the event
/// subscription is released when that component unmounts.
pub fn use_auth_provider(config: ClientConfig) -> AuthContext {
    let session = use_signal(SessionState::default);

    let context = use_hook(move || {
        let client = Rc::new(SupabaseAuthClient::new(config.clone()));
        let mut store = SessionStore::init(session, client.as_ref());
        spawn(async move {
            store.run().await;
        });

        AuthContext {
            session,
            facade: AuthFacade::new(client, config.request_timeout),
        }
    });

    use_context_provider(|| context)
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AuthStatus;
    use std::{cell::RefCell, time::Duration};
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    /// Hands the provided context back to the test.
    #[derive(Clone, Default)]
    struct Captured(Rc<RefCell<Option<AuthContext>>>);

    impl PartialEq for Captured {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Captured {
        fn context(&self) -> AuthContext {
            self.0.borrow().clone().unwrap()
        }
    }

    #[component]
    fn Provider(config: ClientConfig, captured: Captured) -> Element {
        let auth = use_auth_provider(config);
        captured.0.borrow_mut().get_or_insert_with(|| auth.clone());
        let status = auth.session().status();

        rsx! { "{status}" }
    }

    async fn mount(server: &MockServer) -> (VirtualDom, AuthContext) {
        let captured = Captured::default();
        let config = ClientConfig::new(&server.uri(), "anon-key").unwrap();
        let mut dom = VirtualDom::new_with_props(
            Provider,
            ProviderProps {
                config,
                captured: captured.clone(),
            },
        );
        dom.rebuild_in_place();
        (dom, captured.context())
    }

    #[tokio::test]
    async fn sign_in_event_reaches_the_signal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "access-token",
                "refresh_token": "refresh-token",
                "user": { "id": crate::test_helpers::USER_ID, "email": "a@x.com" },
            })))
            .mount(&server)
            .await;

        let (mut dom, auth) = mount(&server).await;
        assert_eq!(
            dom.in_runtime(|| auth.session().status()),
            AuthStatus::Anonymous
        );

        auth.facade().login("a@x.com", "pw").await.unwrap();
        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .unwrap();

        assert_eq!(
            dom.in_runtime(|| auth.session().status()),
            AuthStatus::Authenticated
        );
    }

    #[tokio::test]
    async fn unmounting_releases_the_subscription() {
        let server = MockServer::start().await;
        let (dom, auth) = mount(&server).await;
        let facade = auth.facade();
        assert_eq!(facade.client().subscriber_count(), 1);

        drop(dom);
        assert_eq!(facade.client().subscriber_count(), 0);
    }
}

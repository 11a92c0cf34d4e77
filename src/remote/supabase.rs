//! Supabase auth (GoTrue) over HTTP.
//!
//! Besides answering requests, the client keeps the current session and
//! announces every change of it on its [`AuthEventBus`], the way the hosted
//! service's own SDKs do.

use std::cell::RefCell;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    config::ClientConfig,
    events::{AuthEvent, AuthEventBus, AuthEventSource, Subscription},
    principal::{Credentials, Principal, Registration, Session, SignUpOutcome, UserMetadata},
    remote::{RemoteAuthClient, RemoteError},
};

pub struct SupabaseAuthClient {
    http_client: reqwest::Client,
    config: ClientConfig,
    session: RefCell<Option<Session>>,
    events: AuthEventBus,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: UserMetadata,
}

/// Sign-up answers with a full session when e-mail confirmation is off and
/// with the bare user otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(Principal),
}

/// The service has used several error shapes over time.
#[derive(Deserialize, Default)]
struct ErrorBody {
    error_code: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        let error = RemoteError::new(e.to_string());
        match e.status() {
            Some(status) => error.with_status(status.as_u16()),
            None => error,
        }
    }
}

async fn error_from_response(response: reqwest::Response) -> RemoteError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();

    let message = parsed
        .msg
        .or(parsed.message)
        .or(parsed.error_description)
        .or_else(|| parsed.error.clone())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned()
        });

    let error = RemoteError::new(message).with_status(status.as_u16());
    match parsed.error_code.or(parsed.error) {
        Some(code) => error.with_code(code),
        None => error,
    }
}

impl SupabaseAuthClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
            session: RefCell::new(None),
            events: AuthEventBus::new(),
        }
    }

    fn post(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.http_client
            .post(self.config.auth_endpoint(endpoint))
            .header("apikey", &self.config.anon_key)
            .header("Accept", "application/json")
    }

    fn store_session(&self, session: Session) {
        *self.session.borrow_mut() = Some(session.clone());
        self.events.emit(AuthEvent::SignedIn(session));
    }

    fn clear_session(&self) {
        self.session.borrow_mut().take();
        self.events.emit(AuthEvent::SignedOut);
    }
}

#[cfg(test)]
impl SupabaseAuthClient {
    pub(crate) fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }
}

impl AuthEventSource for SupabaseAuthClient {
    fn subscribe(&self) -> Subscription {
        self.events.subscribe()
    }
}

impl RemoteAuthClient for SupabaseAuthClient {
    async fn sign_in_with_password(
        &self,
        credentials: Credentials,
    ) -> Result<Session, RemoteError> {
        tracing::debug!(email = %credentials.email, "signing in with password");

        let response = self
            .post("token")
            .query(&[("grant_type", "password")])
            .bearer_auth(&self.config.anon_key)
            .json(&credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = error_from_response(response).await;
            tracing::warn!(status = ?error.status, code = ?error.code, "sign in rejected");
            return Err(error);
        }

        let session: Session = response.json().await?;
        self.store_session(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, registration: Registration) -> Result<SignUpOutcome, RemoteError> {
        tracing::debug!(email = %registration.credentials.email, "signing up");

        let request = SignUpRequest {
            email: &registration.credentials.email,
            password: &registration.credentials.password,
            data: registration.metadata(),
        };

        let response = self
            .post("signup")
            .bearer_auth(&self.config.anon_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = error_from_response(response).await;
            tracing::warn!(status = ?error.status, code = ?error.code, "sign up rejected");
            return Err(error);
        }

        match response.json::<SignUpResponse>().await? {
            SignUpResponse::Session(session) => {
                self.store_session(session.clone());
                Ok(SignUpOutcome {
                    user: session.user.clone(),
                    session: Some(session),
                })
            }
            SignUpResponse::User(user) => {
                tracing::info!(user = %user.id, "sign up awaiting e-mail confirmation");
                Ok(SignUpOutcome {
                    user,
                    session: None,
                })
            }
        }
    }

    async fn sign_out(&self) -> Result<(), RemoteError> {
        let access_token = self
            .session
            .borrow()
            .as_ref()
            .map(|session| session.access_token.clone());

        let access_token = match access_token {
            Some(access_token) => access_token,
            None => {
                tracing::debug!("signing out without a session");
                self.clear_session();
                return Ok(());
            }
        };

        tracing::debug!("signing out");

        let response = self
            .post("logout")
            .query(&[("scope", "global")])
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            self.clear_session();
            return Ok(());
        }

        // The service no longer knows the session, so it is gone either way.
        if matches!(
            status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
        ) {
            tracing::debug!(%status, "session already revoked");
            self.clear_session();
            return Ok(());
        }

        let error = error_from_response(response).await;
        tracing::warn!(status = ?error.status, code = ?error.code, "sign out rejected");
        Err(error)
    }
}

pub mod supabase;

use std::future::Future;

use mockall::automock;

use crate::principal::{Credentials, Registration, Session, SignUpOutcome};

/// Failure reported by the identity service, or by the transport reaching it.
///
/// Invalid credentials, validation failures and network errors all land
/// here; only the service can tell them apart, through `status` and `code`.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct RemoteError {
    pub status: Option<u16>,
    pub code: Option<String>,
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Request/response side of the hosted identity service.
///
/// Implementations announce the resulting session changes as auth events;
/// callers never update session state from these return values.
#[automock]
pub trait RemoteAuthClient {
    fn sign_in_with_password(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Session, RemoteError>>;

    fn sign_up(
        &self,
        registration: Registration,
    ) -> impl Future<Output = Result<SignUpOutcome, RemoteError>>;

    fn sign_out(&self) -> impl Future<Output = Result<(), RemoteError>>;
}

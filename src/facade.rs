use std::{future::Future, pin::pin, rc::Rc, time::Duration};

use futures::future::{self, Either};

use crate::{
    error::Error,
    principal::{Credentials, Registration, Session, SignUpOutcome},
    remote::{RemoteAuthClient, RemoteError},
    timer,
};

/// Login, logout and registration, forwarded to the remote client.
///
/// Results come back exactly as the client produced them. Nothing is retried
/// and session state is left to the auth events the client emits.
pub struct AuthFacade<C> {
    client: Rc<C>,
    timeout: Duration,
}

impl<C> Clone for AuthFacade<C> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            timeout: self.timeout,
        }
    }
}

impl<C: RemoteAuthClient> AuthFacade<C> {
    pub fn new(client: Rc<C>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, Error> {
        let credentials = Credentials::new(email, password);
        self.bounded("login", self.client.sign_in_with_password(credentials))
            .await
    }

    pub async fn logout(&self) -> Result<(), Error> {
        self.bounded("logout", self.client.sign_out()).await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        age: u32,
    ) -> Result<SignUpOutcome, Error> {
        let registration = Registration {
            credentials: Credentials::new(email, password),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            age,
        };
        self.bounded("register", self.client.sign_up(registration))
            .await
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, RemoteError>>,
    ) -> Result<T, Error> {
        let call = pin!(call);
        let deadline = pin!(timer::sleep(self.timeout));

        match future::select(call, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| {
                tracing::warn!(operation, error = %e, "auth call failed");
                Error::Remote(e)
            }),
            Either::Right(((), _)) => {
                tracing::warn!(operation, timeout = ?self.timeout, "auth call timed out");
                Err(Error::TimedOut {
                    operation,
                    after: self.timeout,
                })
            }
        }
    }
}

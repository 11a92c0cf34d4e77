use std::{cell::RefCell, collections::HashMap};

use uuid::Uuid;

use crate::{
    events::{AuthEvent, AuthEventBus, AuthEventSource, Subscription},
    principal::{Credentials, Principal, Registration, Session, SignUpOutcome, UserMetadata},
    remote::{RemoteAuthClient, RemoteError},
};

pub const USER_ID: &str = "9a1f5c3e-7d4b-4e21-8f0a-2b6c9d8e7f10";

pub fn principal_for(email: &str) -> Principal {
    Principal {
        id: USER_ID.parse().unwrap(),
        email: Some(email.to_owned()),
        user_metadata: UserMetadata::default(),
    }
}

pub fn session_for(email: &str) -> Session {
    session_with(principal_for(email))
}

fn session_with(user: Principal) -> Session {
    Session {
        access_token: format!("access-{}", user.id),
        refresh_token: format!("refresh-{}", user.id),
        token_type: "bearer".to_owned(),
        expires_in: Some(3600),
        expires_at: None,
        user,
    }
}

struct Account {
    password: String,
    principal: Principal,
}

/// In-memory identity service. Accounts created through `sign_up` must sign
/// in afterwards, as with e-mail confirmation enabled.
pub struct FakeAuthService {
    accounts: RefCell<HashMap<String, Account>>,
    events: AuthEventBus,
}

impl FakeAuthService {
    pub fn new() -> Self {
        Self {
            accounts: RefCell::new(HashMap::new()),
            events: AuthEventBus::new(),
        }
    }

    pub fn add_account(&self, email: &str, password: &str) {
        self.accounts.borrow_mut().insert(
            email.to_owned(),
            Account {
                password: password.to_owned(),
                principal: principal_for(email),
            },
        );
    }

    pub fn emit(&self, event: AuthEvent) {
        self.events.emit(event);
    }
}

impl AuthEventSource for FakeAuthService {
    fn subscribe(&self) -> Subscription {
        self.events.subscribe()
    }
}

impl RemoteAuthClient for FakeAuthService {
    async fn sign_in_with_password(
        &self,
        credentials: Credentials,
    ) -> Result<Session, RemoteError> {
        let session = {
            let accounts = self.accounts.borrow();
            match accounts.get(&credentials.email) {
                Some(account) if account.password == credentials.password => {
                    session_with(account.principal.clone())
                }
                _ => {
                    return Err(RemoteError::new("Invalid login credentials")
                        .with_status(400)
                        .with_code("invalid_credentials"))
                }
            }
        };

        self.events.emit(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, registration: Registration) -> Result<SignUpOutcome, RemoteError> {
        let email = registration.credentials.email.clone();
        if self.accounts.borrow().contains_key(&email) {
            return Err(RemoteError::new("User already registered")
                .with_status(422)
                .with_code("user_already_exists"));
        }

        let principal = Principal {
            id: Uuid::new_v4(),
            email: Some(email.clone()),
            user_metadata: registration.metadata(),
        };

        self.accounts.borrow_mut().insert(
            email,
            Account {
                password: registration.credentials.password,
                principal: principal.clone(),
            },
        );

        Ok(SignUpOutcome {
            user: principal,
            session: None,
        })
    }

    async fn sign_out(&self) -> Result<(), RemoteError> {
        self.events.emit(AuthEvent::SignedOut);
        Ok(())
    }
}

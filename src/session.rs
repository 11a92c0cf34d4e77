//! Local mirror of the identity service's session.
//!
//! The only way session state changes is an [`AuthEvent`] arriving through a
//! [`Subscription`]. A successful login call does not touch it directly; the
//! `SIGNED_IN` event that follows does.

use std::{cell::RefCell, rc::Rc};

use futures::StreamExt;

use crate::{
    events::{AuthEvent, AuthEventSource, Subscription},
    principal::Principal,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum AuthStatus {
    Anonymous,
    Authenticated,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    principal: Option<Principal>,
}

impl SessionState {
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// The session flag. Derived from the principal, so the two always agree.
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    pub fn status(&self) -> AuthStatus {
        if self.is_authenticated() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Anonymous
        }
    }

    /// Applies one event and reports whether the state changed.
    ///
    /// `SIGNED_IN` replaces the principal wholesale and `SIGNED_OUT` clears
    /// it. Every other event is ignored.
    pub fn apply(&mut self, event: &AuthEvent) -> bool {
        let next = match event {
            AuthEvent::SignedIn(session) => Some(session.user.clone()),
            AuthEvent::SignedOut => None,
            other => {
                tracing::trace!(event = %other.kind(), "ignoring auth event");
                return false;
            }
        };

        if self.principal == next {
            return false;
        }

        self.principal = next;
        tracing::info!(status = %self.status(), "session changed");
        true
    }
}

/// Storage a [`SessionStore`] writes into.
pub trait SessionCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R;
    fn snapshot(&self) -> SessionState;
}

impl SessionCell for Rc<RefCell<SessionState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn snapshot(&self) -> SessionState {
        self.borrow().clone()
    }
}

/// Session state plus the auth event subscription that feeds it.
///
/// The subscription is acquired once in [`SessionStore::init`] and released
/// once, by [`SessionStore::teardown`] or by dropping the store.
pub struct SessionStore<C: SessionCell> {
    cell: C,
    subscription: Option<Subscription>,
}

impl<C: SessionCell> SessionStore<C> {
    pub fn init<S: AuthEventSource + ?Sized>(cell: C, source: &S) -> Self {
        Self {
            cell,
            subscription: Some(source.subscribe()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.cell.snapshot()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Applies every event already delivered and returns how many there were.
    pub fn drain(&mut self) -> usize {
        let Some(subscription) = self.subscription.as_mut() else {
            return 0;
        };

        let mut applied = 0;
        while let Some(event) = subscription.try_next() {
            self.cell.update(|state| state.apply(&event));
            applied += 1;
        }
        applied
    }

    /// Applies events as they arrive until the store is torn down or the
    /// event source goes away.
    pub async fn run(&mut self) {
        while let Some(subscription) = self.subscription.as_mut() {
            match subscription.next().await {
                Some(event) => {
                    self.cell.update(|state| state.apply(&event));
                }
                None => {
                    tracing::debug!("auth event source closed");
                    self.subscription = None;
                }
            }
        }
    }

    /// Releases the subscription. Events not yet applied are dropped.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::debug!("session store torn down");
        }
    }
}

impl SessionStore<Rc<RefCell<SessionState>>> {
    /// A store over fresh, anonymous state.
    pub fn headless<S: AuthEventSource + ?Sized>(source: &S) -> Self {
        Self::init(Rc::new(RefCell::new(SessionState::default())), source)
    }
}

//! Auth events pushed by the identity service and the observer that fans them
//! out to subscribers.
//!
//! Every subscriber owns its own unbounded channel, so events arrive in the
//! order they were emitted and a slow subscriber never blocks the emitter.
//! Dropping a [`Subscription`] unregisters it from the bus.

use std::{
    cell::RefCell,
    pin::Pin,
    rc::{Rc, Weak},
    task::{Context, Poll},
};

use futures::{
    channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
    Stream, StreamExt,
};

use crate::principal::Session;

/// Wire names of the auth events, as they appear in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    InitialSession(Option<Session>),
    SignedIn(Session),
    SignedOut,
    TokenRefreshed(Session),
    UserUpdated(Session),
    PasswordRecovery(Session),
}

impl AuthEvent {
    pub fn kind(&self) -> AuthChangeEvent {
        match self {
            AuthEvent::InitialSession(_) => AuthChangeEvent::InitialSession,
            AuthEvent::SignedIn(_) => AuthChangeEvent::SignedIn,
            AuthEvent::SignedOut => AuthChangeEvent::SignedOut,
            AuthEvent::TokenRefreshed(_) => AuthChangeEvent::TokenRefreshed,
            AuthEvent::UserUpdated(_) => AuthChangeEvent::UserUpdated,
            AuthEvent::PasswordRecovery(_) => AuthChangeEvent::PasswordRecovery,
        }
    }
}

/// Anything that can hand out auth event subscriptions.
pub trait AuthEventSource {
    fn subscribe(&self) -> Subscription;
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    senders: Vec<(u64, UnboundedSender<AuthEvent>)>,
}

#[derive(Clone, Default)]
pub struct AuthEventBus {
    listeners: Rc<RefCell<Listeners>>,
}

impl AuthEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every live subscriber.
    pub fn emit(&self, event: AuthEvent) {
        let mut listeners = self.listeners.borrow_mut();
        tracing::debug!(
            event = %event.kind(),
            subscribers = listeners.senders.len(),
            "emitting auth event"
        );

        listeners
            .senders
            .retain(|(_, sender)| sender.unbounded_send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().senders.len()
    }
}

impl AuthEventSource for AuthEventBus {
    fn subscribe(&self) -> Subscription {
        let (sender, receiver) = mpsc::unbounded();

        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.senders.push((id, sender));

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
            receiver,
        }
    }
}

/// Handle to one registration on an [`AuthEventBus`].
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
    receiver: UnboundedReceiver<AuthEvent>,
}

impl Subscription {
    /// Returns the next event that is already queued, without waiting.
    pub fn try_next(&mut self) -> Option<AuthEvent> {
        self.receiver.try_next().ok().flatten()
    }

    /// Releases the registration. Queued events are discarded.
    pub fn unsubscribe(self) {}
}

impl Stream for Subscription {
    type Item = AuthEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<AuthEvent>> {
        self.receiver.poll_next_unpin(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            // A bus in the middle of `emit` already holds the borrow; it drops
            // closed senders on its own.
            if let Ok(mut listeners) = listeners.try_borrow_mut() {
                listeners.senders.retain(|(id, _)| *id != self.id);
            }
        }
        self.receiver.close();
    }
}

//! # Session store — the application's single source of truth
//!
//! [`SessionStore`] holds the one authoritative [`Identity`] plus the UI
//! cosmetic preferences (theme, accent) for the lifetime of the process, and
//! notifies subscribers synchronously on every commit.
//!
//! ## Guarantees
//!
//! - Reads always observe the most recently committed write: commits happen
//!   under a single-threaded `Rc<RefCell<_>>`, so there is no
//!   eventual-consistency window.
//! - Setting a new identity always fully replaces the previous one; `None`
//!   is the sign-out path.
//! - Every subscriber runs exactly once per commit, before the setter
//!   returns. Subscribers may subscribe or unsubscribe re-entrantly.
//!
//! The store is an explicit, injectable container — constructed fresh per
//! test, created once at startup by the application's provider component.
//! Identity writes come only from the authentication flow; cosmetic writes
//! only from the theme controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::Identity;
use crate::prefs::{Preferences, Theme};

/// Snapshot of everything the session store holds.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub theme: Theme,
    pub accent: String,
}

impl Default for SessionState {
    fn default() -> Self {
        let prefs = Preferences::default();
        Self {
            identity: None,
            theme: prefs.theme,
            accent: prefs.accent,
        }
    }
}

type Subscriber = Rc<dyn Fn(&SessionState)>;

/// Handle returned by [`SessionStore::subscribe`]; pass it to
/// [`SessionStore::unsubscribe`] to stop receiving notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// Process-wide session container.
///
/// Cloning is shallow: all clones share the same state and subscriber list.
#[derive(Clone, Default)]
pub struct SessionStore {
    state: Rc<RefCell<SessionState>>,
    subscribers: Rc<RefCell<Vec<(u64, Subscriber)>>>,
    next_id: Rc<Cell<u64>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state. Always reflects the most recent commit.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// The identity currently signed in, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    /// Replace the stored identity wholesale. `None` is the sign-out path.
    pub fn set_identity(&self, identity: Option<Identity>) {
        self.commit(|state| state.identity = identity);
    }

    pub fn set_theme(&self, theme: Theme) {
        self.commit(|state| state.theme = theme);
    }

    pub fn set_accent(&self, accent: impl Into<String>) {
        let accent = accent.into();
        self.commit(|state| state.accent = accent);
    }

    /// Register a callback invoked synchronously after every commit.
    pub fn subscribe(&self, callback: impl Fn(&SessionState) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers
            .borrow_mut()
            .retain(|(id, _)| *id != subscription.0);
    }

    fn commit(&self, mutate: impl FnOnce(&mut SessionState)) {
        mutate(&mut self.state.borrow_mut());
        let state = self.snapshot();
        // Subscribers may mutate the subscriber list re-entrantly; notify
        // from a detached copy.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "1".to_string(),
            email: "u@v.com".to_string(),
            name: "U".to_string(),
            role,
        }
    }

    #[test]
    fn test_starts_signed_out_with_default_cosmetics() {
        let store = SessionStore::new();
        let state = store.snapshot();
        assert!(state.identity.is_none());
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.accent, "blue");
    }

    #[test]
    fn test_set_identity_replaces_wholesale() {
        let store = SessionStore::new();

        store.set_identity(Some(identity(Role::Recruiter)));
        let mut other = identity(Role::Student);
        other.id = "2".to_string();
        store.set_identity(Some(other.clone()));

        assert_eq!(store.identity(), Some(other));
    }

    #[test]
    fn test_clearing_identity_signs_out() {
        let store = SessionStore::new();
        store.set_identity(Some(identity(Role::Student)));

        store.set_identity(None);

        assert!(store.identity().is_none());
    }

    #[test]
    fn test_subscriber_runs_once_per_commit_with_new_state() {
        let store = SessionStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        store.set_identity(Some(identity(Role::Recruiter)));
        store.set_theme(Theme::Light);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0].identity.as_ref().map(|i| i.role),
            Some(Role::Recruiter)
        );
        assert_eq!(seen[1].theme, Theme::Light);
    }

    #[test]
    fn test_reads_observe_commit_before_subscribers_return() {
        let store = SessionStore::new();
        let observed = Rc::new(Cell::new(false));

        let inner = store.clone();
        let sink = Rc::clone(&observed);
        store.subscribe(move |_| sink.set(inner.identity().is_some()));

        store.set_identity(Some(identity(Role::Student)));

        assert!(observed.get());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = SessionStore::new();
        let count = Rc::new(Cell::new(0));

        let sink = Rc::clone(&count);
        let subscription = store.subscribe(move |_| sink.set(sink.get() + 1));

        store.set_theme(Theme::Light);
        store.unsubscribe(subscription);
        store.set_theme(Theme::Dark);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_subscribing_from_a_callback_does_not_panic() {
        let store = SessionStore::new();

        let inner = store.clone();
        store.subscribe(move |_| {
            inner.subscribe(|_| {});
        });

        store.set_accent("violet");
        assert_eq!(store.snapshot().accent, "violet");
    }

    #[test]
    fn test_cosmetic_updates_do_not_touch_identity() {
        let store = SessionStore::new();
        store.set_identity(Some(identity(Role::Recruiter)));

        store.set_theme(Theme::Light);
        store.set_accent("rose");

        let state = store.snapshot();
        assert!(state.identity.is_some());
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.accent, "rose");
    }
}

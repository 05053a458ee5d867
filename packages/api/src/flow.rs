//! # Authentication flow — one attempt, start to finish
//!
//! [`AuthFlow`] sequences a single authentication attempt from validated
//! input through the identity service to a committed session-store update.
//! Per attempt the flow moves `Idle → Submitting → {Succeeded, Failed}` and
//! always returns to `Idle`: the submitting latch is held by a drop guard, so
//! no path — including transport failures — can leave an attempt stuck.
//!
//! Each resolved attempt emits exactly one user-visible notice through the
//! notifier given at construction, and reports where the view layer should
//! navigate next as a [`NavTarget`]. Failures are terminal per attempt;
//! nothing is retried. While an attempt is outstanding, further submissions
//! are suppressed without touching the service (the form additionally
//! disables its controls).
//!
//! Failure reporting is deliberately coarse: credential rejections and
//! malformed success payloads share one generic message per operation, so a
//! caller cannot distinguish "wrong password" from "no such account".

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use store::{Role, SessionStore};

use crate::models::AuthPayload;
use crate::{IdentityError, IdentityService};

/// How long a fresh account's success notice stays on screen before the
/// dashboard redirect is reported.
const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Where the view layer should navigate after an attempt resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// The role dashboard, `/dashboard/{role}`.
    Dashboard(Role),
    /// The public landing route.
    Landing,
    /// Browser-level redirect to an external URL (OAuth initiation).
    External(String),
}

/// User-visible notification emitted while an attempt resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Result of a single authentication attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The attempt ran to completion; follow the redirect if one is set.
    Resolved { redirect: Option<NavTarget> },
    /// Another attempt is still outstanding; nothing was submitted.
    Suppressed,
}

/// Releases the submitting latch when an attempt leaves scope, whatever path
/// it took to get there.
struct SubmitGuard(Rc<Cell<bool>>);

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Drives sign-in, sign-up, OAuth initiation and sign-out against the
/// identity service, committing successful identities to the session store.
#[derive(Clone)]
pub struct AuthFlow<S: IdentityService> {
    service: S,
    store: SessionStore,
    notifier: Rc<dyn Fn(Notice)>,
    submitting: Rc<Cell<bool>>,
    signup_redirect_delay: Duration,
}

impl<S: IdentityService> AuthFlow<S> {
    pub fn new(service: S, store: SessionStore, notifier: impl Fn(Notice) + 'static) -> Self {
        Self {
            service,
            store,
            notifier: Rc::new(notifier),
            submitting: Rc::new(Cell::new(false)),
            signup_redirect_delay: SIGNUP_REDIRECT_DELAY,
        }
    }

    /// Override the post-sign-up delay (tests pass zero).
    pub fn with_signup_redirect_delay(mut self, delay: Duration) -> Self {
        self.signup_redirect_delay = delay;
        self
    }

    /// Whether an attempt is currently outstanding. The form disables its
    /// submission controls while this is set.
    pub fn submitting(&self) -> bool {
        self.submitting.get()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Outcome {
        let Some(_guard) = self.begin() else {
            return Outcome::Suppressed;
        };
        match self.service.sign_in(email, password).await {
            Ok(payload) => match self.commit(payload) {
                Some(role) => {
                    self.notify(Notice::Success("Welcome back!".to_string()));
                    Outcome::Resolved {
                        redirect: Some(NavTarget::Dashboard(role)),
                    }
                }
                None => {
                    tracing::error!("sign-in response carried no profile");
                    self.fail("Invalid email or password")
                }
            },
            Err(IdentityError::Rejected(reason)) => {
                tracing::error!(%reason, "sign-in rejected");
                self.fail("Invalid email or password")
            }
            Err(IdentityError::Transport(reason)) => {
                tracing::error!(%reason, "sign-in failed in transit");
                self.fail("Something went wrong")
            }
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str, name: &str, role: Role) -> Outcome {
        let Some(_guard) = self.begin() else {
            return Outcome::Suppressed;
        };
        match self.service.sign_up(email, password, name, role).await {
            Ok(payload) => match self.commit(payload) {
                Some(role) => {
                    self.notify(Notice::Success("Account created successfully!".to_string()));
                    // Let the notice render before the redirect is reported.
                    sleep(self.signup_redirect_delay).await;
                    Outcome::Resolved {
                        redirect: Some(NavTarget::Dashboard(role)),
                    }
                }
                None => {
                    tracing::error!("sign-up response carried no profile");
                    self.fail("Failed to create account")
                }
            },
            Err(IdentityError::Rejected(reason)) => {
                tracing::error!(%reason, "sign-up rejected");
                self.fail("Failed to create account")
            }
            Err(IdentityError::Transport(reason)) => {
                tracing::error!(%reason, "sign-up failed in transit");
                self.fail("Something went wrong")
            }
        }
    }

    /// Start a redirect-based OAuth sign-in. Commits nothing: the callback
    /// route performs the commit once the provider redirects back.
    pub async fn sign_in_with_oauth(&self) -> Outcome {
        let Some(_guard) = self.begin() else {
            return Outcome::Suppressed;
        };
        match self.service.oauth_url("google").await {
            Ok(url) => Outcome::Resolved {
                redirect: Some(NavTarget::External(url)),
            },
            Err(err) => {
                tracing::error!(%err, "oauth initiation failed");
                self.fail("Failed to sign in with Google")
            }
        }
    }

    /// Sign out. The local session is invalidated whether or not the remote
    /// call succeeds — sign-out never depends on a reachable network.
    pub async fn sign_out(&self) -> Outcome {
        let Some(_guard) = self.begin() else {
            return Outcome::Suppressed;
        };
        let remote = self.service.sign_out().await;
        self.store.set_identity(None);
        match remote {
            Ok(()) => self.notify(Notice::Success("Signed out successfully".to_string())),
            Err(err) => {
                tracing::warn!(%err, "remote sign-out failed");
                self.notify(Notice::Error("Failed to sign out".to_string()));
            }
        }
        Outcome::Resolved {
            redirect: Some(NavTarget::Landing),
        }
    }

    fn begin(&self) -> Option<SubmitGuard> {
        if self.submitting.replace(true) {
            return None;
        }
        Some(SubmitGuard(Rc::clone(&self.submitting)))
    }

    /// Commit a successful payload, returning the committed role.
    /// A payload without a profile commits nothing.
    fn commit(&self, payload: AuthPayload) -> Option<Role> {
        let profile = payload.profile?;
        let identity = profile.to_identity();
        let role = identity.role;
        self.store.set_identity(Some(identity));
        Some(role)
    }

    fn fail(&self, message: &str) -> Outcome {
        self.notify(Notice::Error(message.to_string()));
        Outcome::Resolved { redirect: None }
    }

    fn notify(&self, notice: Notice) {
        (self.notifier)(notice);
    }
}

async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthUser, Profile};
    use std::cell::RefCell;

    fn payload(role: Role) -> AuthPayload {
        AuthPayload {
            user: AuthUser {
                id: "1".to_string(),
                email: "u@v.com".to_string(),
            },
            profile: Some(Profile {
                user_id: "1".to_string(),
                email: "u@v.com".to_string(),
                name: "U".to_string(),
                role,
            }),
        }
    }

    /// Scriptable identity service that records how often it was called.
    #[derive(Clone)]
    struct FakeService {
        sign_in: Result<AuthPayload, IdentityError>,
        sign_up: Result<AuthPayload, IdentityError>,
        oauth: Result<String, IdentityError>,
        sign_out: Result<(), IdentityError>,
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Default for FakeService {
        fn default() -> Self {
            Self {
                sign_in: Ok(payload(Role::Recruiter)),
                sign_up: Ok(payload(Role::Student)),
                oauth: Ok("https://accounts.example.com/authorize".to_string()),
                sign_out: Ok(()),
                calls: Rc::default(),
            }
        }
    }

    impl FakeService {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl IdentityService for FakeService {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthPayload, IdentityError> {
            self.calls.borrow_mut().push("sign_in");
            tokio::task::yield_now().await;
            self.sign_in.clone()
        }

        async fn sign_up(
            &self,
            _email: &str,
            _password: &str,
            _name: &str,
            _role: Role,
        ) -> Result<AuthPayload, IdentityError> {
            self.calls.borrow_mut().push("sign_up");
            tokio::task::yield_now().await;
            self.sign_up.clone()
        }

        async fn oauth_url(&self, _provider: &str) -> Result<String, IdentityError> {
            self.calls.borrow_mut().push("oauth_url");
            tokio::task::yield_now().await;
            self.oauth.clone()
        }

        async fn sign_out(&self) -> Result<(), IdentityError> {
            self.calls.borrow_mut().push("sign_out");
            tokio::task::yield_now().await;
            self.sign_out.clone()
        }

        async fn current_user(&self) -> Result<Option<Profile>, IdentityError> {
            self.calls.borrow_mut().push("current_user");
            Ok(None)
        }
    }

    fn flow_with(
        service: FakeService,
    ) -> (AuthFlow<FakeService>, SessionStore, Rc<RefCell<Vec<Notice>>>) {
        let store = SessionStore::new();
        let notices = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notices);
        let flow = AuthFlow::new(service, store.clone(), move |notice| {
            sink.borrow_mut().push(notice)
        })
        .with_signup_redirect_delay(Duration::ZERO);
        (flow, store, notices)
    }

    #[tokio::test]
    async fn test_sign_in_commits_identity_and_redirects_to_role_dashboard() {
        let (flow, store, notices) = flow_with(FakeService::default());

        let outcome = flow.sign_in("u@v.com", "goodpass").await;

        assert_eq!(
            outcome,
            Outcome::Resolved {
                redirect: Some(NavTarget::Dashboard(Role::Recruiter)),
            }
        );
        assert_eq!(store.identity().map(|i| i.role), Some(Role::Recruiter));
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Success("Welcome back!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_rejected_sign_in_commits_nothing() {
        let service = FakeService {
            sign_in: Err(IdentityError::Rejected("bad credentials".to_string())),
            ..Default::default()
        };
        let (flow, store, notices) = flow_with(service);

        let outcome = flow.sign_in("u@v.com", "wrong").await;

        assert_eq!(outcome, Outcome::Resolved { redirect: None });
        assert!(store.identity().is_none());
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Error("Invalid email or password".to_string())]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_reports_generic_message() {
        let service = FakeService {
            sign_in: Err(IdentityError::Transport("connection refused".to_string())),
            ..Default::default()
        };
        let (flow, store, notices) = flow_with(service);

        flow.sign_in("u@v.com", "goodpass").await;

        assert!(store.identity().is_none());
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Error("Something went wrong".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_profile_is_a_failure_not_a_silent_noop() {
        let mut ok = payload(Role::Recruiter);
        ok.profile = None;
        let service = FakeService {
            sign_in: Ok(ok),
            ..Default::default()
        };
        let (flow, store, notices) = flow_with(service);

        let outcome = flow.sign_in("u@v.com", "goodpass").await;

        assert_eq!(outcome, Outcome::Resolved { redirect: None });
        assert!(store.identity().is_none());
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Error("Invalid email or password".to_string())]
        );
    }

    #[tokio::test]
    async fn test_sign_up_commits_identity_with_chosen_role() {
        let (flow, store, notices) = flow_with(FakeService::default());

        let outcome = flow.sign_up("u@v.com", "secret1", "U", Role::Student).await;

        assert_eq!(
            outcome,
            Outcome::Resolved {
                redirect: Some(NavTarget::Dashboard(Role::Student)),
            }
        );
        assert_eq!(store.identity().map(|i| i.role), Some(Role::Student));
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Success("Account created successfully!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_rejected_sign_up_reports_account_creation_failure() {
        let service = FakeService {
            sign_up: Err(IdentityError::Rejected("duplicate email".to_string())),
            ..Default::default()
        };
        let (flow, store, notices) = flow_with(service);

        flow.sign_up("u@v.com", "secret1", "U", Role::Student).await;

        assert!(store.identity().is_none());
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Error("Failed to create account".to_string())]
        );
    }

    #[tokio::test]
    async fn test_oauth_initiation_redirects_without_commit_or_notice() {
        let (flow, store, notices) = flow_with(FakeService::default());

        let outcome = flow.sign_in_with_oauth().await;

        assert_eq!(
            outcome,
            Outcome::Resolved {
                redirect: Some(NavTarget::External(
                    "https://accounts.example.com/authorize".to_string()
                )),
            }
        );
        assert!(store.identity().is_none());
        assert!(notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_oauth_initiation_failure_is_surfaced() {
        let service = FakeService {
            oauth: Err(IdentityError::Transport("connection refused".to_string())),
            ..Default::default()
        };
        let (flow, _store, notices) = flow_with(service);

        let outcome = flow.sign_in_with_oauth().await;

        assert_eq!(outcome, Outcome::Resolved { redirect: None });
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Error("Failed to sign in with Google".to_string())]
        );
    }

    #[tokio::test]
    async fn test_sign_out_clears_identity_even_when_remote_fails() {
        let service = FakeService {
            sign_out: Err(IdentityError::Transport("connection refused".to_string())),
            ..Default::default()
        };
        let (flow, store, notices) = flow_with(service);
        store.set_identity(Some(payload(Role::Student).profile.unwrap().to_identity()));

        let outcome = flow.sign_out().await;

        assert!(store.identity().is_none());
        assert_eq!(
            outcome,
            Outcome::Resolved {
                redirect: Some(NavTarget::Landing),
            }
        );
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Error("Failed to sign out".to_string())]
        );
    }

    #[tokio::test]
    async fn test_sign_out_reports_remote_success() {
        let (flow, store, notices) = flow_with(FakeService::default());
        store.set_identity(Some(payload(Role::Recruiter).profile.unwrap().to_identity()));

        flow.sign_out().await;

        assert!(store.identity().is_none());
        assert_eq!(
            *notices.borrow(),
            vec![Notice::Success("Signed out successfully".to_string())]
        );
    }

    #[tokio::test]
    async fn test_second_submission_is_suppressed_while_one_is_outstanding() {
        let service = FakeService::default();
        let (flow, _store, notices) = flow_with(service.clone());

        let (first, second) = tokio::join!(
            flow.sign_in("u@v.com", "goodpass"),
            flow.sign_in("u@v.com", "goodpass")
        );

        assert!(matches!(first, Outcome::Resolved { .. }));
        assert_eq!(second, Outcome::Suppressed);
        assert_eq!(service.calls(), vec!["sign_in"]);
        assert_eq!(notices.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_latch_releases_after_every_outcome() {
        let rejected = FakeService {
            sign_in: Err(IdentityError::Transport("connection refused".to_string())),
            ..Default::default()
        };
        let (flow, _store, _notices) = flow_with(rejected);

        flow.sign_in("u@v.com", "goodpass").await;
        assert!(!flow.submitting());

        // A fresh attempt goes through once the previous one resolved.
        let outcome = flow.sign_in("u@v.com", "goodpass").await;
        assert!(matches!(outcome, Outcome::Resolved { .. }));
    }
}

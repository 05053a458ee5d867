//! # API crate — identity-service boundary and authentication flow
//!
//! This crate owns everything between the credential form and the session
//! store: the contract of the external identity service, the HTTP client that
//! speaks it, the pure form validator, and the flow that sequences a single
//! authentication attempt.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types (`AuthUser`, `Profile`, `AuthPayload`) and transient form input |
//! | [`client`] | [`IdentityClient`] — HTTP implementation of [`IdentityService`] |
//! | [`validate`] | Pure, synchronous credential validation |
//! | [`flow`] | [`AuthFlow`] — sign-in/sign-up/OAuth/sign-out orchestration |
//!
//! The session store is the only place a successful attempt is committed to;
//! nothing in this crate holds a competing copy of the identity.

use store::Role;

pub mod client;
pub mod flow;
pub mod models;
pub mod validate;

pub use client::IdentityClient;
pub use flow::{AuthFlow, NavTarget, Notice, Outcome};
pub use models::{AuthMode, AuthPayload, AuthUser, CredentialInput, Profile};
pub use validate::{validate, ValidationErrors};

/// Errors produced by the identity-service boundary.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum IdentityError {
    /// The service processed the request and rejected it (bad credentials,
    /// duplicate account, unknown provider, ...).
    #[error("{0}")]
    Rejected(String),
    /// The request never completed: connection failure, timeout, or a body
    /// that could not be decoded.
    #[error("identity service unreachable: {0}")]
    Transport(String),
}

/// Contract of the external identity service.
///
/// Consumed, never implemented, by the session core: [`IdentityClient`] is
/// the HTTP implementation, tests substitute their own.
pub trait IdentityService {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<AuthPayload, IdentityError>>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> impl std::future::Future<Output = Result<AuthPayload, IdentityError>>;

    /// URL to send the browser to for a redirect-based OAuth sign-in.
    fn oauth_url(
        &self,
        provider: &str,
    ) -> impl std::future::Future<Output = Result<String, IdentityError>>;

    fn sign_out(&self) -> impl std::future::Future<Output = Result<(), IdentityError>>;

    /// The profile attached to the service's durable session, if any.
    /// Used to re-hydrate the session at startup and after OAuth callbacks.
    fn current_user(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Profile>, IdentityError>>;
}

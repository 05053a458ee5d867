//! # Wire and form models for authentication
//!
//! Two families of types live here:
//!
//! - The identity-service wire model: [`AuthUser`], [`Profile`] and
//!   [`AuthPayload`], mirroring what sign-in and sign-up responses carry.
//!   [`Profile`] is the client-safe projection that becomes the committed
//!   [`store::Identity`].
//! - Transient form state: [`CredentialInput`] and [`AuthMode`]. Form input
//!   is never persisted; it is discarded once an attempt resolves.

use serde::{Deserialize, Serialize};
use store::{Identity, Role};

/// Minimal account record returned by the identity service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Profile record attached to an account.
///
/// Its absence on an otherwise successful sign-in is treated as a failed
/// attempt, never as a user with null fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Profile {
    /// Project into the identity committed to the session store.
    pub fn to_identity(&self) -> Identity {
        Identity {
            id: self.user_id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Payload of a successful sign-in or sign-up response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: AuthUser,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Which half of the toggle form an attempt comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Transient state of the credential form. Never persisted; the name and
/// confirm-password fields are only meaningful for sign-up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CredentialInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub confirm_password: String,
}

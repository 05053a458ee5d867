//! # Domain models for the signed-in session
//!
//! Defines the identity committed to the session store after a successful
//! authentication. These types are `Serialize + Deserialize` so they can cross
//! the client/service boundary unchanged.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | Account class — recruiter or student. Drives which dashboard and secondary routes are reachable. |
//! | [`Identity`] | The authenticated user: id, email, display name and role. Exists only between a successful sign-in/sign-up and the next sign-out. |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role. Determines the dashboard and the role-scoped routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Recruiter,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Recruiter => "recruiter",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRoleError(String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recruiter" => Ok(Role::Recruiter),
            "student" => Ok(Role::Student),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// The authenticated user as held by the session store.
///
/// Created only from a successful identity-service response; replaced
/// wholesale on every commit, cleared on sign-out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

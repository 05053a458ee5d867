//! # HTTP client for the identity service
//!
//! [`IdentityClient`] implements [`IdentityService`] over the service's JSON
//! route surface:
//!
//! | Method | Route |
//! |--------|-------|
//! | [`sign_in`](IdentityService::sign_in) | `POST /api/auth/login` |
//! | [`sign_up`](IdentityService::sign_up) | `POST /api/auth/register` |
//! | [`oauth_url`](IdentityService::oauth_url) | `GET /api/auth/login/{provider}` |
//! | [`sign_out`](IdentityService::sign_out) | `POST /api/auth/logout` |
//! | [`current_user`](IdentityService::current_user) | `GET /api/auth/me` |
//!
//! Non-success statuses become [`IdentityError::Rejected`] (carrying the
//! service's `error` message when one is present); connection and decode
//! failures become [`IdentityError::Transport`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use store::Role;

use crate::models::{AuthPayload, Profile};
use crate::{IdentityError, IdentityService};

/// HTTP implementation of [`IdentityService`].
#[derive(Clone, Debug)]
pub struct IdentityClient {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
    role: Role,
}

#[derive(Deserialize)]
struct OauthUrlBody {
    url: String,
}

impl IdentityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client pointed at the origin the application was served from.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn rejection(response: reqwest::Response) -> IdentityError {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => IdentityError::Rejected(body.error),
            Err(_) => IdentityError::Rejected(format!("identity service returned {status}")),
        }
    }
}

fn transport(err: reqwest::Error) -> IdentityError {
    IdentityError::Transport(err.to_string())
}

impl IdentityService for IdentityClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthPayload, IdentityError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&SignInBody { email, password })
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        response.json::<AuthPayload>().await.map_err(transport)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<AuthPayload, IdentityError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&SignUpBody {
                email,
                password,
                name,
                role,
            })
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        response.json::<AuthPayload>().await.map_err(transport)
    }

    async fn oauth_url(&self, provider: &str) -> Result<String, IdentityError> {
        let response = self
            .http
            .get(self.url(&format!("/api/auth/login/{provider}")))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        response
            .json::<OauthUrlBody>()
            .await
            .map(|body| body.url)
            .map_err(transport)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        let response = self
            .http
            .post(self.url("/api/auth/logout"))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<Profile>, IdentityError> {
        let response = self
            .http
            .get(self.url("/api/auth/me"))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        response.json::<Option<Profile>>().await.map_err(transport)
    }
}

// src/backend.rs
//! Blocking client for the hosted database-as-a-service backend
//! (Supabase-compatible REST and auth endpoints).

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::config::BackendConfig;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Result of a successful password sign-in. Only the user is kept; the
/// backend's own tokens are not used by this site.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub user: AuthSessionUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct BackendClient {
    base: Url,
    anon_key: String,
    http: Client,
}

impl BackendClient {
    pub fn new(cfg: &BackendConfig) -> Self {
        Self {
            base: cfg.url.clone(),
            anon_key: cfg.anon_key.clone(),
            http: Client::new(),
        }
    }

    pub fn rest_url(&self, table: &str) -> Result<Url, BackendError> {
        Ok(self.base.join("rest/v1/")?.join(table)?)
    }

    pub fn token_url(&self) -> Result<Url, BackendError> {
        let mut url = self.base.join("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        Ok(url)
    }

    /// Insert rows into a collection. The backend is asked not to echo them back.
    pub fn insert_rows<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<(), BackendError> {
        let url = self.rest_url(table)?;

        let resp = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Content-Type", mime::APPLICATION_JSON.as_ref())
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            Err(BackendError::Api { status, body })
        }
    }

    pub fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, BackendError> {
        let url = self.token_url()?;

        let resp = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .header("Content-Type", mime::APPLICATION_JSON.as_ref())
            .json(&PasswordGrant { email, password })
            .send()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(BackendError::Api { status, body });
        }

        resp.json::<AuthSession>()
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

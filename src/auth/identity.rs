// src/auth/identity.rs
use thiserror::Error;

use crate::backend::{BackendClient, BackendError};

/// A signed-in account as known to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid login credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub trait IdentityProvider: Send + Sync {
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;
}

/// Email/password sign-in against the hosted backend's auth service.
pub struct SupabaseIdentity {
    client: BackendClient,
}

impl SupabaseIdentity {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl IdentityProvider for SupabaseIdentity {
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        match self.client.sign_in_with_password(email, password) {
            Ok(session) => Ok(AuthUser {
                email: session.user.email.unwrap_or_else(|| email.to_lowercase()),
                id: session.user.id,
            }),
            // GoTrue answers bad credentials with 400
            Err(BackendError::Api { status: 400, .. }) => Err(AuthError::InvalidCredentials),
            Err(e) => Err(e.into()),
        }
    }
}

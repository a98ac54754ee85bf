//! Sign-in, sign-up and password recovery payloads.
//!
//! The real backend answers sign-in with a flat `{id, email, displayName,
//! token}` record while the local mock server answers `{token, user}`. Both
//! are accepted and normalised to a [`Session`].

use serde::{Deserialize, Serialize};

use super::users_model::User;
use crate::errors::{Error, Result, ValidationError};
use crate::session::{Session, SessionUser};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "password".to_string(),
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        if self.display_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "displayName".to_string(),
            )));
        }
        if self.password.chars().count() < 6 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Password must be at least 6 characters".to_string(),
            )));
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "email".to_string(),
        )));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid email address: {}",
            email
        )))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `{token, user}` as returned by the mock server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WrappedAuthResponse {
    pub token: String,
    pub user: SessionUser,
}

/// `{id, email, displayName, token}` as returned by the real backend.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlatAuthResponse {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AuthResponse {
    Wrapped(WrappedAuthResponse),
    Flat(FlatAuthResponse),
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        match response {
            AuthResponse::Wrapped(wrapped) => Session {
                token: wrapped.token,
                user: wrapped.user,
            },
            AuthResponse::Flat(flat) => Session {
                token: flat.token,
                user: SessionUser {
                    id: flat.id,
                    email: flat.email,
                    display_name: flat.display_name,
                },
            },
        }
    }
}

/// Sign-up answers with a session (mock server) or just the created user.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RegisterResponse {
    Authenticated(AuthResponse),
    Created(User),
}

impl RegisterResponse {
    pub fn into_session(self) -> Option<Session> {
        match self {
            RegisterResponse::Authenticated(auth) => Some(auth.into()),
            RegisterResponse::Created(_) => None,
        }
    }
}

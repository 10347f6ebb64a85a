//! Auth session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the sidebar user menu and every authenticated
//! backend call (bearer token). Restored from `localStorage` at startup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{SignInRequest, SignInResponse, SignUpRequest, User};
use crate::util::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl AuthState {
    /// Session persisted by a previous sign-in, if any.
    #[must_use]
    pub fn from_storage() -> Self {
        Self {
            user: storage::load_json(storage::USER_KEY),
            access_token: storage::load_string(storage::ACCESS_TOKEN_KEY),
            refresh_token: storage::load_string(storage::REFRESH_TOKEN_KEY),
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some() && self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Adopt a sign-in response and persist it.
    pub fn sign_in(&mut self, response: SignInResponse) {
        storage::save_json(storage::USER_KEY, &response.user);
        storage::save_string(storage::ACCESS_TOKEN_KEY, &response.access_token);
        storage::save_string(storage::REFRESH_TOKEN_KEY, &response.refresh_token);
        log::info!("auth: signed in as {}", response.user.display_name());
        self.user = Some(response.user);
        self.access_token = Some(response.access_token);
        self.refresh_token = Some(response.refresh_token).filter(|t| !t.is_empty());
    }

    /// Forget the session, in memory and in storage.
    pub fn sign_out(&mut self) {
        for key in [storage::USER_KEY, storage::ACCESS_TOKEN_KEY, storage::REFRESH_TOKEN_KEY] {
            storage::remove(key);
        }
        *self = Self::default();
    }
}

/// Client-side form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormInvalid {
    #[error("Please enter your {0}.")]
    Missing(&'static str),
    #[error("Please enter a valid email address.")]
    BadEmail,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

fn required(value: &str, field: &'static str) -> Result<String, FormInvalid> {
    let value = value.trim();
    if value.is_empty() { Err(FormInvalid::Missing(field)) } else { Ok(value.to_owned()) }
}

fn email(value: &str) -> Result<String, FormInvalid> {
    let value = required(value, "email")?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(value),
        _ => Err(FormInvalid::BadEmail),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<SignInRequest, FormInvalid> {
        Ok(SignInRequest { email: email(&self.email)?, password: required(&self.password, "password")? })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            gender: "male".to_owned(),
        }
    }
}

impl SignUpForm {
    /// All fields must be non-empty and the passwords must match.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<SignUpRequest, FormInvalid> {
        let username = required(&self.username, "username")?;
        let email = email(&self.email)?;
        let password = required(&self.password, "password")?;
        let confirm_password = required(&self.confirm_password, "password confirmation")?;
        let gender = required(&self.gender, "gender")?;
        if password != confirm_password {
            return Err(FormInvalid::PasswordMismatch);
        }
        Ok(SignUpRequest { username, email, password, confirm_password, gender })
    }
}

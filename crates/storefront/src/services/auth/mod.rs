//! Login and registration form validation.
//!
//! The identity provider does the actual sign-in. This module checks the
//! submitted fields first so obviously bad input never leaves the client,
//! and collects one message per failing field for display under the form.

mod error;

pub use error::{AuthError, AuthFlow};

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use nexcart_core::Email;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum display-name length, after trimming.
const MIN_NAME_LENGTH: usize = 2;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Credentials that passed login validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: Email,
    pub password: String,
}

/// Registration details that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Display name, trimmed.
    pub name: String,
    pub email: Email,
    pub password: String,
}

// =============================================================================
// Errors
// =============================================================================

/// Form field an error message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    /// Whole-form error from the identity provider.
    Submit,
}

impl FormField {
    /// Field name as used by the form markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} form field(s) invalid", .errors.len())]
pub struct FormErrors {
    errors: BTreeMap<FormField, &'static str>,
}

impl FormErrors {
    /// Submit error for a provider failure during `flow`.
    #[must_use]
    pub fn from_auth_error(err: &AuthError, flow: AuthFlow) -> Self {
        let mut errors = Self::default();
        errors.insert(FormField::Submit, err.user_message(flow));
        errors
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Check the email field, recording a message on failure.
fn validate_email(raw: &str, errors: &mut FormErrors) -> Option<Email> {
    if raw.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required");
        return None;
    }
    match Email::parse(raw) {
        Ok(email) => Some(email),
        Err(e) => {
            tracing::debug!(error = %e, "email rejected");
            errors.insert(FormField::Email, "Please enter a valid email");
            None
        }
    }
}

impl LoginForm {
    /// Validate the login fields.
    ///
    /// # Errors
    ///
    /// Returns `FormErrors` with a message for every failing field.
    pub fn validate(&self) -> Result<LoginCredentials, FormErrors> {
        let mut errors = FormErrors::default();
        let email = validate_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert(FormField::Password, "Password is required");
        }

        match email {
            Some(email) if errors.is_empty() => Ok(LoginCredentials {
                email,
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}

impl RegisterForm {
    /// Validate the registration fields.
    ///
    /// # Errors
    ///
    /// Returns `FormErrors` with a message for every failing field.
    pub fn validate(&self) -> Result<Registration, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(FormField::Name, "Name is required");
        } else if name.chars().count() < MIN_NAME_LENGTH {
            errors.insert(FormField::Name, "Name must be at least 2 characters");
        }

        let email = validate_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert(FormField::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.insert(FormField::Password, "Password must be at least 6 characters");
        }

        if self.confirm_password.is_empty() {
            errors.insert(FormField::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.insert(FormField::ConfirmPassword, "Passwords do not match");
        }

        match email {
            Some(email) if errors.is_empty() => Ok(Registration {
                name: name.to_string(),
                email,
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}

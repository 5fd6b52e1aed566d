//! Identity-provider error codes.
//!
//! Sign-in and sign-up are delegated to a hosted identity provider, which
//! reports failures as string codes such as `auth/wrong-password`. This
//! module turns them into the messages shown under the form.

use thiserror::Error;

/// Errors reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No account exists for the email.
    #[error("user not found")]
    UserNotFound,

    /// Password did not match.
    #[error("wrong password")]
    WrongPassword,

    /// Email/password pair rejected without saying which part was wrong.
    #[error("invalid credential")]
    InvalidCredential,

    /// Provider is throttling sign-in attempts.
    #[error("too many requests")]
    TooManyRequests,

    /// Account has been disabled.
    #[error("user disabled")]
    UserDisabled,

    /// Email already belongs to an account.
    #[error("email already in use")]
    EmailAlreadyInUse,

    /// Provider rejected the email format.
    #[error("invalid email")]
    InvalidEmail,

    /// Provider rejected the password as too weak.
    #[error("weak password")]
    WeakPassword,

    /// Any code not listed above.
    #[error("identity provider error: {0}")]
    Other(String),
}

/// Which form a provider error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Register,
}

impl AuthError {
    /// Map a provider code (e.g. `auth/user-disabled`) to an error.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/user-not-found" => Self::UserNotFound,
            "auth/wrong-password" => Self::WrongPassword,
            "auth/invalid-credential" => Self::InvalidCredential,
            "auth/too-many-requests" => Self::TooManyRequests,
            "auth/user-disabled" => Self::UserDisabled,
            "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "auth/invalid-email" => Self::InvalidEmail,
            "auth/weak-password" => Self::WeakPassword,
            other => Self::Other(other.to_string()),
        }
    }

    /// Message shown to the user for a failed submit.
    ///
    /// Codes that don't belong to `flow` get that flow's generic message.
    #[must_use]
    pub fn user_message(&self, flow: AuthFlow) -> &'static str {
        match (flow, self) {
            (AuthFlow::Login, Self::UserNotFound) => "No account found with this email",
            (AuthFlow::Login, Self::WrongPassword) => "Incorrect password",
            (AuthFlow::Login, Self::TooManyRequests) => {
                "Too many failed attempts. Please try again later"
            }
            (AuthFlow::Login, Self::UserDisabled) => "This account has been disabled",
            (AuthFlow::Login, _) => "Invalid email or password",
            (AuthFlow::Register, Self::EmailAlreadyInUse) => "This email is already registered",
            (AuthFlow::Register, Self::InvalidEmail) => "Invalid email address",
            (AuthFlow::Register, Self::WeakPassword) => "Password is too weak",
            (AuthFlow::Register, _) => "Something went wrong. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(AuthError::from_code("auth/wrong-password"), AuthError::WrongPassword);
        assert_eq!(
            AuthError::from_code("auth/network-request-failed"),
            AuthError::Other("auth/network-request-failed".to_string())
        );
    }

    #[test]
    fn test_login_messages() {
        let msg = |code: &str| AuthError::from_code(code).user_message(AuthFlow::Login);
        assert_eq!(msg("auth/user-not-found"), "No account found with this email");
        assert_eq!(msg("auth/wrong-password"), "Incorrect password");
        assert_eq!(msg("auth/invalid-credential"), "Invalid email or password");
        assert_eq!(
            msg("auth/too-many-requests"),
            "Too many failed attempts. Please try again later"
        );
        assert_eq!(msg("auth/user-disabled"), "This account has been disabled");
        assert_eq!(msg("auth/internal-error"), "Invalid email or password");
    }

    #[test]
    fn test_register_messages() {
        let msg = |code: &str| AuthError::from_code(code).user_message(AuthFlow::Register);
        assert_eq!(msg("auth/email-already-in-use"), "This email is already registered");
        assert_eq!(msg("auth/invalid-email"), "Invalid email address");
        assert_eq!(msg("auth/weak-password"), "Password is too weak");
        assert_eq!(msg("auth/user-disabled"), "Something went wrong. Please try again.");
    }
}

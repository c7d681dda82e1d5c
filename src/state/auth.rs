//! Login overlay state: which form is showing and its input checks.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ClientError;
use crate::net::types::Credentials;

/// Whether the overlay submits to `/login` or `/register`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Heading and submit-button label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// Prompt shown next to the mode switch link.
    #[must_use]
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Register => "Already have an account?",
        }
    }

    /// Label of the link that switches to the other mode.
    #[must_use]
    pub fn switch_label(self) -> &'static str {
        self.toggled().title()
    }
}

/// Build credentials from raw form input. The email is trimmed; the
/// password is taken verbatim.
///
/// # Errors
///
/// [`ClientError::Validation`] when either field is empty.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, ClientError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ClientError::Validation("Email and password required"));
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

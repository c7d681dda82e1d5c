//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every remote failure is caught at the call site and shown to the user with
//! a blocking alert. [`ClientError::alert_text`] builds that text so pages do
//! not each reinvent the wording.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::http::Method;

/// Error returned by client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The backend rejected the bearer token (HTTP 401). The token has been
    /// cleared and the user must sign in again.
    #[error("session expired")]
    AuthExpired,
    /// Any other non-2xx response.
    #[error("{method} {path} failed: {status} {body}")]
    RequestFailed { method: Method, path: String, status: u16, body: String },
    /// Required input missing; raised before any request is sent.
    #[error("{0}")]
    Validation(&'static str),
    /// The video URL carries no recognizable YouTube video id.
    #[error("Invalid YouTube URL")]
    InvalidVideoUrl,
    /// `/login` answered without a token.
    #[error("Login failed")]
    LoginFailed,
    /// `/register` rejected the request; carries the backend's message.
    #[error("{0}")]
    RegistrationFailed(String),
    /// The request never produced a response (network, CORS, ...).
    #[error("network error: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The UI state the operation would update has been torn down.
    #[error("client state is no longer mounted")]
    Detached,
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl ClientError {
    /// True when the failure means the session is gone and the UI must return
    /// to the login overlay.
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// Text for the user-facing alert. `context` prefixes remote failures,
    /// e.g. `"Failed to delete board"`.
    #[must_use]
    pub fn alert_text(&self, context: &str) -> String {
        match self {
            Self::AuthExpired => "Session expired. Please login again.".to_owned(),
            Self::Validation(_) | Self::InvalidVideoUrl | Self::LoginFailed | Self::RegistrationFailed(_) => {
                self.to_string()
            }
            Self::RequestFailed { .. } | Self::Transport(_) | Self::Decode(_) | Self::Detached => {
                format!("{context}: {self}")
            }
        }
    }
}

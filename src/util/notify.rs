//! Blocking browser dialogs: `alert`, `confirm`, `prompt`.
//!
//! Outside the browser these log and return the "declined" answer so callers
//! never act on a confirmation nobody gave.

use crate::error::ClientError;

/// Show a blocking message.
pub fn alert(message: &str) {
    log::info!("alert: {message}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Ask a yes/no question. `false` when declined or unavailable.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Ask for a line of text. `None` when cancelled or unavailable.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.prompt_with_message(message).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        None
    }
}

/// Surface a failed operation to the user.
pub fn report(context: &str, err: &ClientError) {
    log::warn!("{context}: {err}");
    alert(&err.alert_text(context));
}

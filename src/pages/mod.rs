//! Page modules for the two top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app shows exactly one page: the login overlay while signed out, the
//! hub once a token exists. Each page owns its local form state and
//! delegates rendering details to `components`.

pub mod hub;
pub mod login;

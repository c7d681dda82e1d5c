//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `app` owns the board/thumbnail cache and selection, `filter` and `flags`
//! are the view configuration it carries, `session` holds the token, and
//! `auth` covers the login overlay.

pub mod app;
pub mod auth;
pub mod filter;
pub mod flags;
pub mod session;
#[cfg(test)]
pub(crate) mod test_helpers;

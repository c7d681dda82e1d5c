//! Session store: the bearer token and where it is persisted.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token survives reloads in `localStorage`; its presence decides whether
//! the login overlay or the board hub is shown. The HTTP adapter clears it on
//! a 401.
//!
//! TRADE-OFFS
//! ==========
//! The client is single-threaded, so the store is shared with `Rc` rather
//! than `Arc` + lock.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::TOKEN_STORAGE_KEY;

/// Where the token is kept between page loads.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed storage used in the browser.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    key: &'static str,
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self { key: TOKEN_STORAGE_KEY }
    }
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        crate::util::storage::load_string(self.key)
    }

    fn save(&self, token: &str) {
        crate::util::storage::save_string(self.key, token);
    }

    fn clear(&self) {
        crate::util::storage::remove(self.key);
    }
}

/// Process-local storage; used off-browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    token: Rc<RefCell<Option<String>>>,
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Handle to the current session token. Cloning shares the same storage.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn TokenStorage>,
}

impl Session {
    pub fn new(storage: Rc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// Session persisted in the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage::default()))
    }

    /// Current token; empty strings count as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.load().filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        self.storage.save(token);
    }

    pub fn sign_out(&self) {
        self.storage.clear();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

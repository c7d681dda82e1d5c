//! Controller: one method per user action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each operation validates input, performs at most one mutation request,
//! then updates [`AppState`] through a [`StateHandle`]. In the browser the
//! handle is a Leptos `RwSignal`, so the write itself triggers re-render;
//! tests use a plain `RefCell`.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned to the caller, which alerts the user. An
//! [`ClientError::AuthExpired`] additionally resets the state so the login
//! overlay comes back (the adapter has already dropped the token).

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::error::ClientError;
use crate::net::api::BoardApi;
use crate::net::http::Transport;
use crate::net::types::NewThumbnail;
use crate::state::app::AppState;
use crate::state::auth::validate_credentials;
use crate::state::flags::FlagKey;
use crate::util::video::youtube_id;

/// Title used when the add form leaves it blank.
pub const DEFAULT_TITLE: &str = "New Content";
/// Category used when the add form leaves it blank.
pub const DEFAULT_CATEGORY: &str = "general";

/// Access to the shared [`AppState`]. Both methods return `None` once the
/// underlying storage is gone.
pub trait StateHandle {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R>;
}

impl StateHandle for Rc<RefCell<AppState>> {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl StateHandle for RwSignal<AppState> {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Validate add-form input into a request body. Blank title and category
/// fall back to [`DEFAULT_TITLE`] and [`DEFAULT_CATEGORY`].
///
/// # Errors
///
/// [`ClientError::Validation`] for a blank URL, [`ClientError::InvalidVideoUrl`]
/// when it carries no YouTube video id.
pub fn prepare_thumbnail(video_url: &str, title: &str, category: &str) -> Result<NewThumbnail, ClientError> {
    let video_url = video_url.trim();
    if video_url.is_empty() {
        return Err(ClientError::Validation("Video URL required"));
    }
    if youtube_id(video_url).is_none() {
        return Err(ClientError::InvalidVideoUrl);
    }
    let or_default = |value: &str, default: &str| {
        let value = value.trim();
        if value.is_empty() { default.to_owned() } else { value.to_owned() }
    };
    Ok(NewThumbnail {
        video_url: video_url.to_owned(),
        title: or_default(title, DEFAULT_TITLE),
        category: or_default(category, DEFAULT_CATEGORY),
    })
}

pub struct Controller<T, S> {
    api: BoardApi<T>,
    state: S,
}

#[cfg(feature = "csr")]
impl Controller<crate::net::http::GlooTransport, RwSignal<AppState>> {
    /// Controller wired to `fetch`, `localStorage`, and the app signal.
    pub fn browser(config: crate::config::ClientConfig, state: RwSignal<AppState>) -> Self {
        let session = crate::state::session::Session::browser();
        let http = crate::net::http::HttpClient::new(config, session, crate::net::http::GlooTransport);
        Self::new(BoardApi::new(http), state)
    }
}

impl<T: Transport, S: StateHandle> Controller<T, S> {
    pub fn new(api: BoardApi<T>, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> Result<R, ClientError> {
        self.state.read(f).ok_or(ClientError::Detached)
    }

    fn write<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Result<R, ClientError> {
        self.state.write(f).ok_or(ClientError::Detached)
    }

    fn on_error(&self, err: ClientError) -> ClientError {
        if err.is_auth_expired() {
            log::warn!("session expired; returning to login");
            let _ = self.state.write(AppState::reset);
        }
        err
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Sync `authenticated` with the persisted token at startup.
    ///
    /// # Errors
    ///
    /// [`ClientError::Detached`] if the state is gone.
    pub fn restore_session(&self) -> Result<bool, ClientError> {
        let authenticated = self.api.session().is_authenticated();
        self.write(|s| s.authenticated = authenticated)?;
        Ok(authenticated)
    }

    /// Sign in, persist the token, and load boards.
    ///
    /// # Errors
    ///
    /// Validation, [`ClientError::LoginFailed`], or any board-loading error.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let credentials = validate_credentials(email, password)?;
        let token = self.api.login(&credentials).await?;
        self.api.session().sign_in(&token);
        self.write(|s| *s = AppState::new(true))?;
        log::info!("signed in");
        self.load_boards().await
    }

    /// Create an account. The user signs in separately afterwards.
    ///
    /// # Errors
    ///
    /// Validation or [`ClientError::RegistrationFailed`].
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let credentials = validate_credentials(email, password)?;
        self.api.register(&credentials).await
    }

    /// Drop the token and all session state.
    pub fn logout(&self) {
        self.api.session().sign_out();
        let _ = self.state.write(AppState::reset);
        log::info!("signed out");
    }

    // =========================================================================
    // Boards
    // =========================================================================

    /// Fetch boards, re-derive the selection, and load its thumbnails.
    ///
    /// # Errors
    ///
    /// Any adapter error from either request.
    pub async fn load_boards(&self) -> Result<(), ClientError> {
        let boards = self.api.list_boards().await.map_err(|e| self.on_error(e))?;
        log::debug!("loaded {} boards", boards.len());
        let selected = self.write(|s| s.apply_boards(boards))?;
        match selected {
            Some(board_id) => self.load_thumbnails(&board_id).await,
            None => Ok(()),
        }
    }

    /// Fetch a board's thumbnails and replace its cache entry. Responses and
    /// failures superseded by a newer load (or a deleted board) are dropped.
    ///
    /// # Errors
    ///
    /// Any adapter error of a current load; the board is also marked as
    /// failed. An expired session is reported even for a stale load.
    pub async fn load_thumbnails(&self, board_id: &str) -> Result<(), ClientError> {
        let ticket = self.write(|s| s.begin_load(board_id))?;
        match self.api.list_thumbnails(board_id).await {
            Ok(thumbnails) => {
                let count = thumbnails.len();
                if self.write(|s| s.finish_load(&ticket, thumbnails))? {
                    log::debug!("cached {count} thumbnails for board {board_id}");
                } else {
                    log::debug!("discarded stale thumbnail response for board {board_id}");
                }
                Ok(())
            }
            Err(err) => {
                let recorded = self.write(|s| s.fail_load(&ticket))?;
                if !recorded && !err.is_auth_expired() {
                    log::debug!("discarded stale thumbnail failure for board {board_id}: {err}");
                    return Ok(());
                }
                Err(self.on_error(err))
            }
        }
    }

    /// Select a board (filter resets to All) and load its thumbnails.
    ///
    /// # Errors
    ///
    /// Any adapter error from the load.
    pub async fn switch_board(&self, board_id: &str) -> Result<(), ClientError> {
        if !self.write(|s| s.select_board(board_id))? {
            log::debug!("ignoring selection of unknown board {board_id}");
            return Ok(());
        }
        self.load_thumbnails(board_id).await
    }

    /// # Errors
    ///
    /// [`ClientError::Validation`] for a blank name, or any adapter error.
    pub async fn create_board(&self, name: &str) -> Result<(), ClientError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::Validation("Please enter a board name"));
        }
        let created = self.api.create_board(name).await.map_err(|e| self.on_error(e))?;
        log::debug!("created board {}", created.id);
        self.load_boards().await
    }

    /// Delete a board, purge its cache, and reload the list so the
    /// selection is re-derived as on a fresh load.
    ///
    /// # Errors
    ///
    /// Any adapter error.
    pub async fn delete_board(&self, board_id: &str) -> Result<(), ClientError> {
        self.api.delete_board(board_id).await.map_err(|e| self.on_error(e))?;
        self.write(|s| s.purge_board(board_id))?;
        self.load_boards().await
    }

    // =========================================================================
    // Thumbnails
    // =========================================================================

    /// Add a thumbnail to the selected board, then reload that board.
    ///
    /// # Errors
    ///
    /// Validation errors before any request, or any adapter error.
    pub async fn add_thumbnail(&self, video_url: &str, title: &str, category: &str) -> Result<(), ClientError> {
        let board_id = self
            .read(|s| s.current_board_id.clone())?
            .ok_or(ClientError::Validation("Select or create a board first."))?;
        let body = prepare_thumbnail(video_url, title, category)?;
        let created = self
            .api
            .add_thumbnail(&board_id, &body)
            .await
            .map_err(|e| self.on_error(e))?;
        log::debug!("added thumbnail {} to board {board_id}", created.id);
        self.load_thumbnails(&board_id).await
    }

    /// Delete a thumbnail and drop it from the cache without reloading.
    ///
    /// # Errors
    ///
    /// Any adapter error.
    pub async fn remove_thumbnail(&self, thumbnail_id: &str) -> Result<(), ClientError> {
        self.api
            .delete_thumbnail(thumbnail_id)
            .await
            .map_err(|e| self.on_error(e))?;
        self.write(|s| s.remove_thumbnail(thumbnail_id))?;
        Ok(())
    }

    /// Flip a favorite server-side and patch the cached entry with the
    /// returned value. Returns that value.
    ///
    /// # Errors
    ///
    /// Any adapter error.
    pub async fn toggle_favorite(&self, thumbnail_id: &str) -> Result<bool, ClientError> {
        let favorite = self
            .api
            .toggle_favorite(thumbnail_id)
            .await
            .map_err(|e| self.on_error(e))?;
        self.write(|s| s.set_favorite(thumbnail_id, favorite))?;
        Ok(favorite)
    }

    // =========================================================================
    // Flags
    // =========================================================================

    /// Flip a feature flag; returns its new state.
    ///
    /// # Errors
    ///
    /// [`ClientError::Detached`] if the state is gone.
    pub fn toggle_flag(&self, key: FlagKey) -> Result<bool, ClientError> {
        self.write(|s| s.toggle_flag(key))
    }
}

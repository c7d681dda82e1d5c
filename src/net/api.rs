//! Typed REST endpoints of the thumbnail board backend.
//!
//! Thin layer over [`HttpClient`]: one method per endpoint, request bodies
//! and response shapes from [`super::types`]. Input validation happens one
//! level up in the controller, before any of these are called.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::IgnoredAny;

use super::http::{HttpClient, Transport};
use super::types::{
    Board, Created, Credentials, ErrorBody, FavoriteResponse, LoginResponse, NewBoard, NewThumbnail, Thumbnail,
};
use crate::error::ClientError;
use crate::state::session::Session;

pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const REGISTER_PATH: &str = "/register";
pub(crate) const BOARDS_PATH: &str = "/boards";

pub(crate) fn board_path(board_id: &str) -> String {
    format!("/boards/{board_id}")
}

pub(crate) fn board_thumbnails_path(board_id: &str) -> String {
    format!("/boards/{board_id}/thumbnails")
}

pub(crate) fn thumbnail_path(thumbnail_id: &str) -> String {
    format!("/thumbnails/{thumbnail_id}")
}

pub(crate) fn favorite_path(thumbnail_id: &str) -> String {
    format!("/thumbnails/{thumbnail_id}/favorite")
}

/// Client for the board/thumbnail endpoints.
pub struct BoardApi<T> {
    http: HttpClient<T>,
}

impl<T: Transport> BoardApi<T> {
    pub fn new(http: HttpClient<T>) -> Self {
        Self { http }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.http.session()
    }

    /// Create an account via `POST /register`.
    ///
    /// # Errors
    ///
    /// [`ClientError::RegistrationFailed`] with the backend's `error` text.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let response = self.http.post_credentials(REGISTER_PATH, credentials).await?;
        if response.is_success() {
            return Ok(());
        }
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "Registration failed".to_owned());
        Err(ClientError::RegistrationFailed(message))
    }

    /// Exchange credentials for a bearer token via `POST /login`.
    ///
    /// # Errors
    ///
    /// [`ClientError::LoginFailed`] when no token comes back.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let response = self.http.post_credentials(LOGIN_PATH, credentials).await?;
        let body: LoginResponse = serde_json::from_str(&response.body).unwrap_or_default();
        match body.token {
            Some(token) if response.is_success() && !token.is_empty() => Ok(token),
            _ => Err(ClientError::LoginFailed),
        }
    }

    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn list_boards(&self) -> Result<Vec<Board>, ClientError> {
        self.http.get(BOARDS_PATH).await
    }

    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn create_board(&self, name: &str) -> Result<Created, ClientError> {
        self.http.post(BOARDS_PATH, &NewBoard { name: name.to_owned() }).await
    }

    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn delete_board(&self, board_id: &str) -> Result<(), ClientError> {
        let _: IgnoredAny = self.http.delete(&board_path(board_id)).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn list_thumbnails(&self, board_id: &str) -> Result<Vec<Thumbnail>, ClientError> {
        self.http.get(&board_thumbnails_path(board_id)).await
    }

    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn add_thumbnail(&self, board_id: &str, thumbnail: &NewThumbnail) -> Result<Created, ClientError> {
        self.http.post(&board_thumbnails_path(board_id), thumbnail).await
    }

    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn delete_thumbnail(&self, thumbnail_id: &str) -> Result<(), ClientError> {
        let _: IgnoredAny = self.http.delete(&thumbnail_path(thumbnail_id)).await?;
        Ok(())
    }

    /// Flip the favorite flag server-side; returns the new value.
    ///
    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn toggle_favorite(&self, thumbnail_id: &str) -> Result<bool, ClientError> {
        let response: FavoriteResponse = self.http.patch(&favorite_path(thumbnail_id)).await?;
        Ok(response.favorite)
    }
}

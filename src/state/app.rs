//! Application state: boards, per-board thumbnail cache, selection, filter,
//! and feature flags.
//!
//! DESIGN
//! ======
//! One explicit struct replaces loose page-level globals. It is built when
//! the page starts, reset on logout or session expiry, and only mutated
//! through the transition methods below so the selection invariant holds:
//! a selected board id always refers to a board in `boards`.
//!
//! Thumbnail loads are ticketed. Each dispatch records a per-board sequence
//! number; a response is only stored when it answers the newest request for
//! a board that still exists.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::collections::{HashMap, HashSet};

use super::filter::Filter;
use super::flags::{FeatureFlags, FlagKey};
use crate::net::types::{Board, Thumbnail};

/// Identifies one in-flight thumbnail load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub board_id: String,
    seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Whether a session token is present; gates login overlay vs hub.
    pub authenticated: bool,
    /// Board list in server order.
    pub boards: Vec<Board>,
    /// Selected board, if any.
    pub current_board_id: Option<String>,
    pub filter: Filter,
    pub flags: FeatureFlags,
    /// Board id -> thumbnails in server order. Present only once loaded.
    thumbnails: HashMap<String, Vec<Thumbnail>>,
    /// Board id -> sequence number of the newest dispatched load.
    pending_loads: HashMap<String, u64>,
    /// Boards whose most recent load failed.
    failed_loads: HashSet<String>,
    next_seq: u64,
}

impl AppState {
    /// Fresh session state.
    #[must_use]
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated, ..Self::default() }
    }

    /// Drop everything, including flags; used on logout and session expiry.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn current_board(&self) -> Option<&Board> {
        let id = self.current_board_id.as_deref()?;
        self.boards.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn has_board(&self, board_id: &str) -> bool {
        self.boards.iter().any(|b| b.id == board_id)
    }

    /// Cached thumbnails for a board, if it has been loaded.
    #[must_use]
    pub fn thumbnails(&self, board_id: &str) -> Option<&[Thumbnail]> {
        self.thumbnails.get(board_id).map(Vec::as_slice)
    }

    /// Cached thumbnails of the selected board; empty when none are cached.
    #[must_use]
    pub fn current_thumbnails(&self) -> &[Thumbnail] {
        self.current_board_id
            .as_deref()
            .and_then(|id| self.thumbnails(id))
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn load_failed(&self, board_id: &str) -> bool {
        self.failed_loads.contains(board_id)
    }

    #[must_use]
    pub fn is_loading(&self, board_id: &str) -> bool {
        self.pending_loads.contains_key(board_id)
    }

    /// Replace the board list and re-derive the selection: keep it when the
    /// board still exists, otherwise fall back to the first board, or to none
    /// for an empty list. Cache entries of vanished boards are dropped.
    /// Returns the resulting selection.
    pub fn apply_boards(&mut self, boards: Vec<Board>) -> Option<String> {
        self.boards = boards;
        let live: HashSet<&str> = self.boards.iter().map(|b| b.id.as_str()).collect();
        self.thumbnails.retain(|id, _| live.contains(id.as_str()));
        self.pending_loads.retain(|id, _| live.contains(id.as_str()));
        self.failed_loads.retain(|id| live.contains(id.as_str()));

        let keep = self
            .current_board_id
            .as_deref()
            .is_some_and(|id| live.contains(id));
        if !keep {
            self.current_board_id = self.boards.first().map(|b| b.id.clone());
        }
        self.current_board_id.clone()
    }

    /// Select a board and reset the filter. Unknown ids are ignored.
    pub fn select_board(&mut self, board_id: &str) -> bool {
        if !self.has_board(board_id) {
            return false;
        }
        self.current_board_id = Some(board_id.to_owned());
        self.filter = Filter::All;
        true
    }

    /// Record a dispatched load and return its ticket.
    pub fn begin_load(&mut self, board_id: &str) -> LoadTicket {
        self.next_seq += 1;
        self.pending_loads.insert(board_id.to_owned(), self.next_seq);
        LoadTicket { board_id: board_id.to_owned(), seq: self.next_seq }
    }

    fn take_ticket(&mut self, ticket: &LoadTicket) -> bool {
        if self.pending_loads.get(&ticket.board_id) != Some(&ticket.seq) {
            return false;
        }
        self.pending_loads.remove(&ticket.board_id);
        self.has_board(&ticket.board_id)
    }

    /// Store a load result, replacing any cached list for that board.
    /// Returns `false` when the response is stale and was discarded.
    pub fn finish_load(&mut self, ticket: &LoadTicket, thumbnails: Vec<Thumbnail>) -> bool {
        if !self.take_ticket(ticket) {
            return false;
        }
        self.failed_loads.remove(&ticket.board_id);
        self.thumbnails.insert(ticket.board_id.clone(), thumbnails);
        true
    }

    /// Mark a load as failed. Returns `false` for stale tickets.
    pub fn fail_load(&mut self, ticket: &LoadTicket) -> bool {
        if !self.take_ticket(ticket) {
            return false;
        }
        self.failed_loads.insert(ticket.board_id.clone());
        true
    }

    /// Remove a thumbnail from whichever cached board holds it.
    pub fn remove_thumbnail(&mut self, thumbnail_id: &str) -> bool {
        for list in self.thumbnails.values_mut() {
            if let Some(pos) = list.iter().position(|t| t.id == thumbnail_id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Patch the favorite flag of one cached thumbnail in place.
    pub fn set_favorite(&mut self, thumbnail_id: &str, favorite: bool) -> bool {
        let found = self
            .thumbnails
            .values_mut()
            .flat_map(|list| list.iter_mut())
            .find(|t| t.id == thumbnail_id);
        match found {
            Some(thumbnail) => {
                thumbnail.favorite = favorite;
                true
            }
            None => false,
        }
    }

    /// Forget a deleted board entirely: list entry, cache, load bookkeeping,
    /// and the selection if it pointed there.
    pub fn purge_board(&mut self, board_id: &str) {
        self.boards.retain(|b| b.id != board_id);
        self.thumbnails.remove(board_id);
        self.pending_loads.remove(board_id);
        self.failed_loads.remove(board_id);
        if self.current_board_id.as_deref() == Some(board_id) {
            self.current_board_id = None;
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn toggle_flag(&mut self, key: FlagKey) -> bool {
        self.flags.toggle(key)
    }
}

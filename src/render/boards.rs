//! Sidebar board list and header title.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use std::fmt::Write as _;

use super::{CLOSE_ICON, escape_html};
use crate::net::types::Board;
use crate::state::app::AppState;
use crate::util::action::{DELETE_BOARD, SELECT_BOARD};

/// Header text when no board is selected.
pub const DEFAULT_TITLE: &str = "Pro Creator Hub";

/// Markup for every board row, the selected one marked `active`.
#[must_use]
pub fn board_list(state: &AppState) -> String {
    let current = state.current_board_id.as_deref();
    let mut out = String::new();
    for board in &state.boards {
        board_item(&mut out, board, current == Some(board.id.as_str()));
    }
    out
}

fn board_item(out: &mut String, board: &Board, active: bool) {
    let id = escape_html(&board.id);
    let active_class = if active { " active" } else { "" };
    let _ = write!(
        out,
        concat!(
            r#"<div class="board-item{active}" data-action="{select}" data-id="{id}">"#,
            r#"<div class="board-info"><div class="board-name">{name}</div>"#,
            r#"<div class="board-count">{count} thumbnails</div></div>"#,
            r#"<div class="board-actions"><button class="board-action-btn" type="button" "#,
            r#"data-action="{delete}" data-id="{id}" title="Delete board">{icon}</button></div></div>"#,
        ),
        active = active_class,
        select = SELECT_BOARD,
        delete = DELETE_BOARD,
        id = id,
        name = escape_html(&board.name),
        count = board.thumbnail_count,
        icon = CLOSE_ICON,
    );
}

/// Header title: the selected board's name, or [`DEFAULT_TITLE`].
/// Plain text, not markup; the caller inserts it as a text node.
#[must_use]
pub fn header_title(state: &AppState) -> String {
    state
        .current_board()
        .map_or_else(|| DEFAULT_TITLE.to_owned(), |board| board.name.clone())
}

//! Thumbnail grid: empty states and cards.
//!
//! Optional card elements follow the feature flags: the star button needs
//! `favorites`, the category tag needs `categories`.

#[cfg(test)]
#[path = "thumbnails_test.rs"]
mod thumbnails_test;

use std::fmt::Write as _;

use super::{CLOSE_ICON, empty_state, escape_html};
use crate::net::types::Thumbnail;
use crate::state::app::AppState;
use crate::state::flags::{FeatureFlags, FlagKey};
use crate::util::action::{REMOVE_THUMBNAIL, TOGGLE_FAVORITE};

pub const NO_BOARDS: &str = "No boards yet. Create one!";
pub const LOAD_FAILED: &str = "Failed to load thumbnails";
pub const LOADING: &str = "Loading thumbnails...";
pub const NO_MATCHES: &str = "No thumbnails found. Add one to get started!";

/// What the grid shows for a given state.
#[derive(Debug, PartialEq, Eq)]
pub enum GridContent<'a> {
    NoBoards,
    LoadFailed,
    Loading,
    NoMatches,
    Cards(Vec<&'a Thumbnail>),
}

/// Project the state onto grid content: current board's cached list
/// narrowed by the active filter.
#[must_use]
pub fn grid_content(state: &AppState) -> GridContent<'_> {
    let Some(board_id) = state.current_board_id.as_deref() else {
        return GridContent::NoBoards;
    };
    if state.load_failed(board_id) {
        return GridContent::LoadFailed;
    }
    let Some(cached) = state.thumbnails(board_id) else {
        return if state.is_loading(board_id) { GridContent::Loading } else { GridContent::NoMatches };
    };
    let visible = state.filter.apply(cached);
    if visible.is_empty() {
        GridContent::NoMatches
    } else {
        GridContent::Cards(visible)
    }
}

/// Grid markup.
#[must_use]
pub fn thumbnail_grid(state: &AppState) -> String {
    match grid_content(state) {
        GridContent::NoBoards => empty_state(NO_BOARDS),
        GridContent::LoadFailed => empty_state(LOAD_FAILED),
        GridContent::Loading => empty_state(LOADING),
        GridContent::NoMatches => empty_state(NO_MATCHES),
        GridContent::Cards(cards) => {
            let mut out = String::new();
            for thumbnail in cards {
                thumbnail_card(&mut out, thumbnail, &state.flags);
            }
            out
        }
    }
}

fn thumbnail_card(out: &mut String, thumbnail: &Thumbnail, flags: &FeatureFlags) {
    let id = escape_html(&thumbnail.id);
    let title = escape_html(&thumbnail.title);

    let favorite_button = if flags.is_enabled(FlagKey::Favorites) {
        format!(
            r#"<button class="action-btn favorite" type="button" data-action="{TOGGLE_FAVORITE}" data-id="{id}">{}</button>"#,
            if thumbnail.favorite { "⭐" } else { "☆" }
        )
    } else {
        String::new()
    };
    let category_tag = if flags.is_enabled(FlagKey::Categories) {
        format!(
            r#"<div class="thumbnail-meta"><span class="category-tag">{}</span></div>"#,
            escape_html(&thumbnail.category)
        )
    } else {
        String::new()
    };

    let _ = write!(
        out,
        concat!(
            r#"<div class="thumbnail-card" data-id="{id}">"#,
            r#"<div class="thumbnail-image-wrapper"><img src="{src}" alt="{title}" />"#,
            r#"<div class="thumbnail-actions">{favorite}"#,
            r#"<button class="action-btn delete" type="button" data-action="{remove}" data-id="{id}">{icon}</button>"#,
            r#"</div></div>"#,
            r#"<div class="thumbnail-info"><div class="thumbnail-title">{title}</div>{category}</div></div>"#,
        ),
        id = id,
        src = escape_html(&thumbnail.thumbnail_url),
        title = title,
        favorite = favorite_button,
        remove = REMOVE_THUMBNAIL,
        icon = CLOSE_ICON,
        category = category_tag,
    );
}

use super::*;
use crate::state::test_helpers::{board, thumb};

fn state_with(ids: &[&str]) -> AppState {
    let mut state = AppState::new(true);
    state.apply_boards(ids.iter().map(|id| board(id, &format!("Board {id}"))).collect());
    state
}

fn load(state: &mut AppState, board_id: &str, thumbs: Vec<Thumbnail>) {
    let ticket = state.begin_load(board_id);
    assert!(state.finish_load(&ticket, thumbs));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn default_state_is_signed_out_and_empty() {
    let state = AppState::default();
    assert!(!state.authenticated);
    assert!(state.boards.is_empty());
    assert!(state.current_board_id.is_none());
    assert_eq!(state.filter, Filter::All);
    assert!(state.current_thumbnails().is_empty());
}

#[test]
fn apply_boards_selects_first_when_nothing_selected() {
    let state = state_with(&["a", "b"]);
    assert_eq!(state.current_board_id.as_deref(), Some("a"));
    assert_eq!(state.current_board().unwrap().name, "Board a");
}

#[test]
fn apply_boards_keeps_existing_selection() {
    let mut state = state_with(&["a", "b"]);
    assert!(state.select_board("b"));
    let selected = state.apply_boards(vec![board("a", "A"), board("b", "B"), board("c", "C")]);
    assert_eq!(selected.as_deref(), Some("b"));
}

#[test]
fn apply_boards_reselects_when_selected_board_vanished() {
    let mut state = state_with(&["a", "b"]);
    state.select_board("b");
    let selected = state.apply_boards(vec![board("a", "A")]);
    assert_eq!(selected.as_deref(), Some("a"));
}

#[test]
fn apply_boards_with_empty_list_clears_selection() {
    let mut state = state_with(&["a"]);
    assert_eq!(state.apply_boards(Vec::new()), None);
    assert!(state.current_board_id.is_none());
}

#[test]
fn apply_boards_prunes_cache_of_vanished_boards() {
    let mut state = state_with(&["a", "b"]);
    load(&mut state, "a", vec![thumb("t1", "general", false)]);
    load(&mut state, "b", vec![thumb("t2", "general", false)]);
    state.apply_boards(vec![board("b", "B")]);
    assert!(state.thumbnails("a").is_none());
    assert!(state.thumbnails("b").is_some());
}

#[test]
fn select_board_resets_filter_and_ignores_unknown_ids() {
    let mut state = state_with(&["a", "b"]);
    state.set_filter(Filter::Favorites);
    assert!(!state.select_board("zzz"));
    assert_eq!(state.current_board_id.as_deref(), Some("a"));
    assert_eq!(state.filter, Filter::Favorites);
    assert!(state.select_board("b"));
    assert_eq!(state.filter, Filter::All);
}

// =============================================================
// Ticketed loads
// =============================================================

#[test]
fn cache_entry_appears_only_after_load() {
    let mut state = state_with(&["a"]);
    assert!(state.thumbnails("a").is_none());
    let ticket = state.begin_load("a");
    assert!(state.is_loading("a"));
    assert!(state.finish_load(&ticket, Vec::new()));
    assert_eq!(state.thumbnails("a"), Some(&[][..]));
    assert!(!state.is_loading("a"));
}

#[test]
fn finish_load_replaces_prior_entry() {
    let mut state = state_with(&["a"]);
    load(&mut state, "a", vec![thumb("t1", "general", false)]);
    load(&mut state, "a", vec![thumb("t2", "general", false), thumb("t3", "general", false)]);
    let ids: Vec<&str> = state.current_thumbnails().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t2", "t3"]);
}

#[test]
fn superseded_load_is_discarded() {
    let mut state = state_with(&["a"]);
    let old = state.begin_load("a");
    let new = state.begin_load("a");
    assert!(state.finish_load(&new, vec![thumb("fresh", "general", false)]));
    assert!(!state.finish_load(&old, vec![thumb("stale", "general", false)]));
    assert_eq!(state.current_thumbnails()[0].id, "fresh");
}

#[test]
fn load_for_deleted_board_is_discarded() {
    let mut state = state_with(&["a", "b"]);
    let ticket = state.begin_load("a");
    state.purge_board("a");
    assert!(!state.finish_load(&ticket, vec![thumb("t1", "general", false)]));
    assert!(state.thumbnails("a").is_none());
}

#[test]
fn failed_load_is_flagged_until_next_success() {
    let mut state = state_with(&["a"]);
    let ticket = state.begin_load("a");
    assert!(state.fail_load(&ticket));
    assert!(state.load_failed("a"));
    load(&mut state, "a", Vec::new());
    assert!(!state.load_failed("a"));
}

// =============================================================
// In-place mutation
// =============================================================

#[test]
fn set_favorite_changes_only_the_target_entry() {
    let mut state = state_with(&["a"]);
    load(&mut state, "a", vec![thumb("t1", "general", false), thumb("t2", "general", false)]);
    let before = state.current_thumbnails().to_vec();

    assert!(state.set_favorite("t2", true));

    let after = state.current_thumbnails();
    assert_eq!(after[0], before[0]);
    assert!(after[1].favorite);
    assert_eq!(after[1].title, before[1].title);
    assert!(!state.set_favorite("missing", true));
}

#[test]
fn remove_thumbnail_drops_entry_in_place() {
    let mut state = state_with(&["a"]);
    load(&mut state, "a", vec![thumb("t1", "general", false), thumb("t2", "general", false)]);
    assert!(state.remove_thumbnail("t1"));
    assert_eq!(state.current_thumbnails().len(), 1);
    assert_eq!(state.current_thumbnails()[0].id, "t2");
    assert!(!state.remove_thumbnail("t1"));
}

#[test]
fn purge_then_apply_boards_reselects_like_fresh_load() {
    let mut state = state_with(&["a", "b"]);
    load(&mut state, "a", vec![thumb("t1", "general", false)]);
    state.purge_board("a");
    assert!(state.current_board_id.is_none());
    assert!(state.thumbnails("a").is_none());
    assert!(!state.has_board("a"));

    state.apply_boards(vec![board("b", "B")]);
    assert_eq!(state.current_board_id.as_deref(), Some("b"));
}

#[test]
fn reset_clears_everything_including_flags() {
    let mut state = state_with(&["a"]);
    state.toggle_flag(FlagKey::Analytics);
    state.reset();
    assert_eq!(state, AppState::default());
}

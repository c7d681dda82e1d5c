//! Hub UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read [`AppState`](crate::state::app::AppState) through the
//! shared [`AppContext`](crate::app::AppContext). List-like surfaces mount
//! markup from `render` and register one delegated click handler that
//! resolves a typed [`UiAction`](crate::util::action::UiAction).

pub mod add_thumbnail_form;
pub mod board_sidebar;
pub mod feature_flags_modal;
pub mod filter_bar;
pub mod stats_bar;
pub mod thumbnail_grid;

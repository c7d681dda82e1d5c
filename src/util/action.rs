//! Typed click actions carried by rendered markup.
//!
//! ARCHITECTURE
//! ============
//! The render layer tags interactive elements with `data-action` and
//! `data-id`. Each container registers one click handler that resolves the
//! nearest tagged element into a [`UiAction`]; nested controls (the delete
//! button inside a board row) win over their parent because the closest tag
//! is taken.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use crate::state::flags::FlagKey;

pub const SELECT_BOARD: &str = "select-board";
pub const DELETE_BOARD: &str = "delete-board";
pub const TOGGLE_FAVORITE: &str = "toggle-favorite";
pub const REMOVE_THUMBNAIL: &str = "remove-thumbnail";
pub const TOGGLE_FLAG: &str = "toggle-flag";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    SelectBoard(String),
    DeleteBoard(String),
    ToggleFavorite(String),
    RemoveThumbnail(String),
    ToggleFlag(FlagKey),
}

impl UiAction {
    /// Resolve a `data-action` / `data-id` pair. Unknown actions, missing or
    /// empty ids, and unknown flag keys yield `None`.
    #[must_use]
    pub fn parse(action: &str, id: Option<&str>) -> Option<Self> {
        let id = id.filter(|id| !id.is_empty())?;
        match action {
            SELECT_BOARD => Some(Self::SelectBoard(id.to_owned())),
            DELETE_BOARD => Some(Self::DeleteBoard(id.to_owned())),
            TOGGLE_FAVORITE => Some(Self::ToggleFavorite(id.to_owned())),
            REMOVE_THUMBNAIL => Some(Self::RemoveThumbnail(id.to_owned())),
            TOGGLE_FLAG => FlagKey::parse(id).map(Self::ToggleFlag),
            _ => None,
        }
    }
}

/// Resolve the action under a click, if any.
#[cfg(feature = "csr")]
pub fn from_click(ev: &web_sys::MouseEvent) -> Option<UiAction> {
    use wasm_bindgen::JsCast as _;

    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let tagged = target.closest("[data-action]").ok().flatten()?;
    let action = tagged.get_attribute("data-action")?;
    let id = tagged.get_attribute("data-id");
    UiAction::parse(&action, id.as_deref())
}

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, dialogs, click
//! resolution) from state and page logic so the rest stays testable off
//! the browser.

pub mod action;
pub mod notify;
pub mod storage;
pub mod video;

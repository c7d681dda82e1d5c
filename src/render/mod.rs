//! Render layer: pure projections of [`AppState`](crate::state::app::AppState)
//! into HTML markup.
//!
//! DESIGN
//! ======
//! Same state in, same markup out. Every user-supplied string goes through
//! [`escape_html`] before it is placed in text or an attribute, so a board
//! named `<script>` renders as text. Interactive elements carry
//! `data-action`/`data-id` tags resolved by [`crate::util::action`].


pub mod boards;
pub mod flags;
pub mod stats;
pub mod thumbnails;

/// Neutralize `& < > " '` for safe insertion into markup.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Shared "x" glyph for delete controls.
pub(crate) const CLOSE_ICON: &str = concat!(
    r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
    r#"<line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line></svg>"#,
);

/// `<div class="empty-state">` with a fixed message.
pub(crate) fn empty_state(message: &str) -> String {
    format!(r#"<div class="empty-state">{}</div>"#, escape_html(message))
}

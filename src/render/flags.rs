//! Feature flag list for the settings modal.

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;

use std::fmt::Write as _;

use super::escape_html;
use crate::state::flags::FeatureFlags;
use crate::util::action::TOGGLE_FLAG;

/// One row per registered flag, in registration order.
#[must_use]
pub fn flag_list(flags: &FeatureFlags) -> String {
    let mut out = String::new();
    for (key, flag) in flags.iter() {
        let _ = write!(
            out,
            concat!(
                r#"<div class="feature-flag"><div class="feature-info"><h3>{name}</h3><p>{description}</p></div>"#,
                r#"<div class="toggle-switch{active}" role="switch" aria-checked="{checked}" "#,
                r#"data-action="{action}" data-id="{key}"></div></div>"#,
            ),
            name = escape_html(flag.name),
            description = escape_html(flag.description),
            active = if flag.enabled { " active" } else { "" },
            checked = flag.enabled,
            action = TOGGLE_FLAG,
            key = key.as_str(),
        );
    }
    out
}

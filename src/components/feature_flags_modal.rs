//! Modal listing the feature flags with their toggles.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::render::flags::flag_list;

/// Fullscreen modal; clicking the backdrop or pressing Escape closes it.
#[component]
pub fn FeatureFlagsModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let markup = move || ctx.state.with(|s| flag_list(&s.flags));

    let on_list_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use crate::util::action::{UiAction, from_click};

            if let Some(UiAction::ToggleFlag(key)) = from_click(&ev) {
                match ctx.controller().toggle_flag(key) {
                    Ok(enabled) => log::debug!("flag {} -> {enabled}", key.as_str()),
                    Err(err) => crate::util::notify::report("Failed to toggle feature", &err),
                }
            }
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="modal active" id="featureFlagsModal" on:click=move |_| on_close.run(())>
            <div class="modal-content" tabindex="0" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <div class="modal-header">
                    <h2>"Feature Flags"</h2>
                    <button class="modal-close" type="button" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="feature-flags-list" id="featureFlagsList" inner_html=markup on:click=on_list_click></div>
            </div>
        </div>
    }
}

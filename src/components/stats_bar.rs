//! Stats bar, shown while the `analytics` flag is on.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::render::stats::{compute, stats_bar, today};
use crate::state::flags::FlagKey;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let visible = move || ctx.state.with(|s| s.flags.is_enabled(FlagKey::Analytics));
    let markup = move || ctx.state.with(|s| stats_bar(&compute(s.current_thumbnails(), today())));

    view! {
        <Show when=visible>
            <div class="stats-bar" id="statsBar" inner_html=markup></div>
        </Show>
    }
}

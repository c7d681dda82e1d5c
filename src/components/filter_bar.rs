//! Filter buttons: All, Favorites, then one per category of the current
//! board while the `categories` flag is on.

#[cfg(test)]
#[path = "filter_bar_test.rs"]
mod filter_bar_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::app::AppState;
use crate::state::filter::{Filter, categories};
use crate::state::flags::FlagKey;

fn available_filters(state: &AppState) -> Vec<Filter> {
    let mut filters = vec![Filter::All, Filter::Favorites];
    if state.flags.is_enabled(FlagKey::Categories) {
        filters.extend(
            categories(state.current_thumbnails())
                .into_iter()
                .map(|c| Filter::Category(c.to_owned())),
        );
    }
    filters
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let filters = move || ctx.state.with(available_filters);

    view! {
        <div class="filter-bar">
            <For
                each=filters
                key=Filter::key
                children=move |filter| {
                    let label = filter.label().to_owned();
                    let selected = filter.clone();
                    let active = move || ctx.state.with(|s| s.filter == filter);
                    view! {
                        <button
                            class="filter-btn"
                            class:active=active
                            type="button"
                            on:click=move |_| ctx.set_filter(selected.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}

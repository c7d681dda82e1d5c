//! Signed-in hub: board sidebar, add form, stats, filters, and the grid.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::add_thumbnail_form::AddThumbnailForm;
use crate::components::board_sidebar::BoardSidebar;
use crate::components::feature_flags_modal::FeatureFlagsModal;
use crate::components::filter_bar::FilterBar;
use crate::components::stats_bar::StatsBar;
use crate::components::thumbnail_grid::ThumbnailGrid;
use crate::render::boards::header_title;

#[component]
pub fn HubPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;
    let show_flags = RwSignal::new(false);

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        ctx.controller().logout();
    };
    let on_close_flags = Callback::new(move |()| show_flags.set(false));

    view! {
        <div class="app-container">
            <BoardSidebar/>
            <main class="main-content">
                <header class="main-header">
                    <h1 id="currentBoardName">{move || state.with(header_title)}</h1>
                    <div class="header-actions">
                        <button class="btn btn-secondary" type="button" on:click=move |_| show_flags.set(true)>
                            "Features"
                        </button>
                        <button class="btn btn-secondary" type="button" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </header>
                <AddThumbnailForm/>
                <StatsBar/>
                <FilterBar/>
                <ThumbnailGrid/>
            </main>
            <Show when=move || show_flags.get()>
                <FeatureFlagsModal on_close=on_close_flags/>
            </Show>
        </div>
    }
}

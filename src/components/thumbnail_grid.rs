//! Thumbnail grid of the selected board.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::render::thumbnails::thumbnail_grid;

pub const DELETE_THUMBNAIL_CONFIRM: &str = "Delete this thumbnail?";

#[component]
pub fn ThumbnailGrid() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let markup = move || ctx.state.with(thumbnail_grid);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use crate::util::action::{UiAction, from_click};
            use crate::util::notify;

            match from_click(&ev) {
                Some(UiAction::ToggleFavorite(id)) => {
                    ctx.spawn("Failed to toggle favorite", move |c| async move {
                        c.toggle_favorite(&id).await.map(|_| ())
                    });
                }
                Some(UiAction::RemoveThumbnail(id)) => {
                    if notify::confirm(DELETE_THUMBNAIL_CONFIRM) {
                        ctx.spawn("Failed to delete thumbnail", move |c| async move {
                            c.remove_thumbnail(&id).await
                        });
                    }
                }
                _ => {}
            }
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! { <div class="thumbnail-grid" id="thumbnailGrid" inner_html=markup on:click=on_click></div> }
}

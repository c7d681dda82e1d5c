//! Sidebar with the board list and the new-board button.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::render::boards::board_list;

pub const DELETE_BOARD_CONFIRM: &str = "Are you sure you want to delete this board? All thumbnails will be lost.";
pub const NEW_BOARD_PROMPT: &str = "Enter board name:";

#[component]
pub fn BoardSidebar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let markup = move || ctx.state.with(board_list);

    let on_list_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use crate::util::action::{UiAction, from_click};
            use crate::util::notify;

            match from_click(&ev) {
                Some(UiAction::DeleteBoard(id)) => {
                    ev.stop_propagation();
                    if notify::confirm(DELETE_BOARD_CONFIRM) {
                        ctx.spawn("Failed to delete board", move |c| async move { c.delete_board(&id).await });
                    }
                }
                Some(UiAction::SelectBoard(id)) => {
                    ctx.spawn("Failed to load thumbnails", move |c| async move { c.switch_board(&id).await });
                }
                _ => {}
            }
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_new_board = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(name) = crate::util::notify::prompt(NEW_BOARD_PROMPT) {
                ctx.spawn("Failed to create board", move |c| async move { c.create_board(&name).await });
            }
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h2>"Boards"</h2>
                <button class="btn btn-primary" type="button" on:click=on_new_board>
                    "+ New Board"
                </button>
            </div>
            <div class="board-list" id="boardList" inner_html=markup on:click=on_list_click></div>
        </aside>
    }
}

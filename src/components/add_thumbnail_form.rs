//! Add-thumbnail form. The title input and category select only show while
//! the `categories` flag is on; otherwise the defaults apply.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::flags::FlagKey;

/// Options offered by the category select, as `(value, label)`.
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("general", "General"),
    ("gaming", "Gaming"),
    ("tech", "Tech"),
    ("music", "Music"),
    ("education", "Education"),
    ("vlog", "Vlog"),
];

#[component]
pub fn AddThumbnailForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let url = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let category = RwSignal::new(CATEGORY_OPTIONS[0].0.to_owned());
    let busy = RwSignal::new(false);
    let show_details = move || ctx.state.with(|s| s.flags.is_enabled(FlagKey::Categories));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let url_value = url.get_untracked();
        if url_value.trim().is_empty() {
            return;
        }
        let details = ctx.state.with_untracked(|s| s.flags.is_enabled(FlagKey::Categories));
        let (title_value, category_value) = if details {
            (title.get_untracked(), category.get_untracked())
        } else {
            (String::new(), String::new())
        };

        #[cfg(feature = "csr")]
        {
            busy.set(true);
            let controller = ctx.controller();
            leptos::task::spawn_local(async move {
                match controller.add_thumbnail(&url_value, &title_value, &category_value).await {
                    Ok(()) => {
                        let _ = url.try_set(String::new());
                        let _ = title.try_set(String::new());
                    }
                    Err(err) => crate::util::notify::report("Failed to add thumbnail", &err),
                }
                let _ = busy.try_set(false);
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (url_value, title_value, category_value);
        }
    };

    view! {
        <form class="link-form" id="linkForm" on:submit=on_submit>
            <input
                class="link-input"
                type="url"
                placeholder="Paste a YouTube link"
                prop:value=move || url.get()
                on:input=move |ev| url.set(event_target_value(&ev))
            />
            <Show when=show_details>
                <input
                    class="title-input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <select class="category-select" prop:value=move || category.get() on:change=move |ev| category.set(event_target_value(&ev))>
                    {CATEGORY_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </Show>
            <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                "Add"
            </button>
        </form>
    }
}

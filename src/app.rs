//! Root application component and shared context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::{hub::HubPage, login::LoginOverlay};
use crate::render::boards::header_title;
use crate::state::app::AppState;
use crate::state::filter::Filter;

#[cfg(feature = "csr")]
pub type BrowserController =
    crate::controller::Controller<crate::net::http::GlooTransport, RwSignal<AppState>>;

/// Handles shared by every component through Leptos context.
///
/// The controller holds `Rc`s, so it lives in a thread-local arena slot and
/// is cloned out per action.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState>,
    #[cfg(feature = "csr")]
    controller: StoredValue<std::rc::Rc<BrowserController>, LocalStorage>,
}

impl AppContext {
    /// Narrow the grid. Local only.
    pub fn set_filter(self, filter: Filter) {
        self.state.update(|s| s.set_filter(filter));
    }

    #[cfg(feature = "csr")]
    pub fn controller(self) -> std::rc::Rc<BrowserController> {
        self.controller.get_value()
    }

    /// Run a controller action in the background; a failure is alerted with
    /// `context` as prefix.
    #[cfg(feature = "csr")]
    pub fn spawn<F, Fut>(self, context: &'static str, action: F)
    where
        F: FnOnce(std::rc::Rc<BrowserController>) -> Fut + 'static,
        Fut: std::future::Future<Output = Result<(), crate::error::ClientError>> + 'static,
    {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            if let Err(err) = action(controller).await {
                crate::util::notify::report(context, &err);
            }
        });
    }
}

/// Root application component.
///
/// Restores the session from the persisted token, provides the context, and
/// switches between the login overlay and the hub.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(AppState::default());

    #[cfg(feature = "csr")]
    let ctx = {
        let config = crate::config::ClientConfig::load();
        let controller = std::rc::Rc::new(BrowserController::browser(config, state));
        AppContext { state, controller: StoredValue::new_local(controller) }
    };
    #[cfg(not(feature = "csr"))]
    let ctx = AppContext { state };

    provide_context(ctx);

    #[cfg(feature = "csr")]
    {
        if matches!(ctx.controller().restore_session(), Ok(true)) {
            ctx.spawn("Failed to load boards", |c| async move { c.load_boards().await });
        }
    }

    let title = move || state.with(header_title);
    let authenticated = move || state.with(|s| s.authenticated);

    view! {
        <Title text=title/>
        <Show when=authenticated fallback=|| view! { <LoginOverlay/> }>
            <HubPage/>
        </Show>
    }
}

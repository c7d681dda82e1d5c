//! Login overlay with a switchable register form.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::auth::AuthMode;

/// Full-screen sign-in form. Registering does not sign in; on success the
/// form flips back to login mode.
#[component]
pub fn LoginOverlay() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let mode = RwSignal::new(AuthMode::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let mode_value = mode.get_untracked();

        #[cfg(feature = "csr")]
        {
            use crate::util::notify;

            busy.set(true);
            let controller = ctx.controller();
            leptos::task::spawn_local(async move {
                match mode_value {
                    AuthMode::Login => {
                        if let Err(err) = controller.login(&email_value, &password_value).await {
                            notify::report("Failed to sign in", &err);
                        }
                    }
                    AuthMode::Register => match controller.register(&email_value, &password_value).await {
                        Ok(()) => {
                            notify::alert("Registration successful! Please login.");
                            let _ = mode.try_set(AuthMode::Login);
                        }
                        Err(err) => notify::report("Registration failed", &err),
                    },
                }
                let _ = busy.try_set(false);
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, email_value, password_value, mode_value);
        }
    };

    let on_switch = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        mode.update(|m| *m = m.toggled());
    };

    view! {
        <div class="login-overlay" id="loginOverlay">
            <div class="login-card">
                <h2>{move || mode.get().title()}</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        {move || mode.get().title()}
                    </button>
                </form>
                <p class="login-switch">
                    <span>{move || mode.get().switch_prompt()}</span>
                    " "
                    <a href="#" on:click=on_switch>
                        {move || mode.get().switch_label()}
                    </a>
                </p>
            </div>
        </div>
    }
}

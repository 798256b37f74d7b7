//! Administrator sign-in page.
//!
//! There is no separate admin endpoint: this posts to the same login route
//! and only establishes the session when the returned user carries the admin
//! flag, so a non-admin credential never lands in the admin console.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::pages::login::validate_credentials;
use crate::state::auth::AuthState;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if let Err(msg) = validate_credentials(&username_value, &password_value) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.login(&username_value, &password_value).await {
                    Ok(resp) if resp.user.is_admin => {
                        auth.update(|a| a.establish(resp.token, resp.user));
                        navigate("/admin", Default::default());
                    }
                    Ok(_) => {
                        info.set("This account does not have administrator access.".to_owned());
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, auth);
        }
    };

    view! {
        <div class="login-page login-page--admin">
            <div class="login-card">
                <h1>"PaperTools Admin"</h1>
                <p class="login-card__subtitle">"Administrator sign-in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__links">
                    <A href="/login">"Regular sign-in"</A>
                </p>
            </div>
        </div>
    }
}

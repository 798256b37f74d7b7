//! Authenticated shell for the paper tools: top navigation plus an outlet
//! for the similarity/spellcheck/summary/history child routes.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_route_guard;
use crate::util::dark_mode;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    install_route_guard(true, false, auth, navigate.clone());

    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();

    let on_toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Best-effort server-side logout; local state is dropped either way.
                let _ = api.logout().await;
                auth.update(|a| a.clear());
                navigate("/login", Default::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, &navigate);
        }
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__brand">"PaperTools"</span>
                <nav class="home-page__nav">
                    <A href="/home/similarity">"Similarity"</A>
                    <A href="/home/spellcheck">"Spell Check"</A>
                    <A href="/home/summary">"Summary"</A>
                    <A href="/home/history">"History"</A>
                </nav>
                <div class="home-page__session">
                    <span class="home-page__user">{username}</span>
                    <button class="btn" on:click=on_toggle_dark>
                        {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                    </button>
                    <button class="btn" on:click=on_logout>
                        "Sign Out"
                    </button>
                </div>
            </header>
            <main class="home-page__content">
                <Outlet/>
            </main>
        </div>
    }
}

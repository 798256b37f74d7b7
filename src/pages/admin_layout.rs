//! Admin console shell: side navigation plus an outlet for the
//! user-management, log, and statistics views. Requires the admin flag.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::{install_admin_guard, install_route_guard};

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_route_guard(true, false, auth, navigate.clone());
    install_admin_guard(auth, navigate);

    let nav_class = move || {
        if ui.get().nav_collapsed {
            "admin-page__nav admin-page__nav--collapsed"
        } else {
            "admin-page__nav"
        }
    };

    view! {
        <div class="admin-page">
            <aside class=nav_class>
                <span class="admin-page__brand">"PaperTools Admin"</span>
                <button
                    class="admin-page__collapse"
                    on:click=move |_| ui.update(|u| u.nav_collapsed = !u.nav_collapsed)
                >
                    {move || if ui.get().nav_collapsed { "\u{00bb}" } else { "\u{00ab}" }}
                </button>
                <nav class="admin-page__links">
                    <A href="/admin/user-manage">"User Management"</A>
                    <A href="/admin/log-manage">"Logs"</A>
                    <A href="/admin/statistic">"Statistics"</A>
                </nav>
                <A href="/home">"Back to the app"</A>
            </aside>
            <main class="admin-page__content">
                <Outlet/>
            </main>
        </div>
    }
}

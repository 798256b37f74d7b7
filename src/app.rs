//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::net::api::ApiClient;
use crate::pages::{
    admin_layout::AdminLayout, admin_login::AdminLoginPage, history::OperationHistoryPage,
    home::HomePage, log_manage::LogManagePage, login::LoginPage, register::RegisterPage,
    similarity::SimilarityCheckPage, spellcheck::SpellCheckPage, statistic::StatisticPage,
    summary::TextSummaryPage, user_manage::UserManagePage,
};
use crate::state::{auth::AuthState, notify::NotifyState, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and the API handle, seeds the session
/// from `localStorage`, and sets up client-side routing with the auth-gated
/// `/home` and `/admin` sections.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);

    let auth = RwSignal::new(AuthState::from_storage());
    let notify = RwSignal::new(NotifyState::default());
    let ui = RwSignal::new(UiState { dark_mode: dark, ..UiState::default() });

    provide_context(auth);
    provide_context(notify);
    provide_context(ui);

    let api = ApiClient::new(auth, notify);
    provide_context(api);

    // Revalidate the persisted session once on startup: rotate the token,
    // then replace the cached user with the authoritative record.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::util::session::load_token() {
            Some(token) => match api.refresh(&token).await {
                Ok(resp) => {
                    auth.update(|a| a.rotate_token(resp.token));
                    match api.user_info().await {
                        Ok(user) => auth.update(|a| a.set_user(user)),
                        Err(_) => auth.update(|a| a.loading = false),
                    }
                }
                // 401 already tore the session down in the HTTP layer.
                Err(crate::net::api::ApiError::Unauthorized) => {}
                // Offline or server hiccup: keep the cached session.
                Err(_) => auth.update(|a| a.loading = false),
            },
            None => auth.update(|a| a.loading = false),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    auth.update(|a| a.loading = false);

    view! {
        <Stylesheet id="leptos" href="/pkg/papertools-client.css"/>
        <Title text="PaperTools"/>

        <ToastHost/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <ParentRoute path=StaticSegment("home") view=HomePage>
                    <Route path=StaticSegment("") view=HomeIndexRedirect/>
                    <Route path=StaticSegment("similarity") view=SimilarityCheckPage/>
                    <Route path=StaticSegment("spellcheck") view=SpellCheckPage/>
                    <Route path=StaticSegment("summary") view=TextSummaryPage/>
                    <Route path=StaticSegment("history") view=OperationHistoryPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminIndexRedirect/>
                    <Route path=StaticSegment("user-manage") view=UserManagePage/>
                    <Route path=StaticSegment("log-manage") view=LogManagePage/>
                    <Route path=StaticSegment("statistic") view=StatisticPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// `/home` lands on the similarity tool.
#[component]
fn HomeIndexRedirect() -> impl IntoView {
    view! { <Redirect path="/home/similarity"/> }
}

/// `/admin` lands on user management.
#[component]
fn AdminIndexRedirect() -> impl IntoView {
    view! { <Redirect path="/admin/user-manage"/> }
}

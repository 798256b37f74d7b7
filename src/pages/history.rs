//! Operation history page: a paginated table of the user's past checks.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::net::api::{ApiClient, ApiError};
use crate::state::auth::AuthState;

const PER_PAGE: u32 = 20;

#[component]
pub fn OperationHistoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();

    let page = RwSignal::new(1_u32);

    // Refetches whenever the page changes or the signed-in user settles.
    let history = LocalResource::new(move || {
        let user_id = auth.get().user.map(|u| u.id);
        let page_no = page.get();
        async move {
            match user_id {
                Some(id) => api.user_operations(id, page_no, PER_PAGE).await,
                None => Err(ApiError::Unavailable),
            }
        }
    });

    let pages = Signal::derive(move || {
        history
            .get()
            .and_then(Result::ok)
            .map_or(1, |p| p.pages.max(1))
    });

    view! {
        <section class="tool-page">
            <h2>"Operation History"</h2>
            <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
                {move || {
                    history
                        .get()
                        .map(|result| {
                            match result {
                                Ok(page_data) => {
                                    if page_data.operations.is_empty() {
                                        view! {
                                            <p class="tool-page__hint">"No operations recorded yet."</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <table class="tool-result__table">
                                                <thead>
                                                    <tr>
                                                        <th>"When"</th>
                                                        <th>"Operation"</th>
                                                        <th>"Detail"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {page_data
                                                        .operations
                                                        .into_iter()
                                                        .map(|op| {
                                                            view! {
                                                                <tr>
                                                                    <td>{op.created_at}</td>
                                                                    <td>{op.kind}</td>
                                                                    <td>{op.detail}</td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(ApiError::Unauthorized | ApiError::Forbidden | ApiError::Unavailable) => {
                                    view! { <p class="tool-page__hint">"Sign in to see your history."</p> }
                                        .into_any()
                                }
                                Err(e) => {
                                    view! {
                                        <p class="tool-page__message">{format!("Failed to load history: {e}")}</p>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}
            </Suspense>
            <Pagination page=page pages=pages/>
        </section>
    }
}

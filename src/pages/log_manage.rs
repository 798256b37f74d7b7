//! Admin log view: paginated operation logs with a severity filter.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::net::api::ApiClient;

const PER_PAGE: u32 = 50;

#[component]
pub fn LogManagePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let page = RwSignal::new(1_u32);
    // Empty string means no level filter.
    let level = RwSignal::new(String::new());

    let logs = LocalResource::new(move || {
        let page_no = page.get();
        let level_value = level.get();
        async move {
            let filter = (!level_value.is_empty()).then_some(level_value);
            api.logs(page_no, PER_PAGE, filter.as_deref()).await
        }
    });

    let pages = Signal::derive(move || {
        logs.get().and_then(Result::ok).map_or(1, |p| p.pages.max(1))
    });

    let on_level_change = move |ev: leptos::ev::Event| {
        level.set(event_target_value(&ev));
        page.set(1);
    };

    view! {
        <section class="admin-view">
            <h2>"Logs"</h2>
            <label class="admin-view__filter">
                "Level"
                <select prop:value=move || level.get() on:change=on_level_change>
                    <option value="">"All"</option>
                    <option value="info">"Info"</option>
                    <option value="warning">"Warning"</option>
                    <option value="error">"Error"</option>
                </select>
            </label>
            <Suspense fallback=move || view! { <p>"Loading logs..."</p> }>
                {move || {
                    logs.get()
                        .map(|result| {
                            match result {
                                Ok(page_data) => {
                                    view! {
                                        <table class="tool-result__table">
                                            <thead>
                                                <tr>
                                                    <th>"When"</th>
                                                    <th>"User"</th>
                                                    <th>"Action"</th>
                                                    <th>"Level"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {page_data
                                                    .logs
                                                    .into_iter()
                                                    .map(|entry| {
                                                        let level_class = format!("log-level log-level--{}", entry.level);
                                                        view! {
                                                            <tr>
                                                                <td>{entry.created_at}</td>
                                                                <td>{entry.username}</td>
                                                                <td>{entry.action}</td>
                                                                <td>
                                                                    <span class=level_class>{entry.level}</span>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    view! {
                                        <p class="tool-page__message">{format!("Failed to load logs: {e}")}</p>
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

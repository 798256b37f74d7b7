//! Admin statistics view: totals plus a weekly activity bar list.

#[cfg(test)]
#[path = "statistic_test.rs"]
mod statistic_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::WeeklyCount;

/// CSS width for one weekly bar, scaled against the busiest bucket.
pub(crate) fn bar_width(count: i64, max: i64) -> String {
    if max <= 0 || count <= 0 {
        return "0%".to_owned();
    }
    let percent = (count as f64 / max as f64 * 100.0).clamp(0.0, 100.0);
    format!("{percent:.0}%")
}

/// The busiest bucket of the series, used as the 100% mark.
pub(crate) fn max_count(weekly: &[WeeklyCount]) -> i64 {
    weekly.iter().map(|w| w.count).max().unwrap_or(0)
}

#[component]
pub fn StatisticPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let stats = LocalResource::new(move || async move { api.usage_stats().await });

    view! {
        <section class="admin-view">
            <h2>"Statistics"</h2>
            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| {
                            match result {
                                Ok(data) => {
                                    let max = max_count(&data.weekly);
                                    view! {
                                        <div class="stats">
                                            <div class="stats__tiles">
                                                <div class="stats__tile">
                                                    <span class="stats__value">{data.user_total}</span>
                                                    <span class="stats__label">"Registered users"</span>
                                                </div>
                                                <div class="stats__tile">
                                                    <span class="stats__value">{data.paper_total}</span>
                                                    <span class="stats__label">"Papers processed"</span>
                                                </div>
                                            </div>
                                            <h3>"Weekly activity"</h3>
                                            <ul class="stats__weekly">
                                                {data
                                                    .weekly
                                                    .into_iter()
                                                    .map(|bucket| {
                                                        let width = bar_width(bucket.count, max);
                                                        view! {
                                                            <li class="stats__row">
                                                                <span class="stats__bucket">{bucket.label}</span>
                                                                <span class="stats__bar" style:width=width></span>
                                                                <span class="stats__count">{bucket.count}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    view! {
                                        <p class="tool-page__message">{format!("Failed to load statistics: {e}")}</p>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

//! Text similarity check page.

#[cfg(test)]
#[path = "similarity_test.rs"]
mod similarity_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::SimilarityReport;

/// Render a `0.0..=1.0` similarity as a display percentage.
pub(crate) fn score_percent(score: f64) -> String {
    format!("{:.1}%", score.clamp(0.0, 1.0) * 100.0)
}

#[component]
pub fn SimilarityCheckPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let text = RwSignal::new(String::new());
    let reference = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let report = RwSignal::new(None::<SimilarityReport>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let text_value = text.get().trim().to_owned();
        if text_value.is_empty() {
            info.set("Paste some text to check.".to_owned());
            return;
        }
        let reference_value = reference.get().trim().to_owned();
        busy.set(true);
        info.set(String::new());
        report.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let reference_opt = (!reference_value.is_empty()).then_some(reference_value);
            match api.check_similarity(&text_value, reference_opt.as_deref()).await {
                Ok(result) => report.set(Some(result)),
                // 401/403 are handled at the HTTP layer.
                Err(ApiError::Unauthorized | ApiError::Forbidden) => {}
                Err(e) => info.set(format!("Similarity check failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text_value, reference_value, api);
        }
    };

    view! {
        <section class="tool-page">
            <h2>"Similarity Check"</h2>
            <p class="tool-page__hint">
                "Compare your text against the corpus, or against a specific reference text."
            </p>
            <form class="tool-form" on:submit=on_submit>
                <label class="tool-form__label">
                    "Your text"
                    <textarea
                        class="tool-form__textarea"
                        rows="10"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="tool-form__label">
                    "Reference text (optional)"
                    <textarea
                        class="tool-form__textarea"
                        rows="6"
                        prop:value=move || reference.get()
                        on:input=move |ev| reference.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Checking..." } else { "Run Check" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="tool-page__message">{move || info.get()}</p>
            </Show>
            {move || {
                report
                    .get()
                    .map(|r| {
                        view! {
                            <div class="tool-result">
                                <h3>"Overall similarity: " {score_percent(r.score)}</h3>
                                <table class="tool-result__table">
                                    <thead>
                                        <tr>
                                            <th>"Your text"</th>
                                            <th>"Matched against"</th>
                                            <th>"Similarity"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {r
                                            .segments
                                            .into_iter()
                                            .map(|seg| {
                                                view! {
                                                    <tr>
                                                        <td>{seg.source}</td>
                                                        <td>{seg.matched}</td>
                                                        <td>{score_percent(seg.similarity)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

//! Text summarization page.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::SummaryResult;

/// Default requested summary length in characters.
pub(crate) const DEFAULT_MAX_LEN: u32 = 200;

/// Parse the length field, falling back to the default and clamping to the
/// range the backend accepts.
pub(crate) fn parse_max_len(raw: &str) -> u32 {
    raw.trim().parse::<u32>().map_or(DEFAULT_MAX_LEN, |n| n.clamp(50, 2000))
}

#[component]
pub fn TextSummaryPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let text = RwSignal::new(String::new());
    let max_len = RwSignal::new(DEFAULT_MAX_LEN.to_string());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let result = RwSignal::new(None::<SummaryResult>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let text_value = text.get().trim().to_owned();
        if text_value.is_empty() {
            info.set("Paste some text to summarize.".to_owned());
            return;
        }
        let len = parse_max_len(&max_len.get());
        busy.set(true);
        info.set(String::new());
        result.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.summarize(&text_value, len).await {
                Ok(summary) => result.set(Some(summary)),
                Err(ApiError::Unauthorized | ApiError::Forbidden) => {}
                Err(e) => info.set(format!("Summarization failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text_value, len, api);
        }
    };

    view! {
        <section class="tool-page">
            <h2>"Text Summary"</h2>
            <form class="tool-form" on:submit=on_submit>
                <label class="tool-form__label">
                    "Your text"
                    <textarea
                        class="tool-form__textarea"
                        rows="12"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="tool-form__label tool-form__label--inline">
                    "Summary length (characters)"
                    <input
                        class="tool-form__input"
                        type="number"
                        min="50"
                        max="2000"
                        prop:value=move || max_len.get()
                        on:input=move |ev| max_len.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Summarizing..." } else { "Summarize" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="tool-page__message">{move || info.get()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|r| {
                        let has_keywords = !r.keywords.is_empty();
                        view! {
                            <div class="tool-result">
                                <h3>"Summary"</h3>
                                <p class="tool-result__text">{r.summary}</p>
                                <Show when=move || has_keywords>
                                    <h4>"Keywords"</h4>
                                </Show>
                                <ul class="tool-result__keywords">
                                    {r
                                        .keywords
                                        .into_iter()
                                        .map(|kw| view! { <li class="tool-result__keyword">{kw}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

//! Spell check page.

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::SpellcheckReport;

#[component]
pub fn SpellCheckPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let text = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let report = RwSignal::new(None::<SpellcheckReport>);

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
        busy.set(true);
        info.set(String::new());
        report.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.check_spelling(&text_value).await {
                Ok(result) => report.set(Some(result)),
                Err(ApiError::Unauthorized | ApiError::Forbidden) => {}
                Err(e) => info.set(format!("Spell check failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text_value, api);
        }
    };

    view! {
        <section class="tool-page">
            <h2>"Spell Check"</h2>
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
                        let count = r.typos.len();
                        view! {
                            <div class="tool-result">
                                <h3>
                                    {if count == 0 {
                                        "No issues found".to_owned()
                                    } else {
                                        format!("{count} suspected issue(s)")
                                    }}
                                </h3>
                                <ul class="tool-result__findings">
                                    {r
                                        .typos
                                        .into_iter()
                                        .map(|typo| {
                                            view! {
                                                <li class="tool-result__finding">
                                                    <span class="tool-result__token">{typo.token}</span>
                                                    " \u{2192} "
                                                    <span class="tool-result__suggestion">{typo.suggestion}</span>
                                                    <span class="tool-result__context">
                                                        {format!(" (at {}: \u{201c}{}\u{201d})", typo.position, typo.context)}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <h4>"Corrected text"</h4>
                                <pre class="tool-result__text">{r.checked_text}</pre>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

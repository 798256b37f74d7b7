//! Prev/next pagination controls for the history and log tables.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Page the "previous" button should move to, if any. Pages are 1-based.
pub fn prev_page(current: u32) -> Option<u32> {
    (current > 1).then(|| current - 1)
}

/// Page the "next" button should move to, if any.
pub fn next_page(current: u32, pages: u32) -> Option<u32> {
    (current < pages).then(|| current + 1)
}

/// Label between the buttons. A zero-page result still reads "of 1".
pub fn page_label(current: u32, pages: u32) -> String {
    format!("Page {current} of {}", pages.max(1))
}

#[component]
pub fn Pagination(page: RwSignal<u32>, #[prop(into)] pages: Signal<u32>) -> impl IntoView {
    let on_prev = move |_| {
        if let Some(p) = prev_page(page.get()) {
            page.set(p);
        }
    };
    let on_next = move |_| {
        if let Some(p) = next_page(page.get(), pages.get()) {
            page.set(p);
        }
    };

    view! {
        <div class="pagination">
            <button class="btn" disabled=move || prev_page(page.get()).is_none() on:click=on_prev>
                "Prev"
            </button>
            <span class="pagination__label">{move || page_label(page.get(), pages.get())}</span>
            <button
                class="btn"
                disabled=move || next_page(page.get(), pages.get()).is_none()
                on:click=on_next
            >
                "Next"
            </button>
        </div>
    }
}

//! Toast rendering for the notify queue.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, Toast};

/// How long a toast stays up before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_MILLIS: u32 = 4_000;

/// Fixed overlay rendering every queued toast. Mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || notify.get().toasts
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast/> }
            />
        </div>
    }
}

/// One toast with a manual dismiss button and an auto-dismiss timer.
#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let id = toast.id;
    let class = format!("toast toast--{}", toast.level.class_suffix());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
        notify.update(|n| n.dismiss(id));
    });

    view! {
        <div class=class role="status">
            <span class="toast__message">{toast.message}</span>
            <button class="toast__dismiss" on:click=move |_| notify.update(|n| n.dismiss(id))>
                "\u{2715}"
            </button>
        </div>
    }
}

//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::notify::NotifyState;

/// Username rule mirrored from the server: 4 to 20 characters.
pub(crate) fn validate_username(username: &str) -> Result<(), &'static str> {
    let len = username.chars().count();
    if !(4..=20).contains(&len) {
        return Err("Username must be 4-20 characters.");
    }
    Ok(())
}

/// Password rule mirrored from the server: at least 8 characters.
pub(crate) fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    Ok(())
}

/// Loose shape check for the optional email; the server validates properly.
pub(crate) fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Ok(());
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Enter a valid email address.");
    };
    if local.is_empty() || domain.len() < 3 || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("Enter a valid email address.");
    }
    Ok(())
}

/// Run every pre-submit check for the registration form.
pub(crate) fn validate_registration(
    username: &str,
    password: &str,
    confirm: &str,
    email: &str,
) -> Result<(), &'static str> {
    validate_username(username)?;
    validate_password(password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    validate_email(email)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(msg) =
            validate_registration(&username_value, &password_value, &confirm.get(), &email_value)
        {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let email_opt = (!email_value.is_empty()).then_some(email_value);
                match api.register(&username_value, &password_value, email_opt.as_deref()).await {
                    Ok(()) => {
                        notify.update(|n| n.success("Account created. Sign in to continue."));
                        navigate("/login", Default::default());
                    }
                    Err(e) => {
                        info.set(format!("Registration failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, email_value, password_value, notify, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"PaperTools"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username (4-20 characters)"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email (optional)"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__links">
                    <A href="/login">"Back to sign-in"</A>
                </p>
            </div>
        </div>
    }
}

//! Admin user management: list accounts, toggle the admin flag, delete.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::api::ApiClient;
use crate::net::types::UserInfo;
use crate::state::auth::AuthState;
use crate::state::notify::NotifyState;

#[component]
pub fn UserManagePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let users = LocalResource::new(move || async move { api.all_users().await });

    // Deletion target while the confirm dialog is open.
    let pending_delete = RwSignal::new(None::<UserInfo>);

    let on_cancel_delete = Callback::new(move |()| pending_delete.set(None));

    let on_confirm_delete = Callback::new(move |()| {
        let Some(target) = pending_delete.get() else {
            return;
        };
        pending_delete.set(None);

        #[cfg(feature = "hydrate")]
        {
            let users = users.clone();
            leptos::task::spawn_local(async move {
                match api.delete_user(target.id).await {
                    Ok(()) => {
                        notify.update(|n| n.success(format!("Deleted user {}.", target.username)));
                        users.refetch();
                    }
                    Err(e) => notify.update(|n| n.error(format!("Delete failed: {e}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, notify);
        }
    });

    let on_toggle_admin = Callback::new(move |user: UserInfo| {
        #[cfg(feature = "hydrate")]
        {
            let users = users.clone();
            leptos::task::spawn_local(async move {
                match api.set_permissions(user.id, !user.is_admin).await {
                    Ok(()) => users.refetch(),
                    Err(e) => notify.update(|n| n.error(format!("Permission change failed: {e}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, notify);
        }
    });

    // The signed-in admin cannot delete or demote their own account.
    let own_id = move || auth.get().user.map(|u| u.id);

    view! {
        <section class="admin-view">
            <h2>"User Management"</h2>
            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| {
                            match result {
                                Ok(list) => {
                                    view! {
                                        <table class="tool-result__table">
                                            <thead>
                                                <tr>
                                                    <th>"ID"</th>
                                                    <th>"Username"</th>
                                                    <th>"Email"</th>
                                                    <th>"Role"</th>
                                                    <th>"Actions"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|user| {
                                                        let is_self = own_id() == Some(user.id);
                                                        let toggle_user = user.clone();
                                                        let delete_user = user.clone();
                                                        view! {
                                                            <tr>
                                                                <td>{user.id}</td>
                                                                <td>{user.username.clone()}</td>
                                                                <td>{user.email.clone()}</td>
                                                                <td>{if user.is_admin { "admin" } else { "user" }}</td>
                                                                <td class="admin-view__actions">
                                                                    <button
                                                                        class="btn"
                                                                        disabled=is_self
                                                                        on:click=move |_| on_toggle_admin.run(toggle_user.clone())
                                                                    >
                                                                        {if user.is_admin { "Revoke admin" } else { "Make admin" }}
                                                                    </button>
                                                                    <button
                                                                        class="btn btn--danger"
                                                                        disabled=is_self
                                                                        on:click=move |_| pending_delete.set(Some(delete_user.clone()))
                                                                    >
                                                                        "Delete"
                                                                    </button>
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
                                        <p class="tool-page__message">{format!("Failed to load users: {e}")}</p>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}
            </Suspense>
            {move || {
                pending_delete
                    .get()
                    .map(|user| {
                        let message = format!("Delete {} ({})? This cannot be undone.", user.username, user.email);
                        view! {
                            <ConfirmDialog
                                title="Delete user"
                                message=message
                                confirm_label="Delete"
                                on_confirm=on_confirm_delete
                                on_cancel=on_cancel_delete
                            />
                        }
                    })
            }}
        </section>
    }
}

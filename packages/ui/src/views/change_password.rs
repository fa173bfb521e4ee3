//! Change the account password.

use dioxus::prelude::*;

use crate::session::use_client;

#[component]
pub fn ChangePasswordView(on_changed: EventHandler<()>) -> Element {
    let client = use_client();
    let mut user_id = use_signal(String::new);
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // The change-password endpoint is keyed by user id.
    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.current_user().await {
                Ok(u) => user_id.set(u.id),
                Err(e) => {
                    tracing::error!("failed to load user data: {e}");
                    error.set(Some("Failed to load your account".to_string()));
                }
            }
        }
    });

    let handle_change = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            if new_password().is_empty() {
                error.set(Some("Please enter a new password".to_string()));
                return;
            }
            if new_password() != confirm() {
                error.set(Some("New passwords do not match".to_string()));
                return;
            }

            let request = api::ChangePasswordRequest {
                current_password: current(),
                new_password: new_password(),
                confirm_password: confirm(),
            };

            saving.set(true);
            match client.change_password(&user_id(), &request).await {
                Ok(()) => on_changed.call(()),
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col gap-3 p-4",

            h2 {
                class: "text-lg font-bold text-neutral-800",
                "Change password"
            }

            form {
                onsubmit: handle_change,
                class: "flex flex-col gap-3",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    r#type: "password",
                    placeholder: "Current password",
                    value: current(),
                    oninput: move |evt: FormEvent| current.set(evt.value()),
                }
                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    r#type: "password",
                    placeholder: "New password",
                    value: new_password(),
                    oninput: move |evt: FormEvent| new_password.set(evt.value()),
                }
                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    r#type: "password",
                    placeholder: "Confirm new password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }

                button {
                    class: "w-full rounded bg-[#D32F2F] px-5 py-2.5 text-white text-[0.9375rem] font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Change password" }
                }
            }
        }
    }
}

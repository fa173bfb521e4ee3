//! Login view with email/password form.

use dioxus::prelude::*;

use crate::notifications::use_syncer;
use crate::session::{use_client, use_session, SessionState};

#[component]
pub fn LoginView(
    on_logged_in: EventHandler<()>,
    on_navigate_register: EventHandler<()>,
) -> Element {
    let client = use_client();
    let syncer = use_syncer();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let syncer = syncer.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match client.login(&e, &p).await {
                Ok(stored) => {
                    // The session write is atomic; reaching here means both
                    // token and email are persisted.
                    let user = client.current_user().await.ok();
                    session.set(SessionState {
                        user,
                        email: Some(stored.email),
                        loading: false,
                    });
                    // Populate the badge without waiting for the next tick.
                    syncer.sync().await;
                    on_logged_in.call(());
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-[#FFF5F5]",

            h1 {
                class: "mb-2 text-[#D32F2F] font-bold text-[1.75rem]",
                "BloodLink"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign in to your account"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "w-full rounded bg-[#D32F2F] px-5 py-2.5 text-white text-[0.9375rem] font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Don't have an account? "
                button {
                    class: "text-[#D32F2F]",
                    onclick: move |_| on_navigate_register.call(()),
                    "Register"
                }
            }
        }
    }
}

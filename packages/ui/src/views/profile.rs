//! Profile view: the signed-in user's details and account actions.

use dioxus::prelude::*;

use crate::session::use_client;

fn date_field(value: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[component]
pub fn ProfileView(
    on_edit_profile: EventHandler<()>,
    on_change_password: EventHandler<()>,
    on_activity: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let client = use_client();
    let mut user = use_signal(|| Option::<api::UserInfo>::None);
    let mut loading = use_signal(|| true);
    let mut signed_out = use_signal(|| false);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.current_user().await {
                Ok(info) => user.set(Some(info)),
                Err(e) if e.is_auth_missing() => signed_out.set(true),
                Err(e) => tracing::error!("failed to load user data: {e}"),
            }
            loading.set(false);
        }
    });

    if signed_out() {
        return rsx! {
            div {
                class: "flex flex-col items-center gap-3 p-8",
                p { class: "text-neutral-600", "Sign in to see your profile." }
                button {
                    class: "rounded bg-[#D32F2F] px-4 py-2 text-white text-sm",
                    onclick: move |_| on_navigate_login.call(()),
                    "Login"
                }
            }
        };
    }

    if loading() {
        return rsx! {
            div { class: "p-4",
                p { class: "text-neutral-500", "Loading..." }
            }
        };
    }

    rsx! {
        div {
            class: "flex flex-col gap-3 p-4",

            h2 {
                class: "text-lg font-bold text-neutral-800",
                "My profile"
            }

            if let Some(u) = user() {
                div {
                    class: "rounded-lg bg-neutral-100 p-4",
                    ProfileRow { label: "Name", value: u.name.clone() }
                    ProfileRow { label: "Email", value: u.email.clone() }
                    ProfileRow { label: "Phone", value: u.phone_number.clone() }
                    ProfileRow { label: "Date of birth", value: date_field(&u.date_of_birth) }
                    ProfileRow { label: "Gender", value: u.gender.clone() }
                    ProfileRow { label: "Blood type", value: u.blood_type.clone() }
                    ProfileRow { label: "Address", value: u.address.clone() }
                    ProfileRow { label: "Last donation", value: date_field(&u.last_donation_date) }
                }

                button {
                    class: "rounded bg-[#D32F2F] px-4 py-2 text-white text-sm",
                    onclick: move |_| on_edit_profile.call(()),
                    "Edit personal information"
                }
                button {
                    class: "rounded bg-[#D32F2F] px-4 py-2 text-white text-sm",
                    onclick: move |_| on_change_password.call(()),
                    "Change password"
                }
                button {
                    class: "rounded border border-[#D32F2F] px-4 py-2 text-[#D32F2F] text-sm",
                    onclick: move |_| on_activity.call(()),
                    "My requests"
                }
            } else {
                p { class: "text-neutral-500", "Profile unavailable right now." }
            }
        }
    }
}

#[component]
fn ProfileRow(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between border-b border-neutral-200 py-1.5 last:border-none",
            span { class: "text-sm text-neutral-500", "{label}" }
            span { class: "text-sm text-neutral-800", "{value}" }
        }
    }
}

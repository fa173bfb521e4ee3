//! Donor search: registered users filtered by blood type and address.

use dioxus::prelude::*;

use crate::session::use_client;
use crate::views::BLOOD_TYPES;

#[component]
pub fn DonorsView(on_navigate_login: EventHandler<()>) -> Element {
    let client = use_client();
    let mut donors = use_signal(Vec::<api::UserInfo>::new);
    let mut loading = use_signal(|| true);
    let mut signed_out = use_signal(|| false);
    let mut blood_filter = use_signal(String::new);
    let mut address_filter = use_signal(String::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.donors().await {
                Ok(users) => donors.set(users),
                Err(e) if e.is_auth_missing() => signed_out.set(true),
                Err(e) => tracing::error!("failed to fetch donors: {e}"),
            }
            loading.set(false);
        }
    });

    if signed_out() {
        return rsx! {
            div {
                class: "flex flex-col items-center gap-3 p-8",
                p { class: "text-neutral-600", "Sign in to search for donors." }
                button {
                    class: "rounded bg-[#D32F2F] px-4 py-2 text-white text-sm",
                    onclick: move |_| on_navigate_login.call(()),
                    "Login"
                }
            }
        };
    }

    let filtered: Vec<api::UserInfo> = donors()
        .into_iter()
        .filter(|d| {
            let by_type = blood_filter().is_empty() || d.blood_type == blood_filter();
            let address = address_filter().trim().to_lowercase();
            let by_address = address.is_empty() || d.address.to_lowercase().contains(&address);
            by_type && by_address
        })
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-3 p-4",

            h2 {
                class: "text-lg font-bold text-neutral-800",
                "Search donors"
            }

            div {
                class: "flex gap-2",
                select {
                    class: "rounded border border-neutral-300 bg-white px-2 py-1.5 text-sm",
                    value: blood_filter(),
                    onchange: move |evt: FormEvent| blood_filter.set(evt.value()),
                    option { value: "", "All types" }
                    for bt in BLOOD_TYPES {
                        option { value: bt, "{bt}" }
                    }
                }
                input {
                    class: "flex-1 rounded border border-neutral-300 bg-white px-2 py-1.5 text-sm",
                    placeholder: "Filter by address",
                    value: address_filter(),
                    oninput: move |evt: FormEvent| address_filter.set(evt.value()),
                }
            }

            if loading() {
                p { class: "text-neutral-500", "Loading..." }
            } else if filtered.is_empty() {
                p { class: "text-neutral-500", "No matching donors." }
            } else {
                for donor in filtered {
                    div {
                        key: "{donor.id}",
                        class: "rounded-lg bg-neutral-100 p-3",
                        p {
                            class: "font-bold text-neutral-800",
                            "{donor.name} ({donor.blood_type})"
                        }
                        p {
                            class: "text-sm text-neutral-700",
                            "{donor.address}"
                        }
                        if !donor.phone_number.is_empty() {
                            p {
                                class: "text-xs text-neutral-500",
                                "Phone: {donor.phone_number}"
                            }
                        }
                    }
                }
            }
        }
    }
}

//! All open blood requests, filterable by blood type and place.

use dioxus::prelude::*;

use crate::session::use_client;
use crate::views::BLOOD_TYPES;

#[component]
pub fn RequestsView() -> Element {
    let client = use_client();
    let mut requests = use_signal(Vec::<api::BloodRequest>::new);
    let mut loading = use_signal(|| true);
    let mut blood_filter = use_signal(String::new);
    let mut place_filter = use_signal(String::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.requests().await {
                Ok(all) => requests.set(all.into_iter().filter(|r| !r.is_complete()).collect()),
                Err(e) => tracing::error!("failed to fetch requests: {e}"),
            }
            loading.set(false);
        }
    });

    let filtered: Vec<api::BloodRequest> = requests()
        .into_iter()
        .filter(|r| {
            let by_type = blood_filter().is_empty() || r.blood_type == blood_filter();
            let place = place_filter().trim().to_lowercase();
            let by_place =
                place.is_empty() || r.donation_point.to_lowercase().contains(&place);
            by_type && by_place
        })
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-3 p-4",

            h2 {
                class: "text-lg font-bold text-neutral-800",
                "Blood requests"
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
                    placeholder: "Filter by donation point",
                    value: place_filter(),
                    oninput: move |evt: FormEvent| place_filter.set(evt.value()),
                }
            }

            if loading() {
                p { class: "text-neutral-500", "Loading..." }
            } else if filtered.is_empty() {
                p { class: "text-neutral-500", "No matching requests." }
            } else {
                for request in filtered {
                    div {
                        key: "{request.id}",
                        class: "rounded-lg bg-neutral-100 p-3",
                        p {
                            class: "font-bold text-[#D32F2F]",
                            "{request.patient_name} ({request.blood_type})"
                        }
                        p {
                            class: "text-sm text-neutral-700",
                            "{request.quantity} unit(s) at {request.donation_point}"
                        }
                        p {
                            class: "text-xs text-neutral-500",
                            "Contact {request.contact_number} · {request.urgency} · transportation {request.transportation}"
                        }
                    }
                }
            }
        }
    }
}

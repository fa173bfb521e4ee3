//! Home view: the most recent open blood requests plus donation resources.

use dioxus::prelude::*;

use crate::session::use_client;

const DONATION_LINKS: [(&str, &str); 3] = [
    (
        "Who can give blood? (WHO)",
        "https://www.who.int/news-room/q-a-detail/blood-donation",
    ),
    (
        "The donation process (Red Cross)",
        "https://www.redcrossblood.org/donate-blood/blood-donation-process/before-during-after.html",
    ),
    (
        "Blood donation basics (Mayo Clinic)",
        "https://www.mayoclinic.org/healthy-lifestyle/nutrition-and-healthy-eating/in-depth/blood-donation/art-20045790",
    ),
];

#[component]
pub fn HomeView(on_navigate_requests: EventHandler<()>) -> Element {
    let client = use_client();
    let mut patients = use_signal(Vec::<api::BloodRequest>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.recent_requests(4).await {
                Ok(requests) => {
                    patients.set(requests.into_iter().filter(|r| !r.is_complete()).collect())
                }
                Err(e) => tracing::error!("failed to fetch blood requests: {e}"),
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            class: "flex flex-col gap-4 p-4",

            h2 {
                class: "text-lg font-bold text-neutral-800",
                "Patients in need"
            }

            if loading() {
                p { class: "text-neutral-500", "Loading..." }
            } else if patients().is_empty() {
                p { class: "text-neutral-500", "No open blood requests right now." }
            } else {
                for request in patients() {
                    div {
                        key: "{request.id}",
                        class: "rounded-lg bg-neutral-100 p-3",
                        p {
                            class: "font-bold text-[#D32F2F]",
                            "{request.patient_name} needs {request.blood_type}"
                        }
                        p {
                            class: "text-sm text-neutral-700",
                            "{request.quantity} unit(s) at {request.donation_point}"
                        }
                        p {
                            class: "text-xs text-neutral-500",
                            "Urgency: {request.urgency}"
                        }
                    }
                }
            }

            button {
                class: "self-start text-sm text-[#D32F2F]",
                onclick: move |_| on_navigate_requests.call(()),
                "See all requests"
            }

            h2 {
                class: "mt-4 text-lg font-bold text-neutral-800",
                "Before you donate"
            }
            for (label, url) in DONATION_LINKS {
                a {
                    class: "text-sm text-[#D32F2F] underline",
                    href: url,
                    "{label}"
                }
            }
        }
    }
}

//! Activity log: the caller's own blood requests, with edit and delete.

use dioxus::prelude::*;

use crate::session::use_client;

#[component]
pub fn ActivityView(on_edit: EventHandler<String>) -> Element {
    let client = use_client();
    let mut requests = use_signal(Vec::<api::BloodRequest>::new);
    let mut loading = use_signal(|| true);
    let mut refresh = use_signal(|| 0u32);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        // Reading the counter makes the loader re-run after a delete.
        let _tick = refresh();
        async move {
            match client.my_activity().await {
                Ok(mine) => requests.set(mine),
                Err(e) if e.is_auth_missing() => requests.set(Vec::new()),
                Err(e) => tracing::error!("failed to load requests: {e}"),
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            class: "flex flex-col gap-3 p-4",

            h2 {
                class: "text-lg font-bold text-neutral-800",
                "My requests"
            }

            if loading() {
                p { class: "text-neutral-500", "Loading..." }
            } else if requests().is_empty() {
                p { class: "text-neutral-500", "You have not made any requests." }
            } else {
                for request in requests() {
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
                            "Status: {request.done_status}"
                        }
                        div {
                            class: "mt-2 flex gap-2",
                            button {
                                class: "rounded border border-neutral-400 px-3 py-1 text-xs text-neutral-700",
                                onclick: {
                                    let id = request.id.clone();
                                    move |_| on_edit.call(id.clone())
                                },
                                "Edit"
                            }
                            button {
                                class: "rounded border border-[#D32F2F] px-3 py-1 text-xs text-[#D32F2F]",
                                onclick: {
                                    let client = client.clone();
                                    let id = request.id.clone();
                                    move |_| {
                                        let client = client.clone();
                                        let id = id.clone();
                                        async move {
                                            match client.delete_request(&id).await {
                                                Ok(()) => refresh.set(refresh() + 1),
                                                Err(e) => {
                                                    tracing::error!("delete failed: {e}")
                                                }
                                            }
                                        }
                                    }
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

//! Create or edit a blood request.
//!
//! The donation point is entered as text; coordinates are optional manual
//! fields. Map pickers and place autocomplete are deliberately absent.

use dioxus::prelude::*;

use crate::session::use_client;
use crate::views::BLOOD_TYPES;

#[component]
pub fn RequestFormView(request_id: Option<String>, on_submitted: EventHandler<()>) -> Element {
    let client = use_client();
    let editing = request_id.is_some();
    let mut patient_name = use_signal(String::new);
    let mut blood_type = use_signal(|| "A+".to_string());
    let mut quantity = use_signal(String::new);
    let mut donation_point = use_signal(String::new);
    let mut contact_number = use_signal(String::new);
    let mut transportation = use_signal(|| "not provided".to_string());
    let mut urgency = use_signal(|| "Regular".to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Prefill from the existing request when editing.
    let loader_client = client.clone();
    let prefill_id = request_id.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        let prefill_id = prefill_id.clone();
        async move {
            let Some(id) = prefill_id else { return };
            match client.my_activity().await {
                Ok(mine) => {
                    if let Some(r) = mine.into_iter().find(|r| r.id == id) {
                        patient_name.set(r.patient_name);
                        blood_type.set(r.blood_type);
                        quantity.set(r.quantity.to_string());
                        donation_point.set(r.donation_point);
                        contact_number.set(r.contact_number);
                        if !r.transportation.is_empty() {
                            transportation.set(r.transportation);
                        }
                        if !r.urgency.is_empty() {
                            urgency.set(r.urgency);
                        }
                    }
                }
                Err(e) => tracing::error!("failed to load request: {e}"),
            }
        }
    });

    let submit_id = request_id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let submit_id = submit_id.clone();
        spawn(async move {
            error.set(None);

            if patient_name().trim().is_empty()
                || quantity().trim().is_empty()
                || donation_point().trim().is_empty()
                || contact_number().trim().is_empty()
            {
                error.set(Some("Please fill all required fields".to_string()));
                return;
            }
            let Ok(units) = quantity().trim().parse::<u32>() else {
                error.set(Some("Quantity must be a whole number".to_string()));
                return;
            };
            let contact = contact_number().trim().to_string();
            if contact.len() != 8 || !contact.chars().all(|c| c.is_ascii_digit()) {
                error.set(Some("Phone number must be 8 digits".to_string()));
                return;
            }

            let payload = api::NewBloodRequest {
                patient_name: patient_name().trim().to_string(),
                blood_type: blood_type(),
                quantity: units,
                donation_point: donation_point().trim().to_string(),
                donation_point_lat: None,
                donation_point_lng: None,
                contact_number: contact,
                transportation: transportation(),
                urgency: urgency(),
                location: None,
            };

            submitting.set(true);
            let result = match submit_id {
                Some(id) => client.update_request(&id, &payload).await,
                None => client.create_request(&payload).await,
            };
            match result {
                Ok(()) => on_submitted.call(()),
                Err(e) => {
                    submitting.set(false);
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
                if editing { "Edit blood request" } else { "Request blood" }
            }

            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    placeholder: "Patient name",
                    value: patient_name(),
                    oninput: move |evt: FormEvent| patient_name.set(evt.value()),
                }
                select {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    value: blood_type(),
                    onchange: move |evt: FormEvent| blood_type.set(evt.value()),
                    for bt in BLOOD_TYPES {
                        option { value: bt, "{bt}" }
                    }
                }
                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    r#type: "number",
                    placeholder: "Quantity (units)",
                    value: quantity(),
                    oninput: move |evt: FormEvent| quantity.set(evt.value()),
                }
                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    placeholder: "Donation point (city, hospital or center)",
                    value: donation_point(),
                    oninput: move |evt: FormEvent| donation_point.set(evt.value()),
                }
                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    r#type: "tel",
                    placeholder: "Contact number (8 digits)",
                    value: contact_number(),
                    oninput: move |evt: FormEvent| contact_number.set(evt.value()),
                }
                select {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    value: transportation(),
                    onchange: move |evt: FormEvent| transportation.set(evt.value()),
                    option { value: "not provided", "Transportation not provided" }
                    option { value: "provided", "Transportation provided" }
                }
                select {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    value: urgency(),
                    onchange: move |evt: FormEvent| urgency.set(evt.value()),
                    option { value: "Regular", "Regular" }
                    option { value: "Urgent", "Urgent" }
                }

                button {
                    class: "w-full rounded bg-[#D32F2F] px-5 py-2.5 text-white text-[0.9375rem] font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        "Submitting..."
                    } else if editing {
                        "Save changes"
                    } else {
                        "Submit request"
                    }
                }
            }
        }
    }
}

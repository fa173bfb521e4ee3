//! Edit personal information.

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::session::use_client;
use crate::views::BLOOD_TYPES;

#[component]
pub fn EditProfileView(on_saved: EventHandler<()>) -> Element {
    let client = use_client();
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut blood_type = use_signal(|| "A+".to_string());
    let mut address = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Prefill from the current profile.
    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.current_user().await {
                Ok(u) => {
                    name.set(u.name);
                    phone.set(u.phone_number);
                    dob.set(
                        u.date_of_birth
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default(),
                    );
                    gender.set(u.gender);
                    if !u.blood_type.is_empty() {
                        blood_type.set(u.blood_type);
                    }
                    address.set(u.address);
                }
                Err(e) => {
                    tracing::error!("failed to load user data: {e}");
                    error.set(Some("Failed to load your profile".to_string()));
                }
            }
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let Ok(date_of_birth) = NaiveDate::parse_from_str(dob().trim(), "%Y-%m-%d") else {
                error.set(Some("Enter date of birth as YYYY-MM-DD".to_string()));
                return;
            };

            let update = api::ProfileUpdate {
                name: name().trim().to_string(),
                phone_number: phone().trim().to_string(),
                date_of_birth,
                gender: gender(),
                blood_type: blood_type(),
                address: address().trim().to_string(),
            };

            saving.set(true);
            match client.update_profile(&update).await {
                Ok(()) => on_saved.call(()),
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
                "Edit personal information"
            }

            form {
                onsubmit: handle_save,
                class: "flex flex-col gap-3",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    placeholder: "Full Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    r#type: "tel",
                    placeholder: "Phone Number",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    placeholder: "Date of Birth (YYYY-MM-DD)",
                    value: dob(),
                    oninput: move |evt: FormEvent| dob.set(evt.value()),
                }
                select {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    value: gender(),
                    onchange: move |evt: FormEvent| gender.set(evt.value()),
                    option { value: "", "Select gender" }
                    option { value: "male", "Male" }
                    option { value: "female", "Female" }
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
                    placeholder: "Address",
                    value: address(),
                    oninput: move |evt: FormEvent| address.set(evt.value()),
                }

                button {
                    class: "w-full rounded bg-[#D32F2F] px-5 py-2.5 text-white text-[0.9375rem] font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save changes" }
                }
            }
        }
    }
}

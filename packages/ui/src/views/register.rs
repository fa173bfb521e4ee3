//! Registration view: full donor profile form.

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::session::use_client;
use crate::views::BLOOD_TYPES;

fn parse_date(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
}

#[component]
pub fn RegisterView(on_registered: EventHandler<()>) -> Element {
    let client = use_client();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut blood_type = use_signal(|| "A+".to_string());
    let mut address = use_signal(String::new);
    let mut last_donation = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_lowercase();
            let p = password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            let Some(date_of_birth) = parse_date(&dob()) else {
                error.set(Some("Enter date of birth as YYYY-MM-DD".to_string()));
                return;
            };
            let Some(last_donation_date) = parse_date(&last_donation()) else {
                error.set(Some("Enter last donation date as YYYY-MM-DD".to_string()));
                return;
            };

            let request = api::RegisterRequest {
                name: n,
                email: e,
                password: p,
                phone_number: phone().trim().to_string(),
                date_of_birth,
                gender: gender(),
                blood_type: blood_type(),
                address: address().trim().to_string(),
                last_donation_date,
                location: None,
            };

            loading.set(true);
            match client.register(&request).await {
                Ok(()) => on_registered.call(()),
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center min-h-screen p-8 bg-[#FFF5F5]",

            h1 {
                class: "mb-6 text-[#D32F2F] font-bold text-[1.75rem]",
                "Register"
            }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

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
                    placeholder: "Address (city or village)",
                    value: address(),
                    oninput: move |evt: FormEvent| address.set(evt.value()),
                }
                input {
                    class: "w-full rounded border border-neutral-300 bg-white px-3 py-2.5",
                    placeholder: "Last Donation Date (YYYY-MM-DD)",
                    value: last_donation(),
                    oninput: move |evt: FormEvent| last_donation.set(evt.value()),
                }

                button {
                    class: "w-full rounded bg-[#D32F2F] px-5 py-2.5 text-white text-[0.9375rem] font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }
        }
    }
}

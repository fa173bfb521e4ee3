//! Top navigation bar: app name, signed-in email menu, auth shortcuts.

use dioxus::prelude::*;

use crate::session::{sign_out, use_client, use_session};

#[component]
pub fn TopNavbar(
    on_navigate_home: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
    on_navigate_register: EventHandler<()>,
    on_signed_out: EventHandler<()>,
) -> Element {
    let client = use_client();
    let session = use_session();
    let mut menu_open = use_signal(|| false);

    let email = session().email;

    rsx! {
        header {
            class: "flex items-center justify-between bg-[#D32F2F] px-3 py-2 border-b border-neutral-200",
            button {
                class: "text-white font-bold text-2xl",
                onclick: move |_| on_navigate_home.call(()),
                "BloodLink"
            }
            div {
                class: "flex items-center gap-2",
                if let Some(email) = email {
                    div {
                        class: "relative",
                        button {
                            class: "px-3 py-1.5 rounded bg-[#B71C1C] text-white text-sm",
                            onclick: move |_| menu_open.set(!menu_open()),
                            "{email} \u{25BE}"
                        }
                        if menu_open() {
                            div {
                                class: "absolute right-0 top-10 z-40 rounded bg-white shadow",
                                button {
                                    class: "block w-full px-4 py-2 text-left text-sm text-neutral-800",
                                    onclick: move |_| {
                                        menu_open.set(false);
                                        let client = client.clone();
                                        async move {
                                            sign_out(&client, session).await;
                                            on_signed_out.call(());
                                        }
                                    },
                                    "Sign Out"
                                }
                            }
                        }
                    }
                } else {
                    button {
                        class: "px-3 py-1.5 rounded bg-[#B71C1C] text-white text-sm",
                        onclick: move |_| on_navigate_register.call(()),
                        "Register"
                    }
                    button {
                        class: "px-3 py-1.5 rounded bg-[#B71C1C] text-white text-sm",
                        onclick: move |_| on_navigate_login.call(()),
                        "Login"
                    }
                }
            }
        }
    }
}

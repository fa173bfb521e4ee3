//! Tab layout: top navbar, routed content, bottom tab bar with the unread
//! badge and the center "request blood" button.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn TabLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "flex min-h-screen flex-col",

            ui::TopNavbar {
                on_navigate_home: move |_| { nav.push(Route::Home {}); },
                on_navigate_login: move |_| { nav.push(Route::Login {}); },
                on_navigate_register: move |_| { nav.push(Route::Register {}); },
                on_signed_out: move |_| { nav.replace(Route::Login {}); },
            }

            main {
                class: "flex-1 overflow-y-auto pb-16",
                Outlet::<Route> {}
            }

            TabBar {}
        }
    }
}

#[component]
fn TabBar() -> Element {
    let nav = use_navigator();
    let notifications = ui::use_notifications();
    let syncer = ui::use_syncer();

    let unread = notifications().unread_count;

    rsx! {
        nav {
            class: "fixed inset-x-0 bottom-0 flex h-14 items-center justify-around border-t border-neutral-200 bg-white",

            TabButton { label: "Home", on_press: move |_| { nav.push(Route::Home {}); } }
            TabButton { label: "Donors", on_press: move |_| { nav.push(Route::Donors {}); } }

            // Center button, like the original's raised plus.
            button {
                class: "flex h-12 w-12 -translate-y-3 items-center justify-center rounded-full bg-[#D32F2F] text-2xl text-white shadow",
                onclick: move |_| { nav.push(Route::NewRequest {}); },
                "+"
            }

            // Pressing the tab clears the badge before the list has even
            // been fetched; the screen then does the real mark-read.
            button {
                class: "relative px-3 py-1 text-sm text-neutral-700",
                onclick: move |_| {
                    syncer.center().reset_unread();
                    nav.push(Route::Notifications {});
                },
                "Alerts"
                if unread > 0 {
                    span {
                        class: "absolute -top-1 right-0 rounded-full bg-[#D32F2F] px-1.5 text-[10px] text-white",
                        "{unread}"
                    }
                }
            }

            TabButton { label: "Profile", on_press: move |_| { nav.push(Route::Profile {}); } }
        }
    }
}

#[component]
fn TabButton(label: String, on_press: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "px-3 py-1 text-sm text-neutral-700",
            onclick: move |_| on_press.call(()),
            "{label}"
        }
    }
}

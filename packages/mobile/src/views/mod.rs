//! Route components: thin wrappers that hand navigation callbacks to the
//! shared views in the `ui` crate.

use dioxus::prelude::*;

use crate::Route;

mod tab_layout;
pub use tab_layout::TabLayout;

#[component]
pub fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    // Wait for the stored session to resolve, then land on the right screen.
    if session().loading {
        return rsx! {
            div { class: "flex min-h-screen items-center justify-center",
                p { class: "text-neutral-500", "Loading..." }
            }
        };
    }
    if session().signed_in() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::LoginView {
            on_logged_in: move |_| { nav.replace(Route::Home {}); },
            on_navigate_register: move |_| { nav.push(Route::Register {}); },
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::RegisterView {
            on_registered: move |_| { nav.replace(Route::Login {}); },
        }
    }
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::HomeView {
            on_navigate_requests: move |_| { nav.push(Route::Requests {}); },
        }
    }
}

#[component]
pub fn Requests() -> Element {
    rsx! {
        ui::views::RequestsView {}
    }
}

#[component]
pub fn Donors() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::DonorsView {
            on_navigate_login: move |_| { nav.push(Route::Login {}); },
        }
    }
}

#[component]
pub fn Notifications() -> Element {
    rsx! {
        ui::views::NotificationsScreen {}
    }
}

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::ProfileView {
            on_edit_profile: move |_| { nav.push(Route::EditProfile {}); },
            on_change_password: move |_| { nav.push(Route::ChangePassword {}); },
            on_activity: move |_| { nav.push(Route::Activity {}); },
            on_navigate_login: move |_| { nav.push(Route::Login {}); },
        }
    }
}

#[component]
pub fn EditProfile() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::EditProfileView {
            on_saved: move |_| { nav.go_back(); },
        }
    }
}

#[component]
pub fn ChangePassword() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::ChangePasswordView {
            on_changed: move |_| { nav.go_back(); },
        }
    }
}

#[component]
pub fn Activity() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::ActivityView {
            on_edit: move |request_id: String| {
                nav.push(Route::EditRequest { request_id });
            },
        }
    }
}

#[component]
pub fn NewRequest() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::RequestFormView {
            request_id: None,
            on_submitted: move |_| { nav.replace(Route::Activity {}); },
        }
    }
}

#[component]
pub fn EditRequest(request_id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::RequestFormView {
            request_id: Some(request_id),
            on_submitted: move |_| { nav.replace(Route::Activity {}); },
        }
    }
}

use dioxus::prelude::*;
use views::{
    Activity, ChangePassword, Donors, EditProfile, EditRequest, Home, Login, NewRequest,
    Notifications, Profile, Register, Requests, Root, TabLayout,
};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/requests/new")]
    NewRequest {},
    #[route("/requests/:request_id/edit")]
    EditRequest { request_id: String },
    #[route("/profile/edit")]
    EditProfile {},
    #[route("/profile/password")]
    ChangePassword {},
    #[route("/activity")]
    Activity {},
    #[layout(TabLayout)]
        #[route("/home")]
        Home {},
        #[route("/requests")]
        Requests {},
        #[route("/donors")]
        Donors {},
        #[route("/notifications")]
        Notifications {},
        #[route("/profile")]
        Profile {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SessionProvider {
            ui::NotificationProvider {
                Router::<Route> {}
            }
        }
    }
}

//! This crate contains all shared UI for the workspace.

mod client;
pub use client::{load_config, make_client, AppClient, AppStore};

mod session;
pub use session::{sign_out, use_client, use_config, use_session, SessionProvider, SessionState};

mod notifications;
pub use notifications::{
    use_notifications, use_push_bridge, use_syncer, AppSyncer, NotificationProvider,
};

mod popup;
pub use popup::NotificationPopup;

mod navbar;
pub use navbar::TopNavbar;

pub mod views;

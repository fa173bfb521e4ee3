//! Session context and hooks for the UI.

use dioxus::prelude::*;

use crate::client::{load_config, make_client, AppClient};

/// Authentication state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<api::UserInfo>,
    /// Email from the stored session, available even while the profile
    /// fetch is in flight or failing.
    pub email: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            email: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn signed_in(&self) -> bool {
        self.email.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The shared API client.
pub fn use_client() -> AppClient {
    use_context::<AppClient>()
}

/// The loaded client configuration.
pub fn use_config() -> store::BloodLinkConfig {
    use_context::<store::BloodLinkConfig>()
}

/// Provider component that owns the API client and the session state.
/// Wrap the app with this component (outside [`crate::NotificationProvider`]).
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(load_config);
    let client = use_context_provider(make_client);
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));

    // Resolve the stored session on mount.
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let email = client.stored_email().await;
            match client.current_user().await {
                Ok(user) => session.set(SessionState {
                    user: Some(user),
                    email,
                    loading: false,
                }),
                Err(e) if e.is_auth_missing() => session.set(SessionState {
                    user: None,
                    email: None,
                    loading: false,
                }),
                Err(e) => {
                    // Offline or server trouble: keep the stored identity,
                    // just without a fresh profile.
                    tracing::warn!("could not refresh profile: {e}");
                    session.set(SessionState {
                        user: None,
                        email,
                        loading: false,
                    });
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Clear the stored session and reset the context.
pub async fn sign_out(client: &AppClient, mut session: Signal<SessionState>) {
    if let Err(e) = client.logout().await {
        tracing::warn!("sign out failed: {e}");
    }
    session.set(SessionState {
        user: None,
        email: None,
        loading: false,
    });
}

//! Shared API-client constructor for all platforms.
//!
//! Returns an [`api::Client`] backed by the appropriate
//! [`store::SessionStore`]:
//! - **Desktop / Mobile** (native): [`store::FileSessionStore`] under the
//!   platform data directory
//! - **Web** (wasm): in-memory fallback; the session lasts for the page

#[cfg(not(target_arch = "wasm32"))]
pub type AppStore = store::FileSessionStore;
#[cfg(target_arch = "wasm32")]
pub type AppStore = store::MemorySessionStore;

/// The concrete client type the UI works with.
pub type AppClient = api::Client<AppStore>;

/// Load the client configuration, falling back to defaults.
pub fn load_config() -> store::BloodLinkConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::BloodLinkConfig::load_default()
    }
    #[cfg(target_arch = "wasm32")]
    {
        store::BloodLinkConfig::default()
    }
}

/// Create a platform-appropriate API client.
pub fn make_client() -> AppClient {
    let config = load_config();
    #[cfg(not(target_arch = "wasm32"))]
    let store = store::FileSessionStore::platform_default();
    #[cfg(target_arch = "wasm32")]
    let store = store::MemorySessionStore::new();
    api::Client::from_config(&config, store)
}

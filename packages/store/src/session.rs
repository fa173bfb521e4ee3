//! # Session persistence
//!
//! The [`Session`] is the only credential material the client holds: the API
//! bearer token plus the email it was issued for. It is created on login,
//! destroyed on logout, and read before every authenticated request.
//!
//! [`SessionStore`] is the async trait behind which the durable storage
//! lives. Implementations in sibling modules:
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::FileSessionStore`] | desktop / mobile | single TOML file under the platform data dir |
//! | [`crate::MemorySessionStore`] | tests | `Arc<Mutex<Option<Session>>>` |
//!
//! Both credential fields live in one file written atomically, so a session
//! is always stored or removed as a whole; callers never observe a token
//! without its email or vice versa. Every method returns `Result`; callers
//! treat a failed read as "logged out" and a failed write as a failed login.

use serde::{Deserialize, Serialize};

/// An authenticated session: bearer token plus the email it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
}

impl Session {
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
        }
    }
}

/// Errors from the durable session store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] toml::de::Error),
    #[error("session could not be encoded: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Async trait for persisting the session across process restarts.
pub trait SessionStore {
    /// Store token and email durably, as a unit.
    fn set_session(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;

    /// Load the stored session, or `None` if never set or cleared.
    fn load_session(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Session>, StoreError>>;

    /// Remove the stored session. Clearing an absent session is not an error.
    fn clear_session(&self) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

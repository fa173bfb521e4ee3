//! # API crate — REST client for the BloodLink backend
//!
//! Every persistent entity (users, blood requests, notifications) lives
//! behind the remote HTTP API; this crate is the only place that talks to
//! it. The frontends call [`Client`] methods and render the results.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Client`] — one method per endpoint, bearer-token auth from the session store |
//! | [`models`] | Wire models (`Notification`, `UserInfo`, `BloodRequest`, …) and response envelopes |
//! | [`error`] | [`ApiError`] taxonomy: `AuthMissing`, transport, non-2xx status |
//!
//! ## Authentication
//!
//! Authenticated endpoints read the bearer token from the [`store::SessionStore`]
//! the client was built with. A missing token short-circuits the call locally
//! as [`ApiError::AuthMissing`]: no request is sent, and background callers
//! treat it as "nothing to sync".

pub mod client;
pub mod error;
pub mod models;

pub use client::Client;
pub use error::ApiError;
pub use models::{
    BloodRequest, ChangePasswordRequest, GeoPoint, NewBloodRequest, Notification, ProfileUpdate,
    RegisterRequest, UserInfo,
};

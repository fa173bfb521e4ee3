//! # Notification state manager
//!
//! Process-wide notification state (the cached list and the unread count),
//! kept consistent with the server despite three concurrent triggers that
//! may race: the polling timer, incoming push events, and explicit
//! user-read actions.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`state`] | [`NotificationCenter`] — owned state container with subscribe/notify and sequence-gated updates |
//! | [`sync`] | [`Syncer`] — fetch passes, optimistic mark-read, polling loops, cancellation |
//! | [`feed`] | [`NotificationFeed`] — the three remote operations, implemented by [`api::Client`] |
//!
//! ## Consistency model
//!
//! Polling is the baseline: a fixed-interval timer re-fetches server truth,
//! so any failed or skipped update is repaired within one interval. Push
//! events are a low-latency shortcut layered on top: they trigger an
//! immediate out-of-band pass, they never replace polling. Overlapping
//! passes resolve deterministically: every dispatch takes a monotonically
//! increasing sequence number, and a completion only applies if no
//! higher-sequence result has been applied already.

pub mod feed;
pub mod state;
pub mod sync;

pub use feed::NotificationFeed;
pub use state::{NotificationCenter, NotificationState, SyncPhase};
pub use sync::{sleep, CancelToken, Syncer};

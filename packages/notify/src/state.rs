//! The owned notification state container.
//!
//! [`NotificationCenter`] replaces ambient shared state with a single owner:
//! all mutation goes through its methods, and everyone else observes
//! immutable snapshots through a watch channel. Updates are gated by
//! sequence numbers so that out-of-order completion of overlapping fetches
//! cannot roll the state backwards: the highest sequence wins, stale late
//! arrivals are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use api::Notification;
use tokio::sync::watch;

/// Where the manager is in its sync lifecycle.
///
/// `Uninitialized → Syncing → Idle`, with `Idle` re-entering `Syncing` on
/// every poll tick or push event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPhase {
    #[default]
    Uninitialized,
    Syncing,
    Idle,
}

/// Snapshot published to subscribers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    pub notifications: Vec<Notification>,
    /// Never negative: `u32`, and only ever set from a server value or
    /// reset to zero.
    pub unread_count: u32,
    pub phase: SyncPhase,
}

struct Inner {
    state: NotificationState,
    /// Highest sequence applied to the notification list.
    list_seq: u64,
    /// Highest sequence applied to the unread count. The list and the count
    /// are gated separately because they are fetched independently and
    /// either fetch may fail alone.
    count_seq: u64,
    /// Sync passes currently in flight, for phase bookkeeping.
    in_flight: u32,
}

/// Single-owner container for notification state.
pub struct NotificationCenter {
    inner: Mutex<Inner>,
    seq: AtomicU64,
    tx: watch::Sender<NotificationState>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(NotificationState::default());
        Self {
            inner: Mutex::new(Inner {
                state: NotificationState::default(),
                list_seq: 0,
                count_seq: 0,
                in_flight: 0,
            }),
            seq: AtomicU64::new(0),
            tx,
        }
    }

    /// Subscribe to state snapshots. The receiver observes every change.
    pub fn subscribe(&self) -> watch::Receiver<NotificationState> {
        self.tx.subscribe()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> NotificationState {
        self.inner.lock().unwrap().state.clone()
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn publish(&self, inner: &Inner) {
        self.tx.send_replace(inner.state.clone());
    }

    /// Claim a sequence number for a new sync pass and enter `Syncing`.
    pub fn begin_sync(&self) -> u64 {
        let seq = self.next_seq();
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight += 1;
        inner.state.phase = SyncPhase::Syncing;
        self.publish(&inner);
        seq
    }

    /// Close a sync pass. Returns to `Idle` once no pass is in flight.
    pub fn finish_sync(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        if inner.in_flight == 0 {
            inner.state.phase = SyncPhase::Idle;
        }
        self.publish(&inner);
    }

    /// Apply a fetched notification list, unless a newer result already
    /// landed. Returns whether the result was applied.
    pub fn apply_notifications(&self, seq: u64, notifications: Vec<Notification>) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if seq < inner.list_seq {
            tracing::debug!(seq, latest = inner.list_seq, "discarding stale notification list");
            return false;
        }
        inner.list_seq = seq;
        inner.state.notifications = notifications;
        self.publish(&inner);
        true
    }

    /// Apply a fetched unread count, unless a newer result already landed.
    pub fn apply_unread(&self, seq: u64, count: u32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if seq < inner.count_seq {
            tracing::debug!(seq, latest = inner.count_seq, "discarding stale unread count");
            return false;
        }
        inner.count_seq = seq;
        inner.state.unread_count = count;
        self.publish(&inner);
        true
    }

    /// Optimistically zero the unread count (tab press, mark-read).
    ///
    /// Claims a fresh sequence number, so a count fetch dispatched *before*
    /// the user's action can never resurrect the stale value; a later poll
    /// still overwrites with server truth.
    pub fn reset_unread(&self) {
        let seq = self.next_seq();
        let mut inner = self.inner.lock().unwrap();
        inner.count_seq = seq;
        inner.state.unread_count = 0;
        self.publish(&inner);
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_lifecycle() {
        let center = NotificationCenter::new();
        assert_eq!(center.snapshot().phase, SyncPhase::Uninitialized);

        center.begin_sync();
        assert_eq!(center.snapshot().phase, SyncPhase::Syncing);

        center.finish_sync();
        assert_eq!(center.snapshot().phase, SyncPhase::Idle);

        // Idle re-enters Syncing on the next pass.
        center.begin_sync();
        assert_eq!(center.snapshot().phase, SyncPhase::Syncing);
        center.finish_sync();
        assert_eq!(center.snapshot().phase, SyncPhase::Idle);
    }

    #[test]
    fn test_overlapping_passes_stay_syncing_until_all_finish() {
        let center = NotificationCenter::new();
        center.begin_sync();
        center.begin_sync();

        center.finish_sync();
        assert_eq!(center.snapshot().phase, SyncPhase::Syncing);
        center.finish_sync();
        assert_eq!(center.snapshot().phase, SyncPhase::Idle);
    }

    #[test]
    fn test_highest_sequence_wins() {
        let center = NotificationCenter::new();
        let old = center.begin_sync();
        let new = center.begin_sync();

        assert!(center.apply_unread(new, 5));
        // The slower, older fetch completes afterwards and is discarded.
        assert!(!center.apply_unread(old, 3));
        assert_eq!(center.snapshot().unread_count, 5);
    }

    #[test]
    fn test_reset_unread_blocks_earlier_inflight_fetch() {
        let center = NotificationCenter::new();
        let seq = center.begin_sync();
        center.apply_unread(seq, 3);

        let inflight = center.begin_sync();
        center.reset_unread();
        assert_eq!(center.snapshot().unread_count, 0);

        // The fetch dispatched before the reset lands late: ignored.
        assert!(!center.apply_unread(inflight, 3));
        assert_eq!(center.snapshot().unread_count, 0);

        // A later poll still overwrites with server truth.
        let later = center.begin_sync();
        assert!(center.apply_unread(later, 3));
        assert_eq!(center.snapshot().unread_count, 3);
    }

    #[test]
    fn test_list_and_count_are_gated_independently() {
        let center = NotificationCenter::new();
        let a = center.begin_sync();
        let b = center.begin_sync();

        // Pass B's count lands first; pass A's list is still welcome.
        assert!(center.apply_unread(b, 2));
        assert!(center.apply_notifications(a, Vec::new()));
        // But pass A's count is stale.
        assert!(!center.apply_unread(a, 7));
        assert_eq!(center.snapshot().unread_count, 2);
    }

    #[tokio::test]
    async fn test_subscribers_observe_updates() {
        let center = NotificationCenter::new();
        let mut rx = center.subscribe();
        assert_eq!(rx.borrow().unread_count, 0);

        let seq = center.begin_sync();
        center.apply_unread(seq, 4);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().unread_count, 4);
    }
}

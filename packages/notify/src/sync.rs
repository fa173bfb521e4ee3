//! The sync engine: fetch passes, optimistic mark-read, polling loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use api::ApiError;

use crate::feed::NotificationFeed;
use crate::state::NotificationCenter;

/// Cancellation token tied to a component's lifecycle. Cancelling makes
/// every pending completion a no-op; the in-flight HTTP request itself is
/// not aborted, its result is simply discarded.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Platform sleep: tokio on native, gloo on wasm.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Drives a [`NotificationCenter`] from a [`NotificationFeed`].
///
/// Cheap to clone; clones share the center and the cancellation token.
/// [`Syncer::scoped`] gives a clone with its own token for per-screen
/// pollers that must stop on unmount without stopping the app-wide badge
/// poller.
#[derive(Clone)]
pub struct Syncer<F> {
    feed: F,
    center: Arc<NotificationCenter>,
    cancel: CancelToken,
}

impl<F: NotificationFeed> Syncer<F> {
    pub fn new(feed: F, center: Arc<NotificationCenter>) -> Self {
        Self {
            feed,
            center,
            cancel: CancelToken::new(),
        }
    }

    pub fn center(&self) -> &Arc<NotificationCenter> {
        &self.center
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Clone sharing feed and center but carrying a fresh token.
    pub fn scoped(&self) -> Self
    where
        F: Clone,
    {
        Self {
            feed: self.feed.clone(),
            center: Arc::clone(&self.center),
            cancel: CancelToken::new(),
        }
    }

    /// One full pass: list and unread count fetched concurrently under a
    /// single sequence number. Either fetch may fail without aborting the
    /// other; the failed side keeps its last-known value and the next tick
    /// is the retry.
    pub async fn sync(&self) {
        let seq = self.center.begin_sync();
        let (list, count) = tokio::join!(
            self.feed.fetch_notifications(),
            self.feed.fetch_unread_count()
        );
        if !self.cancel.is_cancelled() {
            match list {
                Ok(notifications) => {
                    self.center.apply_notifications(seq, notifications);
                }
                Err(e) => log_fetch_error("notifications", &e),
            }
            match count {
                Ok(n) => {
                    self.center.apply_unread(seq, n);
                }
                Err(e) => log_fetch_error("unread count", &e),
            }
        }
        self.center.finish_sync();
    }

    /// Unread-count-only pass, the badge polling cadence.
    pub async fn sync_count(&self) {
        let seq = self.center.begin_sync();
        match self.feed.fetch_unread_count().await {
            Ok(n) if !self.cancel.is_cancelled() => {
                self.center.apply_unread(seq, n);
            }
            Ok(_) => {}
            Err(e) => log_fetch_error("unread count", &e),
        }
        self.center.finish_sync();
    }

    /// Notification-list-only pass.
    pub async fn sync_list(&self) {
        let seq = self.center.begin_sync();
        match self.feed.fetch_notifications().await {
            Ok(notifications) if !self.cancel.is_cancelled() => {
                self.center.apply_notifications(seq, notifications);
            }
            Ok(_) => {}
            Err(e) => log_fetch_error("notifications", &e),
        }
        self.center.finish_sync();
    }

    /// Zero the count immediately, tell the server best-effort, then
    /// re-fetch the list. A transient remote failure leaves the local zero
    /// standing until the next poll reconciles. Safe to call repeatedly.
    pub async fn mark_all_read(&self) {
        self.center.reset_unread();
        match self.feed.mark_all_read().await {
            Ok(()) => {}
            Err(e) if e.is_auth_missing() => {
                tracing::debug!("skipping mark-read: not signed in")
            }
            Err(e) => {
                tracing::warn!("mark-read failed, local zero stands until next poll: {e}")
            }
        }
        self.sync_list().await;
    }

    /// Poll the unread count at a fixed interval until cancelled.
    pub async fn poll_count(&self, interval: Duration) {
        loop {
            sleep(interval).await;
            if self.cancel.is_cancelled() {
                break;
            }
            self.sync_count().await;
        }
    }

    /// Poll the full state at a fixed interval until cancelled.
    pub async fn poll(&self, interval: Duration) {
        loop {
            sleep(interval).await;
            if self.cancel.is_cancelled() {
                break;
            }
            self.sync().await;
        }
    }
}

fn log_fetch_error(what: &str, e: &ApiError) {
    if e.is_auth_missing() {
        tracing::debug!("skipping {what} fetch: not signed in");
    } else {
        tracing::warn!("failed to fetch {what}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    use api::Notification;
    use tokio::sync::oneshot;

    use crate::state::SyncPhase;

    struct Gate {
        entered: oneshot::Sender<()>,
        release: oneshot::Receiver<()>,
    }

    type Scripted<T> = (Option<Gate>, Result<T, ApiError>);

    /// Scripted feed: responses are queued per operation; a queued response
    /// may carry a gate so a test can hold a fetch in flight and release it
    /// at a chosen point. An empty queue answers `AuthMissing`, the silent
    /// no-op, so extra poller ticks are harmless.
    #[derive(Clone, Default)]
    struct FakeFeed {
        lists: Arc<Mutex<VecDeque<Scripted<Vec<Notification>>>>>,
        counts: Arc<Mutex<VecDeque<Scripted<u32>>>>,
        mark_results: Arc<Mutex<VecDeque<Result<(), ApiError>>>>,
        mark_calls: Arc<AtomicUsize>,
    }

    impl FakeFeed {
        fn new() -> Self {
            Self::default()
        }

        fn push_list(&self, items: Vec<Notification>) {
            self.lists.lock().unwrap().push_back((None, Ok(items)));
        }

        fn push_count(&self, count: u32) {
            self.counts.lock().unwrap().push_back((None, Ok(count)));
        }

        fn push_count_err(&self) {
            self.counts.lock().unwrap().push_back((
                None,
                Err(ApiError::Status {
                    code: 500,
                    message: "boom".into(),
                }),
            ));
        }

        /// Queue a count response that blocks until released. Returns
        /// `(entered, release)`: `entered` resolves once the fetch has
        /// started, `release` lets it complete.
        fn push_count_gated(&self, count: u32) -> (oneshot::Receiver<()>, oneshot::Sender<()>) {
            let (entered_tx, entered_rx) = oneshot::channel();
            let (release_tx, release_rx) = oneshot::channel();
            self.counts.lock().unwrap().push_back((
                Some(Gate {
                    entered: entered_tx,
                    release: release_rx,
                }),
                Ok(count),
            ));
            (entered_rx, release_tx)
        }

        fn push_mark_ok(&self) {
            self.mark_results.lock().unwrap().push_back(Ok(()));
        }

        fn push_mark_err(&self) {
            self.mark_results.lock().unwrap().push_back(Err(ApiError::Status {
                code: 503,
                message: "unavailable".into(),
            }));
        }

        fn mark_calls(&self) -> usize {
            self.mark_calls.load(Ordering::SeqCst)
        }
    }

    async fn answer<T>(scripted: Scripted<T>) -> Result<T, ApiError> {
        let (gate, result) = scripted;
        if let Some(gate) = gate {
            let _ = gate.entered.send(());
            let _ = gate.release.await;
        }
        result
    }

    impl NotificationFeed for FakeFeed {
        async fn fetch_notifications(&self) -> Result<Vec<Notification>, ApiError> {
            let scripted = self
                .lists
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or((None, Err(ApiError::AuthMissing)));
            answer(scripted).await
        }

        async fn fetch_unread_count(&self) -> Result<u32, ApiError> {
            let scripted = self
                .counts
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or((None, Err(ApiError::AuthMissing)));
            answer(scripted).await
        }

        async fn mark_all_read(&self) -> Result<(), ApiError> {
            self.mark_calls.fetch_add(1, Ordering::SeqCst);
            self.mark_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ApiError::AuthMissing))
        }
    }

    fn note(id: &str, title: &str, read: bool) -> Notification {
        Notification {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            read,
            created_at: chrono::Utc::now(),
        }
    }

    fn syncer_for(feed: &FakeFeed) -> Syncer<FakeFeed> {
        Syncer::new(feed.clone(), Arc::new(NotificationCenter::new()))
    }

    #[tokio::test]
    async fn test_sync_applies_server_state() {
        let feed = FakeFeed::new();
        feed.push_list(vec![note("1", "New request", false), note("2", "Reminder", true)]);
        feed.push_count(3);

        let syncer = syncer_for(&feed);
        syncer.sync().await;

        let state = syncer.center().snapshot();
        assert_eq!(state.notifications.len(), 2);
        assert_eq!(state.unread_count, 3);
        assert_eq!(state.phase, SyncPhase::Idle);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_last_value_until_next_tick() {
        let feed = FakeFeed::new();
        let syncer = syncer_for(&feed);

        feed.push_count(3);
        syncer.sync_count().await;
        assert_eq!(syncer.center().snapshot().unread_count, 3);

        // One failed tick: displayed count unchanged.
        feed.push_count_err();
        syncer.sync_count().await;
        assert_eq!(syncer.center().snapshot().unread_count, 3);
        assert_eq!(syncer.center().snapshot().phase, SyncPhase::Idle);

        // The next tick retries and succeeds.
        feed.push_count(4);
        syncer.sync_count().await;
        assert_eq!(syncer.center().snapshot().unread_count, 4);
    }

    #[tokio::test]
    async fn test_stale_slow_response_is_discarded() {
        let feed = FakeFeed::new();
        let syncer = syncer_for(&feed);

        let (entered, release) = feed.push_count_gated(3);
        let slow = tokio::spawn({
            let syncer = syncer.clone();
            async move { syncer.sync_count().await }
        });
        entered.await.unwrap();

        // A faster pass dispatched later completes first.
        feed.push_count(5);
        syncer.sync_count().await;
        assert_eq!(syncer.center().snapshot().unread_count, 5);

        // Now the slow pass lands with its stale 3.
        release.send(()).unwrap();
        slow.await.unwrap();
        assert_eq!(syncer.center().snapshot().unread_count, 5);
    }

    #[tokio::test]
    async fn test_tab_open_clears_count_before_list_arrives() {
        let feed = FakeFeed::new();
        let syncer = syncer_for(&feed);

        feed.push_count(3);
        syncer.sync_count().await;
        assert_eq!(syncer.center().snapshot().unread_count, 3);

        // A count fetch is already in flight when the user opens the tab.
        let (entered, release) = feed.push_count_gated(3);
        let slow = tokio::spawn({
            let syncer = syncer.clone();
            async move { syncer.sync_count().await }
        });
        entered.await.unwrap();

        feed.push_mark_ok();
        feed.push_list(vec![
            note("1", "a", true),
            note("2", "b", true),
            note("3", "c", true),
        ]);
        syncer.mark_all_read().await;

        // Optimistic zero, list refetched and all read.
        let state = syncer.center().snapshot();
        assert_eq!(state.unread_count, 0);
        assert_eq!(state.notifications.len(), 3);
        assert!(state.notifications.iter().all(|n| n.read));

        // The pre-reset fetch completes late and cannot resurrect the 3.
        release.send(()).unwrap();
        slow.await.unwrap();
        assert_eq!(syncer.center().snapshot().unread_count, 0);
    }

    #[tokio::test]
    async fn test_mark_all_read_is_idempotent() {
        let feed = FakeFeed::new();
        feed.push_mark_ok();
        feed.push_mark_ok();
        feed.push_list(Vec::new());
        feed.push_list(Vec::new());

        let syncer = syncer_for(&feed);
        syncer.mark_all_read().await;
        assert_eq!(syncer.center().snapshot().unread_count, 0);

        syncer.mark_all_read().await;
        assert_eq!(syncer.center().snapshot().unread_count, 0);
        assert_eq!(feed.mark_calls(), 2);
    }

    #[tokio::test]
    async fn test_mark_all_read_survives_remote_failure() {
        let feed = FakeFeed::new();
        let syncer = syncer_for(&feed);

        feed.push_count(3);
        syncer.sync_count().await;

        feed.push_mark_err();
        feed.push_list(vec![note("1", "a", false)]);
        syncer.mark_all_read().await;

        // The local zero stands despite the failed remote call, and the
        // list was still refetched.
        let state = syncer.center().snapshot();
        assert_eq!(state.unread_count, 0);
        assert_eq!(state.notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_signed_out_sync_is_a_silent_noop() {
        let feed = FakeFeed::new(); // empty script answers AuthMissing
        let syncer = syncer_for(&feed);

        syncer.sync().await;

        let state = syncer.center().snapshot();
        assert!(state.notifications.is_empty());
        assert_eq!(state.unread_count, 0);
        assert_eq!(state.phase, SyncPhase::Idle);
    }

    #[tokio::test]
    async fn test_cancelled_completion_is_discarded() {
        let feed = FakeFeed::new();
        let syncer = syncer_for(&feed);

        feed.push_count(3);
        syncer.sync_count().await;

        let (entered, release) = feed.push_count_gated(9);
        let slow = tokio::spawn({
            let syncer = syncer.clone();
            async move { syncer.sync_count().await }
        });
        entered.await.unwrap();

        // Teardown happens while the fetch is in flight.
        syncer.cancel_token().cancel();
        release.send(()).unwrap();
        slow.await.unwrap();

        assert_eq!(syncer.center().snapshot().unread_count, 3);
    }

    #[tokio::test]
    async fn test_scoped_syncer_cancels_independently() {
        let feed = FakeFeed::new();
        let syncer = syncer_for(&feed);
        let screen = syncer.scoped();

        screen.cancel_token().cancel();
        assert!(screen.cancel_token().is_cancelled());
        assert!(!syncer.cancel_token().is_cancelled());

        // The app-wide syncer still applies results.
        feed.push_count(2);
        syncer.sync_count().await;
        assert_eq!(syncer.center().snapshot().unread_count, 2);
    }

    #[tokio::test]
    async fn test_poller_stops_when_cancelled() {
        let feed = FakeFeed::new();
        let syncer = syncer_for(&feed);

        let handle = tokio::spawn({
            let syncer = syncer.clone();
            async move { syncer.poll_count(Duration::from_millis(5)).await }
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        syncer.cancel_token().cancel();
        handle.await.unwrap();
    }
}

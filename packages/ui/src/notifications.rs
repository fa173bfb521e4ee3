//! Notification context for the UI.
//!
//! [`NotificationProvider`] owns the [`notify::NotificationCenter`] and its
//! [`notify::Syncer`], mirrors published snapshots into a Dioxus signal,
//! runs the app-wide badge-count poller, reacts to push events with an
//! immediate out-of-band sync, and renders the transient popup above its
//! children.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use push::{LocalBridge, PushBridge, PushEvent, PushMessage, RecvError};

use crate::client::AppClient;
use crate::popup::NotificationPopup;
use crate::session::{use_client, use_config};

/// The concrete syncer type the UI works with.
pub type AppSyncer = notify::Syncer<AppClient>;

/// Get the latest notification state snapshot.
pub fn use_notifications() -> Signal<notify::NotificationState> {
    use_context::<Signal<notify::NotificationState>>()
}

/// The app-wide syncer. Screens needing their own polling cadence should
/// derive a [`notify::Syncer::scoped`] clone and cancel it on unmount.
pub fn use_syncer() -> AppSyncer {
    use_context::<AppSyncer>()
}

/// The push bridge; platform glue feeds incoming messages into it.
pub fn use_push_bridge() -> LocalBridge {
    use_context::<LocalBridge>()
}

/// Provider component that manages notification state.
/// Must be mounted inside [`crate::SessionProvider`].
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let client = use_client();
    let config = use_config();
    let bridge = use_context_provider(LocalBridge::new);
    let syncer = use_context_provider(|| {
        notify::Syncer::new(client, Arc::new(notify::NotificationCenter::new()))
    });
    let mut state =
        use_context_provider(|| Signal::new(notify::NotificationState::default()));
    let mut popup = use_signal(|| Option::<PushMessage>::None);

    // Mirror center snapshots into the signal.
    {
        let syncer = syncer.clone();
        use_effect(move || {
            let mut rx = syncer.center().subscribe();
            spawn(async move {
                loop {
                    state.set(rx.borrow_and_update().clone());
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            });
        });
    }

    // Initial sync on mount, then the badge-count cadence. Each tick is a
    // silent no-op while signed out.
    {
        let syncer = syncer.clone();
        let interval = Duration::from_secs(u64::from(config.sync.badge_poll_secs));
        use_effect(move || {
            let syncer = syncer.clone();
            spawn(async move {
                syncer.sync().await;
                syncer.poll_count(interval).await;
            });
        });
    }

    // Push events: show the popup and sync immediately, without waiting for
    // the next timer tick. A tap response dismisses the popup.
    {
        let syncer = syncer.clone();
        let bridge = bridge.clone();
        use_effect(move || {
            let syncer = syncer.clone();
            let mut events = bridge.events();
            spawn(async move {
                loop {
                    match events.recv().await {
                        Ok(PushEvent::Received(message)) => {
                            popup.set(Some(message));
                            syncer.sync().await;
                        }
                        Ok(PushEvent::Response(_)) => popup.set(None),
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "push events lagged");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            });
        });
    }

    // Stop the poller on unmount; late completions are discarded.
    {
        let cancel = syncer.cancel_token();
        use_drop(move || cancel.cancel());
    }

    rsx! {
        {children}
        NotificationPopup {
            visible: popup().is_some(),
            data: popup(),
            on_close: move |_| popup.set(None),
        }
    }
}

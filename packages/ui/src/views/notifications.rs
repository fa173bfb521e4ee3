//! Notification list screen.
//!
//! Entering the screen marks everything read (the optimistic clear), then a
//! screen-scoped poller keeps the list fresh at the list cadence while the
//! app-wide badge poller keeps its own 5s cadence. The scoped syncer is
//! cancelled on unmount, so completions landing after navigation are
//! discarded instead of reaching a torn-down view.

use std::time::Duration;

use dioxus::prelude::*;
use push::PushBridge;

use crate::notifications::{use_notifications, use_push_bridge, use_syncer};
use crate::session::use_config;

#[component]
pub fn NotificationsScreen() -> Element {
    let config = use_config();
    let state = use_notifications();
    let syncer = use_syncer();
    let bridge = use_push_bridge();
    let mut loading = use_signal(|| true);
    let mut permission_error = use_signal(|| Option::<String>::None);

    // Screen-scoped syncer with its own cancellation token.
    let screen = use_hook(|| syncer.scoped());

    // Mark read on entry, then poll the full state at the screen cadence.
    {
        let screen = screen.clone();
        let interval = Duration::from_secs(u64::from(config.sync.list_poll_secs));
        use_effect(move || {
            let screen = screen.clone();
            spawn(async move {
                screen.mark_all_read().await;
                loading.set(false);
                screen.poll(interval).await;
            });
        });
    }

    // Register for push delivery. Denial has no retry path; it is surfaced
    // as a blocking banner.
    {
        let bridge = bridge.clone();
        use_effect(move || {
            let bridge = bridge.clone();
            spawn(async move {
                match bridge.register_device().await {
                    Ok(token) => {
                        tracing::debug!(token = token.as_str(), "push registration complete")
                    }
                    Err(e) => permission_error.set(Some(e.to_string())),
                }
            });
        });
    }

    {
        let cancel = screen.cancel_token();
        use_drop(move || cancel.cancel());
    }

    let notifications = state().notifications;

    rsx! {
        div {
            class: "flex flex-col gap-3 p-4",

            if let Some(err) = permission_error() {
                div {
                    class: "rounded border border-red-200 bg-red-50 px-3 py-2 text-sm text-red-600",
                    "{err}"
                }
            }

            h2 {
                class: "text-lg font-bold text-neutral-800",
                "Notifications"
            }

            if loading() && notifications.is_empty() {
                p { class: "text-neutral-500", "Loading..." }
            } else if notifications.is_empty() {
                p { class: "text-neutral-500", "Nothing here yet." }
            } else {
                for notification in notifications {
                    div {
                        key: "{notification.id}",
                        class: "rounded-lg bg-neutral-100 p-3",
                        p {
                            class: "mb-1 font-bold text-[#D32F2F] text-[15px]",
                            "{notification.title}"
                        }
                        p {
                            class: "text-sm text-neutral-800",
                            "{notification.body}"
                        }
                        p {
                            class: "mt-1 text-xs text-neutral-500",
                            {notification.created_at.format("%Y-%m-%d %H:%M").to_string()}
                        }
                    }
                }
            }
        }
    }
}

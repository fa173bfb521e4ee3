//! Transient popup shown when a push arrives while the app is foregrounded.

use std::time::Duration;

use dioxus::prelude::*;
use push::PushMessage;

const FADE: Duration = Duration::from_millis(300);
const HOLD: Duration = Duration::from_millis(3000);

/// Animated notification popup.
///
/// Given `{visible, data}`: fades in over 300ms, holds for ~3s, fades out
/// over 300ms, then calls `on_close` exactly once. Re-triggering or
/// unmounting before expiry cancels the pending dismissal, so `on_close`
/// never fires for a superseded popup and never fires twice. Tapping the
/// popup dismisses it immediately.
#[component]
pub fn NotificationPopup(
    visible: bool,
    data: Option<PushMessage>,
    on_close: EventHandler<()>,
) -> Element {
    let mut shown = use_signal(|| false);
    // Each (re)trigger bumps the generation; a timer only acts if it still
    // owns the current generation.
    let mut generation = use_signal(|| 0u64);

    use_effect(use_reactive!(|visible, data| {
        if visible && data.is_some() {
            // peek: the effect must not subscribe to the counter it bumps.
            let current = *generation.peek() + 1;
            generation.set(current);
            shown.set(false);
            spawn(async move {
                // Let the element mount at opacity 0 before transitioning.
                notify::sleep(Duration::from_millis(16)).await;
                if generation() != current {
                    return;
                }
                shown.set(true);
                notify::sleep(FADE + HOLD).await;
                if generation() != current {
                    return;
                }
                shown.set(false);
                notify::sleep(FADE).await;
                if generation() == current {
                    on_close.call(());
                }
            });
        }
    }));

    if !visible {
        return rsx! {};
    }
    let Some(message) = data else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fixed top-10 inset-x-4 z-50 rounded-lg bg-[#cc0000] px-5 py-3 shadow-lg cursor-pointer",
            style: if shown() {
                "opacity: 1; transition: opacity 300ms ease;"
            } else {
                "opacity: 0; transition: opacity 300ms ease;"
            },
            onclick: move |_| {
                // Manual dismiss: invalidate the pending auto-dismiss so it
                // cannot call on_close a second time.
                generation.set(generation() + 1);
                on_close.call(());
            },
            p { class: "text-white font-bold text-base mb-1", "{message.title}" }
            p { class: "text-white text-sm", "{message.body}" }
        }
    }
}

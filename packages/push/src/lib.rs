//! # Push delivery bridge
//!
//! Abstracts the platform push service down to the three things the rest of
//! the app consumes: permission/registration, "message received" events, and
//! "user tapped the notification" events.
//!
//! [`PushBridge`] is the seam. [`LocalBridge`] is the channel-backed
//! implementation the shell and the tests use: platform glue feeds incoming
//! messages into it with [`LocalBridge::deliver`], and subscribers receive
//! them as [`PushEvent`]s. Dropping a [`PushEvents`] receiver unsubscribes,
//! so a handler can never outlive the view that registered it.
//!
//! The device token is returned to the caller and goes no further; nothing
//! in this codebase transmits it to the server.

use tokio::sync::broadcast;

pub use tokio::sync::broadcast::error::RecvError;

/// Payload of an incoming push message.
#[derive(Clone, Debug, PartialEq)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
}

impl PushMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Opaque device identifier issued by the push service. Ephemeral:
/// re-derived on every app launch, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceToken(String);

impl DeviceToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors from push registration.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The user declined the permission prompt. Surfaced as a blocking
    /// alert; no retry path is offered.
    #[error("push permission denied")]
    PermissionDenied,
    /// Push delivery is unavailable on this device (e.g. an emulator).
    #[error("push notifications are not supported on this device")]
    Unsupported,
}

/// A push event delivered while the app is foregrounded.
#[derive(Clone, Debug, PartialEq)]
pub enum PushEvent {
    /// A message arrived.
    Received(PushMessage),
    /// The user tapped a displayed notification.
    Response(PushMessage),
}

/// Subscription to push events. Dropping it unsubscribes.
pub type PushEvents = broadcast::Receiver<PushEvent>;

/// Notification-channel parameters the Android platform layer applies at
/// registration time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelConfig {
    pub name: &'static str,
    pub importance: Importance,
    pub sound: &'static str,
    pub vibration_pattern: [u32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Importance {
    Default,
    High,
    Max,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: "default",
            importance: Importance::Max,
            sound: "default",
            vibration_pattern: [0, 250, 250, 250],
        }
    }
}

/// Async trait over the platform push service.
pub trait PushBridge {
    /// Request permission if not already granted and return the device
    /// token. Fails with [`PushError::PermissionDenied`] if the user
    /// declines, [`PushError::Unsupported`] if push is unavailable.
    fn register_device(
        &self,
    ) -> impl std::future::Future<Output = Result<DeviceToken, PushError>>;

    /// Subscribe to incoming push events.
    fn events(&self) -> PushEvents;
}

/// Registration outcome a [`LocalBridge`] is configured to report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Permission {
    Granted,
    Denied,
    Unsupported,
}

/// Channel-backed bridge for native shells and tests.
#[derive(Clone, Debug)]
pub struct LocalBridge {
    tx: broadcast::Sender<PushEvent>,
    permission: Permission,
    channel: ChannelConfig,
}

impl LocalBridge {
    pub fn new() -> Self {
        Self::with_permission(Permission::Granted)
    }

    pub fn with_permission(permission: Permission) -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            tx,
            permission,
            channel: ChannelConfig::default(),
        }
    }

    /// The channel parameters platform glue should register with.
    pub fn channel_config(&self) -> ChannelConfig {
        self.channel
    }

    /// Feed an incoming message to all subscribers. A send with no live
    /// subscriber is dropped silently, like a push arriving before any
    /// listener is mounted.
    pub fn deliver(&self, message: PushMessage) {
        if self.tx.send(PushEvent::Received(message)).is_err() {
            tracing::debug!("push message dropped: no subscriber");
        }
    }

    /// Feed a notification-tap response to all subscribers.
    pub fn respond(&self, message: PushMessage) {
        if self.tx.send(PushEvent::Response(message)).is_err() {
            tracing::debug!("push response dropped: no subscriber");
        }
    }
}

impl Default for LocalBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PushBridge for LocalBridge {
    async fn register_device(&self) -> Result<DeviceToken, PushError> {
        match self.permission {
            Permission::Granted => {
                let token = DeviceToken::new(format!("local-{}", std::process::id()));
                tracing::debug!(token = token.as_str(), "registered for push");
                Ok(token)
            }
            Permission::Denied => Err(PushError::PermissionDenied),
            Permission::Unsupported => Err(PushError::Unsupported),
        }
    }

    fn events(&self) -> PushEvents {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deliver_reaches_subscriber() {
        let bridge = LocalBridge::new();
        let mut events = bridge.events();

        bridge.deliver(PushMessage::new("New request", "O- needed"));

        let event = events.recv().await.unwrap();
        assert_eq!(
            event,
            PushEvent::Received(PushMessage::new("New request", "O- needed"))
        );
    }

    #[tokio::test]
    async fn test_response_is_a_distinct_event() {
        let bridge = LocalBridge::new();
        let mut events = bridge.events();

        bridge.respond(PushMessage::new("New request", "O- needed"));

        assert!(matches!(
            events.recv().await.unwrap(),
            PushEvent::Response(_)
        ));
    }

    #[tokio::test]
    async fn test_delivery_without_subscriber_is_dropped() {
        let bridge = LocalBridge::new();
        // No subscriber yet; must not panic or buffer.
        bridge.deliver(PushMessage::new("lost", ""));

        let mut events = bridge.events();
        bridge.deliver(PushMessage::new("kept", ""));
        let event = events.recv().await.unwrap();
        assert_eq!(event, PushEvent::Received(PushMessage::new("kept", "")));
    }

    #[tokio::test]
    async fn test_register_reports_configured_outcome() {
        let granted = LocalBridge::new();
        assert!(granted.register_device().await.is_ok());

        let denied = LocalBridge::with_permission(Permission::Denied);
        assert!(matches!(
            denied.register_device().await,
            Err(PushError::PermissionDenied)
        ));

        let unsupported = LocalBridge::with_permission(Permission::Unsupported);
        assert!(matches!(
            unsupported.register_device().await,
            Err(PushError::Unsupported)
        ));
    }

    #[test]
    fn test_default_channel_matches_android_setup() {
        let channel = ChannelConfig::default();
        assert_eq!(channel.name, "default");
        assert_eq!(channel.importance, Importance::Max);
        assert_eq!(channel.vibration_pattern, [0, 250, 250, 250]);
    }
}

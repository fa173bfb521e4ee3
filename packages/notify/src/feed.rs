//! The remote operations the sync engine depends on.
//!
//! Abstracting them behind a trait lets the tests drive [`crate::Syncer`]
//! with a scripted fake; production wires it to [`api::Client`].

use api::{ApiError, Notification};

/// The three remote notification operations.
pub trait NotificationFeed {
    fn fetch_notifications(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Notification>, ApiError>>;

    fn fetch_unread_count(&self) -> impl std::future::Future<Output = Result<u32, ApiError>>;

    fn mark_all_read(&self) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

impl<S: store::SessionStore> NotificationFeed for api::Client<S> {
    async fn fetch_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.notifications().await
    }

    async fn fetch_unread_count(&self) -> Result<u32, ApiError> {
        self.unread_count().await
    }

    async fn mark_all_read(&self) -> Result<(), ApiError> {
        self.mark_read().await
    }
}

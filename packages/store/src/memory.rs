use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore, StoreError};

/// In-memory SessionStore for testing and wasm fallback.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    inner: Arc<Mutex<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    async fn set_session(&self, session: &Session) -> Result<(), StoreError> {
        *self.inner.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn load_session(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn clear_session(&self) -> Result<(), StoreError> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_load_session() {
        let store = MemorySessionStore::new();

        assert!(store.load_session().await.unwrap().is_none());

        let session = Session::new("tok-123", "donor@example.com");
        store.set_session(&session).await.unwrap();

        let loaded = store.load_session().await.unwrap().unwrap();
        assert_eq!(loaded.token, "tok-123");
        assert_eq!(loaded.email, "donor@example.com");
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_session() {
        let store = MemorySessionStore::new();

        store
            .set_session(&Session::new("old", "old@example.com"))
            .await
            .unwrap();
        store
            .set_session(&Session::new("new", "new@example.com"))
            .await
            .unwrap();

        let loaded = store.load_session().await.unwrap().unwrap();
        assert_eq!(loaded.token, "new");
        assert_eq!(loaded.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_clear_session() {
        let store = MemorySessionStore::new();

        store
            .set_session(&Session::new("tok", "a@example.com"))
            .await
            .unwrap();
        store.clear_session().await.unwrap();

        assert!(store.load_session().await.unwrap().is_none());

        // Clearing again is a no-op, not an error.
        store.clear_session().await.unwrap();
    }
}

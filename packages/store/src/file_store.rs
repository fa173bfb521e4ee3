//! # Filesystem-backed session store
//!
//! [`FileSessionStore`] is a [`SessionStore`] implementation that persists the
//! session to a single TOML file. It is used on desktop and mobile platforms
//! to keep the user signed in across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.toml           # token + email, written atomically
//! ```
//!
//! Writes go to a temp file in the same directory followed by a rename, so
//! the session file always holds either the complete previous session or the
//! complete new one, never half of each.
//!
//! ## Platform data directories
//!
//! [`FileSessionStore::platform_default`] uses [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/bloodlink/` |
//! | Linux | `~/.local/share/bloodlink/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\bloodlink\` |
//! | Android | App-internal storage (via `dirs`) |

use std::path::PathBuf;

use crate::session::{Session, SessionStore, StoreError};

const SESSION_FILE: &str = "session.toml";

/// Filesystem-backed SessionStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    base: PathBuf,
}

impl FileSessionStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at the platform data directory (`<data_dir>/bloodlink/`).
    pub fn platform_default() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bloodlink");
        Self::new(base)
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }

    fn tmp_path(&self) -> PathBuf {
        self.base.join(format!("{SESSION_FILE}.tmp"))
    }
}

impl SessionStore for FileSessionStore {
    async fn set_session(&self, session: &Session) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let body = toml::to_string_pretty(session)?;

        // Temp file + rename keeps token and email atomic under crash or
        // concurrent read.
        let tmp = self.tmp_path();
        std::fs::write(&tmp, body)?;
        std::fs::rename(&tmp, self.session_path())?;
        Ok(())
    }

    async fn load_session(&self) -> Result<Option<Session>, StoreError> {
        let raw = match std::fs::read_to_string(self.session_path()) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(toml::from_str(&raw)?))
    }

    async fn clear_session(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.session_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bloodlink_test_{tag}_{}", std::process::id()))
    }

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let dir = temp_base("reopen");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileSessionStore::new(dir.clone());
        store
            .set_session(&Session::new("tok-abc", "donor@example.com"))
            .await
            .unwrap();

        // Re-open from the same directory, as a fresh process would.
        let store2 = FileSessionStore::new(dir.clone());
        let loaded = store2.load_session().await.unwrap().unwrap();
        assert_eq!(loaded.token, "tok-abc");
        assert_eq!(loaded.email, "donor@example.com");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_clear_removes_both_fields() {
        let dir = temp_base("clear");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileSessionStore::new(dir.clone());
        store
            .set_session(&Session::new("tok", "a@example.com"))
            .await
            .unwrap();
        store.clear_session().await.unwrap();

        assert!(store.load_session().await.unwrap().is_none());
        assert!(!dir.join(SESSION_FILE).exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_rewrite_replaces_session_whole() {
        let dir = temp_base("rewrite");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileSessionStore::new(dir.clone());
        store
            .set_session(&Session::new("first", "first@example.com"))
            .await
            .unwrap();
        store
            .set_session(&Session::new("second", "second@example.com"))
            .await
            .unwrap();

        let loaded = store.load_session().await.unwrap().unwrap();
        assert_eq!(loaded, Session::new("second", "second@example.com"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_write_failure_is_observable() {
        let dir = temp_base("failure");
        let _ = std::fs::remove_dir_all(&dir);

        // Park a regular file where the store expects its directory, so
        // create_dir_all fails and the caller sees the error.
        std::fs::write(&dir, b"not a directory").unwrap();

        let store = FileSessionStore::new(dir.clone());
        let result = store
            .set_session(&Session::new("tok", "a@example.com"))
            .await;
        assert!(result.is_err());

        let _ = std::fs::remove_file(&dir);
    }

    #[tokio::test]
    async fn test_corrupt_file_reports_error_not_partial_session() {
        let dir = temp_base("corrupt");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        // A file with only a token is a corrupt session, not a half-session.
        std::fs::write(dir.join(SESSION_FILE), "token = \"tok\"\n").unwrap();

        let store = FileSessionStore::new(dir.clone());
        assert!(matches!(
            store.load_session().await,
            Err(StoreError::Corrupt(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}

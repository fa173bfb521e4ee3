//! # Client configuration — `bloodlink.toml`
//!
//! Defines the TOML configuration file read at startup from the platform
//! data directory (filename: [`BloodLinkConfig::filename`] =
//! `"bloodlink.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://bloodlink-api.onrender.com"
//!
//! [sync]
//! badge_poll_secs = 5    # unread-count cadence while the app is open
//! list_poll_secs = 10    # full-list cadence on the notifications screen
//! ```
//!
//! All structs derive serde defaults, so a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `bloodlink.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BloodLinkConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the BloodLink REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Polling cadences, in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Unread-count poll interval for the tab badge.
    #[serde(default = "default_badge_poll")]
    pub badge_poll_secs: u32,
    /// Full notification-list poll interval on the notifications screen.
    #[serde(default = "default_list_poll")]
    pub list_poll_secs: u32,
}

fn default_base_url() -> String {
    "https://bloodlink-api.onrender.com".to_string()
}

fn default_badge_poll() -> u32 {
    5
}

fn default_list_poll() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            badge_poll_secs: default_badge_poll(),
            list_poll_secs: default_list_poll(),
        }
    }
}

impl BloodLinkConfig {
    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bloodlink.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `<data_dir>/bloodlink/bloodlink.toml`, falling back to defaults
    /// when the file is absent or unreadable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Self {
        let path = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("bloodlink")
            .join(Self::filename());
        match std::fs::read_to_string(&path) {
            Ok(raw) => Self::from_toml(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed {}: {e}", Self::filename());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BloodLinkConfig::default();
        assert_eq!(config.sync.badge_poll_secs, 5);
        assert_eq!(config.sync.list_poll_secs, 10);
        assert!(config.api.base_url.starts_with("https://"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = BloodLinkConfig::from_toml("").unwrap();
        assert_eq!(config, BloodLinkConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config = BloodLinkConfig::from_toml(
            "[api]\nbase_url = \"http://localhost:3000\"\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.sync.badge_poll_secs, 5);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BloodLinkConfig::default().with_base_url("http://localhost:8080");
        let raw = config.to_toml().unwrap();
        let loaded = BloodLinkConfig::from_toml(&raw).unwrap();
        assert_eq!(loaded, config);
    }
}

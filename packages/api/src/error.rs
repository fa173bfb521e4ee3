//! Error taxonomy for API calls.

/// Errors from the BloodLink API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No stored token when an authenticated call was attempted. The request
    /// is never sent; background sync treats this as "nothing to do".
    #[error("not signed in")]
    AuthMissing,

    /// Transport-level failure: connection, timeout, or undecodable body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { code: u16, message: String },

    /// The session store failed while recording or clearing credentials.
    #[error("session unavailable: {0}")]
    Session(#[from] store::StoreError),
}

impl ApiError {
    /// True when the failure means the user simply is not signed in.
    pub fn is_auth_missing(&self) -> bool {
        matches!(self, ApiError::AuthMissing)
    }
}

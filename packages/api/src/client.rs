//! The BloodLink API client.
//!
//! One method per endpoint. The client owns a [`store::SessionStore`] and
//! reads the bearer token from it before every authenticated call, the same
//! way each screen reads it before its own fetch. Login and logout also go
//! through here so the token and email are written and cleared together.

use store::{Session, SessionStore};

use crate::error::ApiError;
use crate::models::{
    BloodRequest, ChangePasswordRequest, LoginResponse, MessageResponse, NewBloodRequest,
    Notification, NotificationsResponse, ProfileUpdate, RegisterRequest, RequestsResponse,
    UnreadCountResponse, UserInfo, UsersResponse,
};

/// HTTP client for the BloodLink REST API.
#[derive(Clone, Debug)]
pub struct Client<S> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

impl<S: SessionStore> Client<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            store,
        }
    }

    pub fn from_config(config: &store::BloodLinkConfig, store: S) -> Self {
        Self::new(config.api.base_url.clone(), store)
    }

    pub fn session_store(&self) -> &S {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Bearer token from the session store. A failed store read is logged
    /// and treated as logged-out, per the graceful-degradation policy.
    async fn bearer(&self) -> Result<String, ApiError> {
        match self.store.load_session().await {
            Ok(Some(session)) => Ok(session.token),
            Ok(None) => Err(ApiError::AuthMissing),
            Err(e) => {
                tracing::warn!("session unavailable, treating as logged out: {e}");
                Err(ApiError::AuthMissing)
            }
        }
    }

    /// Email stored alongside the token, if any.
    pub async fn stored_email(&self) -> Option<String> {
        match self.store.load_session().await {
            Ok(session) => session.map(|s| s.email),
            Err(e) => {
                tracing::warn!("session unavailable: {e}");
                None
            }
        }
    }

    // --- auth ---

    /// `POST /api/login`. On success the session is persisted atomically;
    /// a persistence failure fails the whole login.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = check(resp).await?;
        let LoginResponse { token } = resp.json().await?;

        let session = Session::new(token, email);
        self.store.set_session(&session).await?;
        Ok(session)
    }

    /// `POST /api/register`. Does not sign the new user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/register"))
            .json(request)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// Clear the stored session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.store.clear_session().await?;
        Ok(())
    }

    // --- profile ---

    /// `GET /api/user`: the signed-in user's profile.
    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .get(self.url("/api/user"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `PUT /api/user/update-profile`.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .put(self.url("/api/user/update-profile"))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// `PUT /api/user/change-password/{id}`.
    pub async fn change_password(
        &self,
        user_id: &str,
        request: &ChangePasswordRequest,
    ) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .put(self.url(&format!("/api/user/change-password/{user_id}")))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// `GET /api/users`: registered donors, for the search screen.
    pub async fn donors(&self) -> Result<Vec<UserInfo>, ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .get(self.url("/api/users"))
            .bearer_auth(token)
            .send()
            .await?;
        let UsersResponse { users } = check(resp).await?.json().await?;
        Ok(users)
    }

    // --- blood requests ---

    /// `GET /api/request`: all open requests. Unauthenticated.
    pub async fn requests(&self) -> Result<Vec<BloodRequest>, ApiError> {
        let resp = self.http.get(self.url("/api/request")).send().await?;
        let RequestsResponse { requests } = check(resp).await?.json().await?;
        Ok(requests)
    }

    /// `GET /api/request/limit/{n}`: the most recent requests, for Home.
    pub async fn recent_requests(&self, limit: u32) -> Result<Vec<BloodRequest>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/request/limit/{limit}")))
            .send()
            .await?;
        let RequestsResponse { requests } = check(resp).await?.json().await?;
        Ok(requests)
    }

    /// `GET /api/request/my-activity`: the caller's own requests.
    pub async fn my_activity(&self) -> Result<Vec<BloodRequest>, ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .get(self.url("/api/request/my-activity"))
            .bearer_auth(token)
            .send()
            .await?;
        let RequestsResponse { requests } = check(resp).await?.json().await?;
        Ok(requests)
    }

    /// `POST /api/request`.
    pub async fn create_request(&self, request: &NewBloodRequest) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .post(self.url("/api/request"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// `PUT /api/request/update/{id}`.
    pub async fn update_request(
        &self,
        id: &str,
        request: &NewBloodRequest,
    ) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .put(self.url(&format!("/api/request/update/{id}")))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// `DELETE /api/request/{id}`.
    pub async fn delete_request(&self, id: &str) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .delete(self.url(&format!("/api/request/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    // --- notifications ---

    /// `GET /api/notifications`.
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .get(self.url("/api/notifications"))
            .bearer_auth(token)
            .send()
            .await?;
        let NotificationsResponse { notifications } = check(resp).await?.json().await?;
        Ok(notifications)
    }

    /// `GET /api/unread-count`.
    pub async fn unread_count(&self) -> Result<u32, ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .get(self.url("/api/unread-count"))
            .bearer_auth(token)
            .send()
            .await?;
        let UnreadCountResponse { unread_count } = check(resp).await?.json().await?;
        Ok(unread_count)
    }

    /// `POST /api/mark-read`: marks all notifications read. No body.
    pub async fn mark_read(&self) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let resp = self
            .http
            .post(self.url("/api/mark-read"))
            .bearer_auth(token)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}

/// Map a non-2xx response to [`ApiError::Status`], lifting the server's
/// `message` field when the body carries one.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let code = resp.status().as_u16();
    let message = resp
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|m| m.message)
        .unwrap_or_else(|| format!("server returned status {code}"));
    Err(ApiError::Status { code, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemorySessionStore;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = Client::new("http://localhost:3000/", MemorySessionStore::new());
        assert_eq!(client.url("/api/login"), "http://localhost:3000/api/login");
    }

    #[tokio::test]
    async fn test_bearer_requires_a_stored_session() {
        let client = Client::new("http://localhost:3000", MemorySessionStore::new());
        assert!(matches!(client.bearer().await, Err(ApiError::AuthMissing)));

        client
            .session_store()
            .set_session(&Session::new("tok-9", "a@example.com"))
            .await
            .unwrap();
        assert_eq!(client.bearer().await.unwrap(), "tok-9");
        assert_eq!(client.stored_email().await.unwrap(), "a@example.com");
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let client = Client::new("http://localhost:3000", MemorySessionStore::new());
        client
            .session_store()
            .set_session(&Session::new("tok", "a@example.com"))
            .await
            .unwrap();

        client.logout().await.unwrap();
        assert!(matches!(client.bearer().await, Err(ApiError::AuthMissing)));
    }
}

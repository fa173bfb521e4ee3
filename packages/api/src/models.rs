//! Wire models for the BloodLink REST API.
//!
//! Field naming follows the server: Mongo-style `_id` identifiers,
//! camelCase on the notification payloads, snake_case on users and blood
//! requests, GeoJSON points with `[longitude, latitude]` coordinates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A notification as returned by `GET /api/notifications`.
///
/// Owned by the server; the client holds a read-only cached copy. The only
/// client-driven mutation is the mark-all-read call, which flips `read`
/// server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// GeoJSON point. `coordinates` is ordered `[longitude, latitude]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// A registered user, as returned by `GET /api/user` and `GET /api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub blood_type: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub last_donation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Payload for `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub date_of_birth: DateTime<Utc>,
    pub gender: String,
    pub blood_type: String,
    pub address: String,
    pub last_donation_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// Payload for `PUT /api/user/update-profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub blood_type: String,
    pub address: String,
}

/// Payload for `PUT /api/user/change-password/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// A blood request, as returned by the `/api/request` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloodRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub patient_name: String,
    pub blood_type: String,
    pub quantity: u32,
    pub donation_point: String,
    #[serde(default)]
    pub donation_point_lat: Option<f64>,
    #[serde(default)]
    pub donation_point_lng: Option<f64>,
    pub contact_number: String,
    #[serde(default)]
    pub transportation: String,
    #[serde(default)]
    pub urgency: String,
    #[serde(default)]
    pub done_status: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl BloodRequest {
    /// Completed requests are hidden from the public request lists.
    pub fn is_complete(&self) -> bool {
        self.done_status == "complete"
    }
}

/// Payload for `POST /api/request` and `PUT /api/request/update/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBloodRequest {
    pub patient_name: String,
    pub blood_type: String,
    pub quantity: u32,
    pub donation_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_point_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_point_lng: Option<f64>,
    pub contact_number: String,
    pub transportation: String,
    pub urgency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

// Response envelopes.

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub unread_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<UserInfo>,
}

#[derive(Debug, Deserialize)]
pub struct RequestsResponse {
    #[serde(default)]
    pub requests: Vec<BloodRequest>,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_wire_format() {
        let raw = r#"{
            "_id": "665f1c2ab7",
            "title": "New request",
            "body": "O- needed at City Hospital",
            "read": false,
            "createdAt": "2024-06-04T12:30:00Z"
        }"#;
        let n: Notification = serde_json::from_str(raw).unwrap();
        assert_eq!(n.id, "665f1c2ab7");
        assert_eq!(n.title, "New request");
        assert!(!n.read);
        assert_eq!(n.created_at.to_rfc3339(), "2024-06-04T12:30:00+00:00");
    }

    #[test]
    fn test_unread_count_envelope_is_camel_case() {
        let resp: UnreadCountResponse =
            serde_json::from_str(r#"{"unreadCount": 3}"#).unwrap();
        assert_eq!(resp.unread_count, 3);
    }

    #[test]
    fn test_notifications_envelope_defaults_to_empty() {
        let resp: NotificationsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.notifications.is_empty());
    }

    #[test]
    fn test_user_wire_format_tolerates_missing_optionals() {
        let raw = r#"{
            "_id": "abc",
            "name": "Dina",
            "email": "dina@example.com",
            "blood_type": "O-"
        }"#;
        let user: UserInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(user.blood_type, "O-");
        assert!(user.date_of_birth.is_none());
        assert!(user.location.is_none());
        assert_eq!(user.phone_number, "");
    }

    #[test]
    fn test_blood_request_completion_filter() {
        let raw = r#"{
            "_id": "r1",
            "patient_name": "Sami",
            "blood_type": "A+",
            "quantity": 2,
            "donation_point": "City Hospital",
            "contact_number": "71234567",
            "done_status": "complete"
        }"#;
        let request: BloodRequest = serde_json::from_str(raw).unwrap();
        assert!(request.is_complete());
    }

    #[test]
    fn test_geo_point_is_longitude_latitude() {
        let point = GeoPoint::new(35.5, 33.9);
        let raw = serde_json::to_string(&point).unwrap();
        assert_eq!(raw, r#"{"type":"Point","coordinates":[35.5,33.9]}"#);
        assert_eq!(point.longitude(), 35.5);
        assert_eq!(point.latitude(), 33.9);
    }

    #[test]
    fn test_new_request_omits_absent_coordinates() {
        let payload = NewBloodRequest {
            patient_name: "Sami".into(),
            blood_type: "A+".into(),
            quantity: 2,
            donation_point: "City Hospital".into(),
            donation_point_lat: None,
            donation_point_lng: None,
            contact_number: "71234567".into(),
            transportation: "not provided".into(),
            urgency: "Regular".into(),
            location: None,
        };
        let raw = serde_json::to_string(&payload).unwrap();
        assert!(!raw.contains("donation_point_lat"));
        assert!(!raw.contains("location"));
    }
}

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request. `role` defaults to `student`; `type` is the
/// account type the user picked (farmer, cooperative, laboratory, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub organisation: String,
    pub position: String,
    pub phone: String,
    pub location: String,
}

impl RegisterRequest {
    pub const DEFAULT_ROLE: &'static str = "student";
}

/// User record as the backend returns it. Field names on the wire are the
/// backend's Mongo-flavored originals (`_id`, `type`, `isVerified`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(rename = "type", default)]
    pub account_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

/// Login response: a `status` envelope with the user and token inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ApiUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_parses_backend_shape() {
        let json = r#"{
            "status": true,
            "user": {
                "_id": "651f0c",
                "username": "alice",
                "email": "alice@coop.rw",
                "type": "cooperative",
                "organisation": "Kayonza Coop",
                "role": "student",
                "isVerified": true
            },
            "token": "jwt-token"
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.status);
        let user = response.user.unwrap();
        assert_eq!(user.id, "651f0c");
        assert_eq!(user.account_type, "cooperative");
        assert!(user.is_verified);
        assert_eq!(user.position, None);
    }

    #[test]
    fn register_request_serializes_type_field() {
        let request = RegisterRequest {
            username: "Alice Mukamana".to_string(),
            email: "alice@coop.rw".to_string(),
            password: "secret123".to_string(),
            role: RegisterRequest::DEFAULT_ROLE.to_string(),
            account_type: "cooperative".to_string(),
            organisation: "Kayonza Coop".to_string(),
            position: "Manager".to_string(),
            phone: "+250700000000".to_string(),
            location: "Kayonza".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "cooperative");
        assert_eq!(json["role"], "student");
        assert!(json.get("account_type").is_none());
    }
}

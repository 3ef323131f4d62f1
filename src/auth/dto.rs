use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration. `inviteCode` is accepted but never
/// consumed; nothing enforces it.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "inviteCode", default, skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
}

/// Request body for login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// Response returned after login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_response_uses_camel_case_user_id() {
        let response = RegisterResponse {
            message: "User registered successfully!".into(),
            user_id: Uuid::new_v4(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("userId"));
        assert!(!json.contains("user_id"));
    }

    #[test]
    fn register_request_accepts_missing_invite_code() {
        let parsed: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@x.com","password":"password123"}"#).unwrap();
        assert!(parsed.invite_code.is_none());

        let parsed: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"password123","inviteCode":"abc"}"#,
        )
        .unwrap();
        assert_eq!(parsed.invite_code.as_deref(), Some("abc"));
    }
}

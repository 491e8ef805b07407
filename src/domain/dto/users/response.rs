//! 사용자 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시 등 민감한 정보는 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_excludes_password_hash() {
        let user = User::new("alice@example.com".to_string(), "$2b$04$hash".to_string());
        let response = UserResponse::from(user);

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password").is_none());
        assert_eq!(value.get("email").unwrap(), "alice@example.com");
    }
}

//! 사용자 인증 요청 DTO
//!
//! 회원가입/로그인을 위한 HTTP 요청 데이터 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_invalid_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "Password1".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let request = RegisterRequest {
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_valid_register_request_passes() {
        let request = RegisterRequest {
            email: "alice@example.com".to_string(),
            password: "Password1".to_string(),
        };

        assert!(request.validate().is_ok());
    }
}

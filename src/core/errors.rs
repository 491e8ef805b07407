//! # Application Error Handling System
//!
//! 스토어프론트 백엔드 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 결합하여 모든 에러가
//! 일관된 JSON 응답과 HTTP 상태 코드로 변환되도록 보장합니다.
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ConfigurationError` | 503 Service Unavailable | 저장소 연결 대상 미설정 (MONGODB_URI 누락) |
//! | `ConnectionError` | 503 Service Unavailable | 저장소 연결 수립 실패 (네트워크/인증) |
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 ID 형식 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패 |
//! | `NotFound` | 404 Not Found | 식별자/키에 해당하는 레코드 없음 |
//! | `OperationFailed` | 500 Internal Server Error | 그 외 모든 저장소 수준 실패 |
//!
//! `NotFound`는 "레코드가 없다"는 사실을, `OperationFailed`는 "저장소/인프라에
//! 문제가 있다"는 사실을 나타냅니다. 두 경우를 구분하는 것이 이 시스템의
//! 핵심 계약이므로 서로 섞어 쓰지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_product(&self, id: &str) -> AppResult<ProductResponse> {
//!     let product = self.product_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("상품을 찾을 수 없습니다".to_string()))?;
//!
//!     Ok(ProductResponse::from(product))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 `Result<HttpResponse, AppError>`를 반환하면
/// actix-web이 자동으로 적절한 HTTP 응답으로 변환합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소 연결 대상 미설정 (503 Service Unavailable)
    ///
    /// 연결 문자열이 환경에 제공되지 않은 경우입니다. 일반 실패와 구분하여
    /// "서비스를 사용할 수 없음" 신호로 매핑됩니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 저장소 연결 수립 실패 (503 Service Unavailable)
    ///
    /// 연결 재시도는 이 계층에서 수행하지 않습니다. 재시도 정책은 호출자의 몫입니다.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 그 외 저장소 수준 실패 (500 Internal Server Error)
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl AppError {
    /// 기계 판독용 에러 카테고리를 반환합니다.
    ///
    /// 모든 에러 응답 본문은 사람이 읽는 메시지와 함께 이 카테고리를 포함합니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ConfigurationError(_) => "configuration_error",
            AppError::ConnectionError(_) => "connection_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::AuthenticationError(_) => "authentication_error",
            AppError::NotFound(_) => "not_found",
            AppError::OperationFailed(_) => "operation_failed",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 상태 코드와 표준 JSON 본문으로 변환합니다:
    ///
    /// ```json
    /// {
    ///   "error": "validation_error",
    ///   "message": "Validation error: name은 필수입니다"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ConfigurationError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ConnectionError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::OperationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.kind(),
                "message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 드라이버/라이브러리 에러를 컨텍스트 메시지와 함께 `OperationFailed`로
/// 감쌀 때 사용합니다.
///
/// ```rust,ignore
/// let products = cursor.try_collect().await
///     .context("Failed to collect products")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::OperationFailed(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::OperationFailed(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_configuration_error_response() {
        let error = AppError::ConfigurationError("MONGODB_URI is not set".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_connection_error_response() {
        let error = AppError::ConnectionError("server selection timed out".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid credentials".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Product not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_operation_failed_response() {
        let error = AppError::OperationFailed("write concern error".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_kind_categories() {
        assert_eq!(AppError::ConfigurationError(String::new()).kind(), "configuration_error");
        assert_eq!(AppError::NotFound(String::new()).kind(), "not_found");
        assert_eq!(AppError::OperationFailed(String::new()).kind(), "operation_failed");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::OperationFailed(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected OperationFailed");
        }
    }
}

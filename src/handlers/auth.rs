//! # Authentication HTTP Handlers
//!
//! 회원가입/로그인 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{web, HttpResponse, post};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::services::users::user_service::UserService;

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/register`
///
/// # 응답
///
/// * `201 Created` - 계정 생성 성공
/// * `400 Bad Request` - 이메일 형식 오류, 짧은 비밀번호, 중복 이메일
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/login`
///
/// # 응답
///
/// * `200 OK` - 로그인 성공
/// * `404 Not Found` - 해당 이메일의 사용자가 없음
/// * `401 Unauthorized` - 비밀번호 불일치
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

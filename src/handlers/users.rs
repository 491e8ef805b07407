//! # User Management HTTP Handlers
//!
//! 관리자용 사용자 관리 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{web, HttpResponse, get, delete};
use crate::core::errors::AppError;
use crate::services::users::user_service::UserService;

/// 사용자 목록 조회 핸들러 (관리자용)
///
/// 응답에서 비밀번호 해시는 제외됩니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/admin/users`
#[get("")]
pub async fn list_users() -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 삭제 핸들러 (관리자용)
///
/// # 엔드포인트
///
/// `DELETE /api/v1/admin/users/{user_id}`
#[delete("/{user_id}")]
pub async fn delete_user(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "사용자가 삭제되었습니다"
    })))
}

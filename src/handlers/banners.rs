//! # Banner HTTP Handlers
//!
//! 배너 CRUD HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 생성은 title, subtitle, image, link 네 필드를 모두 요구하고,
//! 수정은 부분 치환을 허용합니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::banners::request::{CreateBannerRequest, UpdateBannerRequest};
use crate::services::banners::banner_service::BannerService;

/// 배너 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/banners`, `GET /api/v1/admin/banners`
#[get("")]
pub async fn list_banners() -> Result<HttpResponse, AppError> {
    let service = BannerService::instance();
    let banners = service.list_banners().await?;

    Ok(HttpResponse::Ok().json(banners))
}

/// 배너 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/banners/{banner_id}`
#[get("/{banner_id}")]
pub async fn get_banner(banner_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = BannerService::instance();
    let banner = service.get_banner(&banner_id).await?;

    Ok(HttpResponse::Ok().json(banner))
}

/// 배너 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/admin/banners`
#[post("")]
pub async fn create_banner(
    payload: web::Json<CreateBannerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = BannerService::instance();
    let banner = service.create_banner(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(banner))
}

/// 배너 수정 핸들러
///
/// # 엔드포인트
///
/// `PUT /api/v1/admin/banners/{banner_id}`
#[put("/{banner_id}")]
pub async fn update_banner(
    banner_id: web::Path<String>,
    payload: web::Json<UpdateBannerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = BannerService::instance();
    let banner = service.update_banner(&banner_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(banner))
}

/// 배너 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /api/v1/admin/banners/{banner_id}`
#[delete("/{banner_id}")]
pub async fn delete_banner(banner_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = BannerService::instance();
    service.delete_banner(&banner_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "배너가 삭제되었습니다"
    })))
}

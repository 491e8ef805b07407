//! # Wishlist HTTP Handlers
//!
//! 위시리스트 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! "이미 존재함"과 "삭제 대상 없음"은 에러 카테고리가 아니라 상태
//! 플래그가 담긴 본문으로 응답합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/wishlist` | 상품 조인된 위시리스트 조회 | 200 OK |
//! | `POST` | `/wishlist` | 추가 (중복이면 already_exists) | 201 / 200 / 400 |
//! | `DELETE` | `/wishlist` | 제거 (없으면 not_found) | 200 / 404 / 400 |

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::wishlist::request::{AddWishlistEntryRequest, RemoveWishlistEntryRequest};
use crate::domain::models::outcome::MutationStatus;
use crate::services::wishlist::wishlist_service::WishlistService;

/// 위시리스트 조회 핸들러
///
/// 모든 엔트리를 참조 상품과 조인해 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/wishlist`
#[get("")]
pub async fn get_wishlist() -> Result<HttpResponse, AppError> {
    let service = WishlistService::instance();
    let entries = service.get_wishlist().await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// 위시리스트 추가 핸들러
///
/// 같은 (userId, productId) 엔트리가 이미 있으면 중복을 만들지 않고
/// "이미 존재함"을 성공으로 응답합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/wishlist`
///
/// # 응답
///
/// * `201 Created` - 새 엔트리 생성, 본문에 엔트리 포함
/// * `200 OK` - 이미 존재함 (`{"status": "already_exists", ...}`)
#[post("")]
pub async fn add_to_wishlist(
    payload: web::Json<AddWishlistEntryRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = WishlistService::instance();
    let outcome = service.add_entry(payload.into_inner()).await?;

    match outcome.status {
        MutationStatus::Created => Ok(HttpResponse::Created().json(outcome.record)),
        _ => Ok(HttpResponse::Ok().json(serde_json::json!({
            "status": outcome.status,
            "message": "이미 위시리스트에 있는 상품입니다"
        }))),
    }
}

/// 위시리스트 제거 핸들러
///
/// # 엔드포인트
///
/// `DELETE /api/v1/wishlist`
///
/// # 응답
///
/// * `200 OK` - 엔트리 제거됨
/// * `404 Not Found` - 해당 엔트리가 없음 (소프트 결과, 저장소는 변하지 않음)
#[delete("")]
pub async fn remove_from_wishlist(
    payload: web::Json<RemoveWishlistEntryRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = WishlistService::instance();
    let status = service.remove_entry(payload.into_inner()).await?;

    match status {
        MutationStatus::Removed => Ok(HttpResponse::Ok().json(serde_json::json!({
            "status": status,
            "message": "위시리스트에서 제거되었습니다"
        }))),
        _ => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "status": status,
            "message": "위시리스트에 없는 상품입니다"
        }))),
    }
}

//! # Cart HTTP Handlers
//!
//! 장바구니 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 라인은 경로 파라미터가 아니라 요청 본문의 (userId, productId) 쌍으로
//! 식별됩니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/cart` | 상품 조인된 장바구니 조회 | 200 OK |
//! | `POST` | `/cart` | 담기 (기존 라인이면 수량 증가) | 200 OK / 400 |
//! | `DELETE` | `/cart` | 라인 제거 (없어도 성공) | 200 OK / 400 |

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::cart::request::{AddCartLineRequest, RemoveCartLineRequest};
use crate::domain::models::outcome::MutationStatus;
use crate::services::cart::cart_service::CartService;

/// 장바구니 조회 핸들러
///
/// 모든 라인을 참조 상품과 조인해 반환합니다. 참조 상품이 삭제된
/// 라인은 `product: null`로 내려갑니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/cart`
#[get("")]
pub async fn get_cart() -> Result<HttpResponse, AppError> {
    let service = CartService::instance();
    let lines = service.get_cart().await?;

    Ok(HttpResponse::Ok().json(lines))
}

/// 장바구니 담기 핸들러
///
/// 같은 (userId, productId) 라인이 있으면 quantity를 증가시키고,
/// 없으면 새 라인을 만듭니다. quantity 생략 시 1로 처리됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/cart`
#[post("")]
pub async fn add_to_cart(
    payload: web::Json<AddCartLineRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CartService::instance();
    let line = service.add_line(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(line))
}

/// 장바구니 라인 제거 핸들러
///
/// 존재하지 않는 라인 제거도 성공으로 응답합니다 (멱등).
///
/// # 엔드포인트
///
/// `DELETE /api/v1/cart`
#[delete("")]
pub async fn remove_from_cart(
    payload: web::Json<RemoveCartLineRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CartService::instance();
    let status = service.remove_line(payload.into_inner()).await?;

    if status == MutationStatus::NotFound {
        log::debug!("존재하지 않는 장바구니 라인 제거 요청 (no-op)");
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": status,
        "message": "장바구니에서 제거되었습니다"
    })))
}

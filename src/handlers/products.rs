//! # Product HTTP Handlers
//!
//! 상품 CRUD HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/products` | 상품 목록 조회 | 200 OK |
//! | `GET` | `/products/{id}` | 상품 단건 조회 | 200 OK / 404 |
//! | `POST` | `/admin/products` | 상품 생성 | 201 Created / 400 |
//! | `PUT` | `/admin/products/{id}` | 상품 부분 수정 | 200 OK / 400 / 404 |
//! | `DELETE` | `/admin/products/{id}` | 상품 삭제 | 200 OK / 404 |
//!
//! 저장소 미설정/연결 실패는 모든 엔드포인트에서 503으로 내려갑니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::products::request::{CreateProductRequest, UpdateProductRequest};
use crate::services::products::product_service::ProductService;

/// 상품 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/products`, `GET /api/v1/admin/products`
#[get("")]
pub async fn list_products() -> Result<HttpResponse, AppError> {
    let service = ProductService::instance();
    let products = service.list_products().await?;

    Ok(HttpResponse::Ok().json(products))
}

/// 상품 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/products/{product_id}`
#[get("/{product_id}")]
pub async fn get_product(product_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = ProductService::instance();
    let product = service.get_product(&product_id).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// 상품 생성 핸들러
///
/// name, brand, price, stock, size, color가 필수이며 image는 선택입니다.
/// 필수 필드 누락이나 허용 범위 밖의 size는 해당 필드를 지목하는
/// 400 응답이 됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/admin/products`
#[post("")]
pub async fn create_product(
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProductService::instance();
    let product = service.create_product(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(product))
}

/// 상품 수정 핸들러
///
/// 제공된 필드만 부분 치환됩니다. 제공된 값에는 생성과 동일한
/// 검증이 적용됩니다.
///
/// # 엔드포인트
///
/// `PUT /api/v1/admin/products/{product_id}`
#[put("/{product_id}")]
pub async fn update_product(
    product_id: web::Path<String>,
    payload: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProductService::instance();
    let product = service.update_product(&product_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// 상품 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /api/v1/admin/products/{product_id}`
#[delete("/{product_id}")]
pub async fn delete_product(product_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = ProductService::instance();
    service.delete_product(&product_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "상품이 삭제되었습니다"
    })))
}

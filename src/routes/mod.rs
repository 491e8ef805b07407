//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 스토어프론트(공개) 라우트와 관리자 라우트, 헬스체크 엔드포인트를
//! 포함합니다.
//!
//! # Route Groups
//!
//! ## 공개 라우트
//! - `GET /api/v1/products`, `GET /api/v1/products/{id}` - 상품 탐색
//! - `GET /api/v1/banners`, `GET /api/v1/banners/{id}` - 배너 조회
//! - `GET|POST|DELETE /api/v1/cart` - 장바구니
//! - `GET|POST|DELETE /api/v1/wishlist` - 위시리스트
//! - `POST /api/v1/auth/register`, `POST /api/v1/auth/login` - 계정
//!
//! ## 관리자 라우트
//! - `GET|POST /api/v1/admin/products`, `PUT|DELETE /api/v1/admin/products/{id}`
//! - `GET|POST /api/v1/admin/banners`, `PUT|DELETE /api/v1/admin/banners/{id}`
//! - `GET /api/v1/admin/users`, `DELETE /api/v1/admin/users/{id}`
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use actix_web::web;
use serde_json::json;
use crate::db::Database;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_product_routes(cfg);
    configure_banner_routes(cfg);
    configure_cart_routes(cfg);
    configure_wishlist_routes(cfg);
    configure_auth_routes(cfg);
    configure_admin_user_routes(cfg);
}

/// 상품 관련 라우트를 설정합니다
///
/// 공개 탐색 라우트와 관리자 CRUD 라우트를 분리하여 등록합니다.
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    // Public routes - 스토어프론트 상품 탐색
    cfg.service(
        web::scope("/api/v1/products")
            .service(handlers::products::list_products)
            .service(handlers::products::get_product)
    );

    // Admin routes - 상품 관리
    cfg.service(
        web::scope("/api/v1/admin/products")
            .service(handlers::products::list_products)
            .service(handlers::products::create_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product)
    );
}

/// 배너 관련 라우트를 설정합니다
fn configure_banner_routes(cfg: &mut web::ServiceConfig) {
    // Public routes - 홈페이지 배너 조회
    cfg.service(
        web::scope("/api/v1/banners")
            .service(handlers::banners::list_banners)
            .service(handlers::banners::get_banner)
    );

    // Admin routes - 배너 관리
    cfg.service(
        web::scope("/api/v1/admin/banners")
            .service(handlers::banners::list_banners)
            .service(handlers::banners::create_banner)
            .service(handlers::banners::update_banner)
            .service(handlers::banners::delete_banner)
    );
}

/// 장바구니 라우트를 설정합니다
///
/// 담기/제거는 요청 본문의 (userId, productId) 쌍으로 라인을 식별합니다.
fn configure_cart_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/cart")
            .service(handlers::cart::get_cart)
            .service(handlers::cart::add_to_cart)
            .service(handlers::cart::remove_from_cart)
    );
}

/// 위시리스트 라우트를 설정합니다
fn configure_wishlist_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/wishlist")
            .service(handlers::wishlist::get_wishlist)
            .service(handlers::wishlist::add_to_wishlist)
            .service(handlers::wishlist::remove_from_wishlist)
    );
}

/// 인증 라우트를 설정합니다
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
    );
}

/// 관리자용 사용자 라우트를 설정합니다
fn configure_admin_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin/users")
            .service(handlers::users::list_users)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 저장소 도달 가능 여부를 함께 보고하지만, 저장소가 내려가 있어도
/// 엔드포인트 자체는 200으로 응답합니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "shop_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "store": "up"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    let store_status = match Database::with_connection(|db| async move { db.ping().await }).await {
        Ok(()) => "up",
        Err(_) => "unavailable",
    };

    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "shop_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": store_status
    }))
}

//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 싱글톤으로 관리되는 서비스들을 도메인별로 제공합니다. 서비스는
//! 요청 DTO를 엔티티로 변환하고, 리포지토리 결과를 `NotFound` /
//! `OperationFailed` / 소프트 결과로 구분하여 핸들러에 전달합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::products::product_service::ProductService;
//!
//! let product_service = ProductService::instance();
//! let products = product_service.list_products().await?;
//! ```

pub mod banners;
pub mod cart;
pub mod products;
pub mod users;
pub mod wishlist;

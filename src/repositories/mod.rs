//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 컬렉션당 하나씩, 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! 리포지토리는 연결 핸들을 보관하지 않고 연산마다 연결 관리자를 통해
//! 프로세스 공유 핸들을 획득합니다. "레코드 없음"은 에러가 아니라
//! `Ok(None)` / `Ok(false)`로 보고되며, 인프라 실패만 에러로 전파됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::products::product_repo::ProductRepository;
//!
//! let product_repo = ProductRepository::instance();
//! let products = product_repo.find_all().await?;
//! ```

pub mod banners;
pub mod cart;
pub mod products;
pub mod users;
pub mod wishlist;

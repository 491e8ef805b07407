//! 스토어프론트 백엔드 서비스
//!
//! Rust 기반의 소규모 e-커머스 백엔드입니다. 상품/배너/사용자 CRUD,
//! 장바구니, 위시리스트를 MongoDB 위에서 제공하며, 싱글톤 레지스트리를
//! 활용한 의존성 주입과 프로세스 공유 연결 핸들을 사용합니다.
//!
//! # Features
//!
//! - **상품/배너 관리**: 목록, 단건 조회, 생성, 부분 수정, 삭제
//! - **장바구니**: (userId, productId) 키의 원자적 수량 upsert, 상품 조인 조회
//! - **위시리스트**: 중복 없는 추가, 소프트 "이미 존재함"/"없음" 결과, 상품 조인 조회
//! - **사용자**: bcrypt 해싱 기반 회원가입/로그인, 관리자용 목록/삭제
//! - **공유 연결 관리**: 첫 사용 시 지연 수립, 경쟁 호출 간 수립 future 공유,
//!   설정 누락 시 503 응답
//! - **싱글톤 DI**: 레지스트리 기반 서비스/리포지토리 인스턴스 관리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 프로세스 공유 연결 핸들
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use shop_service_backend::services::products::product_service::ProductService;
//! use shop_service_backend::services::cart::cart_service::CartService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let product_service = ProductService::instance();
//! let cart_service = CartService::instance();
//!
//! let products = product_service.list_products().await?;
//! let cart = cart_service.get_cart().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

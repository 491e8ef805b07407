//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 페이로드를 역직렬화/검증하고 싱글톤 서비스에 위임한 뒤,
//! 결과를 상태 코드가 매겨진 JSON 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Admin Panel, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   MongoDB (공유 연결 핸들)                      ← Store
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 상태 코드 규약
//!
//! - 성공: 페이로드와 함께 200/201
//! - 검증/필수 필드 누락: 400
//! - 로그인 실패: 401
//! - 대상 없음: 404
//! - 저장소 미설정/연결 불가: 503
//! - 그 외 실패: 500

pub mod auth;
pub mod banners;
pub mod cart;
pub mod products;
pub mod users;
pub mod wishlist;

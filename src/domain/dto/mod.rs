//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 경계에서 사용되는 요청/응답 구조체들을 도메인별로 정의합니다.
//! 요청 DTO는 `validator` 파생 매크로로 검증 규칙을 선언하며, 응답 DTO는
//! 엔티티에서 변환되면서 저장소 식별자를 16진수 문자열로 노출하고
//! 민감한 필드를 제거합니다.

pub mod banners;
pub mod cart;
pub mod products;
pub mod users;
pub mod wishlist;

use crate::core::errors::{AppError, AppResult};

/// 필수 필드의 존재를 확인하며 값을 꺼냅니다.
///
/// 검증을 통과한 요청에서는 항상 성공합니다. 변환 경로가 단독으로 호출된
/// 경우에도 누락은 해당 필드명을 담은 `ValidationError`로 보고됩니다.
pub(crate) fn required_field<T>(value: Option<T>, name: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::ValidationError(format!("{}은(는) 필수입니다", name)))
}

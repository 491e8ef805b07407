//! 변경 연산의 소프트 결과 타입
//!
//! 장바구니/위시리스트의 "이미 존재함", "삭제 대상 없음" 같은 결과는
//! 에러가 아니라 상태 플래그를 실은 성공 값입니다. 호출자는 예외 분기가
//! 아니라 이 태그된 타입의 의미를 보고 분기합니다.

use serde::{Deserialize, Serialize};

/// 변경 연산의 결과 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationStatus {
    /// 새 레코드가 생성됨
    Created,
    /// 같은 키의 레코드가 이미 존재하여 아무것도 생성하지 않음
    AlreadyExists,
    /// 레코드가 제거됨
    Removed,
    /// 제거/변경 대상 레코드가 존재하지 않음 (인프라 실패와 구분되는 소프트 결과)
    NotFound,
}

/// 상태 플래그와 관련 레코드를 함께 실어 나르는 변경 결과
///
/// `record`는 연산이 레코드를 만들었거나 갱신한 경우에만 채워집니다.
#[derive(Debug, Clone)]
pub struct MutationOutcome<T> {
    pub status: MutationStatus,
    pub record: Option<T>,
}

impl<T> MutationOutcome<T> {
    /// 새 레코드 생성 결과
    pub fn created(record: T) -> Self {
        Self {
            status: MutationStatus::Created,
            record: Some(record),
        }
    }

    /// 이미 존재함 결과 (레코드 없음)
    pub fn already_exists() -> Self {
        Self {
            status: MutationStatus::AlreadyExists,
            record: None,
        }
    }

    /// 제거 완료 결과
    pub fn removed() -> Self {
        Self {
            status: MutationStatus::Removed,
            record: None,
        }
    }

    /// 대상 없음 결과
    pub fn not_found() -> Self {
        Self {
            status: MutationStatus::NotFound,
            record: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_carries_record() {
        let outcome = MutationOutcome::created("entry");

        assert_eq!(outcome.status, MutationStatus::Created);
        assert_eq!(outcome.record, Some("entry"));
    }

    #[test]
    fn test_soft_outcomes_have_no_record() {
        assert_eq!(MutationOutcome::<()>::already_exists().status, MutationStatus::AlreadyExists);
        assert!(MutationOutcome::<()>::already_exists().record.is_none());
        assert_eq!(MutationOutcome::<()>::removed().status, MutationStatus::Removed);
        assert_eq!(MutationOutcome::<()>::not_found().status, MutationStatus::NotFound);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&MutationStatus::AlreadyExists).unwrap();
        assert_eq!(json, "\"already_exists\"");

        let json = serde_json::to_string(&MutationStatus::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }
}

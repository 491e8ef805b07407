//! User Entity Implementation
//!
//! 스토어프론트 계정을 표현하는 사용자 엔티티입니다.
//! 비밀번호는 bcrypt 해시로만 저장되며 평문은 어디에도 보관하지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장됩니다. 이메일은 시스템 전체에서 고유합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 엔티티를 생성합니다. `password_hash`는 이미 해시된 값이어야 합니다.
    pub fn new(email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

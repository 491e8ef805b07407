//! Wishlist Entry Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 위시리스트 엔트리 엔티티
///
/// `wishlist` 컬렉션에 저장됩니다. (userId, productId) 쌍당 최대 하나의
/// 엔트리만 존재하며, 같은 쌍에 대한 반복 추가는 중복 생성 대신
/// "이미 존재함" 결과를 보고합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 위시리스트 소유 사용자 식별자
    pub user_id: String,
    /// 참조하는 상품 식별자
    pub product_id: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl WishlistEntry {
    /// 새 위시리스트 엔트리를 생성합니다. ID는 저장소가 할당합니다.
    pub fn new(user_id: String, product_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            product_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_references_product() {
        let product_id = ObjectId::new();
        let entry = WishlistEntry::new("user-1".to_string(), product_id);

        assert_eq!(entry.user_id, "user-1");
        assert_eq!(entry.product_id, product_id);
        assert!(entry.id.is_none());
    }
}

//! Cart Line Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 장바구니 라인 엔티티
///
/// `cart` 컬렉션에 저장됩니다. (userId, productId) 쌍당 최대 하나의
/// 라인만 존재합니다. 같은 쌍에 대한 반복 추가는 새 라인을 만들지 않고
/// quantity를 증가시키며, 이 불변식은 컬렉션의 유니크 인덱스와 원자적
/// upsert로 보장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 장바구니 소유 사용자 식별자
    pub user_id: String,
    /// 참조하는 상품 식별자
    pub product_id: ObjectId,
    /// 담긴 수량 (기본값: 1)
    pub quantity: i32,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl CartLine {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

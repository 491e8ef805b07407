//! Product Entity Implementation
//!
//! 스토어프론트에서 판매되는 상품을 표현하는 핵심 도메인 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 상품 사이즈
///
/// 허용되는 값은 S, M, L, XL 네 가지뿐입니다. 열거형으로 모델링하여
/// 저장 계층에 도달하기 전에 타입 수준에서 잘못된 값을 차단합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    XL,
}

impl Size {
    /// 허용되는 사이즈 문자열 목록 (검증 에러 메시지용)
    pub const ALLOWED: [&'static str; 4] = ["S", "M", "L", "XL"];

    /// 문자열에서 Size를 파싱합니다. 허용 목록 밖의 값은 None입니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "S" => Some(Size::S),
            "M" => Some(Size::M),
            "L" => Some(Size::L),
            "XL" => Some(Size::XL),
            _ => None,
        }
    }

    /// 저장/직렬화에 사용되는 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 상품 엔티티
///
/// `products` 컬렉션에 저장됩니다. 식별자는 삽입 시 저장소가 할당하며
/// 이후 변경되지 않습니다. `updated_at`은 마지막 성공한 변경 시각을,
/// `created_at`은 생성 시각을 나타내며 생성 후 바뀌지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상품명
    pub name: String,
    /// 브랜드명
    pub brand: String,
    /// 판매 가격
    pub price: f64,
    /// 재고 수량
    pub stock: i32,
    /// 사이즈 (S/M/L/XL)
    pub size: Size,
    /// 색상 (예: "Red", "Blue")
    pub color: String,
    /// 상품 이미지 URL 또는 경로
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Product {
    /// 새 상품 엔티티를 생성합니다. ID는 저장소가 할당합니다.
    pub fn new(
        name: String,
        brand: String,
        price: f64,
        stock: i32,
        size: Size,
        color: String,
        image: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            brand,
            price,
            stock,
            size,
            color,
            image,
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
    fn test_size_parse_accepts_allowed_values() {
        assert_eq!(Size::parse("S"), Some(Size::S));
        assert_eq!(Size::parse("M"), Some(Size::M));
        assert_eq!(Size::parse("L"), Some(Size::L));
        assert_eq!(Size::parse("XL"), Some(Size::XL));
    }

    #[test]
    fn test_size_parse_rejects_unknown_values() {
        assert_eq!(Size::parse("XXL"), None);
        assert_eq!(Size::parse("s"), None);
        assert_eq!(Size::parse(""), None);
    }

    #[test]
    fn test_size_round_trips_through_str() {
        for name in Size::ALLOWED {
            assert_eq!(Size::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_new_product_has_matching_timestamps() {
        let product = Product::new(
            "Slim Jeans".to_string(),
            "Denim Co".to_string(),
            59.99,
            10,
            Size::M,
            "Blue".to_string(),
            None,
        );

        assert!(product.id.is_none());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_product_serializes_with_camel_case_keys() {
        let product = Product::new(
            "Hoodie".to_string(),
            "Acme".to_string(),
            39.0,
            3,
            Size::L,
            "Black".to_string(),
            Some("https://example.com/hoodie.png".to_string()),
        );

        let value = serde_json::to_value(&product).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value.get("size").unwrap(), "L");
        // 저장 전에는 _id가 직렬화되지 않는다
        assert!(value.get("_id").is_none());
    }
}

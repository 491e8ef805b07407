//! 장바구니 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::dto::products::response::ProductResponse;
use crate::domain::entities::cart::CartLine;
use crate::domain::entities::product::Product;

/// 상품 정보가 조인된 장바구니 라인 응답 DTO
///
/// 참조하던 상품이 삭제된 라인도 실패하지 않고 `product: null`로
/// 반환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineResponse {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
    /// 조인된 상품 정보 (상품이 삭제되었으면 null)
    pub product: Option<ProductResponse>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl CartLineResponse {
    /// 라인과 조인된 상품에서 응답을 구성합니다.
    pub fn from_join(line: CartLine, product: Option<Product>) -> Self {
        Self {
            id: line.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: line.user_id,
            product_id: line.product_id.to_hex(),
            quantity: line.quantity,
            product: product.map(ProductResponse::from),
            created_at: line.created_at,
            updated_at: line.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::product::Size;

    fn line(product_id: ObjectId) -> CartLine {
        let now = DateTime::now();
        CartLine {
            id: Some(ObjectId::new()),
            user_id: "user-1".to_string(),
            product_id,
            quantity: 2,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_join_with_existing_product() {
        let product = Product::new(
            "Tee".to_string(),
            "Acme".to_string(),
            9.5,
            2,
            Size::S,
            "White".to_string(),
            None,
        );
        let product_id = ObjectId::new();

        let response = CartLineResponse::from_join(line(product_id), Some(product));

        assert_eq!(response.product_id, product_id.to_hex());
        assert!(response.product.is_some());
    }

    #[test]
    fn test_join_with_deleted_product_yields_null_product() {
        let response = CartLineResponse::from_join(line(ObjectId::new()), None);

        assert!(response.product.is_none());

        // null 상품은 직렬화에서도 명시적 null로 남는다
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("product").unwrap().is_null());
    }
}

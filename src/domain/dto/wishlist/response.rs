//! 위시리스트 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::dto::products::response::ProductResponse;
use crate::domain::entities::product::Product;
use crate::domain::entities::wishlist::WishlistEntry;

/// 상품 정보가 조인된 위시리스트 엔트리 응답 DTO
///
/// `product_id`는 조인된 상품의 식별자를 엔트리에 다시 투영한 값입니다.
/// 참조하던 상품이 삭제되면 `product`와 `productId` 모두 null이 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntryResponse {
    pub id: String,
    pub user_id: String,
    /// 조인된 상품의 식별자 (상품이 삭제되었으면 null)
    pub product_id: Option<String>,
    /// 조인된 상품 정보 (상품이 삭제되었으면 null)
    pub product: Option<ProductResponse>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl WishlistEntryResponse {
    /// 엔트리와 조인된 상품에서 응답을 구성합니다.
    pub fn from_join(entry: WishlistEntry, product: Option<Product>) -> Self {
        let product = product.map(ProductResponse::from);

        Self {
            id: entry.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: entry.user_id,
            product_id: product.as_ref().map(|p| p.id.clone()),
            product,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::product::Size;

    #[test]
    fn test_product_identifier_is_projected_from_join() {
        let product_id = ObjectId::new();
        let mut product = Product::new(
            "Tee".to_string(),
            "Acme".to_string(),
            9.5,
            2,
            Size::S,
            "White".to_string(),
            None,
        );
        product.id = Some(product_id);

        let entry = WishlistEntry::new("user-1".to_string(), product_id);
        let response = WishlistEntryResponse::from_join(entry, Some(product));

        assert_eq!(response.product_id.as_deref(), Some(product_id.to_hex().as_str()));
        assert!(response.product.is_some());
    }

    #[test]
    fn test_deleted_product_projects_null() {
        let entry = WishlistEntry::new("user-1".to_string(), ObjectId::new());
        let response = WishlistEntryResponse::from_join(entry, None);

        assert!(response.product_id.is_none());
        assert!(response.product.is_none());
    }
}

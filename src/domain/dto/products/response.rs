//! 상품 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::product::{Product, Size};

/// 상품 응답 DTO
///
/// 저장소의 ObjectId를 16진수 문자열로 변환하여 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub stock: i32,
    pub size: Size,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            brand: product.brand,
            price: product.price,
            stock: product.stock,
            size: product.size,
            color: product.color,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

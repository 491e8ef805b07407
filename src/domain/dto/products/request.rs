//! 상품 요청 DTO
//!
//! 상품 생성/수정을 위한 HTTP 요청 데이터 구조와 검증 규칙을 정의합니다.
//! 생성 요청의 필수 필드는 `Option` + `required` 검증으로 모델링되어,
//! 누락된 필드가 해당 필드명을 지목하는 `ValidationError`로 보고됩니다.

use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::required_field;
use crate::domain::entities::product::{Product, Size};
use crate::utils::string_utils::deserialize_optional_string;

/// 상품 생성 요청 DTO
///
/// name, brand, price, stock, size, color가 필수이며 image는 선택입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(required(message = "name은 필수입니다"))]
    #[validate(length(min = 1, message = "name은 비어 있을 수 없습니다"))]
    pub name: Option<String>,

    #[validate(required(message = "brand는 필수입니다"))]
    #[validate(length(min = 1, message = "brand는 비어 있을 수 없습니다"))]
    pub brand: Option<String>,

    #[validate(required(message = "price는 필수입니다"))]
    #[validate(range(min = 0.0, message = "price는 0 이상이어야 합니다"))]
    pub price: Option<f64>,

    #[validate(required(message = "stock은 필수입니다"))]
    #[validate(range(min = 0, message = "stock은 0 이상이어야 합니다"))]
    pub stock: Option<i32>,

    /// 사이즈 문자열 (S/M/L/XL만 허용)
    #[validate(required(message = "size는 필수입니다"))]
    #[validate(custom(function = "validate_size"))]
    pub size: Option<String>,

    #[validate(required(message = "color는 필수입니다"))]
    #[validate(length(min = 1, message = "color는 비어 있을 수 없습니다"))]
    pub color: Option<String>,

    /// 상품 이미지 URL (선택, 빈 문자열은 없음으로 처리)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,
}

impl CreateProductRequest {
    /// 검증된 요청을 상품 엔티티로 변환합니다.
    ///
    /// `validate()`를 통과한 요청에서 호출하는 것이 전제이지만, 필드 누락과
    /// 사이즈 파싱은 여기서도 `ValidationError`로 다시 확인하므로 변환이
    /// 잘못된 엔티티를 만들어내는 일은 없습니다.
    pub fn into_product(self) -> AppResult<Product> {
        let size_value = required_field(self.size, "size")?;
        let size = parse_size(&size_value)?;

        Ok(Product::new(
            required_field(self.name, "name")?,
            required_field(self.brand, "brand")?,
            required_field(self.price, "price")?,
            required_field(self.stock, "stock")?,
            size,
            required_field(self.color, "color")?,
            self.image,
        ))
    }
}

/// 상품 수정 요청 DTO
///
/// 모든 필드가 선택이며, 제공된 필드만 부분 치환됩니다.
/// 제공된 값에는 생성과 동일한 내용 검증이 적용되므로 수정이
/// 잘못된 상태를 만들 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "name은 비어 있을 수 없습니다"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "brand는 비어 있을 수 없습니다"))]
    pub brand: Option<String>,

    #[validate(range(min = 0.0, message = "price는 0 이상이어야 합니다"))]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "stock은 0 이상이어야 합니다"))]
    pub stock: Option<i32>,

    #[validate(custom(function = "validate_size"))]
    pub size: Option<String>,

    #[validate(length(min = 1, message = "color는 비어 있을 수 없습니다"))]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,
}

impl UpdateProductRequest {
    /// 제공된 필드들을 `$set` 업데이트 문서로 변환합니다.
    ///
    /// `updatedAt`은 항상 갱신되고 `createdAt`과 `_id`는 결코 포함되지
    /// 않으므로, 업데이트가 생성 시각이나 식별자를 건드릴 수 없습니다.
    pub fn into_update_document(self) -> AppResult<Document> {
        let mut update = Document::new();

        if let Some(name) = self.name {
            update.insert("name", name);
        }
        if let Some(brand) = self.brand {
            update.insert("brand", brand);
        }
        if let Some(price) = self.price {
            update.insert("price", price);
        }
        if let Some(stock) = self.stock {
            update.insert("stock", stock);
        }
        if let Some(size) = self.size {
            update.insert("size", parse_size(&size)?.as_str());
        }
        if let Some(color) = self.color {
            update.insert("color", color);
        }
        if let Some(image) = self.image {
            update.insert("image", image);
        }

        update.insert("updatedAt", DateTime::now());

        Ok(update)
    }
}

/// 사이즈 문자열이 허용 목록 안에 있는지 검증 (validator 훅)
fn validate_size(size: &str) -> Result<(), ValidationError> {
    if Size::parse(size).is_none() {
        return Err(ValidationError::new("invalid_size")
            .with_message(format!("size는 {} 중 하나여야 합니다", Size::ALLOWED.join(", ")).into()));
    }
    Ok(())
}

/// 사이즈 문자열을 엔티티 열거형으로 파싱 (변환 경로)
fn parse_size(size: &str) -> AppResult<Size> {
    Size::parse(size).ok_or_else(|| {
        AppError::ValidationError(format!(
            "size는 {} 중 하나여야 합니다",
            Size::ALLOWED.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateProductRequest {
        CreateProductRequest {
            name: Some("Slim Jeans".to_string()),
            brand: Some("Denim Co".to_string()),
            price: Some(59.99),
            stock: Some(10),
            size: Some("M".to_string()),
            color: Some("Blue".to_string()),
            image: None,
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_missing_name_names_the_field() {
        let mut request = valid_request();
        request.name = None;

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_each_missing_required_field_is_reported() {
        for field in ["name", "brand", "price", "stock", "size", "color"] {
            let mut request = valid_request();
            match field {
                "name" => request.name = None,
                "brand" => request.brand = None,
                "price" => request.price = None,
                "stock" => request.stock = None,
                "size" => request.size = None,
                "color" => request.color = None,
                _ => unreachable!(),
            }

            let errors = request.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key(field),
                "expected validation error naming `{}`",
                field
            );
        }
    }

    #[test]
    fn test_missing_image_is_allowed() {
        let mut request = valid_request();
        request.image = None;

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_size_outside_allowed_set_is_rejected() {
        for bad_size in ["XXL", "small", "m", ""] {
            let mut request = valid_request();
            request.size = Some(bad_size.to_string());

            let errors = request.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("size"),
                "expected `size` error for {:?}",
                bad_size
            );
        }
    }

    #[test]
    fn test_into_product_builds_entity() {
        let product = valid_request().into_product().unwrap();

        assert_eq!(product.name, "Slim Jeans");
        assert_eq!(product.size, Size::M);
        assert!(product.id.is_none());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_update_document_contains_only_provided_fields() {
        let request = UpdateProductRequest {
            name: None,
            brand: None,
            price: Some(49.99),
            stock: None,
            size: Some("L".to_string()),
            color: None,
            image: None,
        };

        let update = request.into_update_document().unwrap();

        assert_eq!(update.get_f64("price").unwrap(), 49.99);
        assert_eq!(update.get_str("size").unwrap(), "L");
        assert!(update.get("updatedAt").is_some());
        assert!(update.get("name").is_none());
        assert!(update.get("createdAt").is_none());
        assert!(update.get("_id").is_none());
    }

    #[test]
    fn test_update_document_rejects_bad_size() {
        let request = UpdateProductRequest {
            name: None,
            brand: None,
            price: None,
            stock: None,
            size: Some("XS".to_string()),
            color: None,
            image: None,
        };

        assert!(request.into_update_document().is_err());
    }

    #[test]
    fn test_empty_image_string_deserializes_to_none() {
        let request: CreateProductRequest = serde_json::from_str(
            r#"{"name":"Tee","brand":"Acme","price":9.5,"stock":2,"size":"S","color":"White","image":"   "}"#,
        )
        .unwrap();

        assert_eq!(request.image, None);
    }
}

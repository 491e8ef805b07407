//! 장바구니 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 장바구니 담기 요청 DTO
///
/// 같은 (userId, productId) 쌍에 대한 반복 요청은 기존 라인의 수량을
/// 증가시킵니다. quantity를 생략하면 1로 처리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCartLineRequest {
    #[validate(required(message = "userId는 필수입니다"))]
    #[validate(length(min = 1, message = "userId는 비어 있을 수 없습니다"))]
    pub user_id: Option<String>,

    #[validate(required(message = "productId는 필수입니다"))]
    #[validate(length(min = 1, message = "productId는 비어 있을 수 없습니다"))]
    pub product_id: Option<String>,

    #[validate(range(min = 1, message = "quantity는 1 이상이어야 합니다"))]
    pub quantity: Option<i32>,
}

impl AddCartLineRequest {
    /// 요청된 수량을 반환합니다. 생략 시 기본값은 1입니다.
    pub fn quantity_or_default(&self) -> i32 {
        self.quantity.unwrap_or(1)
    }
}

/// 장바구니 라인 제거 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RemoveCartLineRequest {
    #[validate(required(message = "userId는 필수입니다"))]
    #[validate(length(min = 1, message = "userId는 비어 있을 수 없습니다"))]
    pub user_id: Option<String>,

    #[validate(required(message = "productId는 필수입니다"))]
    #[validate(length(min = 1, message = "productId는 비어 있을 수 없습니다"))]
    pub product_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_defaults_to_one() {
        let request = AddCartLineRequest {
            user_id: Some("user-1".to_string()),
            product_id: Some("665f1f77bcf86cd799439011".to_string()),
            quantity: None,
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.quantity_or_default(), 1);
    }

    #[test]
    fn test_explicit_quantity_is_kept() {
        let request = AddCartLineRequest {
            user_id: Some("user-1".to_string()),
            product_id: Some("665f1f77bcf86cd799439011".to_string()),
            quantity: Some(3),
        };

        assert_eq!(request.quantity_or_default(), 3);
    }

    #[test]
    fn test_missing_keys_are_reported() {
        let request = AddCartLineRequest {
            user_id: None,
            product_id: None,
            quantity: None,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
        assert!(errors.field_errors().contains_key("product_id"));
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let request = AddCartLineRequest {
            user_id: Some("user-1".to_string()),
            product_id: Some("665f1f77bcf86cd799439011".to_string()),
            quantity: Some(0),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let request: RemoveCartLineRequest = serde_json::from_str(
            r#"{"userId":"user-1","productId":"665f1f77bcf86cd799439011"}"#,
        )
        .unwrap();

        assert_eq!(request.user_id.as_deref(), Some("user-1"));
    }
}

//! 위시리스트 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 위시리스트 추가 요청 DTO
///
/// 같은 (userId, productId) 쌍에 대한 반복 요청은 중복을 만들지 않고
/// "이미 존재함" 성공 결과를 보고합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistEntryRequest {
    #[validate(required(message = "userId는 필수입니다"))]
    #[validate(length(min = 1, message = "userId는 비어 있을 수 없습니다"))]
    pub user_id: Option<String>,

    #[validate(required(message = "productId는 필수입니다"))]
    #[validate(length(min = 1, message = "productId는 비어 있을 수 없습니다"))]
    pub product_id: Option<String>,
}

/// 위시리스트 제거 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RemoveWishlistEntryRequest {
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
    fn test_both_keys_are_required() {
        let request = AddWishlistEntryRequest {
            user_id: None,
            product_id: Some("665f1f77bcf86cd799439011".to_string()),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
    }

    #[test]
    fn test_valid_request_passes() {
        let request = AddWishlistEntryRequest {
            user_id: Some("user-1".to_string()),
            product_id: Some("665f1f77bcf86cd799439011".to_string()),
        };

        assert!(request.validate().is_ok());
    }
}

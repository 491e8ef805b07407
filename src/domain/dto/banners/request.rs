//! 배너 요청 DTO
//!
//! 배너 생성은 경계 계층에서 title, subtitle, image, link 네 필드를 모두
//! 요구합니다. 스키마 수준에서는 subtitle/link가 선택이므로 수정 요청은
//! 부분 치환을 허용합니다.

use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::required_field;
use crate::domain::entities::banner::Banner;

/// 배너 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBannerRequest {
    #[validate(required(message = "title은 필수입니다"))]
    #[validate(length(min = 1, message = "title은 비어 있을 수 없습니다"))]
    pub title: Option<String>,

    #[validate(required(message = "subtitle은 필수입니다"))]
    #[validate(length(min = 1, message = "subtitle은 비어 있을 수 없습니다"))]
    pub subtitle: Option<String>,

    #[validate(required(message = "image는 필수입니다"))]
    #[validate(length(min = 1, message = "image는 비어 있을 수 없습니다"))]
    pub image: Option<String>,

    #[validate(required(message = "link는 필수입니다"))]
    #[validate(length(min = 1, message = "link는 비어 있을 수 없습니다"))]
    pub link: Option<String>,
}

impl CreateBannerRequest {
    /// 검증된 요청을 배너 엔티티로 변환합니다.
    pub fn into_banner(self) -> AppResult<Banner> {
        Ok(Banner::new(
            required_field(self.title, "title")?,
            Some(required_field(self.subtitle, "subtitle")?),
            required_field(self.image, "image")?,
            Some(required_field(self.link, "link")?),
        ))
    }
}

/// 배너 수정 요청 DTO
///
/// 모든 필드가 선택이며, 제공된 필드만 부분 치환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBannerRequest {
    #[validate(length(min = 1, message = "title은 비어 있을 수 없습니다"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "subtitle은 비어 있을 수 없습니다"))]
    pub subtitle: Option<String>,

    #[validate(length(min = 1, message = "image는 비어 있을 수 없습니다"))]
    pub image: Option<String>,

    #[validate(length(min = 1, message = "link는 비어 있을 수 없습니다"))]
    pub link: Option<String>,
}

impl UpdateBannerRequest {
    /// 제공된 필드들을 `$set` 업데이트 문서로 변환합니다.
    ///
    /// `updatedAt`은 항상 갱신됩니다.
    pub fn into_update_document(self) -> Document {
        let mut update = Document::new();

        if let Some(title) = self.title {
            update.insert("title", title);
        }
        if let Some(subtitle) = self.subtitle {
            update.insert("subtitle", subtitle);
        }
        if let Some(image) = self.image {
            update.insert("image", image);
        }
        if let Some(link) = self.link {
            update.insert("link", link);
        }

        update.insert("updatedAt", DateTime::now());

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateBannerRequest {
        CreateBannerRequest {
            title: Some("Summer Sale".to_string()),
            subtitle: Some("Up to 50% off".to_string()),
            image: Some("https://example.com/sale.png".to_string()),
            link: Some("/category/summer".to_string()),
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_requires_all_four_fields() {
        for field in ["title", "subtitle", "image", "link"] {
            let mut request = valid_request();
            match field {
                "title" => request.title = None,
                "subtitle" => request.subtitle = None,
                "image" => request.image = None,
                "link" => request.link = None,
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
    fn test_into_banner_preserves_fields() {
        let banner = valid_request().into_banner().unwrap();

        assert_eq!(banner.title, "Summer Sale");
        assert_eq!(banner.subtitle.as_deref(), Some("Up to 50% off"));
        assert_eq!(banner.image, "https://example.com/sale.png");
        assert_eq!(banner.link.as_deref(), Some("/category/summer"));
    }

    #[test]
    fn test_partial_update_document() {
        let request = UpdateBannerRequest {
            title: Some("Winter Sale".to_string()),
            subtitle: None,
            image: None,
            link: None,
        };

        let update = request.into_update_document();

        assert_eq!(update.get_str("title").unwrap(), "Winter Sale");
        assert!(update.get("subtitle").is_none());
        assert!(update.get("updatedAt").is_some());
    }
}

//! Banner Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 프로모션 배너 엔티티
///
/// `banners` 컬렉션에 저장됩니다. 스키마 수준에서는 title과 image만
/// 필수이고 subtitle/link는 선택입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 배너 제목
    pub title: String,
    /// 부제목
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// 배너 이미지 URL
    pub image: String,
    /// 이동 링크 (예: "Shop Now" 또는 카테고리 링크)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Banner {
    /// 새 배너 엔티티를 생성합니다. ID는 저장소가 할당합니다.
    pub fn new(title: String, subtitle: Option<String>, image: String, link: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            subtitle,
            image,
            link,
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
    fn test_new_banner_preserves_fields() {
        let banner = Banner::new(
            "Summer Sale".to_string(),
            Some("Up to 50% off".to_string()),
            "https://example.com/sale.png".to_string(),
            Some("/category/summer".to_string()),
        );

        assert_eq!(banner.title, "Summer Sale");
        assert_eq!(banner.subtitle.as_deref(), Some("Up to 50% off"));
        assert_eq!(banner.image, "https://example.com/sale.png");
        assert_eq!(banner.link.as_deref(), Some("/category/summer"));
        assert_eq!(banner.created_at, banner.updated_at);
    }
}

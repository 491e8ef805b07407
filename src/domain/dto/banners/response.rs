//! 배너 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::banner::Banner;

/// 배너 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Banner> for BannerResponse {
    fn from(banner: Banner) -> Self {
        Self {
            id: banner.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: banner.title,
            subtitle: banner.subtitle,
            image: banner.image,
            link: banner.link,
            created_at: banner.created_at,
            updated_at: banner.updated_at,
        }
    }
}

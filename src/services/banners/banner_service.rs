//! # 배너 서비스 구현
//!
//! 배너 CRUD의 비즈니스 로직 계층입니다.

use std::any::Any;
use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::banners::request::{CreateBannerRequest, UpdateBannerRequest};
use crate::domain::dto::banners::response::BannerResponse;
use crate::repositories::banners::banner_repo::BannerRepository;

/// 배너 비즈니스 로직 서비스
pub struct BannerService {
    /// 배너 데이터 액세스 리포지토리
    banner_repo: Arc<BannerRepository>,
}

impl BannerService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<BannerService>()
    }

    fn new() -> Self {
        Self {
            banner_repo: BannerRepository::instance(),
        }
    }

    /// 레지스트리 등록용 생성자
    fn construct() -> Box<dyn Any + Send + Sync> {
        Box::new(Arc::new(Self::new()))
    }

    /// 전체 배너 목록 조회
    pub async fn list_banners(&self) -> AppResult<Vec<BannerResponse>> {
        let banners = self.banner_repo.find_all().await?;

        Ok(banners.into_iter().map(BannerResponse::from).collect())
    }

    /// ID로 배너 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 배너가 존재하지 않음
    pub async fn get_banner(&self, id: &str) -> AppResult<BannerResponse> {
        let banner = self.banner_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("배너를 찾을 수 없습니다".to_string()))?;

        Ok(BannerResponse::from(banner))
    }

    /// 새 배너 생성
    pub async fn create_banner(&self, request: CreateBannerRequest) -> AppResult<BannerResponse> {
        let banner = request.into_banner()?;
        let created = self.banner_repo.create(banner).await?;

        log::info!("배너 생성됨: {}", created.id_string().unwrap_or_default());

        Ok(BannerResponse::from(created))
    }

    /// 배너 부분 수정
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 배너가 존재하지 않음
    pub async fn update_banner(
        &self,
        id: &str,
        request: UpdateBannerRequest,
    ) -> AppResult<BannerResponse> {
        let update = request.into_update_document();

        let updated = self.banner_repo
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("배너를 찾을 수 없습니다".to_string()))?;

        Ok(BannerResponse::from(updated))
    }

    /// 배너 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 배너가 존재하지 않음
    pub async fn delete_banner(&self, id: &str) -> AppResult<()> {
        let deleted = self.banner_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("배너를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}

impl Service for BannerService {
    fn name(&self) -> &str {
        "banner_service"
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "banner_service",
        constructor: BannerService::construct,
    }
}

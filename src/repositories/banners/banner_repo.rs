//! # 배너 리포지토리 구현
//!
//! 배너 엔티티의 데이터 액세스 계층입니다. `banners` 컬렉션에 대한
//! CRUD 연산을 담당합니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use futures_util::future::BoxFuture;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::banner::Banner;

const COLLECTION: &str = "banners";

/// 배너 데이터 액세스 리포지토리
pub struct BannerRepository;

impl BannerRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<BannerRepository>()
    }

    fn new() -> Self {
        Self
    }

    /// 레지스트리 등록용 생성자
    fn construct() -> Box<dyn Any + Send + Sync> {
        Box::new(Arc::new(Self::new()))
    }

    /// 레지스트리 등록용 초기화 훅
    fn init_boxed() -> BoxFuture<'static, AppResult<()>> {
        Box::pin(async { BannerRepository::instance().init().await })
    }

    /// 공유 연결을 보장한 뒤 컬렉션 핸들을 반환합니다.
    async fn collection(&self) -> AppResult<Collection<Banner>> {
        Ok(Database::shared().await?.collection::<Banner>(COLLECTION))
    }

    /// 모든 배너 조회
    pub async fn find_all(&self) -> AppResult<Vec<Banner>> {
        let cursor = self.collection().await?
            .find(doc! {})
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch banners: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to collect banners: {}", e)))
    }

    /// ID로 배너 조회
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Banner>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection().await?
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch banner: {}", e)))
    }

    /// 새 배너 저장
    pub async fn create(&self, mut banner: Banner) -> AppResult<Banner> {
        let result = self.collection().await?
            .insert_one(&banner)
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to insert banner: {}", e)))?;

        banner.id = Some(
            result.inserted_id.as_object_id().ok_or_else(|| {
                AppError::OperationFailed("Store returned a non-ObjectId identifier".to_string())
            })?,
        );

        Ok(banner)
    }

    /// 배너 부분 업데이트
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Banner))` - 업데이트된 배너
    /// * `Ok(None)` - 해당 ID의 배너가 존재하지 않음
    pub async fn update(&self, id: &str, update: Document) -> AppResult<Option<Banner>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection().await?
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to update banner: {}", e)))
    }

    /// 배너 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 배너가 삭제됨
    /// * `Ok(false)` - 해당 ID의 배너가 존재하지 않음 (멱등 no-op)
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection().await?
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to delete banner: {}", e)))?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for BannerRepository {
    fn name(&self) -> &str {
        "banner_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        // 배너 컬렉션은 작고 전체 조회만 하므로 별도 인덱스가 없다
        self.collection().await?;
        Ok(())
    }
}

inventory::submit! {
    RepositoryRegistration {
        name: "banner_repository",
        constructor: BannerRepository::construct,
        init: BannerRepository::init_boxed,
    }
}

//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. `users` 컬렉션에 대한
//! 연산을 담당하며, 이메일 유니크 인덱스를 관리합니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use futures_util::future::BoxFuture;
use mongodb::{Collection, IndexModel};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::user::User;

const COLLECTION: &str = "users";

/// 사용자 데이터 액세스 리포지토리
pub struct UserRepository;

impl UserRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<UserRepository>()
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
        Box::pin(async { UserRepository::instance().init().await })
    }

    /// 공유 연결을 보장한 뒤 컬렉션 핸들을 반환합니다.
    async fn collection(&self) -> AppResult<Collection<User>> {
        Ok(Database::shared().await?.collection::<User>(COLLECTION))
    }

    /// 이메일 주소로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection().await?
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch user: {}", e)))
    }

    /// 모든 사용자 조회
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection().await?
            .find(doc! {})
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch users: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to collect users: {}", e)))
    }

    /// 새 사용자 저장
    pub async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().await?
            .insert_one(&user)
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to insert user: {}", e)))?;

        user.id = Some(
            result.inserted_id.as_object_id().ok_or_else(|| {
                AppError::OperationFailed("Store returned a non-ObjectId identifier".to_string())
            })?,
        );

        Ok(user)
    }

    /// 사용자 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 사용자가 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection().await?
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to delete user: {}", e)))?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    async fn init(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        self.collection().await?
            .create_index(index)
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to create user index: {}", e)))?;

        Ok(())
    }
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: UserRepository::construct,
        init: UserRepository::init_boxed,
    }
}

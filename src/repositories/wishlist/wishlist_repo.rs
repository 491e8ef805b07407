//! # 위시리스트 리포지토리 구현
//!
//! `wishlist` 컬렉션에 대한 데이터 액세스 계층입니다. 엔트리는
//! (userId, productId) 쌍으로 식별되며, 같은 쌍의 중복 삽입은
//! 유니크 인덱스가 차단합니다. 중복 키 에러는 실패가 아니라
//! "이미 존재함" 신호로 보고됩니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use futures_util::future::BoxFuture;
use mongodb::{Collection, IndexModel};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{Error, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::wishlist::WishlistEntry;

const COLLECTION: &str = "wishlist";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 위시리스트 데이터 액세스 리포지토리
pub struct WishlistRepository;

impl WishlistRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<WishlistRepository>()
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
        Box::pin(async { WishlistRepository::instance().init().await })
    }

    /// 공유 연결을 보장한 뒤 컬렉션 핸들을 반환합니다.
    async fn collection(&self) -> AppResult<Collection<WishlistEntry>> {
        Ok(Database::shared().await?.collection::<WishlistEntry>(COLLECTION))
    }

    /// 모든 위시리스트 엔트리 조회
    pub async fn find_all(&self) -> AppResult<Vec<WishlistEntry>> {
        let cursor = self.collection().await?
            .find(doc! {})
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch wishlist: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to collect wishlist entries: {}", e)))
    }

    /// (userId, productId) 엔트리 조회
    pub async fn find_entry(
        &self,
        user_id: &str,
        product_id: ObjectId,
    ) -> AppResult<Option<WishlistEntry>> {
        self.collection().await?
            .find_one(doc! { "userId": user_id, "productId": product_id })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch wishlist entry: {}", e)))
    }

    /// 새 엔트리 삽입 시도
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(WishlistEntry))` - 삽입 성공, ID가 채워진 엔트리
    /// * `Ok(None)` - 같은 (userId, productId) 엔트리가 이미 존재함
    ///   (유니크 인덱스의 중복 키 거부, 경쟁 삽입 포함)
    pub async fn try_insert(&self, mut entry: WishlistEntry) -> AppResult<Option<WishlistEntry>> {
        let result = self.collection().await?.insert_one(&entry).await;

        match result {
            Ok(inserted) => {
                entry.id = Some(
                    inserted.inserted_id.as_object_id().ok_or_else(|| {
                        AppError::OperationFailed("Store returned a non-ObjectId identifier".to_string())
                    })?,
                );
                Ok(Some(entry))
            }
            Err(error) if is_duplicate_key_error(&error) => Ok(None),
            Err(error) => Err(AppError::OperationFailed(format!(
                "Failed to insert wishlist entry: {}",
                error
            ))),
        }
    }

    /// (userId, productId) 엔트리 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 엔트리가 삭제됨
    /// * `Ok(false)` - 해당 엔트리가 존재하지 않음 (멱등 no-op)
    pub async fn delete_entry(&self, user_id: &str, product_id: ObjectId) -> AppResult<bool> {
        let result = self.collection().await?
            .delete_one(doc! { "userId": user_id, "productId": product_id })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to delete wishlist entry: {}", e)))?;

        Ok(result.deleted_count > 0)
    }
}

/// 유니크 인덱스 위반으로 인한 쓰기 실패인지 확인합니다.
fn is_duplicate_key_error(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

#[async_trait]
impl Repository for WishlistRepository {
    fn name(&self) -> &str {
        "wishlist_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    /// (userId, productId) 유니크 인덱스를 생성합니다.
    async fn init(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "userId": 1, "productId": 1 })
            .options(options)
            .build();

        self.collection().await?
            .create_index(index)
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to create wishlist index: {}", e)))?;

        Ok(())
    }
}

inventory::submit! {
    RepositoryRegistration {
        name: "wishlist_repository",
        constructor: WishlistRepository::construct,
        init: WishlistRepository::init_boxed,
    }
}

//! # 상품 리포지토리 구현
//!
//! 상품 엔티티의 데이터 액세스 계층입니다. `products` 컬렉션에 대한
//! 모든 MongoDB 연산을 담당하며, 각 연산은 연결 관리자를 통해
//! 프로세스 공유 연결 핸들을 획득합니다.
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `AppResult<T>`를 반환합니다:
//!
//! - **ValidationError**: 잘못된 ObjectId 형식
//! - **ConfigurationError / ConnectionError**: 연결 관리자에서 그대로 전파
//! - **OperationFailed**: 그 외 드라이버/저장소 수준 실패
//!
//! "레코드 없음"은 에러가 아니라 `Ok(None)` / `Ok(false)`로 보고되며,
//! 서비스 계층이 이를 `NotFound`로 변환합니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use futures_util::future::BoxFuture;
use mongodb::{Collection, IndexModel};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::product::Product;

const COLLECTION: &str = "products";

/// 상품 데이터 액세스 리포지토리
///
/// 싱글톤으로 관리됩니다. 연결 핸들은 보관하지 않고 연산마다
/// [`Database::shared`]를 통해 획득하므로, 저장소가 설정되지 않은
/// 환경에서도 리포지토리 생성은 실패하지 않습니다.
pub struct ProductRepository;

impl ProductRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<ProductRepository>()
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
        Box::pin(async { ProductRepository::instance().init().await })
    }

    /// 공유 연결을 보장한 뒤 컬렉션 핸들을 반환합니다.
    async fn collection(&self) -> AppResult<Collection<Product>> {
        Ok(Database::shared().await?.collection::<Product>(COLLECTION))
    }

    /// 모든 상품 조회
    pub async fn find_all(&self) -> AppResult<Vec<Product>> {
        let cursor = self.collection().await?
            .find(doc! {})
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch products: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to collect products: {}", e)))
    }

    /// ID로 상품 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Product))` - 상품을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 상품이 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Product>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection().await?
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch product: {}", e)))
    }

    /// ID 목록으로 상품 일괄 조회
    ///
    /// 장바구니/위시리스트 조인에 사용됩니다. 존재하지 않는 ID는
    /// 결과에서 빠질 뿐 에러가 아닙니다.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection().await?
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch products: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to collect products: {}", e)))
    }

    /// 새 상품 저장
    ///
    /// 저장소가 할당한 ID를 채워서 반환합니다.
    pub async fn create(&self, mut product: Product) -> AppResult<Product> {
        let result = self.collection().await?
            .insert_one(&product)
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to insert product: {}", e)))?;

        product.id = Some(
            result.inserted_id.as_object_id().ok_or_else(|| {
                AppError::OperationFailed("Store returned a non-ObjectId identifier".to_string())
            })?,
        );

        Ok(product)
    }

    /// 상품 부분 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 변경하고 갱신된 문서를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Product))` - 업데이트된 상품
    /// * `Ok(None)` - 해당 ID의 상품이 존재하지 않음
    pub async fn update(&self, id: &str, update: Document) -> AppResult<Option<Product>> {
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
            .map_err(|e| AppError::OperationFailed(format!("Failed to update product: {}", e)))
    }

    /// 상품 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 상품이 삭제됨
    /// * `Ok(false)` - 해당 ID의 상품이 존재하지 않음 (멱등 no-op)
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection().await?
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to delete product: {}", e)))?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for ProductRepository {
    fn name(&self) -> &str {
        "product_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    /// 목록 조회용 createdAt 내림차순 인덱스를 생성합니다.
    async fn init(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .build();

        self.collection().await?
            .create_index(index)
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to create product index: {}", e)))?;

        Ok(())
    }
}

inventory::submit! {
    RepositoryRegistration {
        name: "product_repository",
        constructor: ProductRepository::construct,
        init: ProductRepository::init_boxed,
    }
}

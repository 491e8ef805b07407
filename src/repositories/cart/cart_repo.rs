//! # 장바구니 리포지토리 구현
//!
//! `cart` 컬렉션에 대한 데이터 액세스 계층입니다. 라인은
//! (userId, productId) 쌍으로 식별되며, 담기 연산은 읽기-후-쓰기가 아닌
//! 단일 원자적 upsert로 수행됩니다. 같은 쌍에 대한 동시 담기 요청이
//! 각각 "라인 없음"을 관찰하고 중복 라인을 만들어내는 경쟁은 이 설계와
//! (userId, productId) 유니크 인덱스로 차단됩니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use futures_util::future::BoxFuture;
use mongodb::{Collection, IndexModel};
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::cart::CartLine;

const COLLECTION: &str = "cart";

/// 장바구니 데이터 액세스 리포지토리
pub struct CartRepository;

impl CartRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<CartRepository>()
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
        Box::pin(async { CartRepository::instance().init().await })
    }

    /// 공유 연결을 보장한 뒤 컬렉션 핸들을 반환합니다.
    async fn collection(&self) -> AppResult<Collection<CartLine>> {
        Ok(Database::shared().await?.collection::<CartLine>(COLLECTION))
    }

    /// 모든 장바구니 라인 조회
    pub async fn find_all(&self) -> AppResult<Vec<CartLine>> {
        let cursor = self.collection().await?
            .find(doc! {})
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to fetch cart: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to collect cart lines: {}", e)))
    }

    /// 장바구니 라인 원자적 upsert
    ///
    /// (userId, productId) 라인이 있으면 quantity를 `$inc`로 증가시키고,
    /// 없으면 요청된 수량으로 새 라인을 삽입합니다. 조회와 쓰기가 한 번의
    /// `findOneAndUpdate`로 수행되므로 동시 요청이 중복 라인을 만들 수
    /// 없습니다. 갱신된 라인을 반환합니다.
    pub async fn upsert_line(
        &self,
        user_id: &str,
        product_id: ObjectId,
        quantity: i32,
    ) -> AppResult<CartLine> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        self.collection().await?
            .find_one_and_update(
                doc! { "userId": user_id, "productId": product_id },
                upsert_update_document(quantity, DateTime::now()),
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to add to cart: {}", e)))?
            .ok_or_else(|| AppError::OperationFailed("Cart upsert returned no document".to_string()))
    }

    /// (userId, productId) 라인 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 라인이 삭제됨
    /// * `Ok(false)` - 해당 라인이 존재하지 않음 (멱등 no-op)
    pub async fn delete_line(&self, user_id: &str, product_id: ObjectId) -> AppResult<bool> {
        let result = self.collection().await?
            .delete_one(doc! { "userId": user_id, "productId": product_id })
            .await
            .map_err(|e| AppError::OperationFailed(format!("Failed to delete cart line: {}", e)))?;

        Ok(result.deleted_count > 0)
    }
}

/// upsert에 사용되는 업데이트 문서를 구성합니다.
///
/// - `$inc`는 기존 라인의 quantity를 증가시키고, 삽입되는 새 라인에서는
///   요청 수량 그 자체가 된다
/// - `createdAt`은 삽입 시에만 설정되고 이후 변경되지 않는다
/// - `updatedAt`은 매 성공적인 변경마다 갱신된다
/// - userId/productId는 필터의 동등 조건에서 자동으로 채워진다
fn upsert_update_document(quantity: i32, now: DateTime) -> Document {
    doc! {
        "$inc": { "quantity": quantity },
        "$set": { "updatedAt": now },
        "$setOnInsert": { "createdAt": now },
    }
}

#[async_trait]
impl Repository for CartRepository {
    fn name(&self) -> &str {
        "cart_repository"
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
            .map_err(|e| AppError::OperationFailed(format!("Failed to create cart index: {}", e)))?;

        Ok(())
    }
}

inventory::submit! {
    RepositoryRegistration {
        name: "cart_repository",
        constructor: CartRepository::construct,
        init: CartRepository::init_boxed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_document_increments_and_stamps() {
        let now = DateTime::now();
        let update = upsert_update_document(3, now);

        let inc = update.get_document("$inc").unwrap();
        assert_eq!(inc.get_i32("quantity").unwrap(), 3);

        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_datetime("updatedAt").unwrap(), &now);

        let set_on_insert = update.get_document("$setOnInsert").unwrap();
        assert_eq!(set_on_insert.get_datetime("createdAt").unwrap(), &now);
    }

    #[test]
    fn test_upsert_document_never_touches_identifier() {
        let update = upsert_update_document(1, DateTime::now());

        for (_, section) in update.iter() {
            let section = section.as_document().unwrap();
            assert!(section.get("_id").is_none());
        }
    }
}

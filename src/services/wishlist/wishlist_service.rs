//! # 위시리스트 서비스 구현
//!
//! 위시리스트 비즈니스 로직 계층입니다. "이미 존재함"과 "삭제 대상 없음"은
//! 에러가 아니라 [`MutationStatus`] 플래그를 실은 성공 결과로 보고합니다.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::required_field;
use crate::domain::dto::wishlist::request::{AddWishlistEntryRequest, RemoveWishlistEntryRequest};
use crate::domain::dto::wishlist::response::WishlistEntryResponse;
use crate::domain::models::outcome::{MutationOutcome, MutationStatus};
use crate::domain::entities::wishlist::WishlistEntry;
use crate::repositories::products::product_repo::ProductRepository;
use crate::repositories::wishlist::wishlist_repo::WishlistRepository;

/// 위시리스트 비즈니스 로직 서비스
pub struct WishlistService {
    /// 위시리스트 데이터 액세스 리포지토리
    wishlist_repo: Arc<WishlistRepository>,
    /// 조인용 상품 리포지토리
    product_repo: Arc<ProductRepository>,
}

impl WishlistService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<WishlistService>()
    }

    fn new() -> Self {
        Self {
            wishlist_repo: WishlistRepository::instance(),
            product_repo: ProductRepository::instance(),
        }
    }

    /// 레지스트리 등록용 생성자
    fn construct() -> Box<dyn Any + Send + Sync> {
        Box::new(Arc::new(Self::new()))
    }

    /// 위시리스트 전체 조회 (상품 조인 포함)
    ///
    /// 각 엔트리에 참조 상품을 조인하고 상품 식별자를 엔트리에 다시
    /// 투영합니다. 참조하던 상품이 삭제된 엔트리는 조회를 실패시키지 않고
    /// `product: null`로 내려갑니다.
    pub async fn get_wishlist(&self) -> AppResult<Vec<WishlistEntryResponse>> {
        let entries = self.wishlist_repo.find_all().await?;

        let product_ids: Vec<ObjectId> = entries.iter().map(|entry| entry.product_id).collect();
        let products = self.product_repo.find_by_ids(&product_ids).await?;

        let mut by_id: HashMap<ObjectId, _> = HashMap::new();
        for product in products {
            if let Some(id) = product.id {
                by_id.insert(id, product);
            }
        }

        Ok(entries
            .into_iter()
            .map(|entry| {
                let product = by_id.get(&entry.product_id).cloned();
                WishlistEntryResponse::from_join(entry, product)
            })
            .collect())
    }

    /// 위시리스트 추가
    ///
    /// # 반환값
    ///
    /// * `MutationStatus::Created` - 새 엔트리가 생성됨 (응답에 엔트리 포함)
    /// * `MutationStatus::AlreadyExists` - 같은 (userId, productId) 엔트리가
    ///   이미 있어 아무것도 생성하지 않음. 사전 조회가 놓친 경쟁 삽입도
    ///   유니크 인덱스의 중복 키 거부를 통해 같은 결과로 수렴합니다.
    pub async fn add_entry(
        &self,
        request: AddWishlistEntryRequest,
    ) -> AppResult<MutationOutcome<WishlistEntryResponse>> {
        let user_id = required_field(request.user_id, "userId")?;
        let product_id = parse_product_id(&required_field(request.product_id, "productId")?)?;

        if self.wishlist_repo.find_entry(&user_id, product_id).await?.is_some() {
            return Ok(MutationOutcome::already_exists());
        }

        let entry = WishlistEntry::new(user_id, product_id);

        match self.wishlist_repo.try_insert(entry).await? {
            Some(created) => {
                let product = self.product_repo
                    .find_by_ids(&[product_id])
                    .await?
                    .into_iter()
                    .next();

                Ok(MutationOutcome::created(WishlistEntryResponse::from_join(created, product)))
            }
            None => Ok(MutationOutcome::already_exists()),
        }
    }

    /// 위시리스트 엔트리 제거
    ///
    /// 존재하지 않는 엔트리 제거는 에러가 아니라 `NotFound` 소프트 결과이며,
    /// 저장소 상태는 변하지 않습니다.
    pub async fn remove_entry(
        &self,
        request: RemoveWishlistEntryRequest,
    ) -> AppResult<MutationStatus> {
        let user_id = required_field(request.user_id, "userId")?;
        let product_id = parse_product_id(&required_field(request.product_id, "productId")?)?;

        let deleted = self.wishlist_repo.delete_entry(&user_id, product_id).await?;

        Ok(if deleted {
            MutationStatus::Removed
        } else {
            MutationStatus::NotFound
        })
    }
}

/// 상품 식별자 문자열을 ObjectId로 파싱합니다.
fn parse_product_id(product_id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(product_id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 productId 형식입니다".to_string()))
}

impl Service for WishlistService {
    fn name(&self) -> &str {
        "wishlist_service"
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "wishlist_service",
        constructor: WishlistService::construct,
    }
}

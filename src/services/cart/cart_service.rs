//! # 장바구니 서비스 구현
//!
//! 장바구니 비즈니스 로직 계층입니다. 담기는 리포지토리의 원자적
//! upsert에 위임하고, 조회는 라인들을 참조 상품과 조인해 반환합니다.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::cart::request::{AddCartLineRequest, RemoveCartLineRequest};
use crate::domain::dto::cart::response::CartLineResponse;
use crate::domain::dto::required_field;
use crate::domain::models::outcome::MutationStatus;
use crate::repositories::cart::cart_repo::CartRepository;
use crate::repositories::products::product_repo::ProductRepository;

/// 장바구니 비즈니스 로직 서비스
pub struct CartService {
    /// 장바구니 데이터 액세스 리포지토리
    cart_repo: Arc<CartRepository>,
    /// 조인용 상품 리포지토리
    product_repo: Arc<ProductRepository>,
}

impl CartService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<CartService>()
    }

    fn new() -> Self {
        Self {
            cart_repo: CartRepository::instance(),
            product_repo: ProductRepository::instance(),
        }
    }

    /// 레지스트리 등록용 생성자
    fn construct() -> Box<dyn Any + Send + Sync> {
        Box::new(Arc::new(Self::new()))
    }

    /// 장바구니 전체 조회 (상품 조인 포함)
    ///
    /// 각 라인에 참조 상품 정보를 붙여 반환합니다. 참조하던 상품이
    /// 삭제된 라인은 조회를 실패시키지 않고 `product: null`로 내려갑니다.
    pub async fn get_cart(&self) -> AppResult<Vec<CartLineResponse>> {
        let lines = self.cart_repo.find_all().await?;

        let product_ids: Vec<ObjectId> = lines.iter().map(|line| line.product_id).collect();
        let products = self.product_repo.find_by_ids(&product_ids).await?;

        let mut by_id: HashMap<ObjectId, _> = HashMap::new();
        for product in products {
            if let Some(id) = product.id {
                by_id.insert(id, product);
            }
        }

        Ok(lines
            .into_iter()
            .map(|line| {
                let product = by_id.get(&line.product_id).cloned();
                CartLineResponse::from_join(line, product)
            })
            .collect())
    }

    /// 장바구니 담기
    ///
    /// (userId, productId) 라인이 이미 있으면 수량을 요청량만큼 증가시키고,
    /// 없으면 요청량(기본 1)으로 새 라인을 만듭니다. 갱신된 라인을 상품
    /// 정보와 함께 반환합니다.
    pub async fn add_line(&self, request: AddCartLineRequest) -> AppResult<CartLineResponse> {
        let quantity = request.quantity_or_default();
        let user_id = required_field(request.user_id, "userId")?;
        let product_id = parse_product_id(&required_field(request.product_id, "productId")?)?;

        let line = self.cart_repo.upsert_line(&user_id, product_id, quantity).await?;

        let product = self.product_repo
            .find_by_ids(&[product_id])
            .await?
            .into_iter()
            .next();

        Ok(CartLineResponse::from_join(line, product))
    }

    /// 장바구니 라인 제거
    ///
    /// 존재하지 않는 라인 제거는 에러가 아니라 `NotFound` 소프트 결과이며,
    /// 저장소 상태는 변하지 않습니다.
    pub async fn remove_line(&self, request: RemoveCartLineRequest) -> AppResult<MutationStatus> {
        let user_id = required_field(request.user_id, "userId")?;
        let product_id = parse_product_id(&required_field(request.product_id, "productId")?)?;

        let deleted = self.cart_repo.delete_line(&user_id, product_id).await?;

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

impl Service for CartService {
    fn name(&self) -> &str {
        "cart_service"
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "cart_service",
        constructor: CartService::construct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id_accepts_hex() {
        let id = ObjectId::new();
        assert_eq!(parse_product_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_product_id_rejects_garbage() {
        assert!(matches!(
            parse_product_id("not-an-object-id"),
            Err(AppError::ValidationError(_))
        ));
    }
}

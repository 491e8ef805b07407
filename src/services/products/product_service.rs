//! # 상품 서비스 구현
//!
//! 상품 CRUD의 비즈니스 로직 계층입니다. 요청 DTO를 엔티티로 변환하고,
//! 리포지토리의 "레코드 없음" 신호를 `NotFound`로, 인프라 실패를
//! `OperationFailed`로 구분해 전파합니다.

use std::any::Any;
use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::products::request::{CreateProductRequest, UpdateProductRequest};
use crate::domain::dto::products::response::ProductResponse;
use crate::repositories::products::product_repo::ProductRepository;

/// 상품 비즈니스 로직 서비스
pub struct ProductService {
    /// 상품 데이터 액세스 리포지토리
    product_repo: Arc<ProductRepository>,
}

impl ProductService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<ProductService>()
    }

    fn new() -> Self {
        Self {
            product_repo: ProductRepository::instance(),
        }
    }

    /// 레지스트리 등록용 생성자
    fn construct() -> Box<dyn Any + Send + Sync> {
        Box::new(Arc::new(Self::new()))
    }

    /// 전체 상품 목록 조회
    pub async fn list_products(&self) -> AppResult<Vec<ProductResponse>> {
        let products = self.product_repo.find_all().await?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// ID로 상품 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 상품이 존재하지 않음
    pub async fn get_product(&self, id: &str) -> AppResult<ProductResponse> {
        let product = self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("상품을 찾을 수 없습니다".to_string()))?;

        Ok(ProductResponse::from(product))
    }

    /// 새 상품 생성
    ///
    /// 검증된 요청을 엔티티로 변환해 저장하고, 할당된 ID가 포함된
    /// 응답을 반환합니다.
    pub async fn create_product(&self, request: CreateProductRequest) -> AppResult<ProductResponse> {
        let product = request.into_product()?;
        let created = self.product_repo.create(product).await?;

        log::info!("상품 생성됨: {}", created.id_string().unwrap_or_default());

        Ok(ProductResponse::from(created))
    }

    /// 상품 부분 수정
    ///
    /// 제공된 필드만 치환하며 `updatedAt`을 갱신합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 상품이 존재하지 않음
    pub async fn update_product(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> AppResult<ProductResponse> {
        let update = request.into_update_document()?;

        let updated = self.product_repo
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("상품을 찾을 수 없습니다".to_string()))?;

        Ok(ProductResponse::from(updated))
    }

    /// 상품 삭제
    ///
    /// 저장소 상태 기준으로 멱등합니다. 이미 삭제된 상품을 다시 삭제하면
    /// 상태는 변하지 않고 `NotFound`가 보고됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 상품이 존재하지 않음
    pub async fn delete_product(&self, id: &str) -> AppResult<()> {
        let deleted = self.product_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("상품을 찾을 수 없습니다".to_string()));
        }

        log::info!("상품 삭제됨: {}", id);

        Ok(())
    }
}

impl Service for ProductService {
    fn name(&self) -> &str {
        "product_service"
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "product_service",
        constructor: ProductService::construct,
    }
}

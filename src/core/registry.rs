//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 서비스/리포지토리 계층을 위한 싱글톤 컨테이너입니다. Spring의
//! ApplicationContext가 하는 역할을 Rust의 타입 시스템 위에서 수행하며,
//! 각 타입당 정확히 하나의 인스턴스를 지연 생성하여 재사용합니다.
//!
//! ## 구성 요소
//!
//! - **ServiceLocator**: 전역 싱글톤 컨테이너. `TypeId` 기반 인스턴스 캐시와
//!   순환 참조 감지를 제공합니다.
//! - **등록 정보**: 각 서비스/리포지토리 모듈이 `inventory::submit!`으로
//!   제출하는 [`ServiceRegistration`]/[`RepositoryRegistration`].
//!   컴파일 타임에 수집되어 첫 조회 시 이름 캐시로 구성됩니다.
//! - **초기화**: [`ServiceLocator::initialize_all`]이 애플리케이션 시작 시
//!   모든 인스턴스를 생성하고, 리포지토리의 `init()` 훅(컬렉션 인덱스 생성)을
//!   실행합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::registry::{RepositoryRegistration, ServiceLocator};
//!
//! impl ProductRepository {
//!     pub fn instance() -> Arc<Self> {
//!         ServiceLocator::get::<ProductRepository>()
//!     }
//! }
//!
//! inventory::submit! {
//!     RepositoryRegistration {
//!         name: "product_repository",
//!         constructor: ProductRepository::construct,
//!         init: ProductRepository::init_boxed,
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use once_cell::sync::Lazy;
use crate::core::errors::AppResult;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 레지스트리에 등록되는 모든 서비스가 구현합니다.
pub trait Service: Send + Sync {
    /// 레지스트리에서 서비스를 식별하는 고유 이름을 반환합니다.
    fn name(&self) -> &str;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// 레지스트리에 등록되는 모든 리포지토리가 구현합니다.
/// `init()`은 초기화 시점에 한 번 호출되어 인덱스 생성 등
/// 컬렉션 수준의 준비 작업을 수행합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 레지스트리에서 리포지토리를 식별하는 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 컬렉션 초기화 작업을 수행합니다 (인덱스 생성 등).
    ///
    /// 저장소가 아직 설정되지 않았거나 연결할 수 없으면 에러를 반환하며,
    /// 호출자는 이를 치명적이지 않은 것으로 다룰 수 있습니다.
    async fn init(&self) -> AppResult<()>;
}

/// 서비스 등록 정보
///
/// 각 서비스 모듈이 `inventory::submit!`으로 제출합니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용, `<entity>_service` 형식)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (`Box<Arc<T>>`를 반환)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
///
/// 서비스 등록 정보와 동일한 구조에, 시작 시 실행되는 비동기 초기화 훅이
/// 추가됩니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용, `<entity>_repository` 형식)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (`Box<Arc<T>>`를 반환)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
    /// 컬렉션 초기화 훅 (인덱스 생성)
    pub init: fn() -> BoxFuture<'static, AppResult<()>>,
}

// 컴파일 타임에 모든 등록 정보를 수집한다.
inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 등록정보 매핑 캐시
/// 첫 접근 시 한 번만 구성되며, 이후 O(1) 조회 제공
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<ServiceRegistration>() {
        cache.insert(extract_entity_name(registration.name), registration);
    }

    print_cache_initialized("Service", cache.len());
    cache
});

/// 리포지토리 이름 → 등록정보 매핑 캐시
/// 첫 접근 시 한 번만 구성되며, 이후 O(1) 조회 제공
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<RepositoryRegistration>() {
        cache.insert(extract_entity_name(registration.name), registration);
    }

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름에서 접미사를 제거하여 엔티티 이름으로 정규화합니다.
///
/// `product_repository` → `product`, `cart_service` → `cart` 형태로
/// 정규화하여 타입 이름과 매칭합니다.
fn extract_entity_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 싱글톤 의존성 주입 컨테이너
///
/// 전체 DI 시스템의 핵심입니다.
///
/// - **싱글톤 보장**: 각 타입당 정확히 하나의 인스턴스만 생성
/// - **지연 초기화**: 첫 요청 시점에 인스턴스 생성
/// - **Thread-safe**: `RwLock`을 사용한 동시성 안전성
/// - **순환 참조 방지**: 초기화 중인 타입을 추적하여 데드락 대신 즉시 실패
pub struct ServiceLocator {
    /// 생성된 인스턴스들의 캐시. `TypeId`를 키로 각 타입당 하나를 저장
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 초기화 중인 타입들 (순환 참조 방지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    /// 전역 Lazy static에서만 호출됩니다.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 1. 인스턴스 캐시 확인 (O(1))
    /// 2. 순환 참조 검사 (이미 생성 중인 타입이면 panic)
    /// 3. 타입 이름 분석 (`ProductRepository` → `product`)
    /// 4. 이름 캐시에서 등록 정보 조회 후 생성자 호출
    /// 5. 캐싱 및 반환
    ///
    /// # 패닉 상황
    ///
    /// 미등록 타입 요청, 순환 참조, 등록 타입 불일치는 설정 오류이므로
    /// 런타임에 조용히 넘어가지 않고 즉시 패닉으로 드러냅니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        // 이미 생성된 인스턴스 확인
        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance.clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        // 현재 초기화 중인지 확인 (순환 참조 방지)
        {
            let initializing = LOCATOR.initializing.read().unwrap();
            if initializing.contains(&type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            initializing.insert(type_id);
        }

        let instance = Self::construct::<T>(type_name);

        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            initializing.remove(&type_id);
        }

        instance
    }

    /// 등록 정보에서 인스턴스를 생성하고 캐시에 저장합니다.
    ///
    /// 생성자는 잠금을 쥐지 않은 상태에서 호출됩니다. 생성자가 자신의
    /// 의존성을 다시 `ServiceLocator::get`으로 해결하기 때문에, 잠금을 쥔
    /// 채 호출하면 같은 스레드에서 재진입 잠금이 됩니다.
    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let short_name = extract_short_type_name(type_name);

        let boxed_instance = if short_name.ends_with("Repository") {
            let entity_name = short_name
                .strip_suffix("Repository")
                .unwrap_or(&short_name)
                .to_lowercase();

            let registration = REPOSITORY_NAME_CACHE.get(&entity_name)
                .unwrap_or_else(|| panic!("No repository found for entity: {}", entity_name));
            (registration.constructor)()
        } else if short_name.ends_with("Service") {
            let entity_name = short_name
                .strip_suffix("Service")
                .unwrap_or(&short_name)
                .to_lowercase();

            let registration = SERVICE_NAME_CACHE.get(&entity_name)
                .unwrap_or_else(|| panic!("No service found for entity: {}", entity_name));
            (registration.constructor)()
        } else {
            panic!(
                "Service not found: {}. Make sure it's registered via inventory::submit! or manually with ServiceLocator::set()",
                type_name
            );
        };

        match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => {
                let mut instances = LOCATOR.instances.write().unwrap();

                // 동시에 생성한 다른 스레드가 있으면 먼저 등록된 쪽을 쓴다
                if let Some(existing) = instances.get(&type_id) {
                    return existing.clone()
                        .downcast::<T>()
                        .expect("Type mismatch in ServiceLocator");
                }

                let instance = (*arc_instance).clone();
                instances.insert(type_id, instance.clone() as Arc<dyn Any + Send + Sync>);
                instance
            }
            Err(_) => panic!("Type mismatch for registration: {}", type_name),
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 레지스트리로 관리되지 않는 인프라 컴포넌트를 수동으로 등록할 때
    /// 사용합니다. 같은 타입을 다시 등록하면 기존 인스턴스를 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        log::debug!("Registering: {}", extract_short_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 리포지토리와 서비스를 초기화합니다.
    ///
    /// 애플리케이션 시작 시 호출되어 등록된 모든 컴포넌트의 인스턴스를
    /// 미리 생성하고, 리포지토리의 컬렉션 초기화 훅(인덱스 생성)을
    /// 실행합니다. 데이터 계층이 비즈니스 계층보다 먼저 초기화됩니다.
    ///
    /// # Errors
    ///
    /// 리포지토리 초기화 훅이 실패하면 첫 번째 에러를 반환합니다.
    /// 저장소가 설정되지 않은 환경에서는 호출자가 이를 경고로 다루고
    /// 서비스를 계속 기동할 수 있습니다.
    pub async fn initialize_all() -> AppResult<()> {
        print_boxed_title("INITIALIZING SERVICE REGISTRY");

        // 1단계: 리포지토리 인스턴스 생성 + 컬렉션 초기화
        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();
        let mut init_result = Ok(());

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();

                match (registration.init)().await {
                    Ok(()) => print_sub_task(registration.name, "Created"),
                    Err(e) => {
                        print_sub_task(registration.name, "Created (init deferred)");
                        log::warn!("{} init failed: {}", registration.name, e);
                        if init_result.is_ok() {
                            init_result = Err(e);
                        }
                    }
                }
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        // 2단계: 서비스 인스턴스 생성
        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        init_result
    }
}

/// 전체 모듈 경로가 포함된 타입 이름에서 마지막 세그먼트만 추출합니다.
///
/// `shop_service_backend::repositories::products::ProductRepository` →
/// `ProductRepository`
fn extract_short_type_name(type_name: &str) -> String {
    match type_name.rfind("::") {
        Some(pos) => type_name[pos + 2..].to_string(),
        None => type_name.to_string(),
    }
}

/// 전역 서비스 로케이터 인스턴스
///
/// 첫 접근 시에만 초기화되며, 이후에는 동일한 인스턴스가 재사용됩니다.
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_entity_name() {
        assert_eq!(extract_entity_name("product_repository"), "product");
        assert_eq!(extract_entity_name("cart_service"), "cart");
        assert_eq!(extract_entity_name("wishlist"), "wishlist");
    }

    #[test]
    fn test_extract_short_type_name() {
        assert_eq!(
            extract_short_type_name("shop_service_backend::repositories::products::ProductRepository"),
            "ProductRepository"
        );
        assert_eq!(extract_short_type_name("BannerService"), "BannerService");
    }

    #[test]
    fn test_set_and_get_manual_registration() {
        struct Probe {
            value: u32,
        }

        ServiceLocator::set(Arc::new(Probe { value: 42 }));
        let probe = ServiceLocator::get::<Probe>();

        assert_eq!(probe.value, 42);
    }
}

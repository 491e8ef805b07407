//! # 사용자 서비스 구현
//!
//! 회원가입/로그인과 관리자용 사용자 관리의 비즈니스 로직 계층입니다.
//! 비밀번호는 환경별 cost로 bcrypt 해싱되며, 응답 DTO에는 해시가
//! 포함되지 않습니다.

use std::any::Any;
use std::sync::Arc;
use bcrypt::{hash, verify};
use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{LoginResponse, RegisterResponse, UserResponse};
use crate::domain::entities::user::User;
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 비즈니스 로직 서비스
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<UserService>()
    }

    fn new() -> Self {
        Self {
            user_repo: UserRepository::instance(),
        }
    }

    /// 레지스트리 등록용 생성자
    fn construct() -> Box<dyn Any + Send + Sync> {
        Box::new(Arc::new(Self::new()))
    }

    /// 새 사용자 계정 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이미 등록된 이메일
    /// * `AppError::OperationFailed` - 해싱 실패 또는 저장소 오류
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ValidationError("이미 등록된 이메일입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::OperationFailed(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.email, password_hash);
        let created = self.user_repo.create(user).await?;

        Ok(RegisterResponse {
            user: UserResponse::from(created),
            message: "사용자가 성공적으로 등록되었습니다".to_string(),
        })
    }

    /// 이메일/비밀번호 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 사용자가 없음
    /// * `AppError::AuthenticationError` - 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = self.user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let password_matches = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::OperationFailed(format!("비밀번호 검증 실패: {}", e)))?;

        if !password_matches {
            return Err(AppError::AuthenticationError("비밀번호가 올바르지 않습니다".to_string()));
        }

        Ok(LoginResponse {
            user: UserResponse::from(user),
            message: "로그인 성공".to_string(),
        })
    }

    /// 전체 사용자 목록 조회 (관리자용)
    ///
    /// 응답에는 비밀번호 해시가 포함되지 않습니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 삭제 (관리자용)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}

impl Service for UserService {
    fn name(&self) -> &str {
        "user_service"
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        constructor: UserService::construct,
    }
}

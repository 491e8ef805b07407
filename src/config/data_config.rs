//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;
use crate::core::errors::{AppError, AppResult};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT") {
            Ok(value) => Self::from_name(&value),
            Err(_) => Environment::Production,
        }
    }

    /// 환경 이름 문자열에서 Environment를 생성합니다 (대소문자 무관).
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// MongoDB 연결 설정
///
/// 연결 문자열은 필수입니다. 제공되지 않으면 저장소에 도달할 수 없다는
/// 의미이므로 `ConfigurationError`로 실패하며, 경계 계층에서
/// 503 Service Unavailable로 매핑됩니다.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI (`MONGODB_URI`)
    pub uri: String,
    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`, 기본값: "shop_dev")
    pub database_name: String,
}

impl DatabaseConfig {
    /// 환경 변수에서 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - `MONGODB_URI`가 설정되지 않은 경우
    pub fn from_env() -> AppResult<Self> {
        Self::resolve(env::var("MONGODB_URI").ok(), env::var("DATABASE_NAME").ok())
    }

    /// 원시 설정값에서 DatabaseConfig를 구성합니다.
    ///
    /// `from_env`와 분리되어 있어 프로세스 환경을 건드리지 않고
    /// 설정 해석을 검증할 수 있습니다.
    pub fn resolve(uri: Option<String>, database_name: Option<String>) -> AppResult<Self> {
        let uri = uri
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::ConfigurationError(
                "MONGODB_URI is not set. Please add it to your environment variables".to_string()
            ))?;

        let database_name = database_name
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "shop_dev".to_string());

        Ok(Self { uri, database_name })
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST` 환경 변수가 4-15 범위의 값으로 설정되어 있으면
    /// 그 값을 사용하고, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 주소를 반환합니다.
    ///
    /// `HOST`(기본값: "127.0.0.1")와 `PORT`(기본값: 8080)를 조합합니다.
    pub fn bind_address() -> String {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        format!("{}:{}", host, port)
    }

    /// HTTP 워커 스레드 수를 반환합니다 (`HTTP_WORKERS`, 기본값: 4).
    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("dev"), Environment::Development);
        assert_eq!(Environment::from_name("Development"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("staging"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_database_config_requires_uri() {
        let result = DatabaseConfig::resolve(None, Some("shop".to_string()));

        match result {
            Err(AppError::ConfigurationError(msg)) => {
                assert!(msg.contains("MONGODB_URI"));
            }
            other => panic!("Expected ConfigurationError, got {:?}", other.map(|c| c.uri)),
        }
    }

    #[test]
    fn test_database_config_rejects_blank_uri() {
        let result = DatabaseConfig::resolve(Some("   ".to_string()), None);

        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_database_config_defaults_database_name() {
        let config = DatabaseConfig::resolve(
            Some("mongodb://localhost:27017".to_string()),
            None,
        ).unwrap();

        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "shop_dev");
    }

    #[test]
    fn test_database_config_uses_explicit_name() {
        let config = DatabaseConfig::resolve(
            Some("mongodb://localhost:27017".to_string()),
            Some("storefront".to_string()),
        ).unwrap();

        assert_eq!(config.database_name, "storefront");
    }

    #[test]
    fn test_bcrypt_cost_for_env() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }
}

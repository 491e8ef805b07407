//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 설계 원칙
//!
//! - **환경 분리**: 개발/테스트/스테이징/프로덕션 환경별 설정값 제공
//! - **보안 우선**: 민감한 정보는 환경 변수로만 제공
//! - **검증 가능성**: 설정 해석 로직은 프로세스 환경과 분리되어 단위 테스트 가능
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, Environment, ServerConfig};
//!
//! let env = Environment::current();
//! let db_config = DatabaseConfig::from_env()?;
//! let bind_address = ServerConfig::bind_address();
//! ```

pub mod data_config;

pub use data_config::{DatabaseConfig, Environment, PasswordConfig, ServerConfig};

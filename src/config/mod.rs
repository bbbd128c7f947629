//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 데이터베이스, 저장소 백엔드 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, DatabaseConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let db = DatabaseConfig::from_env();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 데이터베이스 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_api_dev"
//! export USERS_COLLECTION="users"
//!
//! # 저장소 백엔드 (mongodb | memory)
//! export STORE_BACKEND="mongodb"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod data_config;

pub use data_config::*;

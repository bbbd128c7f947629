//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ### [`clock`] - 시간 공급자
//! - **Clock**: 현재 시각을 제공하는 트레이트
//! - **SystemClock**: 운영 환경용 실제 시계
//! - **ManualClock**: 테스트에서 시간을 직접 조작하는 시계
//!
//! ## 의존성 전달
//!
//! 저장소와 시계는 전역 싱글톤이 아니라 `main`에서 명시적으로 생성되어
//! [`UserService`](crate::services::users::UserService)에 주입됩니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::clock::SystemClock;
//!
//! let service = UserService::new(store, Arc::new(SystemClock));
//! App::new().app_data(web::Data::new(service));
//! ```

pub mod errors;
pub mod clock;

pub use errors::*;
pub use clock::*;

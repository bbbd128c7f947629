//! 사용자 관리 API 백엔드
//!
//! 단일 "user" 리소스에 대한 CRUD API를 제공하는 Rust 기반 서비스입니다.
//! 각 엔드포인트는 입력을 독립적으로 검증하고, 소수의 비즈니스 규칙을 적용한 뒤
//! 문서 저장소(MongoDB)에 대해 한 번의 작업만 수행합니다.
//!
//! # Features
//!
//! - **입력 검증**: 이름에 한글 음절 금지, 이메일에 `@` 필수
//! - **삭제 유예 기간**: 생성 후 1분이 지나야 삭제 가능
//! - **이름 기반 조회 해석**: 동일 이름이 여러 건이면 충돌(409)로 응답
//! - **교체 가능한 저장소**: MongoDB 또는 인메모리 저장소를 명시적으로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (메서드 강제, CORS)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 추출 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 유예 기간, 이름 해석
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore 트레이트 (MongoDB / 인메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_api_backend::core::clock::SystemClock;
//! use user_api_backend::repositories::users::InMemoryUserRepository;
//! use user_api_backend::services::users::UserService;
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(SystemClock),
//! );
//! let created = service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소와 시계를 생성자로 명시적으로 주입받으며,
//! 핸들러에는 `web::Data<UserService>`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::SystemClock;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(SystemClock),
//! );
//! ```

pub mod users;

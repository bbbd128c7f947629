//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아닌 [`UserStore`](users::UserStore) 트레이트에만 의존하며,
//! 실행 시점에 다음 구현 중 하나가 명시적으로 주입됩니다.
//!
//! - [`MongoUserRepository`](users::MongoUserRepository) - MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`](users::InMemoryUserRepository) - 프로세스 메모리
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let id = store.insert(&user).await?;
//! ```

pub mod users;

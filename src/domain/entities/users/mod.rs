//! Users Entity Module
//!
//! 사용자 도메인의 유일한 엔티티인 [`User`](user::User)를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new("Kim".to_string(), "kim@example.com".to_string(), Utc::now());
//! ```

pub mod user;

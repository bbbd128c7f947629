//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! | 엔드포인트 | 요청 DTO | 응답 DTO |
//! |-----------|----------|----------|
//! | create | `CreateUserRequest` | `CreateUserResponse` |
//! | get-by-name | `UserNameQuery` | `UserListResponse` |
//! | list | - | `UserListResponse` |
//! | update-email-by-id | `UpdateEmailByIdRequest` | `UpdateEmailResponse` |
//! | update-email-by-name | `UpdateEmailByNameRequest` | `UpdateEmailResponse` |
//! | delete-by-id | `UserIdQuery` | `DeleteUserResponse` |
//! | delete-by-name | `UserNameQuery` | `DeleteUserResponse` |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

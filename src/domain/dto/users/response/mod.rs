//! # 사용자 관련 응답 DTO 모듈
//!
//! 모든 성공 응답은 `success: true`와 `message`를 포함하며,
//! 작업별로 `userId`, `user`, `users` 등의 필드가 추가됩니다.
//! 타임스탬프는 저장소 표현과 무관하게 RFC 3339 UTC 문자열로 직렬화됩니다.
//!
//! ## JSON 응답 예제
//!
//! ### 생성 응답
//! ```json
//! {
//!   "success": true,
//!   "message": "사용자가 성공적으로 생성되었습니다",
//!   "userId": "665ae0b0c1f2a3b4c5d6e7f8",
//!   "user": {
//!     "id": "665ae0b0c1f2a3b4c5d6e7f8",
//!     "name": "Kim",
//!     "email": "kim@example.com",
//!     "createdAt": "2024-06-01T10:00:00Z",
//!     "updatedAt": "2024-06-01T10:00:00Z"
//!   }
//! }
//! ```
//!
//! ### 목록 응답
//! ```json
//! { "success": true, "message": "사용자 2명을 찾았습니다", "count": 2, "users": [ ... ] }
//! ```

pub mod user_response;

pub use user_response::{
    CreateUserResponse, DeleteUserResponse, UpdateEmailResponse, UserListResponse, UserResponse,
};

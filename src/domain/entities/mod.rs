//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! ## 문서 구조
//!
//! ```json
//! {
//!   "_id": ObjectId("665ae0b0c1f2a3b4c5d6e7f8"),
//!   "name": "Kim",
//!   "email": "kim@example.com",
//!   "createdAt": ISODate("2024-06-01T10:00:00Z"),
//!   "updatedAt": ISODate("2024-06-01T10:00:00Z")
//! }
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! - **ID는 저장소가 할당**: 클라이언트가 `_id`를 지정할 수 없습니다.
//! - **생성 시각 고정**: `createdAt`은 생성 후 변경되지 않습니다.
//! - **관대한 읽기**: 타임스탬프가 없거나 다른 모양이어도 문서를 읽을 수 있어야
//!   삭제 규칙이 "판단 불가" 상태를 명시적으로 처리할 수 있습니다.

pub mod users;

//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 보관되는 사용자 레코드
//! └── DTOs          - 요청/응답 데이터 계약
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 도메인 엔티티
//!
//! 저장소 문서와 1:1로 대응하는 [`User`](entities::users::user::User) 레코드입니다.
//! 타임스탬프는 저장소가 돌려준 원래 모양 그대로(`Bson`) 보관하고,
//! 읽는 시점에 정규화합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! - **request**: 클라이언트 입력. 모든 필드가 `Option`이며 누락 검사는
//!   형식 검사보다 먼저 수행됩니다.
//! - **response**: `success`/`message` 봉투와 정규화된 사용자 표현.

pub mod entities;
pub mod dto;

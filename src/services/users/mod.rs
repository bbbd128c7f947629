//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 규칙을 한곳에서 집행합니다.
//!
//! # Features
//!
//! - 이름/이메일 검증 후 생성
//! - 이름 기반 조회와 모호성 판정 ([`lookup`])
//! - ID/이름 기반 이메일 변경
//! - 1분 유예 기간이 적용된 삭제

pub mod lookup;
pub mod user_service;

pub use lookup::{resolve_by_name, NameLookup};
pub use user_service::UserService;

//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 순수 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 값 확인, 이름/이메일 검증 규칙
//! - [`time_utils`] - 저장된 타임스탬프 정규화, 삭제 유예 기간 판단
//! - [`display_terminal`] - 시작 시 터미널 출력 포맷팅
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::contains_disallowed_script;
//! use crate::utils::time_utils::has_grace_period_elapsed;
//!
//! assert!(contains_disallowed_script("홍길동"));
//! assert!(!has_grace_period_elapsed(None, Utc::now()));
//! ```

pub mod string_utils;
pub mod time_utils;
pub mod display_terminal;

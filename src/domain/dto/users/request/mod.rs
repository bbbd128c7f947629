//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 문자열을 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON/쿼리 구조 (실패 시 `JsonConfig`/`QueryConfig` 핸들러가 400 응답)
//! 2. **누락 검증**: 필수 필드가 없거나 비어 있으면 400
//! 3. **형식 검증**: `validator` 커스텀 함수 (한글 이름, `@` 없는 이메일)
//!
//! 형식 위반이 여러 개여도 필드 순서상 첫 번째 위반 하나만 보고합니다.

pub mod create_user;
pub mod update_email;
pub mod user_lookup;

pub use create_user::CreateUserRequest;
pub use update_email::{UpdateEmailByIdRequest, UpdateEmailByNameRequest};
pub use user_lookup::{UserIdQuery, UserNameQuery};

use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};
use crate::utils::string_utils::{contains_disallowed_script, is_acceptable_email_format};

/// 이름에 한글 음절이 없는지 검증
pub(crate) fn validate_name_script(name: &str) -> Result<(), ValidationError> {
    if contains_disallowed_script(name) {
        return Err(ValidationError::new("disallowed_script")
            .with_message(Cow::Borrowed("이름에는 한글을 사용할 수 없습니다")));
    }
    Ok(())
}

/// 이메일에 `@`가 있는지 검증
pub(crate) fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if !is_acceptable_email_format(email) {
        return Err(ValidationError::new("invalid_email")
            .with_message(Cow::Borrowed("유효하지 않은 이메일 형식입니다")));
    }
    Ok(())
}

/// 주어진 필드 순서에서 처음 위반된 규칙의 메시지를 반환합니다.
pub(crate) fn first_violation(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    field_order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errors| errors.iter())
        .next()
        .and_then(|error| error.message.as_ref())
        .map(|message| message.to_string())
        .unwrap_or_else(|| errors.to_string())
}

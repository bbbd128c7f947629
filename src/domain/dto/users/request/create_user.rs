//! # 사용자 생성 요청 DTO
//!
//! ## 검증 규칙 (보고 순서)
//!
//! 1. `name`, `email` 둘 중 하나라도 없거나 비어 있으면 "모두 필수"
//! 2. `name`에 한글 음절(U+AC00–U+D7A3)이 있으면 거부
//! 3. `email`에 `@`가 없으면 거부
//!
//! 이름/이메일 중복 여부는 검사하지 않습니다. 동일 이름은 이후 이름 기반
//! 수정/삭제에서 충돌로 처리됩니다.
//!
//! ## JSON 예제
//!
//! ```json
//! { "name": "Kim", "email": "kim@example.com" }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::is_present;
use super::{first_violation, validate_email_format, validate_name_script};

/// 새로운 사용자 생성을 위한 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름
    #[validate(custom(function = "validate_name_script"))]
    pub name: Option<String>,

    /// 사용자 이메일
    #[validate(custom(function = "validate_email_format"))]
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// 규칙을 순서대로 검사하고 `(name, email)`을 돌려줍니다.
    pub fn into_validated(self) -> AppResult<(String, String)> {
        if !(is_present(&self.name) && is_present(&self.email)) {
            return Err(AppError::ValidationError(
                "name과 email 필드는 모두 필수입니다".to_string(),
            ));
        }

        self.validate()
            .map_err(|e| AppError::ValidationError(first_violation(&e, &["name", "email"])))?;

        Ok((self.name.unwrap_or_default(), self.email.unwrap_or_default()))
    }
}

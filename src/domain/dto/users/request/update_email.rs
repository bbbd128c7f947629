//! 이메일 변경 요청 DTO
//!
//! 식별자(`userId` 또는 `name`)와 `newEmail`을 받습니다.
//! 식별자/새 이메일 누락이 먼저 보고되고, 그 다음 이메일 형식을 검사합니다.
//! 검증에 실패하면 저장소에는 어떤 접근도 하지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::is_present;
use super::{first_violation, validate_email_format};

/// ID 기반 이메일 변경 요청
///
/// ```json
/// { "userId": "665ae0b0c1f2a3b4c5d6e7f8", "newEmail": "kim@new.example" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailByIdRequest {
    pub user_id: Option<String>,

    #[validate(custom(function = "validate_email_format"))]
    pub new_email: Option<String>,
}

impl UpdateEmailByIdRequest {
    pub fn new(user_id: impl Into<String>, new_email: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            new_email: Some(new_email.into()),
        }
    }

    /// `(user_id, new_email)`을 검증 후 돌려줍니다.
    pub fn into_validated(self) -> AppResult<(String, String)> {
        if !(is_present(&self.user_id) && is_present(&self.new_email)) {
            return Err(AppError::ValidationError(
                "userId와 newEmail 필드는 모두 필수입니다".to_string(),
            ));
        }

        self.validate()
            .map_err(|e| AppError::ValidationError(first_violation(&e, &["new_email"])))?;

        Ok((self.user_id.unwrap_or_default(), self.new_email.unwrap_or_default()))
    }
}

/// 이름 기반 이메일 변경 요청
///
/// ```json
/// { "name": "Kim", "newEmail": "kim@new.example" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailByNameRequest {
    pub name: Option<String>,

    #[validate(custom(function = "validate_email_format"))]
    pub new_email: Option<String>,
}

impl UpdateEmailByNameRequest {
    pub fn new(name: impl Into<String>, new_email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            new_email: Some(new_email.into()),
        }
    }

    /// `(name, new_email)`을 검증 후 돌려줍니다.
    pub fn into_validated(self) -> AppResult<(String, String)> {
        if !(is_present(&self.name) && is_present(&self.new_email)) {
            return Err(AppError::ValidationError(
                "name과 newEmail 필드는 모두 필수입니다".to_string(),
            ));
        }

        self.validate()
            .map_err(|e| AppError::ValidationError(first_violation(&e, &["new_email"])))?;

        Ok((self.name.unwrap_or_default(), self.new_email.unwrap_or_default()))
    }
}

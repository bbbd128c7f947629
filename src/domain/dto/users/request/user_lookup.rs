//! 식별자 쿼리 DTO
//!
//! `GET`/`DELETE` 엔드포인트는 쿼리 문자열로 식별자를 받습니다.
//!
//! ```text
//! GET    /api/v1/users/get-by-name?name=Kim
//! DELETE /api/v1/users/delete-by-id?userId=665ae0b0c1f2a3b4c5d6e7f8
//! DELETE /api/v1/users/delete-by-name?name=Kim
//! ```

use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::is_present;

/// `?userId=` 쿼리
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

impl UserIdQuery {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: Some(user_id.into()) }
    }

    pub fn into_validated(self) -> AppResult<String> {
        if !is_present(&self.user_id) {
            return Err(AppError::ValidationError("userId 필드는 필수입니다".to_string()));
        }
        Ok(self.user_id.unwrap_or_default())
    }
}

/// `?name=` 쿼리
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserNameQuery {
    pub name: Option<String>,
}

impl UserNameQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }

    pub fn into_validated(self) -> AppResult<String> {
        if !is_present(&self.name) {
            return Err(AppError::ValidationError("name 필드는 필수입니다".to_string()));
        }
        Ok(self.name.unwrap_or_default())
    }
}

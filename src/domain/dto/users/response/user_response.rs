use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 저장된 타임스탬프는 [`normalize_timestamp`](crate::utils::time_utils::normalize_timestamp)를
/// 거쳐 `DateTime<Utc>`로 변환됩니다. 해석할 수 없는 값은 `null`이 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let created_at = user.created_at();
        let updated_at = user.updated_at();
        let id = user.id_string().unwrap_or_default();

        Self {
            id,
            name: user.name,
            email: user.email,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub success: bool,
    pub message: String,
    pub user_id: String,
    pub user: UserResponse,
}

/// 사용자 목록 응답 DTO (이름 조회, 전체 목록)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub users: Vec<UserResponse>,
}

impl UserListResponse {
    pub fn new(users: Vec<UserResponse>) -> Self {
        Self {
            success: true,
            message: format!("사용자 {}명을 찾았습니다", users.len()),
            count: users.len(),
            users,
        }
    }
}

/// 이메일 변경 응답 DTO
///
/// 이름 기반 변경일 때만 해석된 `userId`가 포함됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// 사용자 삭제 응답 DTO
///
/// 이름 기반 삭제일 때만 삭제된 `userId`가 포함됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

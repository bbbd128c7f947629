//! User Entity Implementation

use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};
use crate::utils::time_utils::{normalize_timestamp, to_store_timestamp};

/// 이름 기반 조회에 사용하는 문서 필드명
pub const NAME_FIELD: &str = "name";
/// 이메일 필드명
pub const EMAIL_FIELD: &str = "email";
/// 생성 시각 필드명
pub const CREATED_AT_FIELD: &str = "createdAt";
/// 수정 시각 필드명
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서 하나를 표현합니다.
/// 타임스탬프는 저장된 모양 그대로 보관하며 [`User::created_at`] /
/// [`User::updated_at`]을 통해 정규화된 값으로 읽습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (중복 허용, 한글 음절 금지)
    pub name: String,
    /// 이메일 (`@` 포함 필수)
    pub email: String,
    /// 생성 시각 (저장소 원본 표현)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Bson>,
    /// 수정 시각 (저장소 원본 표현)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Bson>,
}

impl User {
    /// 새 사용자 레코드 생성
    ///
    /// `createdAt`과 `updatedAt`을 같은 시각으로 설정합니다.
    /// ID는 저장소에 삽입될 때 할당됩니다.
    pub fn new(name: String, email: String, now: DateTime<Utc>) -> Self {
        let timestamp = to_store_timestamp(now);

        Self {
            id: None,
            name,
            email,
            created_at: Some(timestamp.clone()),
            updated_at: Some(timestamp),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 정규화된 생성 시각
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_ref().and_then(normalize_timestamp)
    }

    /// 정규화된 수정 시각
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_ref().and_then(normalize_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_sets_equal_timestamps() {
        let now = Utc::now();
        let user = User::new("Kim".to_string(), "a@b.com".to_string(), now);

        assert!(user.id.is_none());
        assert_eq!(user.created_at(), user.updated_at());
        assert_eq!(
            user.created_at().map(|t| t.timestamp_millis()),
            Some(now.timestamp_millis())
        );
    }

    #[test]
    fn test_document_uses_camel_case_fields() {
        let user = User::new("Kim".to_string(), "a@b.com".to_string(), Utc::now());
        let document = mongodb::bson::to_document(&user).unwrap();

        assert!(document.contains_key(CREATED_AT_FIELD));
        assert!(document.contains_key(UPDATED_AT_FIELD));
        assert!(!document.contains_key("_id"));
    }

    #[test]
    fn test_missing_timestamps_deserialize_as_none() {
        let document = mongodb::bson::doc! { "name": "Lee", "email": "lee@x" };
        let user: User = mongodb::bson::from_document(document).unwrap();

        assert!(user.created_at().is_none());
        assert!(user.updated_at().is_none());
    }
}

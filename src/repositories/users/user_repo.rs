//! # MongoDB 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **ObjectId 기반 ID**: `_id`는 MongoDB가 할당하며 16진수 문자열로 노출
//! - **부분 업데이트**: `$set` 연산자로 지정된 필드만 변경
//! - **삽입 순서 보장**: 목록 조회는 `_id` 오름차순으로 정렬

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::{User, CREATED_AT_FIELD, NAME_FIELD},
};
use super::UserStore;

/// MongoDB 사용자 리포지토리
///
/// ## 에러 처리
///
/// 드라이버 오류는 모두 `AppError::DatabaseError`로 변환되어
/// 핸들러 경계에서 500 응답이 됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(database, "users");
/// repo.create_indexes().await?;
///
/// let id = repo.insert(&user).await?;
/// let found = repo.get_by_id(&id).await?;
/// ```
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// 컬렉션 이름
    collection_name: String,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, collection_name: impl Into<String>) -> Self {
        Self {
            db,
            collection_name: collection_name.into(),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(&self.collection_name)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이름 인덱스** (`name`, 비고유) - 이름 조회와 모호성 판정
    /// 2. **생성일 인덱스** (`createdAt`, 내림차순)
    ///
    /// 이름은 중복이 허용되므로 유니크 인덱스를 만들지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        self.collection()
            .create_indexes(index_models())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_sorted(&self, filter: Document) -> AppResult<Vec<User>> {
        let cursor = self.collection()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn index_models() -> Vec<IndexModel> {
    let mut name_keys = Document::new();
    name_keys.insert(NAME_FIELD, 1);

    let mut created_at_keys = Document::new();
    created_at_keys.insert(CREATED_AT_FIELD, -1);

    vec![
        IndexModel::builder()
            .keys(name_keys)
            .options(IndexOptions::builder()
                .name("name_lookup".to_string())
                .build())
            .build(),
        IndexModel::builder()
            .keys(created_at_keys)
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build(),
    ]
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn insert(&self, user: &User) -> AppResult<String> {
        let result = self.collection()
            .insert_one(user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        result.inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("ObjectId가 아닌 ID 조회: {}", id);
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn query_by_field(&self, field: &str, value: &str) -> AppResult<Vec<User>> {
        let mut filter = Document::new();
        filter.insert(field, value);

        self.find_sorted(filter).await
    }

    async fn update_by_id(&self, id: &str, fields: Document) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self.collection()
            .update_one(doc! { "_id": object_id }, doc! { "$set": fields })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        self.find_sorted(Document::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_index_keys_follow_entity_fields() {
        let models = index_models();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].keys.get(NAME_FIELD), Some(&Bson::Int32(1)));
        assert_eq!(models[1].keys.get(CREATED_AT_FIELD), Some(&Bson::Int32(-1)));
    }

    #[test]
    fn test_name_index_is_not_unique() {
        let models = index_models();
        let unique = models[0].options.as_ref().and_then(|o| o.unique);

        assert_ne!(unique, Some(true));
    }
}

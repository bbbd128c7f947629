//! 인메모리 사용자 리포지토리
//!
//! MongoDB 없이 서버를 띄우거나 테스트할 때 사용하는 [`UserStore`] 구현입니다.
//! 레코드는 삽입 순서를 유지하는 `Vec`에 보관됩니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::entities::users::user::User,
};
use super::UserStore;

#[derive(Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 모양 그대로 레코드를 넣습니다.
    ///
    /// `createdAt`이 없거나 다른 표현으로 저장된 레거시 문서를 재현할 때 사용합니다.
    pub fn seed(&self, mut user: User) -> AppResult<String> {
        let id = *user.id.get_or_insert_with(ObjectId::new);
        self.records
            .write()
            .context("인메모리 저장소 잠금 실패")?
            .push(user);

        Ok(id.to_hex())
    }
}

fn matches_field(user: &User, field: &str, value: &str) -> AppResult<bool> {
    let document = bson::to_document(user)
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    Ok(matches!(document.get(field), Some(Bson::String(stored)) if stored == value))
}

fn merge_fields(user: &User, fields: Document) -> AppResult<User> {
    let mut document = bson::to_document(user)
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    for (key, value) in fields {
        document.insert(key, value);
    }

    bson::from_document(document).map_err(|e| AppError::DatabaseError(e.to_string()))
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> AppResult<String> {
        let mut stored = user.clone();
        stored.id = Some(ObjectId::new());
        self.seed(stored)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let records = self.records.read().context("인메모리 저장소 잠금 실패")?;

        Ok(records.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn query_by_field(&self, field: &str, value: &str) -> AppResult<Vec<User>> {
        let records = self.records.read().context("인메모리 저장소 잠금 실패")?;

        let mut matched = Vec::new();
        for user in records.iter() {
            if matches_field(user, field, value)? {
                matched.push(user.clone());
            }
        }
        Ok(matched)
    }

    async fn update_by_id(&self, id: &str, fields: Document) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        let mut records = self.records
            .write()
            .with_context(|| format!("인메모리 저장소 잠금 실패 (id: {})", id))?;

        let Some(slot) = records.iter_mut().find(|u| u.id == Some(object_id)) else {
            return Ok(false);
        };
        let mut updated = merge_fields(slot, fields)?;
        updated.id = Some(object_id);
        *slot = updated;

        Ok(true)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        let mut records = self.records
            .write()
            .with_context(|| format!("인메모리 저장소 잠금 실패 (id: {})", id))?;

        let before = records.len();
        records.retain(|u| u.id != Some(object_id));
        Ok(records.len() < before)
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let records = self.records.read().context("인메모리 저장소 잠금 실패")?;
        Ok(records.clone())
    }
}

//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`]는 핵심 로직이 저장소에 요구하는 최소 인터페이스입니다.
//! 모든 작업은 요청당 정확히 한 번 시도되며 재시도하지 않습니다.

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserRepository;

use async_trait::async_trait;
use mongodb::bson::Document;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

/// `users` 컬렉션에 대한 저장소 포트
///
/// 반환되는 [`User`]는 항상 저장소가 할당한 `id`를 담고 있습니다.
/// 식별자로 해석할 수 없는 ID 문자열은 오류가 아니라 "없음"으로 취급합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 레코드를 저장하고 할당된 ID를 반환합니다.
    async fn insert(&self, user: &User) -> AppResult<String>;

    /// ID로 레코드를 조회합니다.
    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 필드 값이 정확히 일치하는 레코드를 삽입 순서대로 반환합니다.
    async fn query_by_field(&self, field: &str, value: &str) -> AppResult<Vec<User>>;

    /// 지정한 필드만 덮어씁니다. 레코드가 없으면 `false`.
    async fn update_by_id(&self, id: &str, fields: Document) -> AppResult<bool>;

    /// 레코드를 삭제합니다. 레코드가 없으면 `false`.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    /// 모든 레코드를 삽입 순서대로 반환합니다.
    async fn get_all(&self) -> AppResult<Vec<User>>;
}

//! 이름 기반 레코드 해석
//!
//! 이름은 유일하지 않으므로 이름으로 수정/삭제하려면 먼저 정확히 하나의
//! 레코드로 해석되어야 합니다. 둘 이상이 일치하면 어느 쪽도 고르지 않습니다.

use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::user::{User, NAME_FIELD},
    repositories::users::UserStore,
};

/// 이름 조회 결과
#[derive(Debug, Clone)]
pub enum NameLookup {
    /// 일치하는 레코드 없음
    NotFound,
    /// 정확히 하나 일치
    Found(User),
    /// 둘 이상 일치 (일치 개수)
    Ambiguous(usize),
}

impl NameLookup {
    /// 단일 레코드로 변환합니다.
    ///
    /// `NotFound`는 404, `Ambiguous`는 ID 기반 엔드포인트를 안내하는 409가 됩니다.
    pub fn into_single(self, name: &str) -> AppResult<User> {
        match self {
            NameLookup::Found(user) => Ok(user),
            NameLookup::NotFound => Err(AppError::NotFound(format!(
                "이름이 '{}'인 사용자를 찾을 수 없습니다",
                name
            ))),
            NameLookup::Ambiguous(count) => Err(AppError::ConflictError(format!(
                "이름이 '{}'인 사용자가 {}명입니다. userId 기반 엔드포인트를 사용하세요",
                name, count
            ))),
        }
    }
}

/// 이름으로 레코드를 조회하여 결과를 분류합니다.
pub async fn resolve_by_name(store: &dyn UserStore, name: &str) -> AppResult<NameLookup> {
    let mut matches = store.query_by_field(NAME_FIELD, name).await?;

    Ok(match matches.len() {
        0 => NameLookup::NotFound,
        1 => matches.pop().map_or(NameLookup::NotFound, NameLookup::Found),
        count => NameLookup::Ambiguous(count),
    })
}

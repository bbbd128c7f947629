//! # 사용자 관리 서비스 구현
//!
//! 각 작업은 입력 검증, 규칙 판정, 최대 한 번의 저장소 변경 순으로 진행됩니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UserService                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  request DTO ──▶ into_validated() ──▶ 규칙 판정           │
//! │                                        │                 │
//! │           resolve_by_name() ◀──────────┤ (이름 기반)      │
//! │           has_grace_period_elapsed() ◀─┤ (삭제)          │
//! │                                        ▼                 │
//! │                               UserStore (1회 변경)        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! 저장소 오류는 재시도하지 않고 그대로 호출자에게 전달됩니다.

use std::sync::Arc;
use log::{error, info, warn};
use mongodb::bson::{oid::ObjectId, Document};
use crate::{
    core::{
        clock::Clock,
        errors::{AppError, AppResult},
    },
    domain::{
        dto::users::{
            request::{
                CreateUserRequest, UpdateEmailByIdRequest, UpdateEmailByNameRequest,
                UserIdQuery, UserNameQuery,
            },
            response::{
                CreateUserResponse, DeleteUserResponse, UpdateEmailResponse,
                UserListResponse, UserResponse,
            },
        },
        entities::users::user::{User, EMAIL_FIELD, NAME_FIELD, UPDATED_AT_FIELD},
    },
    repositories::users::UserStore,
    utils::time_utils::{has_grace_period_elapsed, to_store_timestamp},
};
use super::lookup::resolve_by_name;

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 의존성
///
/// - `store`: 사용자 레코드 저장소 (MongoDB 또는 인메모리)
/// - `clock`: 현재 시각 공급자 (유예 기간, `updatedAt`)
///
/// ## 에러 처리 전략
///
/// - **ValidationError**: 필수 필드 누락, 한글 이름, `@` 없는 이메일
/// - **NotFound**: 대상 레코드 없음
/// - **ConflictError**: 이름이 여러 레코드와 일치
/// - **GracePeriodViolation**: 생성 후 1분 미경과
/// - **InvalidState**: 생성 시각이 기록되지 않은 레코드
/// - **DatabaseError**: 저장소 오류
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(store, Arc::new(SystemClock));
///
/// let created = service
///     .create_user(CreateUserRequest::new("Kim", "kim@example.com"))
///     .await?;
/// println!("생성된 사용자: {}", created.user_id);
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// 새 사용자 생성
    ///
    /// # 처리 과정
    ///
    /// 1. 필수 필드 확인 (`name`, `email`)
    /// 2. 이름에 한글 음절이 없는지 확인
    /// 3. 이메일에 `@`가 있는지 확인
    /// 4. `createdAt = updatedAt = now`로 저장
    ///
    /// 이름이나 이메일의 중복은 확인하지 않습니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        let (name, email) = request.into_validated()?;

        let mut user = User::new(name, email, self.clock.now());
        let user_id = self.store
            .insert(&user)
            .await
            .inspect_err(|e| error!("사용자 생성 실패: {}", e))?;
        user.id = ObjectId::parse_str(&user_id).ok();

        info!("사용자 생성 완료: {} ({})", user.name, user_id);

        Ok(CreateUserResponse {
            success: true,
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
            user_id,
            user: UserResponse::from(user),
        })
    }

    /// 이름이 일치하는 모든 사용자 조회
    pub async fn get_users_by_name(&self, query: UserNameQuery) -> AppResult<UserListResponse> {
        let name = query.into_validated()?;

        let users = self.store
            .query_by_field(NAME_FIELD, &name)
            .await
            .inspect_err(|e| error!("이름 조회 실패: {}", e))?;

        if users.is_empty() {
            return Err(AppError::NotFound(format!(
                "이름이 '{}'인 사용자를 찾을 수 없습니다",
                name
            )));
        }

        Ok(UserListResponse::new(users.into_iter().map(UserResponse::from).collect()))
    }

    /// 전체 사용자 목록
    ///
    /// 저장소가 비어 있으면 빈 목록 대신 404를 반환합니다.
    pub async fn list_users(&self) -> AppResult<UserListResponse> {
        let users = self.store
            .get_all()
            .await
            .inspect_err(|e| error!("사용자 목록 조회 실패: {}", e))?;

        if users.is_empty() {
            return Err(AppError::NotFound("등록된 사용자가 없습니다".to_string()));
        }

        Ok(UserListResponse::new(users.into_iter().map(UserResponse::from).collect()))
    }

    /// ID 기반 이메일 변경
    pub async fn update_email_by_id(
        &self,
        request: UpdateEmailByIdRequest,
    ) -> AppResult<UpdateEmailResponse> {
        let (user_id, new_email) = request.into_validated()?;

        let user = self.store
            .get_by_id(&user_id)
            .await
            .inspect_err(|e| error!("사용자 조회 실패: {}", e))?
            .ok_or_else(|| user_not_found(&user_id))?;

        self.apply_email(&user_id, new_email).await?;
        info!("이메일 변경 완료: {} ({})", user.name, user_id);

        Ok(UpdateEmailResponse {
            success: true,
            message: "이메일이 성공적으로 변경되었습니다".to_string(),
            user_id: None,
        })
    }

    /// 이름 기반 이메일 변경
    ///
    /// 이름이 정확히 하나의 레코드로 해석될 때만 변경합니다.
    pub async fn update_email_by_name(
        &self,
        request: UpdateEmailByNameRequest,
    ) -> AppResult<UpdateEmailResponse> {
        let (name, new_email) = request.into_validated()?;

        let user = resolve_by_name(self.store.as_ref(), &name)
            .await
            .inspect_err(|e| error!("이름 해석 실패: {}", e))?
            .into_single(&name)
            .inspect_err(|e| warn!("이름 기반 이메일 변경 거부: {}", e))?;
        let user_id = resolved_id(&user)?;

        self.apply_email(&user_id, new_email).await?;
        info!("이메일 변경 완료: {} ({})", name, user_id);

        Ok(UpdateEmailResponse {
            success: true,
            message: "이메일이 성공적으로 변경되었습니다".to_string(),
            user_id: Some(user_id),
        })
    }

    /// ID 기반 삭제
    ///
    /// # 처리 과정
    ///
    /// 1. 레코드 조회 (없으면 404)
    /// 2. `createdAt`이 없으면 400 (판단 불가 상태)
    /// 3. 생성 후 1분 미경과 시 403
    /// 4. 삭제
    pub async fn delete_user_by_id(&self, query: UserIdQuery) -> AppResult<DeleteUserResponse> {
        let user_id = query.into_validated()?;

        let user = self.store
            .get_by_id(&user_id)
            .await
            .inspect_err(|e| error!("사용자 조회 실패: {}", e))?
            .ok_or_else(|| user_not_found(&user_id))?;

        if user.created_at.is_none() {
            warn!("createdAt이 없는 레코드 삭제 시도: {}", user_id);
            return Err(AppError::InvalidState(
                "사용자 레코드에 생성 시각(createdAt)이 없습니다".to_string(),
            ));
        }

        self.ensure_grace_period(&user, &user_id)?;
        self.remove(&user_id).await?;

        Ok(DeleteUserResponse {
            success: true,
            message: "사용자가 성공적으로 삭제되었습니다".to_string(),
            user_id: None,
        })
    }

    /// 이름 기반 삭제
    ///
    /// 생성 시각을 해석할 수 없는 레코드는 유예 기간이 경과하지 않은 것으로 보아 403입니다.
    pub async fn delete_user_by_name(&self, query: UserNameQuery) -> AppResult<DeleteUserResponse> {
        let name = query.into_validated()?;

        let user = resolve_by_name(self.store.as_ref(), &name)
            .await
            .inspect_err(|e| error!("이름 해석 실패: {}", e))?
            .into_single(&name)
            .inspect_err(|e| warn!("이름 기반 삭제 거부: {}", e))?;
        let user_id = resolved_id(&user)?;

        self.ensure_grace_period(&user, &user_id)?;
        self.remove(&user_id).await?;

        Ok(DeleteUserResponse {
            success: true,
            message: "사용자가 성공적으로 삭제되었습니다".to_string(),
            user_id: Some(user_id),
        })
    }

    async fn apply_email(&self, user_id: &str, new_email: String) -> AppResult<()> {
        let mut fields = Document::new();
        fields.insert(EMAIL_FIELD, new_email);
        fields.insert(UPDATED_AT_FIELD, to_store_timestamp(self.clock.now()));

        let updated = self.store
            .update_by_id(user_id, fields)
            .await
            .inspect_err(|e| error!("이메일 변경 실패: {}", e))?;

        if !updated {
            return Err(user_not_found(user_id));
        }
        Ok(())
    }

    fn ensure_grace_period(&self, user: &User, user_id: &str) -> AppResult<()> {
        if has_grace_period_elapsed(user.created_at(), self.clock.now()) {
            return Ok(());
        }

        warn!("유예 기간 내 삭제 시도: {}", user_id);
        Err(AppError::GracePeriodViolation(
            "사용자는 생성 후 1분이 지나야 삭제할 수 있습니다".to_string(),
        ))
    }

    async fn remove(&self, user_id: &str) -> AppResult<()> {
        let deleted = self.store
            .delete_by_id(user_id)
            .await
            .inspect_err(|e| error!("사용자 삭제 실패: {}", e))?;

        if !deleted {
            return Err(user_not_found(user_id));
        }

        info!("사용자 삭제 완료: {}", user_id);
        Ok(())
    }
}

fn user_not_found(user_id: &str) -> AppError {
    AppError::NotFound(format!("ID가 '{}'인 사용자를 찾을 수 없습니다", user_id))
}

fn resolved_id(user: &User) -> AppResult<String> {
    user.id_string()
        .ok_or_else(|| AppError::InternalError("저장소가 ID 없는 레코드를 반환했습니다".to_string()))
}

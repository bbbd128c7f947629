//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트 핸들러입니다.
//! 모든 경로는 `/api/v1/users` 스코프 아래에 등록됩니다 ([`crate::routes`]).
//!
//! | 메서드 | 경로 | 입력 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/create` | body `name`, `email` | 201 Created |
//! | `GET` | `/get-by-name` | query `name` | 200 OK |
//! | `PUT` | `/update-email-by-id` | body `userId`, `newEmail` | 200 OK |
//! | `PUT` | `/update-email-by-name` | body `name`, `newEmail` | 200 OK |
//! | `DELETE` | `/delete-by-id` | query `userId` | 200 OK |
//! | `DELETE` | `/delete-by-name` | query `name` | 200 OK |
//! | `GET` | `/list` | - | 200 OK |

use actix_web::{web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{
    CreateUserRequest, UpdateEmailByIdRequest, UpdateEmailByNameRequest, UserIdQuery,
    UserNameQuery,
};
use crate::services::users::UserService;

/// 사용자 생성
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/create \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Kim", "email": "kim@example.com"}'
/// ```
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 이름으로 사용자 조회
pub async fn get_users_by_name(
    service: web::Data<UserService>,
    query: web::Query<UserNameQuery>,
) -> Result<HttpResponse, AppError> {
    let response = service.get_users_by_name(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// ID로 이메일 변경
pub async fn update_email_by_id(
    service: web::Data<UserService>,
    payload: web::Json<UpdateEmailByIdRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.update_email_by_id(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 이름으로 이메일 변경
///
/// 이름이 여러 사용자와 일치하면 409 Conflict를 반환합니다.
pub async fn update_email_by_name(
    service: web::Data<UserService>,
    payload: web::Json<UpdateEmailByNameRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.update_email_by_name(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// ID로 사용자 삭제
///
/// ```bash
/// curl -X DELETE "http://localhost:8080/api/v1/users/delete-by-id?userId=665ae0b0c1f2a3b4c5d6e7f8"
/// ```
pub async fn delete_user_by_id(
    service: web::Data<UserService>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_user_by_id(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 이름으로 사용자 삭제
pub async fn delete_user_by_name(
    service: web::Data<UserService>,
    query: web::Query<UserNameQuery>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_user_by_name(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 전체 사용자 목록
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = service.list_users().await?;

    Ok(HttpResponse::Ok().json(response))
}

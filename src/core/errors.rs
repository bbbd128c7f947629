//! # Application Error Handling System
//!
//! 사용자 API를 위한 통합 에러 처리 시스템입니다.
//! 모든 실패는 [`AppError`] 변형 하나로 표현되며, `actix_web::ResponseError`
//! 구현을 통해 일관된 JSON 응답으로 변환됩니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "사람이 읽을 수 있는 메시지",
//!   "code": "VALIDATION_ERROR"
//! }
//! ```
//!
//! 5xx 에러는 진단을 위해 원본 에러 내용을 `error` 필드에 함께 담습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `MethodNotAllowed` | 405 Method Not Allowed | 엔드포인트가 허용하지 않는 HTTP 메서드 |
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 한글 이름, 이메일 형식 오류 |
//! | `InvalidState` | 400 Bad Request | 저장된 레코드에 `createdAt`이 없음 |
//! | `NotFound` | 404 Not Found | 일치하는 레코드 없음 |
//! | `ConflictError` | 409 Conflict | 이름이 여러 레코드와 일치 |
//! | `GracePeriodViolation` | 403 Forbidden | 삭제 유예 기간(1분) 미경과 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 검증/조회 실패는 서비스 계층에서 직접 생성되고,
/// 저장소에서 올라온 예기치 못한 오류만 `DatabaseError`/`InternalError`로 전달됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 엔드포인트가 요구하는 메서드와 다른 HTTP 메서드로 호출됨 (405)
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// 데이터베이스 관련 에러 (500)
    ///
    /// MongoDB 연산 중 발생하는 모든 오류를 나타냅니다.
    /// 재시도 없이 그대로 클라이언트에 보고됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// # 발생 시나리오
    /// - 필수 필드 누락
    /// - 이름에 한글 음절 포함
    /// - 이메일에 `@` 없음
    /// - 잘못된 JSON / 쿼리 문자열
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 저장된 레코드가 규칙을 판단할 수 없는 상태 (400)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌 에러 (409)
    ///
    /// 이름 기반 수정/삭제에서 이름이 둘 이상의 레코드와 일치할 때 발생합니다.
    /// 어느 레코드를 의도했는지 추측하지 않고, ID 기반 엔드포인트 사용을 안내합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 삭제 유예 기간 위반 (403)
    ///
    /// 일반 검증 에러와 구분되는 도메인 고유의 거부 결과입니다.
    #[error("Grace period violation: {0}")]
    GracePeriodViolation(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문에 들어갈 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::GracePeriodViolation(_) => "GRACE_PERIOD_NOT_ELAPSED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 변형에 담긴 원본 메시지
    pub fn detail(&self) -> &str {
        match self {
            AppError::MethodNotAllowed(msg)
            | AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::InvalidState(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::GracePeriodViolation(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ValidationError(_) | AppError::InvalidState(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::GracePeriodViolation(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 4xx 에러는 원본 메시지를 `message`로 그대로 전달하고,
    /// 5xx 에러는 일반 메시지와 함께 원본 에러를 `error` 필드에 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let body = if status.is_server_error() {
            serde_json::json!({
                "success": false,
                "message": "서버 내부 오류가 발생했습니다",
                "code": self.code(),
                "error": self.to_string(),
            })
        } else {
            serde_json::json!({
                "success": false,
                "message": self.detail(),
                "code": self.code(),
            })
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let records = self.records.read().context("인메모리 저장소 잠금 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

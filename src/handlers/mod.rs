//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 입력 추출과 응답 렌더링만 담당하고, 판단은 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증과 규칙 판정                    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore 구현                  ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 응답
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 실패는 `AppError`의 `ResponseError` 구현을 통해 JSON으로 변환됩니다.

use actix_web::{HttpRequest, HttpResponse};
use crate::core::errors::AppError;

pub mod users;

/// 리소스가 허용하지 않는 메서드로 들어온 요청을 405 JSON으로 응답합니다.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "{} 메서드는 {}에서 허용되지 않습니다",
        req.method(),
        req.path()
    )))
}

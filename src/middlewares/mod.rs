//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어 구성을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### CORS ([`configure_cors`])
//! - 모든 Origin 허용
//! - 모든 메서드와 헤더 허용
//! - Preflight 결과 1시간 캐시
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::configure_cors;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(configure_cors())
//!         .configure(configure_all_routes)
//! })
//! ```

use actix_cors::Cors;

/// 모든 Origin에서 호출 가능한 CORS 설정
///
/// 인증이 없는 공개 API이므로 자격 증명(credentials)은 허용하지 않습니다.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

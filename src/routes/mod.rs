//! API 라우트 설정 모듈
//!
//! 사용자 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! 각 엔드포인트는 정확히 하나의 HTTP 메서드만 허용하며,
//! 다른 메서드로 들어온 요청은 404가 아닌 405 JSON 응답을 받습니다.
//! 잘못된 JSON 본문이나 쿼리 문자열은 400 검증 에러로 변환됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse, Route};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(single_method("/create", web::post().to(handlers::users::create_user)))
            .service(single_method("/get-by-name", web::get().to(handlers::users::get_users_by_name)))
            .service(single_method("/update-email-by-id", web::put().to(handlers::users::update_email_by_id)))
            .service(single_method("/update-email-by-name", web::put().to(handlers::users::update_email_by_name)))
            .service(single_method("/delete-by-id", web::delete().to(handlers::users::delete_user_by_id)))
            .service(single_method("/delete-by-name", web::delete().to(handlers::users::delete_user_by_name)))
            .service(single_method("/list", web::get().to(handlers::users::list_users)))
    );
}

/// 한 메서드만 허용하고 나머지는 405로 응답하는 리소스
fn single_method(path: &str, route: Route) -> actix_web::Resource {
    web::resource(path)
        .route(route)
        .default_service(web::to(handlers::method_not_allowed))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("요청 본문을 해석할 수 없습니다: {}", err)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("쿼리 문자열을 해석할 수 없습니다: {}", err)).into()
    })
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "healthy",
        "service": "user_api_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

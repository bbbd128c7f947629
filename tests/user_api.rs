use std::sync::Arc;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use mongodb::bson::Document;
use serde_json::{json, Value};
use user_api_backend::core::clock::ManualClock;
use user_api_backend::core::errors::{AppError, AppResult};
use user_api_backend::domain::entities::users::user::User;
use user_api_backend::middlewares::configure_cors;
use user_api_backend::repositories::users::{InMemoryUserRepository, UserStore};
use user_api_backend::routes::configure_all_routes;
use user_api_backend::services::users::UserService;

macro_rules! test_app {
    ($store:expr, $clock:expr) => {
        test::init_service(
            App::new()
                .wrap(configure_cors())
                .app_data(web::Data::new(UserService::new($store, $clock)))
                .configure(configure_all_routes),
        )
        .await
    };
}

fn fixed_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(Utc.timestamp_opt(1_717_236_000, 0).unwrap()))
}

fn create_request(name: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/users/create")
        .set_json(json!({ "name": name, "email": email }))
}

#[actix_web::test]
async fn create_returns_201_with_user_id() {
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), fixed_clock());

    let resp = test::call_service(&app, create_request("Kim", "a@b.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());
    assert_eq!(body["userId"], body["user"]["id"]);
    assert_eq!(body["user"]["createdAt"], "2024-06-01T10:00:00Z");
}

#[actix_web::test]
async fn create_rejects_invalid_input() {
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), fixed_clock());

    let hangul = test::call_service(&app, create_request("홍길동", "hong@x.com").to_request()).await;
    assert_eq!(hangul.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(hangul).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let no_at = test::call_service(&app, create_request("Kim", "kim.example.com").to_request()).await;
    assert_eq!(no_at.status(), StatusCode::BAD_REQUEST);

    let missing = test::TestRequest::post()
        .uri("/api/v1/users/create")
        .set_json(json!({ "name": "Kim" }))
        .to_request();
    assert_eq!(test::call_service(&app, missing).await.status(), StatusCode::BAD_REQUEST);

    let malformed = test::TestRequest::post()
        .uri("/api/v1/users/create")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, malformed).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn wrong_method_is_405_json() {
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), fixed_clock());

    let req = test::TestRequest::get().uri("/api/v1/users/create").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");

    let req = test::TestRequest::post().uri("/api/v1/users/list").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn delete_waits_for_grace_period() {
    let clock = fixed_clock();
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), clock.clone());

    let resp = test::call_service(&app, create_request("Kim", "kim@x.com").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let user_id = body["userId"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/users/delete-by-id?userId={}", user_id);

    let early = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(early.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(early).await;
    assert_eq!(body["code"], "GRACE_PERIOD_NOT_ELAPSED");

    clock.advance(Duration::seconds(61));

    let late = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(late.status(), StatusCode::OK);
    let body: Value = test::read_body_json(late).await;
    assert_eq!(body["success"], true);

    let gone = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_by_name_waits_for_grace_period() {
    let clock = fixed_clock();
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), clock.clone());

    let resp = test::call_service(&app, create_request("Kim", "kim@x.com").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let user_id = body["userId"].as_str().unwrap().to_string();

    let early = test::TestRequest::delete()
        .uri("/api/v1/users/delete-by-name?name=Kim")
        .to_request();
    let resp = test::call_service(&app, early).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "GRACE_PERIOD_NOT_ELAPSED");

    clock.advance(Duration::seconds(60));

    let late = test::TestRequest::delete()
        .uri("/api/v1/users/delete-by-name?name=Kim")
        .to_request();
    let resp = test::call_service(&app, late).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["userId"], user_id.as_str());
}

#[actix_web::test]
async fn update_by_unknown_name_is_not_found() {
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), fixed_clock());
    test::call_service(&app, create_request("Kim", "kim@x.com").to_request()).await;

    let update = test::TestRequest::put()
        .uri("/api/v1/users/update-email-by-name")
        .set_json(json!({ "name": "Nobody", "newEmail": "nobody@x.com" }))
        .to_request();
    let resp = test::call_service(&app, update).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn duplicate_names_conflict_but_id_endpoints_work() {
    let clock = fixed_clock();
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), clock.clone());

    let resp = test::call_service(&app, create_request("Lee", "one@x.com").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let first_id = body["userId"].as_str().unwrap().to_string();
    test::call_service(&app, create_request("Lee", "two@x.com").to_request()).await;
    clock.advance(Duration::minutes(2));

    let update = test::TestRequest::put()
        .uri("/api/v1/users/update-email-by-name")
        .set_json(json!({ "name": "Lee", "newEmail": "lee@new.com" }))
        .to_request();
    let resp = test::call_service(&app, update).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "CONFLICT");

    let delete = test::TestRequest::delete()
        .uri("/api/v1/users/delete-by-name?name=Lee")
        .to_request();
    assert_eq!(test::call_service(&app, delete).await.status(), StatusCode::CONFLICT);

    let update = test::TestRequest::put()
        .uri("/api/v1/users/update-email-by-id")
        .set_json(json!({ "userId": first_id, "newEmail": "lee@new.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, update).await.status(), StatusCode::OK);

    let delete = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/delete-by-id?userId={}", first_id))
        .to_request();
    assert_eq!(test::call_service(&app, delete).await.status(), StatusCode::OK);

    let delete = test::TestRequest::delete()
        .uri("/api/v1/users/delete-by-name?name=Lee")
        .to_request();
    let resp = test::call_service(&app, delete).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["userId"].is_string());
}

#[actix_web::test]
async fn list_and_get_by_name() {
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), fixed_clock());

    let empty = test::call_service(&app, test::TestRequest::get().uri("/api/v1/users/list").to_request()).await;
    assert_eq!(empty.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(empty).await;
    assert_eq!(body["success"], false);

    test::call_service(&app, create_request("Lee", "one@x.com").to_request()).await;
    test::call_service(&app, create_request("Lee", "two@x.com").to_request()).await;
    test::call_service(&app, create_request("Kim", "kim@x.com").to_request()).await;

    let list = test::call_service(&app, test::TestRequest::get().uri("/api/v1/users/list").to_request()).await;
    assert_eq!(list.status(), StatusCode::OK);
    let body: Value = test::read_body_json(list).await;
    assert_eq!(body["count"], 3);

    let by_name = test::TestRequest::get()
        .uri("/api/v1/users/get-by-name?name=Lee")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, by_name).await).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["users"][0]["email"], "one@x.com");

    let missing = test::TestRequest::get().uri("/api/v1/users/get-by-name").to_request();
    assert_eq!(test::call_service(&app, missing).await.status(), StatusCode::BAD_REQUEST);

    let unknown = test::TestRequest::get()
        .uri("/api/v1/users/get-by-name?name=Park")
        .to_request();
    assert_eq!(test::call_service(&app, unknown).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_email_update_leaves_record_unchanged() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store.clone(), fixed_clock());

    let resp = test::call_service(&app, create_request("Kim", "kim@x.com").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let user_id = body["userId"].as_str().unwrap().to_string();

    let update = test::TestRequest::put()
        .uri("/api/v1/users/update-email-by-id")
        .set_json(json!({ "userId": user_id, "newEmail": "broken" }))
        .to_request();
    assert_eq!(test::call_service(&app, update).await.status(), StatusCode::BAD_REQUEST);

    let stored = store.get_by_id(&user_id).await.unwrap().unwrap();
    assert_eq!(stored.email, "kim@x.com");
}

#[actix_web::test]
async fn unparseable_user_id_is_not_found() {
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), fixed_clock());

    let update = test::TestRequest::put()
        .uri("/api/v1/users/update-email-by-id")
        .set_json(json!({ "userId": "nope", "newEmail": "a@b" }))
        .to_request();
    assert_eq!(test::call_service(&app, update).await.status(), StatusCode::NOT_FOUND);
}

struct UnavailableStore;

#[async_trait]
impl UserStore for UnavailableStore {
    async fn insert(&self, _user: &User) -> AppResult<String> {
        Err(AppError::DatabaseError("server selection timeout".to_string()))
    }
    async fn get_by_id(&self, _id: &str) -> AppResult<Option<User>> {
        Err(AppError::DatabaseError("server selection timeout".to_string()))
    }
    async fn query_by_field(&self, _field: &str, _value: &str) -> AppResult<Vec<User>> {
        Err(AppError::DatabaseError("server selection timeout".to_string()))
    }
    async fn update_by_id(&self, _id: &str, _fields: Document) -> AppResult<bool> {
        Err(AppError::DatabaseError("server selection timeout".to_string()))
    }
    async fn delete_by_id(&self, _id: &str) -> AppResult<bool> {
        Err(AppError::DatabaseError("server selection timeout".to_string()))
    }
    async fn get_all(&self) -> AppResult<Vec<User>> {
        Err(AppError::DatabaseError("server selection timeout".to_string()))
    }
}

#[actix_web::test]
async fn store_failure_is_500_with_detail() {
    let app = test_app!(Arc::new(UnavailableStore), fixed_clock());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/users/list").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    assert!(body["error"].as_str().unwrap().contains("server selection timeout"));
}

#[actix_web::test]
async fn cors_allows_any_origin() {
    let app = test_app!(Arc::new(InMemoryUserRepository::new()), fixed_clock());

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://somewhere.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

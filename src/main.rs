use std::io;
use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_api_backend::config::{DatabaseConfig, Environment, ServerConfig, StoreBackend};
use user_api_backend::core::clock::SystemClock;
use user_api_backend::core::errors::AppResult;
use user_api_backend::db::Database;
use user_api_backend::middlewares::configure_cors;
use user_api_backend::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserStore};
use user_api_backend::routes::configure_all_routes;
use user_api_backend::services::users::UserService;
use user_api_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_startup_summary, print_sub_task,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    print_boxed_title("User API Server");

    let backend = StoreBackend::current();

    print_step_start(1, "Connecting user store");
    let store = initialize_store(backend)
        .await
        .map_err(|e| {
            error!("저장소 초기화 실패: {}", e);
            io::Error::other(e.to_string())
        })?;
    print_step_complete(1, "User store ready");

    print_step_start(2, "Wiring services");
    let user_service = web::Data::new(UserService::new(store, Arc::new(SystemClock)));
    print_sub_task("UserService", "ready");
    print_step_complete(2, "Services ready");

    start_http_server(user_service, backend).await
}

async fn start_http_server(
    user_service: web::Data<UserService>,
    backend: StoreBackend,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    print_startup_summary(&bind_address, backend.as_str());
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            println!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));

    info!("Current environment: {:?}", environment);
}

async fn initialize_store(backend: StoreBackend) -> AppResult<Arc<dyn UserStore>> {
    match backend {
        StoreBackend::Memory => {
            print_sub_task("Backend", "in-memory");
            info!("인메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StoreBackend::MongoDb => {
            let config = DatabaseConfig::from_env();
            print_sub_task("Backend", "MongoDB");

            let database = Arc::new(Database::connect(&config).await?);
            print_sub_task("Connection", "ok");
            print_sub_task("Database", database.database_name());

            let repository = MongoUserRepository::new(database, config.users_collection);
            repository.create_indexes().await?;
            print_sub_task("Indexes", "ok");

            Ok(Arc::new(repository))
        }
    }
}

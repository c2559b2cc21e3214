//! 쇼핑몰 인증 게이트 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 세션 토큰 인증 게이트 뒤에서 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use shopgate::config::{
    DatabaseConfig, GateConfig, JwtConfig, PasswordConfig, RateLimitConfig, ServerConfig,
};
use shopgate::db::Database;
use shopgate::repositories::users::{user_repo::UserRepository, UserStore};
use shopgate::middlewares::AuthGate;
use shopgate::routes::configure_all_routes;
use shopgate::services::auth::{SessionValidator, TokenService};
use shopgate::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 쇼핑몰 인증 게이트 시작중...");

    // 서명 키가 없으면 토큰을 발급하거나 검증할 수 없음
    let jwt_config = JwtConfig::from_env().map_err(|e| {
        error!("JWT 설정 로드 실패: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!("JWT 설정 로드됨: {:?}", jwt_config);

    let user_store = initialize_user_store().await?;

    let tokens = Arc::new(TokenService::new(jwt_config));
    let validator = Arc::new(SessionValidator::new(tokens.clone(), user_store.clone()));
    let user_service = web::Data::new(UserService::new(
        user_store,
        tokens,
        PasswordConfig::bcrypt_cost(),
    ));

    let gate_config = GateConfig::from_env();
    info!("공개 경로: {:?}", gate_config.public_paths);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service, validator, gate_config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어는 나중에 등록한 것이 바깥쪽에서 먼저 실행됩니다.
/// 요청 기준 실행 순서: 경로 정규화 → 로깅 → CORS → 인증 게이트 → Rate Limiting → 라우트
/// `Governor`(`use_headers`)는 안쪽 서비스의 Future가 `Unpin`이어야 하므로 가장 먼저 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limit 설정 오류 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    validator: Arc<SessionValidator>,
    gate_config: GateConfig,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "RATE_LIMIT 값은 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(user_service.clone())

            // Rate Limiting 미들웨어 (가장 먼저 등록)
            .wrap(Governor::new(&governor_conf))

            // 인증 게이트
            .wrap(AuthGate::new(validator.clone(), gate_config.clone()))

            .wrap(cors)
            .wrap(middleware::Logger::default())

            // 후행 슬래시는 게이트의 경로 비교 전에 제거
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=shopgate::middlewares=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결 후 사용자 저장소를 준비합니다
///
/// 연결 실패 시 애플리케이션이 종료됩니다. 인덱스 생성 실패는 경고만 남깁니다.
async fn initialize_user_store() -> std::io::Result<Arc<dyn UserStore>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&DatabaseConfig::from_env())
        .await
        .map_err(|e| {
            error!("데이터베이스 연결 실패: {}", e);
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
        })?;

    let repository = UserRepository::new(&database);

    if let Err(e) = repository.create_indexes().await {
        error!("사용자 인덱스 생성 실패: {}", e);
    }

    Ok(Arc::new(repository))
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:5003` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:5003")
        .allowed_origin("http://127.0.0.1:5003")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별로 그룹화합니다. 인증 여부는 라우트가 아니라
//! 애플리케이션 전체를 감싸는 `AuthGate`의 공개 경로 목록이 결정합니다.
//!
//! | 경로 | 접근 |
//! |------|------|
//! | `GET /health` | 공개 |
//! | `POST /auth/register`, `POST /auth/login` | 공개 |
//! | `GET /auth/verify`, `GET /users/me` | 인증 필요 |
//! | `GET /admin/users/{id}` | `ADMIN` 역할 |
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(user_service.clone())
//!     .wrap(AuthGate::new(validator.clone(), gate_config.clone()))
//!     .configure(configure_all_routes)
//! ```

use crate::domain::entities::users::user::Role;
use crate::handlers;
use crate::middlewares::RoleGuard;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_admin_routes(cfg);
}

/// 인증 관련 라우트
///
/// ```bash
/// curl -X POST http://localhost:5003/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::verify_token)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::me)
    );
}

/// 관리자 전용 라우트
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(RoleGuard::require(Role::Admin))
            .service(handlers::users::get_user_admin)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:5003/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "shopgate",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 인증과 권한 검사를 담당합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 게이트 (AuthGate)
//! - 공개 경로 목록(정확히 일치)은 그대로 통과
//! - 그 외 경로는 Authorization 헤더의 세션 토큰을 검증
//! - 검증된 사용자를 request extension에 저장
//!
//! ### 2. 역할 가드 (RoleGuard)
//! - 게이트가 저장한 사용자의 역할을 스코프 단위로 검사
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(AuthGate::new(validator.clone(), GateConfig::from_env()))
//!     .service(
//!         web::scope("/admin")
//!             .wrap(RoleGuard::require(Role::Admin))
//!             .service(get_user_admin)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod role_guard;

// 미들웨어 재export
pub use auth_middleware::AuthGate;
pub use role_guard::RoleGuard;

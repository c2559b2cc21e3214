//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   AuthGate / RoleGuard - 토큰 검증, 역할 검사       ← Middleware
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 주입받고,
//! 인증이 필요한 경우 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)
//! 추출기로 게이트가 붙여 둔 사용자를 받습니다.
//! 모든 에러는 `AppError`로 반환되어 공통 응답 형식으로 변환됩니다.

pub mod users;
pub mod auth;

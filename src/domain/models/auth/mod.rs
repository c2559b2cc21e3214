//! 인증 관련 도메인 모델
//!
//! - [`authenticated_user`] - 게이트가 요청에 연결하는 Principal과 추출자
//! - [`authentication_request`] - 역할 요구사항
//! - [`validation`] - 토큰 검증 결과 타입

pub mod authenticated_user;
pub mod authentication_request;
pub mod validation;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::RequiredRole;
pub use validation::{RejectReason, ValidationOutcome};

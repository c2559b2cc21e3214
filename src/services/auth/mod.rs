//! 인증 및 보안 서비스 모듈
//!
//! # Features
//!
//! - [`TokenService`] - 세션 토큰 발급과 서명 검증 (HMAC-SHA256)
//! - [`SessionValidator`] - Authorization 헤더 검증과 단일 세션 확인
//!
//! # Security
//!
//! - 사용자당 유효한 토큰은 하나: 저장된 `token` 값과 일치해야 함
//! - 서명 검증 전에 토큰 구조를 먼저 검사
//! - 만료 시각은 라이브러리 검사와 별도로 한 번 더 확인

pub mod token_service;
pub mod session_validator;

pub use token_service::TokenService;
pub use session_validator::SessionValidator;

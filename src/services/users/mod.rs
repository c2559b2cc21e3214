//! 사용자 관리 서비스 모듈
//!
//! [`UserService`](user_service::UserService)는 회원가입/로그인과 사용자 조회를 담당합니다.

pub mod user_service;

pub use user_service::UserService;
